use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Arguments;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback, Output};
use log::{LevelFilter, Record, info};

/// Install the global `log` backend.
///
/// Lines go to `log_file` when given (appending, never colored), otherwise to
/// stdout, colored when `colored` is set. Can only succeed once per process.
pub fn initialize(
    log_level: salus_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level = log_level.0;

    let (output, colors): (Output, Option<ColoredLevelConfig>) = match log_file {
        Some(ref path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| ServerError::LogFile {
                    path: path.clone(),
                    source,
                })?;
            (file.into(), None)
        }
        None => (std::io::stdout().into(), colored.then(level_colors)),
    };

    Dispatch::new()
        .level(level)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .level_for("hyper", LevelFilter::Warn)
        .format(move |out, message, record| write_line(out, message, record, colors.as_ref()))
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("a logger is already installed: {e}"),
        })?;

    match log_file {
        Some(path) => info!("Logging at {} to {}", level, path.display()),
        None => info!("Logging at {} to stdout", level),
    }

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

/// `[<rfc3339> - LEVEL] message [target]`
fn write_line(
    out: FormatCallback,
    message: &Arguments,
    record: &Record,
    colors: Option<&ColoredLevelConfig>,
) {
    let date = humantime::format_rfc3339(SystemTime::now());

    match colors {
        Some(colors) => out.finish(format_args!(
            "[{} - {}] {} [{}]",
            date,
            colors.color(record.level()),
            message,
            record.target()
        )),
        None => out.finish(format_args!(
            "[{} - {}] {} [{}]",
            date,
            record.level(),
            message,
            record.target()
        )),
    }
}
