//! User repository for the `usuario` table.
//!
//! Every operation runs on a caller-supplied connection rather than on the
//! pool, so a request handler performs all of its store work on the single
//! connection it acquired for the lifetime of the request.
//!
//! Only creation and lookups exist. Accounts are never updated or deleted
//! through this repository.

use crate::{DbError, Result as DbErrorResult};

use salus_core::{ErrorLocation, NewUser, User, UserRole};

use std::panic::Location;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{Connection, Row, SqliteConnection};

const SELECT_COLUMNS: &str = r#"
    SELECT id, nombre, email, contrasena, apellido, tipo, activo, cedula, telefono
    FROM usuario
"#;

pub struct UserRepository;

impl UserRepository {
    pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> DbErrorResult<Option<User>> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?");

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        row.map(Self::map_row).transpose()
    }

    pub async fn find_by_email(
        conn: &mut SqliteConnection,
        email: &str,
    ) -> DbErrorResult<Option<User>> {
        let sql = format!("{SELECT_COLUMNS} WHERE email = ?");

        let row = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(&mut *conn)
            .await?;

        row.map(Self::map_row).transpose()
    }

    /// Insert a user, commit, and re-read the row so generated columns
    /// (the id, column defaults) are populated.
    ///
    /// Does NOT check for an existing email first. A duplicate email that
    /// slips past the caller's check fails here with the UNIQUE constraint
    /// error from SQLite.
    pub async fn create(conn: &mut SqliteConnection, user: &NewUser) -> DbErrorResult<User> {
        let mut tx = conn.begin().await?;

        let result = sqlx::query(
            r#"
                INSERT INTO usuario (
                    nombre, email, contrasena, apellido, tipo, activo, cedula, telefono
                ) VALUES (?, ?, ?, ?, ?, 1, ?, ?)
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.surname)
        .bind(user.role.as_str())
        .bind(&user.national_id)
        .bind(&user.phone)
        .execute(&mut *tx)
        .await?;

        let id = result.last_insert_rowid();
        tx.commit().await?;

        log::debug!("Inserted usuario {}", id);

        Self::find_by_id(conn, id)
            .await?
            .ok_or_else(|| DbError::Initialization {
                message: format!("usuario {} missing after commit", id),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    fn map_row(row: SqliteRow) -> DbErrorResult<User> {
        let tipo: String = row.try_get("tipo")?;

        Ok(User {
            id: row.try_get("id")?,
            name: row.try_get("nombre")?,
            email: row.try_get("email")?,
            password: row.try_get("contrasena")?,
            surname: row.try_get("apellido")?,
            role: UserRole::from_str(&tipo).map_err(|e| DbError::CorruptRow {
                column: "tipo",
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?,
            active: row.try_get("activo")?,
            national_id: row.try_get("cedula")?,
            phone: row.try_get("telefono")?,
        })
    }
}
