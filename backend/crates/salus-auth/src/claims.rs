use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved claim name holding the expiry (Unix seconds)
pub const EXPIRY_CLAIM: &str = "exp";

/// Signed claim set: caller-supplied claims plus the mandatory expiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Every claim other than `exp`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}

impl Claims {
    /// Look up a caller-supplied claim
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// Flatten back into a single mapping, `exp` included
    pub fn into_map(self) -> Map<String, Value> {
        let mut map = self.extra;
        map.insert(EXPIRY_CLAIM.to_string(), Value::from(self.exp));
        map
    }
}
