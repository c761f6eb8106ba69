use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Money amount (budgets, values, prices) - uses Decimal for precision
pub type Money = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Identifier of a player record
pub type PlayerId = String;

/// Identifier of a team record
pub type TeamId = String;

/// Normalized lookup key for names and roles: trimmed and lowercased.
pub fn lookup_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Opaque token identifying a team's authorized agent
///
/// Equality and hashing are case-insensitive and ignore surrounding
/// whitespace; the original spelling is kept for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaptainRole(String);

impl CaptainRole {
    pub fn new(role: impl Into<String>) -> Self {
        Self(role.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key used for indexing roles
    pub fn key(&self) -> String {
        lookup_key(&self.0)
    }

    /// Case-insensitive comparison against a raw role string
    pub fn matches(&self, other: &str) -> bool {
        self.key() == lookup_key(other)
    }
}

impl PartialEq for CaptainRole {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for CaptainRole {}

impl Hash for CaptainRole {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for CaptainRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CaptainRole {
    fn from(role: &str) -> Self {
        Self::new(role)
    }
}

impl From<String> for CaptainRole {
    fn from(role: String) -> Self {
        Self::new(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_key_normalizes() {
        assert_eq!(lookup_key("  Pedri "), "pedri");
        assert_eq!(lookup_key("GAVI"), "gavi");
    }

    #[test]
    fn test_captain_role_case_insensitive() {
        let a = CaptainRole::new("Capitán de Betis FC");
        let b = CaptainRole::new("  capitán de betis fc");

        assert_eq!(a, b);
        assert!(a.matches("CAPITÁN DE BETIS FC"));
        assert_eq!(a.as_str(), "Capitán de Betis FC");

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }
}
