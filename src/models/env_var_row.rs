use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A `key`/`value` pair typed into the creation form.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvVarRow {
    pub key: String,
    pub value: String,
}

impl EnvVarRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Rows missing either side are dropped before submission.
    pub fn is_complete(&self) -> bool {
        !self.key.is_empty() && !self.value.is_empty()
    }
}

/// Parses `KEY=VALUE`. Anything else becomes an incomplete row, which the
/// form filters out, so parsing never fails.
impl FromStr for EnvVarRow {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s.split_once('=').unwrap_or((s, ""));
        Ok(EnvVarRow::new(key.trim(), value.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_value() {
        let row: EnvVarRow = "PORT=3000".parse().unwrap();
        assert_eq!(row, EnvVarRow::new("PORT", "3000"));
        assert!(row.is_complete());
    }

    #[test]
    fn value_may_contain_equals() {
        let row: EnvVarRow = "DSN=user=root".parse().unwrap();
        assert_eq!(row.value, "user=root");
    }

    #[test]
    fn missing_sides_are_incomplete() {
        assert!(!"KEY=".parse::<EnvVarRow>().unwrap().is_complete());
        assert!(!"=value".parse::<EnvVarRow>().unwrap().is_complete());
        assert!(!"KEY".parse::<EnvVarRow>().unwrap().is_complete());
    }
}
