use crate::shared::errors::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// URL-friendly identifier, unique within a collection and immutable once
/// referenced externally (e.g., "tuan-hung", "final-voting-round").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: &str) -> AppResult<Self> {
        if value.is_empty() {
            return Err(AppError::ValidationError(
                "Slug cannot be empty".to_string(),
            ));
        }
        let re = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
        if !re.is_match(value) {
            return Err(AppError::ValidationError(format!(
                "Slug '{}' must be lowercase alphanumeric segments separated by hyphens",
                value
            )));
        }
        Ok(Slug(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for Slug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Slug {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs() {
        assert!(Slug::new("tuan-hung").is_ok());
        assert!(Slug::new("team-a").is_ok());
        assert!(Slug::new("2024-finale").is_ok());
    }

    #[test]
    fn test_invalid_slugs() {
        assert!(Slug::new("").is_err());
        assert!(Slug::new("Tuan-Hung").is_err());
        assert!(Slug::new("tuan hung").is_err());
        assert!(Slug::new("-leading").is_err());
        assert!(Slug::new("trailing-").is_err());
    }
}
