use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A staff member authenticated against the administrative API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StaffUser {
    pub username: String,
}

/// Configured staff login, held as the expected "username:password" pair
#[derive(Debug, Clone)]
pub struct StaffCredentials {
    username: String,
    expected: String,
}

impl StaffCredentials {
    pub fn new(username: impl Into<String>, password: impl AsRef<str>) -> Self {
        let username = username.into();
        let expected = format!("{}:{}", username, password.as_ref());
        Self { username, expected }
    }

    /// Parse credentials in "username:password" format
    pub fn from_pair(pair: &str) -> Option<Self> {
        let (username, password) = pair.split_once(':')?;
        if username.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self::new(username, password))
    }

    /// Check a decoded "username:password" pair
    pub fn authenticate(&self, supplied: &str) -> Option<StaffUser> {
        (supplied == self.expected).then(|| StaffUser {
            username: self.username.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_matches_exact_pair() {
        let creds = StaffCredentials::new("officer", "hunter2");
        let user = creds.authenticate("officer:hunter2").unwrap();
        assert_eq!(user.username, "officer");

        assert!(creds.authenticate("officer:hunter3").is_none());
        assert!(creds.authenticate("officer").is_none());
    }

    #[test]
    fn test_from_pair_allows_colon_in_password() {
        let creds = StaffCredentials::from_pair("officer:a:b").unwrap();
        assert!(creds.authenticate("officer:a:b").is_some());
        assert!(StaffCredentials::from_pair("officer:").is_none());
        assert!(StaffCredentials::from_pair("nocolon").is_none());
    }
}
