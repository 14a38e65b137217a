//! Submitted and accepted credential pairs

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{DEFAULT_PASSWORD, DEFAULT_USERNAME};

/// A credential pair as typed by the user
///
/// Both buffers are wiped when the value is dropped.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    /// Username field contents
    pub username: String,

    /// Password field contents
    pub password: String,
}

impl Credentials {
    /// Create a credential pair from its two parts
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The single pair considered valid for the lifetime of the process
///
/// Fields are private; once built the pair cannot be changed.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AcceptedCredential {
    username: String,
    password: String,
}

impl AcceptedCredential {
    /// Fix the accepted pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Accepted username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Accepted password
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Exact, case-sensitive comparison against a submitted pair
    pub fn matches(&self, credentials: &Credentials) -> bool {
        credentials.username == self.username && credentials.password == self.password
    }
}

impl Default for AcceptedCredential {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

impl fmt::Debug for AcceptedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AcceptedCredential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pair() {
        let accepted = AcceptedCredential::default();
        assert_eq!(accepted.username(), "admin");
        assert_eq!(accepted.password(), "password");
    }

    #[test]
    fn test_matches_is_exact() {
        let accepted = AcceptedCredential::default();

        assert!(accepted.matches(&Credentials::new("admin", "password")));
        assert!(!accepted.matches(&Credentials::new("Admin", "password")));
        assert!(!accepted.matches(&Credentials::new("admin ", "password")));
        assert!(!accepted.matches(&Credentials::new("admin", "PASSWORD")));
        assert!(!accepted.matches(&Credentials::new("", "")));
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("admin", "hunter2");
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));

        let accepted = AcceptedCredential::new("root", "s3cret");
        assert!(!format!("{:?}", accepted).contains("s3cret"));
    }
}
