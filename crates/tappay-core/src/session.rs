//! User session domain model.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// The current user session.
///
/// A session is logged in when a user name is present. There is no real
/// authentication: a non-empty name is the whole credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Session {
    /// Display name of the logged-in user, `None` when logged out.
    user_name: Option<String>,
}

impl Session {
    /// Creates a logged-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs in with the given display name.
    ///
    /// The name is trimmed before use.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] if the name is blank
    /// after trimming; the session stays logged out.
    pub fn login(&mut self, name: &str) -> Result<(), ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        self.user_name = Some(trimmed.to_string());
        Ok(())
    }

    /// Clears the session.
    pub fn logout(&mut self) {
        self.user_name = None;
    }

    /// Whether a user is currently logged in.
    pub fn is_logged_in(&self) -> bool {
        self.user_name.is_some()
    }

    /// The logged-in user's display name, if any.
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_logged_out() {
        let session = Session::new();
        assert!(!session.is_logged_in());
        assert_eq!(session.user_name(), None);
    }

    #[test]
    fn test_login_trims_name() {
        let mut session = Session::new();
        session.login("  Asha  ").unwrap();
        assert!(session.is_logged_in());
        assert_eq!(session.user_name(), Some("Asha"));
    }

    #[test]
    fn test_login_rejects_blank_name() {
        let mut session = Session::new();
        let err = session.login("   ").unwrap_err();
        assert_eq!(err, ValidationError::EmptyName);
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_logout_clears_name() {
        let mut session = Session::new();
        session.login("Asha").unwrap();
        session.logout();
        assert!(!session.is_logged_in());
    }
}
