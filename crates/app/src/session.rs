//! Local-only login flag.
//!
//! Authentication is a placeholder: credentials are checked for presence
//! only and are never sent to the gateway.

use menuflow_core::error::CoreError;
use menuflow_core::validation::Schema;

/// The current user session.
#[derive(Debug, Default)]
pub struct Session {
    username: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log in with the given credentials. Both fields are required; no
    /// credential validation happens beyond that.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), CoreError> {
        let errors = login_schema().check(&[("username", username), ("password", password)]);
        if !errors.is_empty() {
            return Err(CoreError::Validation(errors));
        }
        tracing::info!(username = %username.trim(), "User logged in");
        self.username = Some(username.trim().to_string());
        Ok(())
    }

    pub fn logout(&mut self) {
        self.username = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

fn login_schema() -> Schema {
    Schema::new()
        .required("username", "Por favor, insira seu nome de usuário!")
        .required("password", "Por favor, insira sua senha!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn login_requires_both_fields() {
        let mut session = Session::new();
        assert_matches!(session.login("ana", ""), Err(CoreError::Validation(_)));
        assert!(!session.is_logged_in());

        session.login("ana", "segredo").unwrap();
        assert!(session.is_logged_in());
        assert_eq!(session.username(), Some("ana"));
    }

    #[test]
    fn logout_clears_the_flag() {
        let mut session = Session::new();
        session.login("ana", "segredo").unwrap();
        session.logout();
        assert!(!session.is_logged_in());
    }
}
