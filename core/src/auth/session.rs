use crate::auth::provider::{CredentialProvider, User};
use crate::error::{CoreError, CoreResult};

/// Login state for the process lifetime: at most one current user, no
/// sessions, no expiry, no logout. Failed attempts can be retried without
/// limit.
pub struct CredentialGate {
    provider: Box<dyn CredentialProvider>,
    current_user: Option<User>,
}

impl CredentialGate {
    pub fn new(provider: Box<dyn CredentialProvider>) -> Self {
        Self {
            provider,
            current_user: None,
        }
    }

    /// Checks the pair against every configured account and records the match
    /// as the current user. Failure changes nothing.
    pub fn login(&mut self, username: &str, password: &str) -> CoreResult<User> {
        let user = self
            .provider
            .users()
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned()
            .ok_or(CoreError::LoginFailed)?;
        self.current_user = Some(user.clone());
        Ok(user)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn deletion_password(&self) -> &str {
        self.provider.deletion_password()
    }
}
