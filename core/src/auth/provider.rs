/// Username that carries the admin role. Role is derived from the username;
/// there is no separate role field.
pub const ADMIN_USERNAME: &str = "admin";

/// A login account. Passwords are plaintext demonstration credentials; real
/// credential storage is out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.username == ADMIN_USERNAME
    }
}

/// Source of login accounts and the deletion password. Kept behind a trait so
/// tests can substitute their own credential sets.
pub trait CredentialProvider {
    fn users(&self) -> &[User];

    /// Password re-entered to confirm a case deletion. Independent of any
    /// user's login password, even when the values coincide.
    fn deletion_password(&self) -> &str;
}

/// Credential set fixed at construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct FixedCredentials {
    users: Vec<User>,
    deletion_password: String,
}

impl FixedCredentials {
    pub fn new(users: Vec<User>, deletion_password: impl Into<String>) -> Self {
        Self {
            users,
            deletion_password: deletion_password.into(),
        }
    }
}

impl Default for FixedCredentials {
    /// The built-in demonstration accounts: `admin`/`password` and
    /// `user1`/`123456`, with the literal `"password"` doubling as the
    /// deletion password.
    fn default() -> Self {
        Self::new(
            vec![
                User::new("admin", "password"),
                User::new("user1", "123456"),
            ],
            "password",
        )
    }
}

impl CredentialProvider for FixedCredentials {
    fn users(&self) -> &[User] {
        &self.users
    }

    fn deletion_password(&self) -> &str {
        &self.deletion_password
    }
}
