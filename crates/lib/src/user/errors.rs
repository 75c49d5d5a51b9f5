//! Error types for the session manager
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserError {
    /// Login failed. Deliberately does not say whether the email or the
    /// password was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already registered: {email}")]
    EmailAlreadyRegistered { email: String },

    #[error("Operation requires a logged in user: {operation}")]
    NotLoggedIn { operation: String },
}

impl UserError {
    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        matches!(
            self,
            UserError::InvalidCredentials | UserError::NotLoggedIn { .. }
        )
    }

    /// Check if this error indicates the account already exists.
    pub fn is_conflict(&self) -> bool {
        matches!(self, UserError::EmailAlreadyRegistered { .. })
    }
}

impl From<UserError> for crate::Error {
    fn from(err: UserError) -> Self {
        crate::Error::User(err)
    }
}
