//! Core data types for the session manager

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account, as stored in the `users` record.
///
/// The password is kept and compared verbatim; there is no hashing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique user id, assigned at signup
    pub id: String,

    /// Login identifier, unique across users (case-sensitive)
    pub email: String,

    /// Credential secret
    #[serde(alias = "secret")]
    pub password: String,

    /// Display name
    pub name: String,

    /// Account creation time. Records written before this field existed have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// The public identity of this account, without the secret.
    pub fn session_user(&self) -> SessionUser {
        SessionUser {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }

    /// Exact, case-sensitive match on both credentials.
    pub(crate) fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

/// The identity of the logged in user, as stored in the `currentUser` record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Session changes reported to subscribers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A persisted session was picked up on startup.
    Restored(SessionUser),
    /// A new account was created and logged in.
    SignedUp(SessionUser),
    LoggedIn(SessionUser),
    LoggedOut,
}
