//! Session management
//!
//! [`SessionManager`] owns the authenticated identity. Accounts live in the
//! `users` record and the active session in the `currentUser` record; every
//! change rewrites the affected record in full.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use super::{SessionEvent, SessionUser, UserError, UserRecord};
use crate::{
    Clock, Result, SystemClock,
    backend::{self, Storage},
    constants::{CURRENT_USER, USERS},
    events::{SubscriptionId, Subscribers},
};

/// Owns the logged in identity and the account list.
pub struct SessionManager {
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    current: Option<SessionUser>,
    subscribers: Subscribers<SessionEvent>,
}

impl SessionManager {
    /// Create a manager with no active session, using the system clock.
    ///
    /// Call [`SessionManager::restore_session`] to pick up a persisted session,
    /// or use [`SessionManager::open`] which does both.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_clock(storage, Arc::new(SystemClock))
    }

    /// Create a manager that timestamps new accounts with `clock`.
    pub fn with_clock(storage: Arc<dyn Storage>, clock: Arc<dyn Clock>) -> Self {
        Self {
            storage,
            clock,
            current: None,
            subscribers: Subscribers::new(),
        }
    }

    /// Create a manager and restore any persisted session.
    pub fn open(storage: Arc<dyn Storage>) -> Result<Self> {
        let mut manager = Self::new(storage);
        manager.restore_session()?;
        Ok(manager)
    }

    /// Loads the persisted session, if any, and makes it the active identity.
    ///
    /// Absent or malformed session data leaves the manager logged out.
    /// Returns whether a session was restored.
    pub fn restore_session(&mut self) -> Result<bool> {
        match backend::read_json::<SessionUser>(self.storage.as_ref(), CURRENT_USER)? {
            Some(user) => {
                debug!(user_id = %user.id, "Restored session");
                self.current = Some(user.clone());
                self.subscribers.notify(&SessionEvent::Restored(user));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The logged in user, if any.
    pub fn current_user(&self) -> Option<&SessionUser> {
        self.current.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// Logs in with an exact match on email and password.
    ///
    /// # Errors
    /// [`UserError::InvalidCredentials`] if no account matches both. The
    /// current session, if any, is left as it was.
    pub fn login(&mut self, email: &str, password: &str) -> Result<SessionUser> {
        let user = self
            .load_users()?
            .iter()
            .find(|record| record.matches_credentials(email, password))
            .map(UserRecord::session_user);

        let Some(user) = user else {
            debug!(email, "Login rejected");
            return Err(UserError::InvalidCredentials.into());
        };

        self.set_session(user.clone())?;
        info!(user_id = %user.id, "User logged in");
        self.subscribers.notify(&SessionEvent::LoggedIn(user.clone()));
        Ok(user)
    }

    /// Creates an account and logs it in.
    ///
    /// # Errors
    /// [`UserError::EmailAlreadyRegistered`] if an account with exactly this
    /// email exists; nothing is written in that case.
    pub fn signup(&mut self, email: &str, password: &str, name: &str) -> Result<SessionUser> {
        let mut users = self.load_users()?;
        if users.iter().any(|record| record.email == email) {
            return Err(UserError::EmailAlreadyRegistered {
                email: email.to_string(),
            }
            .into());
        }

        let record = UserRecord {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            created_at: Some(self.clock.now()),
        };
        let user = record.session_user();
        users.push(record);
        backend::write_json(self.storage.as_ref(), USERS, &users)?;

        self.set_session(user.clone())?;
        info!(user_id = %user.id, users = users.len(), "User signed up");
        self.subscribers.notify(&SessionEvent::SignedUp(user.clone()));
        Ok(user)
    }

    /// Ends the session and removes the persisted session record.
    pub fn logout(&mut self) -> Result<()> {
        self.storage.remove(CURRENT_USER)?;
        if let Some(user) = self.current.take() {
            info!(user_id = %user.id, "User logged out");
        }
        self.subscribers.notify(&SessionEvent::LoggedOut);
        Ok(())
    }

    /// Public identities of every registered account, in signup order.
    pub fn users(&self) -> Result<Vec<SessionUser>> {
        Ok(self
            .load_users()?
            .iter()
            .map(UserRecord::session_user)
            .collect())
    }

    /// When the account behind `user` was created, if recorded.
    pub fn member_since(&self, user: &SessionUser) -> Result<Option<DateTime<Utc>>> {
        Ok(self
            .load_users()?
            .into_iter()
            .find(|record| record.id == user.id)
            .and_then(|record| record.created_at))
    }

    /// Registers a callback for session changes.
    pub fn subscribe(
        &mut self,
        callback: impl Fn(&SessionEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn load_users(&self) -> Result<Vec<UserRecord>> {
        Ok(backend::read_json(self.storage.as_ref(), USERS)?.unwrap_or_default())
    }

    fn set_session(&mut self, user: SessionUser) -> Result<()> {
        backend::write_json(self.storage.as_ref(), CURRENT_USER, &user)?;
        self.current = Some(user);
        Ok(())
    }
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("storage", &"<Storage>")
            .field("clock", &self.clock)
            .field("current", &self.current)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}
