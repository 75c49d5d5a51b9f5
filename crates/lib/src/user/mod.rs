//! Accounts and sessions for FlavorBook
//!
//! Provides signup, plaintext credential login, and a persisted active session.

pub mod errors;
pub mod session;
pub mod types;

pub use errors::UserError;
pub use session::SessionManager;
pub use types::*;
