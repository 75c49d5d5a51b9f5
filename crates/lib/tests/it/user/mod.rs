//! Tests for signup, login, logout and session restore.

mod session_tests;
