use flavorbook::{
    SessionUser,
    backend::{Storage, read_json},
    constants::{CURRENT_USER, USERS},
    user::{SessionEvent, UserRecord},
};

use crate::helpers::{open_session, recorder, test_storage};

#[test]
fn test_signup_sets_session() {
    let storage = test_storage();
    let mut session = open_session(&storage);
    assert!(!session.is_logged_in());

    let user = session.signup("ada@example.com", "pw", "Ada").unwrap();
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.name, "Ada");
    assert!(!user.id.is_empty());
    assert_eq!(session.current_user(), Some(&user));

    let stored: SessionUser = read_json(storage.as_ref(), CURRENT_USER).unwrap().unwrap();
    assert_eq!(stored, user);
}

#[test]
fn test_duplicate_signup_leaves_users_unchanged() {
    let storage = test_storage();
    let mut session = open_session(&storage);
    session.signup("ada@example.com", "pw", "Ada").unwrap();
    let before = storage.get(USERS).unwrap();

    let err = session
        .signup("ada@example.com", "other", "Impostor")
        .unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(storage.get(USERS).unwrap(), before);
    assert_eq!(session.current_user().map(|u| u.name.as_str()), Some("Ada"));
}

#[test]
fn test_signup_ids_are_distinct() {
    let storage = test_storage();
    let mut session = open_session(&storage);
    let ada = session.signup("ada@example.com", "pw", "Ada").unwrap();
    let bob = session.signup("bob@example.com", "pw", "Bob").unwrap();
    assert_ne!(ada.id, bob.id);
    assert_eq!(session.users().unwrap(), vec![ada, bob]);
}

#[test]
fn test_login_and_rejections() {
    let storage = test_storage();
    let mut session = open_session(&storage);
    let ada = session.signup("ada@example.com", "pw", "Ada").unwrap();
    session.signup("bob@example.com", "pw2", "Bob").unwrap();

    assert!(session.login("ada@example.com", "wrong").unwrap_err().is_authentication_error());
    assert!(session.login("nobody@example.com", "pw").is_err());
    assert_eq!(session.current_user().map(|u| u.name.as_str()), Some("Bob"));

    assert_eq!(session.login("ada@example.com", "pw").unwrap(), ada);
    assert_eq!(session.current_user(), Some(&ada));
}

#[test]
fn test_session_survives_reopen_until_logout() {
    let storage = test_storage();
    let mut session = open_session(&storage);
    let ada = session.signup("ada@example.com", "pw", "Ada").unwrap();

    let mut reopened = open_session(&storage);
    assert_eq!(reopened.current_user(), Some(&ada));

    reopened.logout().unwrap();
    assert!(storage.get(CURRENT_USER).unwrap().is_none());
    assert!(!open_session(&storage).is_logged_in());
}

#[test]
fn test_password_is_stored_verbatim() {
    let storage = test_storage();
    let mut session = open_session(&storage);
    session.signup("ada@example.com", "s3cret", "Ada").unwrap();

    let users: Vec<UserRecord> = read_json(storage.as_ref(), USERS).unwrap().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].password, "s3cret");
    assert!(users[0].created_at.is_some());
}

#[test]
fn test_session_events() {
    let storage = test_storage();
    let mut session = open_session(&storage);
    let (events, callback) = recorder::<SessionEvent>();
    session.subscribe(callback);

    let ada = session.signup("ada@example.com", "pw", "Ada").unwrap();
    session.logout().unwrap();
    let _ = session.login("ada@example.com", "bad");
    session.login("ada@example.com", "pw").unwrap();

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            SessionEvent::SignedUp(ada.clone()),
            SessionEvent::LoggedOut,
            SessionEvent::LoggedIn(ada),
        ]
    );
}
