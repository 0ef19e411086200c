use super::*;

#[test]
fn fresh_session_awaits_credentials_over_empty_roster() {
    let session = LoginSession::new();
    assert_eq!(session.state(), SessionState::AwaitingCredentials);
    assert!(!session.is_registering());
    assert!(session.current_user().is_none());
    assert!(session.store().is_empty());
}

#[test]
fn begin_registration_writes_record_immediately_with_empty_name() {
    let mut session = LoginSession::new();
    session.begin_registration("a@x.com", "pw1");

    assert_eq!(session.state(), SessionState::Registering);
    assert!(session.is_registering());
    let listed = session.store().list_users();
    assert_eq!(listed.len(), 1, "record must exist before any name is typed");
    assert_eq!(listed[0], UserRecord::new("", "pw1", "a@x.com"));
}

#[test]
fn registration_completes_without_name_and_keeps_it_empty() {
    let mut session = LoginSession::new();
    session.begin_registration("a@x.com", "pw1");

    let user = session.submit_login("a@x.com", "pw1", "").expect("sign in");
    assert_eq!(user.name, "");
    assert_eq!(session.state(), SessionState::LoggedIn);
    assert!(!session.is_registering());
    assert_eq!(session.current_user().expect("current").email, "a@x.com");
}

#[test]
fn registration_name_entry_overwrites_matched_record() {
    let mut session = LoginSession::new();
    session.begin_registration("a@x.com", "pw1");

    let user = session
        .submit_login("a@x.com", "pw1", "Ada Lovelace")
        .expect("sign in");
    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(session.store().list_users()[0].name, "Ada Lovelace");
}

#[test]
fn name_entry_is_ignored_outside_registration() {
    let store = UserStore::with_users(vec![UserRecord::new("Kept", "pw", "a@x.com")]);
    let mut session = LoginSession::with_store(store);

    let user = session
        .submit_login("a@x.com", "pw", "Should Not Apply")
        .expect("sign in");
    assert_eq!(user.name, "Kept");
    assert_eq!(session.store().list_users()[0].name, "Kept");
}

#[test]
fn failed_sign_in_reports_single_invalid_credentials_error() {
    let store = UserStore::with_users(vec![UserRecord::new("Ada", "right", "a@x.com")]);
    let mut session = LoginSession::with_store(store);

    let unknown_email = session.submit_login("b@x.com", "right", "");
    let wrong_password = session.submit_login("a@x.com", "wrong", "");
    assert_eq!(unknown_email, Err(AuthError::InvalidCredentials));
    assert_eq!(wrong_password, Err(AuthError::InvalidCredentials));
    assert_eq!(session.state(), SessionState::Failed);
    assert!(session.current_user().is_none());
}

#[test]
fn blank_submission_fails_like_any_other_mismatch() {
    let mut session = LoginSession::new();
    let result = session.submit_login("", "", "");
    assert_eq!(result, Err(AuthError::InvalidCredentials));
    assert_eq!(session.state(), SessionState::Failed);
}

#[test]
fn blank_registration_can_be_completed_by_blank_sign_in() {
    let mut session = LoginSession::new();
    session.begin_registration("", "");

    let user = session.submit_login("", "", "").expect("sign in");
    assert_eq!(user, UserRecord::new("", "", ""));
    assert_eq!(session.state(), SessionState::LoggedIn);
}

#[test]
fn failed_attempt_keeps_registration_mode_open() {
    let mut session = LoginSession::new();
    session.begin_registration("a@x.com", "pw1");

    let rejected = session.submit_login("a@x.com", "typo", "Ada");
    assert_eq!(rejected, Err(AuthError::InvalidCredentials));
    assert_eq!(session.state(), SessionState::Failed);
    assert!(session.is_registering(), "registration survives a failed attempt");
    assert_eq!(session.store().list_users()[0].name, "", "no rename on failure");

    let user = session.submit_login("a@x.com", "pw1", "Ada").expect("retry");
    assert_eq!(user.name, "Ada");
    assert!(!session.is_registering());
}

#[test]
fn repeated_registration_requests_do_not_stack_records() {
    let mut session = LoginSession::new();
    session.begin_registration("a@x.com", "pw1");
    session.begin_registration("a@x.com", "pw1");
    assert_eq!(session.store().len(), 1);

    session
        .submit_login("a@x.com", "wrong", "")
        .expect_err("wrong password");
    session.begin_registration("a@x.com", "pw2");
    assert_eq!(
        session.store().len(),
        1,
        "failed attempt leaves registration open, so no second record"
    );
}

#[test]
fn registration_request_is_ignored_while_signed_in() {
    let mut session = LoginSession::new();
    session.begin_registration("a@x.com", "pw1");
    session.submit_login("a@x.com", "pw1", "Ada").expect("sign in");

    session.begin_registration("b@x.com", "pw2");
    assert_eq!(session.state(), SessionState::LoggedIn);
    assert_eq!(session.store().len(), 1);
}

#[test]
fn register_after_plain_failure_starts_registration() {
    let mut session = LoginSession::new();
    session.submit_login("a@x.com", "pw1", "").expect_err("nothing registered");
    assert!(!session.is_registering());

    session.begin_registration("a@x.com", "pw1");
    assert_eq!(session.state(), SessionState::Registering);
    assert_eq!(session.store().len(), 1);
}

#[test]
fn matching_is_case_sensitive_end_to_end() {
    let mut session = LoginSession::new();
    session.begin_registration("Ada@X.com", "Secret");

    assert!(session.submit_login("ada@x.com", "Secret", "").is_err());
    assert!(session.submit_login("Ada@X.com", "secret", "").is_err());
    assert!(session.submit_login("Ada@X.com", "Secret", "").is_ok());
}

#[test]
fn duplicate_email_rename_targets_the_credential_match() {
    let store = UserStore::with_users(vec![UserRecord::new("First Holder", "pw-old", "a@x.com")]);
    let mut session = LoginSession::with_store(store);

    session.begin_registration("a@x.com", "pw-new");
    let user = session
        .submit_login("a@x.com", "pw-new", "Second Holder")
        .expect("sign in");
    assert_eq!(user.name, "Second Holder");

    let listed = session.store().list_users();
    assert_eq!(listed[0].name, "First Holder", "older same-email record untouched");
    assert_eq!(listed[1].name, "Second Holder");
}

#[test]
fn first_match_wins_when_credentials_collide() {
    let store = UserStore::with_users(vec![
        UserRecord::new("First", "pw", "a@x.com"),
        UserRecord::new("Second", "pw", "a@x.com"),
    ]);
    let mut session = LoginSession::with_store(store);

    let user = session.submit_login("a@x.com", "pw", "").expect("sign in");
    assert_eq!(user.name, "First");
}

#[test]
fn log_out_resets_session_but_keeps_roster() {
    let mut session = LoginSession::new();
    session.begin_registration("a@x.com", "pw1");
    session.submit_login("a@x.com", "pw1", "Ada").expect("sign in");

    session.log_out();
    assert_eq!(session.state(), SessionState::AwaitingCredentials);
    assert!(!session.is_registering());
    assert!(session.current_user().is_none());
    assert_eq!(session.store().len(), 1, "roster survives sign-out");

    let again = session.submit_login("a@x.com", "pw1", "").expect("second sign in");
    assert_eq!(again.name, "Ada");
}

#[test]
fn seeded_session_authenticates_seeded_users() {
    let mut session = LoginSession::with_store(UserStore::with_users(demo_users()));
    let seeded = demo_users();

    let user = session
        .submit_login(&seeded[0].email, &seeded[0].password, "")
        .expect("seeded sign in");
    assert_eq!(user.name, seeded[0].name);
}
