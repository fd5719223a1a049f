use super::*;

// =============================================================
// SessionState restore
// =============================================================

#[test]
fn restore_without_token_is_logged_out() {
    let state = SessionState::restore(false, None);
    assert!(!state.logged_in);
    assert!(state.username.is_empty());
}

#[test]
fn restore_with_token_is_logged_in() {
    let state = SessionState::restore(true, Some("admin".to_owned()));
    assert!(state.logged_in);
    assert_eq!(state.username, "admin");
}

#[test]
fn restore_with_token_but_no_stored_name_has_empty_name() {
    let state = SessionState::restore(true, None);
    assert!(state.logged_in);
    assert!(state.username.is_empty());
}

// =============================================================
// Login / logout transitions
// =============================================================

#[test]
fn login_sets_flag_and_submitted_username() {
    let mut state = SessionState::default();
    state.login("admin");
    assert!(state.logged_in);
    assert_eq!(state.username, "admin");
}

#[test]
fn logout_clears_flag_and_username() {
    let mut state = SessionState::restore(true, Some("admin".to_owned()));
    state.logout();
    assert!(!state.logged_in);
    assert!(state.username.is_empty());
}
