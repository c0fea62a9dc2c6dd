use super::*;

#[test]
fn should_redirect_unauth_when_restored_and_signed_out() {
    let state = SessionState { token: None, restoring: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_restoring() {
    let state = SessionState { token: None, restoring: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_signed_in() {
    let state = SessionState { token: Some("abc".to_owned()), restoring: false };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_leave_auth_screen_only_when_signed_in() {
    assert!(should_leave_auth_screen(&SessionState { token: Some("abc".to_owned()), restoring: false }));
    assert!(!should_leave_auth_screen(&SessionState { token: None, restoring: false }));
    assert!(!should_leave_auth_screen(&SessionState::default()));
}
