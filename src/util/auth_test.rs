use super::*;
use crate::net::types::User;

fn authed_state() -> AuthState {
    AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            username: "Alex".to_owned(),
            email: "alex@example.com".to_owned(),
        }),
        loading: false,
    }
}

#[test]
fn should_redirect_home_when_session_resolves_with_user() {
    assert!(should_redirect_home(&authed_state()));
}

#[test]
fn should_redirect_home_ignores_form_side_state() {
    // The rule keys only on the session pair, never on local field values.
    let mut state = authed_state();
    if let Some(user) = state.user.as_mut() {
        user.username.clear();
    }
    assert!(should_redirect_home(&state));
}

#[test]
fn should_not_redirect_home_while_loading() {
    let mut state = authed_state();
    state.loading = true;
    assert!(!should_redirect_home(&state));
}

#[test]
fn should_redirect_login_when_session_resolves_empty() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_login(&state));
}

#[test]
fn should_not_redirect_login_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_login(&state));
}

#[test]
fn should_not_redirect_login_when_user_exists() {
    assert!(!should_redirect_login(&authed_state()));
}
