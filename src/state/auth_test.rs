use super::*;

#[test]
fn default_state_is_signed_out_and_settled() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}
