//! Shared auth redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components on both sides of the authentication boundary should
//! apply identical redirect behavior, keyed on the shared session state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Whether a visitor on an auth form should be sent to the home route.
fn should_redirect_home(state: &AuthState) -> bool {
    !state.loading && state.user.is_some()
}

/// Whether a visitor on a protected route should be sent to `/login`.
fn should_redirect_login(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/` whenever the session has loaded with a user present.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_home(&auth.get()) {
            navigate("/", NavigateOptions::default());
        }
    });
}

/// Redirect to `/login` whenever the session has loaded with no user.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_login(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
