//! Login page for returning users.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::password_input::PasswordInput;
use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;
use crate::util::auth::install_authed_redirect;
use crate::util::validate::is_valid_email;

/// Check the login fields in fixed order, returning the wire payload.
fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if !is_valid_email(email) {
        return Err("Please enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Please enter your password.");
    }
    Ok(LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Login page — on success the session state picks up the user and the
/// authed-redirect watcher moves the visitor home.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    install_authed_redirect(auth, navigate.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_login_input(&email.get(), &password.get()) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&payload).await {
                Ok(user) => {
                    // The authed-redirect effect navigates once this lands.
                    auth.update(|state| {
                        state.user = Some(user);
                        state.loading = false;
                    });
                }
                Err(message) => {
                    error.set(Some(message));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            busy.set(false);
        }
    };

    let navigate_signup = navigate.clone();
    let on_signup = move |_| navigate_signup("/signup", NavigateOptions::default());

    view! {
        <div class="auth-page">
            <div class="auth-hero">
                <h4 class="auth-hero__title">"Welcome Back"</h4>
                <p class="auth-hero__text">"Pick up your travel journal where you left off."</p>
            </div>
            <div class="auth-card">
                <form class="auth-form" on:submit=on_submit>
                    <h4 class="auth-card__title">"Login"</h4>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <PasswordInput value=password />
                    <Show when=move || error.get().is_some()>
                        <p class="auth-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button
                        class="auth-button"
                        type="submit"
                        disabled=move || busy.get() || auth.get().loading
                    >
                        {move || {
                            if busy.get() || auth.get().loading {
                                "LOGGING IN..."
                            } else {
                                "LOGIN"
                            }
                        }}
                    </button>
                    <p class="auth-divider">"Or"</p>
                    <button class="auth-button auth-button--light" type="button" on:click=on_signup>
                        "CREATE ACCOUNT"
                    </button>
                </form>
            </div>
        </div>
    }
}
