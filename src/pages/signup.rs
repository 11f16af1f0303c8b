//! Sign-up page collecting a name, email, and password.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::password_input::PasswordInput;
use crate::net::types::SignupRequest;
use crate::state::auth::AuthState;
use crate::util::auth::install_authed_redirect;
use crate::util::validate::is_valid_email;

/// Check the sign-up fields in fixed order, returning the wire payload.
///
/// Name and email are trimmed before checking; the password is taken as
/// typed since surrounding whitespace may be intentional.
fn validate_signup_input(
    name: &str,
    email: &str,
    password: &str,
) -> Result<SignupRequest, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Please enter your name.");
    }
    let email = email.trim();
    if !is_valid_email(email) {
        return Err("Please enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Please enter your password.");
    }
    Ok(SignupRequest {
        username: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Sign-up page — posts credentials to the backend and moves on to `/login`.
/// Visitors with a live session are sent home instead.
#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    install_authed_redirect(auth, navigate.clone());

    let navigate_done = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_signup_input(&name.get(), &email.get(), &password.get()) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_done.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::signup(&payload).await {
                    Ok(()) => navigate("/login", NavigateOptions::default()),
                    Err(message) => {
                        error.set(Some(message));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate_done, payload);
            busy.set(false);
        }
    };

    let navigate_login = navigate.clone();
    let on_login = move |_| navigate_login("/login", NavigateOptions::default());

    view! {
        <div class="auth-page">
            <div class="auth-hero">
                <h4 class="auth-hero__title">"Create Your Travel Stories"</h4>
                <p class="auth-hero__text">
                    "Record your travel experiences and memories in your own travel journal."
                </p>
            </div>
            <div class="auth-card">
                <form class="auth-form" on:submit=on_submit>
                    <h4 class="auth-card__title">"Create Your Account"</h4>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Enter Your Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                                "SIGNING UP..."
                            } else {
                                "SIGN UP"
                            }
                        }}
                    </button>
                    <p class="auth-divider">"Or"</p>
                    <button class="auth-button auth-button--light" type="button" on:click=on_login>
                        "LOGIN"
                    </button>
                </form>
            </div>
        </div>
    }
}
