//! Home page — the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The journal feed itself lives behind separate routes; this screen greets
//! the signed-in user and anchors the session controls. Visitors without a
//! resolved session are sent to `/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate);

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            // Clearing the user trips the unauth redirect back to /login.
            auth.update(|state| state.user = None);
        });
    };

    let username = move || {
        auth.get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };

    view! {
        <div class="home-page">
            <header class="home-header">
                <span class="home-header__brand">"Travelog"</span>
                <Show when=move || auth.get().user.is_some()>
                    <div class="home-header__session">
                        <span class="home-header__name">{username}</span>
                        <button class="home-header__logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </div>
                </Show>
            </header>
            <main class="home-main">
                <h4 class="home-main__title">"Your Travel Stories"</h4>
                <p class="home-main__text">"Stories you record will show up here."</p>
            </main>
        </div>
    }
}
