//! Application shell, router, and session bootstrap.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::signup::SignupPage;
use crate::state::auth::AuthState;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Root component providing the session state and route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Session state starts in `loading` until the cookie probe resolves.
    let auth = RwSignal::new(AuthState {
        user: None,
        loading: true,
    });
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.update(|state| {
            state.user = user;
            state.loading = false;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/travelog.css" />
        <Title text="Travelog" />
        <Router>
            <Routes fallback=|| "Not found.">
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/signup") view=SignupPage />
            </Routes>
        </Router>
    }
}
