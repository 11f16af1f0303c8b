//! Password field with a visibility toggle.

use leptos::prelude::*;

/// Controlled password input that can reveal its value.
///
/// The field stays bound to the caller's signal; only the rendered input
/// type switches between `password` and `text`.
#[component]
pub fn PasswordInput(
    value: RwSignal<String>,
    #[prop(default = "Password")] placeholder: &'static str,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="password-input">
            <input
                class="password-input__field"
                type=move || if visible.get() { "text" } else { "password" }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                class="password-input__toggle"
                type="button"
                aria-label="Toggle password visibility"
                on:click=move |_| visible.update(|shown| *shown = !*shown)
            >
                {move || if visible.get() { "Hide" } else { "Show" }}
            </button>
        </div>
    }
}
