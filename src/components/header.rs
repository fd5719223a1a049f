//! Application header with the welcome line and logout button.

use leptos::prelude::*;

/// Header shown above the board while logged in.
#[component]
pub fn Header(
    #[prop(into)] username: Signal<String>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="app-header">
            <h1 class="app-header__title">"Ticketing System"</h1>
            <div class="app-header__session">
                <span class="app-header__welcome">
                    "Welcome, " <strong>{move || username.get()}</strong>
                </span>
                <button class="btn btn--danger" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
