//! Root application component: the session gate deciding between the login
//! screen and the ticket board.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::header::Header;
use crate::pages::{login::LoginPage, tickets::TicketListPage};
use crate::state::session::SessionState;
use crate::util::storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component.
///
/// The session is built exactly once from durable storage: logged in iff a
/// token is present. Login writes the display name to storage; logout clears
/// both keys. There is no client-side token validation, so a stale token
/// shows the board until a protected call fails.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restore(
        storage::read_token().is_some(),
        storage::read_username(),
    ));

    // Re-read the stored display name whenever the logged-in flag flips.
    Effect::new(move || {
        if session.with(|s| s.logged_in) {
            if let Some(stored) = storage::read_username() {
                if session.with_untracked(|s| s.username != stored) {
                    session.update(|s| s.username = stored);
                }
            }
        }
    });

    let on_login = Callback::new(move |username: String| {
        storage::write_username(&username);
        session.update(|s| s.login(&username));
    });

    let on_logout = Callback::new(move |()| {
        storage::clear_token();
        storage::clear_username();
        session.update(SessionState::logout);
    });

    let username = Signal::derive(move || session.with(|s| s.username.clone()));

    view! {
        <Stylesheet id="leptos" href="/pkg/ticketing-ui.css"/>
        <Title text="Ticketing System"/>

        <Show
            when=move || session.with(|s| s.logged_in)
            fallback=move || view! { <LoginPage on_login=on_login/> }
        >
            <div class="app-shell">
                <Header username=username on_logout=on_logout/>
                <main>
                    <TicketListPage/>
                </main>
            </div>
        </Show>
    }
}
