//! # ticketing-ui
//!
//! Leptos + WASM single-page client for the ticketing system: a login screen
//! in front of a ticket table with create, delete, status/priority change,
//! and assignment actions.
//!
//! Every mutation is followed by a full reload of the ticket and user lists
//! from the REST backend; the client keeps no durable cache beyond the
//! session token and display name in `localStorage`. The backend itself is
//! a separate service and is not part of this crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
