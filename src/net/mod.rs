//! Network layer: wire types shared with the backend and the REST helpers
//! that talk to it.

pub mod api;
pub mod types;
