//! Reusable view components.

pub mod header;
pub mod ticket_row;
