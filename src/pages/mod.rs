//! Top-level screens: the login form and the ticket board.

pub mod login;
pub mod tickets;
