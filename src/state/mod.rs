//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by screen (`session`, `login`, `tickets`) so individual
//! components can depend on small focused models. All transitions are plain
//! methods on plain structs and are unit-tested natively; signals and
//! network effects stay in the page layer.

pub mod login;
pub mod session;
pub mod tickets;
