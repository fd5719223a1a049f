//! Browser glue: durable storage and blocking dialogs.

pub mod dialog;
pub mod storage;
