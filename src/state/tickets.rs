#[cfg(test)]
#[path = "tickets_test.rs"]
mod tickets_test;

use crate::net::types::{NewTicket, Ticket, TicketPriority, TicketStatus, User};

/// Draft fields for the create-ticket dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub priority: TicketPriority,
    pub assigned_to: Option<i64>,
}

impl TicketDraft {
    /// A draft is submittable when both title and description contain
    /// non-whitespace text.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }

    /// Build the create payload. New tickets are always `OPEN`, and the
    /// backend contract fixes the creator id at 1.
    pub fn to_request(&self) -> NewTicket {
        NewTicket {
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority,
            status: TicketStatus::Open,
            created_by_id: 1,
            assigned_to_id: self.assigned_to,
        }
    }
}

/// Ticket board state: list snapshots, the load flag, and create-dialog
/// state. The lists are full server snapshots replaced wholesale on every
/// reload; no row is ever updated optimistically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicketsState {
    pub tickets: Vec<Ticket>,
    pub users: Vec<User>,
    pub loading: bool,
    pub show_modal: bool,
    pub draft: TicketDraft,
}

impl Default for TicketsState {
    fn default() -> Self {
        Self {
            tickets: Vec::new(),
            users: Vec::new(),
            loading: true,
            show_modal: false,
            draft: TicketDraft::default(),
        }
    }
}

impl TicketsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replace both snapshots with fresh server truth.
    pub fn finish_load(&mut self, tickets: Vec<Ticket>, users: Vec<User>) {
        self.tickets = tickets;
        self.users = users;
        self.loading = false;
    }

    /// A failed load keeps whatever was already displayed, stale or empty.
    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    pub fn open_modal(&mut self) {
        self.show_modal = true;
    }

    /// Closing the dialog always resets the draft to defaults.
    pub fn close_modal(&mut self) {
        self.show_modal = false;
        self.draft = TicketDraft::default();
    }
}
