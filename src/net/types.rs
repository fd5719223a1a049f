//! Wire types shared with the ticketing backend.
//!
//! Field names follow the backend's camelCase JSON; enum values travel in
//! SCREAMING_SNAKE_CASE.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Ticket lifecycle status as exposed by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
    InProgress,
    WaitingForCustomer,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 5] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::WaitingForCustomer,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    /// Statuses offered in the row dropdown. `WaitingForCustomer` is
    /// backend-reachable but not settable from the board.
    pub const SELECTABLE: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    /// Wire form, also used in query parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            TicketStatus::Open => "OPEN",
            TicketStatus::InProgress => "IN_PROGRESS",
            TicketStatus::WaitingForCustomer => "WAITING_FOR_CUSTOMER",
            TicketStatus::Resolved => "RESOLVED",
            TicketStatus::Closed => "CLOSED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }

    /// Human-readable dropdown label.
    pub fn label(self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::WaitingForCustomer => "Waiting for Customer",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }

    /// Badge display class. The lookup is total: statuses without a mapping
    /// of their own fall back to the neutral class.
    pub fn badge_class(self) -> &'static str {
        match self {
            TicketStatus::Open => "badge--blue",
            TicketStatus::InProgress => "badge--yellow",
            TicketStatus::Resolved => "badge--green",
            TicketStatus::Closed => "badge--gray",
            _ => "badge--gray",
        }
    }
}

/// Ticket priority as exposed by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 4] = [
        TicketPriority::Low,
        TicketPriority::Medium,
        TicketPriority::High,
        TicketPriority::Critical,
    ];

    /// Wire form, also used in query parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            TicketPriority::Low => "LOW",
            TicketPriority::Medium => "MEDIUM",
            TicketPriority::High => "HIGH",
            TicketPriority::Critical => "CRITICAL",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == value)
    }

    /// Human-readable dropdown label.
    pub fn label(self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
            TicketPriority::Critical => "Critical",
        }
    }

    /// Badge display class.
    pub fn badge_class(self) -> &'static str {
        match self {
            TicketPriority::Low => "badge--green",
            TicketPriority::Medium => "badge--yellow",
            TicketPriority::High => "badge--orange",
            TicketPriority::Critical => "badge--red",
        }
    }
}

/// A ticket row as returned by `GET /tickets`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub created_by_id: i64,
    #[serde(default)]
    pub assigned_to_id: Option<i64>,
}

/// An assignable user as returned by `GET /admin/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// Create payload for `POST /tickets`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub created_by_id: i64,
    pub assigned_to_id: Option<i64>,
}
