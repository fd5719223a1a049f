use super::*;

fn sample_ticket(id: i64) -> Ticket {
    Ticket {
        id,
        title: "Printer broken".to_owned(),
        description: "No toner".to_owned(),
        status: TicketStatus::Open,
        priority: TicketPriority::High,
        created_by_id: 1,
        assigned_to_id: Some(2),
    }
}

fn sample_user(id: i64) -> User {
    User {
        id,
        username: format!("user{id}"),
    }
}

// =============================================================
// TicketsState defaults
// =============================================================

#[test]
fn state_default_is_loading_with_empty_lists() {
    let state = TicketsState::default();
    assert!(state.loading);
    assert!(state.tickets.is_empty());
    assert!(state.users.is_empty());
    assert!(!state.show_modal);
}

#[test]
fn draft_default_is_medium_priority_unassigned() {
    let draft = TicketDraft::default();
    assert!(draft.title.is_empty());
    assert!(draft.description.is_empty());
    assert_eq!(draft.priority, TicketPriority::Medium);
    assert_eq!(draft.assigned_to, None);
}

// =============================================================
// Draft validation
// =============================================================

#[test]
fn draft_with_empty_title_is_invalid() {
    let draft = TicketDraft {
        description: "No toner".to_owned(),
        ..TicketDraft::default()
    };
    assert!(!draft.is_valid());
}

#[test]
fn draft_with_whitespace_only_description_is_invalid() {
    let draft = TicketDraft {
        title: "Printer broken".to_owned(),
        description: "   ".to_owned(),
        ..TicketDraft::default()
    };
    assert!(!draft.is_valid());
}

#[test]
fn draft_with_both_fields_is_valid() {
    let draft = TicketDraft {
        title: "Printer broken".to_owned(),
        description: "No toner".to_owned(),
        ..TicketDraft::default()
    };
    assert!(draft.is_valid());
}

// =============================================================
// Create payload
// =============================================================

#[test]
fn create_payload_fixes_status_open_and_creator_id() {
    let draft = TicketDraft {
        title: "Printer broken".to_owned(),
        description: "No toner".to_owned(),
        priority: TicketPriority::High,
        assigned_to: Some(2),
    };
    let req = draft.to_request();
    assert_eq!(req.status, TicketStatus::Open);
    assert_eq!(req.created_by_id, 1);
    assert_eq!(req.priority, TicketPriority::High);
    assert_eq!(req.assigned_to_id, Some(2));
    assert_eq!(req.title, "Printer broken");
    assert_eq!(req.description, "No toner");
}

#[test]
fn create_payload_keeps_unassigned_absent() {
    let draft = TicketDraft {
        title: "Printer broken".to_owned(),
        description: "No toner".to_owned(),
        ..TicketDraft::default()
    };
    assert_eq!(draft.to_request().assigned_to_id, None);
}

// =============================================================
// Load bookkeeping
// =============================================================

#[test]
fn finish_load_replaces_both_snapshots() {
    let mut state = TicketsState::default();
    state.finish_load(vec![sample_ticket(1)], vec![sample_user(2)]);
    assert!(!state.loading);
    assert_eq!(state.tickets.len(), 1);
    assert_eq!(state.users.len(), 1);

    state.begin_load();
    assert!(state.loading);
    state.finish_load(Vec::new(), Vec::new());
    assert!(state.tickets.is_empty());
}

#[test]
fn failed_reload_keeps_stale_lists() {
    let mut state = TicketsState::default();
    state.finish_load(vec![sample_ticket(1)], vec![sample_user(2)]);
    state.begin_load();
    state.load_failed();
    assert!(!state.loading);
    assert_eq!(state.tickets, vec![sample_ticket(1)]);
    assert_eq!(state.users, vec![sample_user(2)]);
}

// =============================================================
// Dialog lifecycle
// =============================================================

#[test]
fn closing_dialog_resets_draft_to_defaults() {
    let mut state = TicketsState::default();
    state.open_modal();
    assert!(state.show_modal);
    state.draft = TicketDraft {
        title: "Printer broken".to_owned(),
        description: "No toner".to_owned(),
        priority: TicketPriority::Critical,
        assigned_to: Some(3),
    };
    state.close_modal();
    assert!(!state.show_modal);
    assert_eq!(state.draft, TicketDraft::default());
}
