use super::*;

// =============================================================
// TicketStatus wire strings
// =============================================================

#[test]
fn status_wire_strings_round_trip() {
    for status in TicketStatus::ALL {
        assert_eq!(TicketStatus::parse(status.as_str()), Some(status));
    }
}

#[test]
fn status_parse_rejects_unknown_values() {
    assert_eq!(TicketStatus::parse("REOPENED"), None);
    assert_eq!(TicketStatus::parse("open"), None);
    assert_eq!(TicketStatus::parse(""), None);
}

#[test]
fn status_dropdown_excludes_waiting_for_customer() {
    assert!(
        !TicketStatus::SELECTABLE.contains(&TicketStatus::WaitingForCustomer)
    );
    for status in TicketStatus::SELECTABLE {
        assert!(TicketStatus::ALL.contains(&status));
    }
}

// =============================================================
// Badge classes
// =============================================================

#[test]
fn status_badge_class_is_total() {
    for status in TicketStatus::ALL {
        assert!(!status.badge_class().is_empty());
    }
}

#[test]
fn waiting_for_customer_falls_back_to_neutral_badge() {
    assert_eq!(
        TicketStatus::WaitingForCustomer.badge_class(),
        TicketStatus::Closed.badge_class()
    );
}

#[test]
fn priority_badge_classes_are_distinct() {
    let classes: Vec<_> = TicketPriority::ALL
        .into_iter()
        .map(TicketPriority::badge_class)
        .collect();
    for (i, a) in classes.iter().enumerate() {
        for b in classes.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

// =============================================================
// TicketPriority
// =============================================================

#[test]
fn priority_default_is_medium() {
    assert_eq!(TicketPriority::default(), TicketPriority::Medium);
}

#[test]
fn priority_wire_strings_round_trip() {
    for priority in TicketPriority::ALL {
        assert_eq!(TicketPriority::parse(priority.as_str()), Some(priority));
    }
}

// =============================================================
// JSON shapes
// =============================================================

#[test]
fn ticket_deserializes_from_backend_json() {
    let json = r#"{
        "id": 7,
        "title": "Printer broken",
        "description": "No toner",
        "status": "IN_PROGRESS",
        "priority": "HIGH",
        "createdById": 1,
        "assignedToId": 2
    }"#;
    let ticket: Ticket = serde_json::from_str(json).unwrap();
    assert_eq!(ticket.id, 7);
    assert_eq!(ticket.status, TicketStatus::InProgress);
    assert_eq!(ticket.priority, TicketPriority::High);
    assert_eq!(ticket.assigned_to_id, Some(2));
}

#[test]
fn ticket_tolerates_null_or_missing_assignee() {
    let with_null = r#"{
        "id": 8,
        "title": "VPN down",
        "description": "Office-wide",
        "status": "OPEN",
        "priority": "CRITICAL",
        "createdById": 1,
        "assignedToId": null
    }"#;
    let ticket: Ticket = serde_json::from_str(with_null).unwrap();
    assert_eq!(ticket.assigned_to_id, None);

    let without_field = r#"{
        "id": 9,
        "title": "VPN down",
        "description": "Office-wide",
        "status": "OPEN",
        "priority": "CRITICAL",
        "createdById": 1
    }"#;
    let ticket: Ticket = serde_json::from_str(without_field).unwrap();
    assert_eq!(ticket.assigned_to_id, None);
}

#[test]
fn new_ticket_serializes_camel_case_with_null_assignee() {
    let req = NewTicket {
        title: "Printer broken".to_owned(),
        description: "No toner".to_owned(),
        priority: TicketPriority::High,
        status: TicketStatus::Open,
        created_by_id: 1,
        assigned_to_id: None,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["title"], "Printer broken");
    assert_eq!(value["status"], "OPEN");
    assert_eq!(value["priority"], "HIGH");
    assert_eq!(value["createdById"], 1);
    assert!(value["assignedToId"].is_null());
}
