//! A single ticket table row: status/priority dropdowns styled as badges,
//! the assignee selector, and the delete action.

use leptos::prelude::*;

use crate::net::types::{Ticket, TicketPriority, TicketStatus, User};

/// One row of the ticket table.
///
/// The dropdowns report the *requested* change upward and keep showing the
/// old value until the reload that follows every mutation lands; rows are
/// never updated optimistically.
#[component]
pub fn TicketRow(
    ticket: Ticket,
    #[prop(into)] users: Signal<Vec<User>>,
    on_status: Callback<(i64, TicketStatus)>,
    on_priority: Callback<(i64, TicketPriority)>,
    on_assign: Callback<(i64, i64)>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let Ticket {
        id,
        title,
        status,
        priority,
        assigned_to_id,
        ..
    } = ticket;
    // Id 0 backs the synthetic "Unassigned" option; it is never sent.
    let assigned = assigned_to_id.unwrap_or(0);

    view! {
        <tr class="ticket-table__row">
            <td class="ticket-table__id">{format!("#{id}")}</td>
            <td class="ticket-table__title">{title}</td>
            <td>
                <select
                    class=format!("badge-select {}", status.badge_class())
                    on:change=move |ev| {
                        if let Some(next) = TicketStatus::parse(&event_target_value(&ev)) {
                            on_status.run((id, next));
                        }
                    }
                >
                    {TicketStatus::SELECTABLE
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option value=option.as_str() selected=(option == status)>
                                    {option.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </td>
            <td>
                <select
                    class=format!("badge-select {}", priority.badge_class())
                    on:change=move |ev| {
                        if let Some(next) = TicketPriority::parse(&event_target_value(&ev)) {
                            on_priority.run((id, next));
                        }
                    }
                >
                    {TicketPriority::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option value=option.as_str() selected=(option == priority)>
                                    {option.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </td>
            <td>
                <select
                    class="ticket-table__assign"
                    on:change=move |ev| {
                        if let Ok(user_id) = event_target_value(&ev).parse::<i64>() {
                            if user_id != 0 {
                                on_assign.run((id, user_id));
                            }
                        }
                    }
                >
                    <option value="0" selected=(assigned == 0)>
                        "Unassigned"
                    </option>
                    {move || {
                        users
                            .get()
                            .into_iter()
                            .map(|user| {
                                view! {
                                    <option
                                        value=user.id.to_string()
                                        selected=(user.id == assigned)
                                    >
                                        {user.username}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </td>
            <td class="ticket-table__actions">
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
