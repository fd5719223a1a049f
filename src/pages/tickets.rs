//! Ticket board page: the table of tickets with per-row mutations and the
//! create-ticket dialog.
//!
//! Every mutation is followed by a full reload of both the ticket and user
//! lists; nothing is updated optimistically. Overlapping reloads are not
//! prevented or ordered — if two are in flight, whichever response resolves
//! last overwrites the view state.

use leptos::prelude::*;

use crate::components::ticket_row::TicketRow;
use crate::net::types::{TicketPriority, TicketStatus, User};
use crate::state::tickets::TicketsState;

/// Fetch the ticket and user lists concurrently and replace both snapshots.
///
/// On either fetch failing, the failure is logged, the loading flag is
/// cleared, and whatever lists were already in memory stay displayed.
fn load_data(state: RwSignal<TicketsState>) {
    state.update(TicketsState::begin_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let (tickets, users) = futures::join!(
            crate::net::api::fetch_tickets(),
            crate::net::api::fetch_users(),
        );
        match (tickets, users) {
            (Some(tickets), Some(users)) => {
                state.update(|s| s.finish_load(tickets, users));
            }
            _ => {
                log::error!("ticket/user load failed");
                state.update(TicketsState::load_failed);
            }
        }
    });
}

/// Ticket board — table, row actions, and the create dialog.
#[component]
pub fn TicketListPage() -> impl IntoView {
    let state = RwSignal::new(TicketsState::default());

    // Initial load on mount.
    Effect::new(move || load_data(state));

    let users = Signal::derive(move || state.with(|s| s.users.clone()));

    let on_status = Callback::new(move |(id, status): (i64, TicketStatus)| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::update_status(id, status).await;
            load_data(state);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, status);
    });

    let on_priority = Callback::new(move |(id, priority): (i64, TicketPriority)| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::update_priority(id, priority).await;
            load_data(state);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, priority);
    });

    let on_assign = Callback::new(move |(id, user_id): (i64, i64)| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::assign_ticket(id, user_id).await;
            load_data(state);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, user_id);
    });

    let on_delete = Callback::new(move |id: i64| {
        if !crate::util::dialog::confirm("Delete this ticket?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::delete_ticket(id).await;
            load_data(state);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="tickets-page">
            <header class="tickets-page__header">
                <div>
                    <h1>"Tickets"</h1>
                    <p>"Manage your support tickets"</p>
                </div>
                <button
                    class="btn btn--primary"
                    on:click=move |_| state.update(TicketsState::open_modal)
                >
                    "+ New Ticket"
                </button>
            </header>

            <div class="ticket-table">
                <table>
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Title"</th>
                            <th>"Status"</th>
                            <th>"Priority"</th>
                            <th>"Assigned To"</th>
                            <th class="ticket-table__actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            state
                                .with(|s| s.tickets.clone())
                                .into_iter()
                                .map(|ticket| {
                                    view! {
                                        <TicketRow
                                            ticket=ticket
                                            users=users
                                            on_status=on_status
                                            on_priority=on_priority
                                            on_assign=on_assign
                                            on_delete=on_delete
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                        <Show when=move || state.with(|s| !s.loading && s.tickets.is_empty())>
                            <tr>
                                <td colspan="6" class="ticket-table__empty">
                                    "No tickets found."
                                </td>
                            </tr>
                        </Show>
                    </tbody>
                </table>
                <Show when=move || state.with(|s| s.loading)>
                    <div class="ticket-table__loading">"Loading..."</div>
                </Show>
            </div>

            <Show when=move || state.with(|s| s.show_modal)>
                <CreateTicketDialog state=state users=users/>
            </Show>
        </div>
    }
}

/// Modal dialog for creating a new ticket.
///
/// Validation failures surface through a blocking alert, not inline. A
/// successful create closes the dialog, resets the draft, and reloads; a
/// failed create is logged and leaves the dialog open.
#[component]
fn CreateTicketDialog(
    state: RwSignal<TicketsState>,
    #[prop(into)] users: Signal<Vec<User>>,
) -> impl IntoView {
    let cancel = Callback::new(move |()| state.update(TicketsState::close_modal));

    let submit = Callback::new(move |()| {
        if !state.with_untracked(|s| s.draft.is_valid()) {
            crate::util::dialog::alert("Title and description required");
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let payload = state.with_untracked(|s| s.draft.to_request());
            leptos::task::spawn_local(async move {
                match crate::net::api::create_ticket(&payload).await {
                    Ok(()) => {
                        state.update(TicketsState::close_modal);
                        load_data(state);
                    }
                    Err(err) => log::error!("ticket create failed: {err}"),
                }
            });
        }
    });

    let draft_priority = state.with_untracked(|s| s.draft.priority);
    let draft_assignee = state.with_untracked(|s| s.draft.assigned_to.unwrap_or(0));

    view! {
        <div class="dialog-backdrop" on:click=move |_| cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Ticket"</h2>
                <div class="dialog__fields">
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Title"
                        prop:value=move || state.with(|s| s.draft.title.clone())
                        on:input=move |ev| {
                            state.update(|s| s.draft.title = event_target_value(&ev));
                        }
                    />
                    <textarea
                        class="dialog__input"
                        placeholder="Description"
                        rows="4"
                        prop:value=move || state.with(|s| s.draft.description.clone())
                        on:input=move |ev| {
                            state.update(|s| s.draft.description = event_target_value(&ev));
                        }
                    ></textarea>
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            if let Some(priority) = TicketPriority::parse(&event_target_value(&ev)) {
                                state.update(|s| s.draft.priority = priority);
                            }
                        }
                    >
                        {TicketPriority::ALL
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <option
                                        value=option.as_str()
                                        selected=(option == draft_priority)
                                    >
                                        {option.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            let assigned = event_target_value(&ev)
                                .parse::<i64>()
                                .ok()
                                .filter(|id| *id != 0);
                            state.update(|s| s.draft.assigned_to = assigned);
                        }
                    >
                        <option value="0" selected=(draft_assignee == 0)>
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
                                            selected=(user.id == draft_assignee)
                                        >
                                            {user.username}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
                <button class="dialog__close" on:click=move |_| cancel.run(())>
                    "✕"
                </button>
            </div>
        </div>
    }
}
