//! REST API helpers for communicating with the ticketing backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a failed
//! fetch degrades to stale or empty lists without crashing hydration.
//! Single-field mutations are fire-and-forget; the reload that follows
//! every mutation reflects server truth either way.

#![allow(clippy::unused_async)]

use super::types::{NewTicket, Ticket, TicketPriority, TicketStatus, User};

/// Exchange credentials for a session token via `POST /auth/login`.
///
/// # Errors
///
/// Returns an error string for any network failure or non-2xx response;
/// callers surface the same generic message regardless of cause.
pub async fn login(username: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct LoginRequest<'a> {
            username: &'a str,
            password: &'a str,
        }
        #[derive(serde::Deserialize)]
        struct LoginResponse {
            token: String,
        }

        let resp = gloo_net::http::Request::post("/auth/login")
            .json(&LoginRequest { username, password })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("login failed: {}", resp.status()));
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the full ticket list from `GET /tickets`.
/// Returns `None` on any failure or on the server.
pub async fn fetch_tickets() -> Option<Vec<Ticket>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/tickets").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Ticket>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the assignable users from `GET /admin/users`.
/// Returns `None` on any failure or on the server.
pub async fn fetch_users() -> Option<Vec<User>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/admin/users")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<User>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Create a ticket via `POST /tickets`.
///
/// # Errors
///
/// Returns an error string on any network failure or non-2xx response; the
/// board reloads only after a successful create.
pub async fn create_ticket(ticket: &NewTicket) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/tickets")
            .json(ticket)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("create failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ticket;
        Err("not available on server".to_owned())
    }
}

/// Delete a ticket via `DELETE /tickets/{id}`. Failures are not surfaced;
/// the unconditional reload afterwards shows whatever the server kept.
pub async fn delete_ticket(id: i64) {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/tickets/{id}");
        let _ = gloo_net::http::Request::delete(&url).send().await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Set a ticket's status via `POST /tickets/{id}/status?status=<value>`.
pub async fn update_status(id: i64, status: TicketStatus) {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/tickets/{id}/status?status={}", status.as_str());
        let _ = gloo_net::http::Request::post(&url).send().await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, status);
    }
}

/// Set a ticket's priority via `POST /tickets/{id}/priority?priority=<value>`.
pub async fn update_priority(id: i64, priority: TicketPriority) {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/tickets/{id}/priority?priority={}", priority.as_str());
        let _ = gloo_net::http::Request::post(&url).send().await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, priority);
    }
}

/// Assign a ticket to a user via `POST /tickets/{id}/assign/{user_id}`.
/// There is no unassign counterpart; the board never calls one.
pub async fn assign_ticket(id: i64, user_id: i64) {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/tickets/{id}/assign/{user_id}");
        let _ = gloo_net::http::Request::post(&url).send().await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, user_id);
    }
}
