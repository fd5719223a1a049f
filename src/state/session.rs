#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Session gate state: whether a user is logged in and the display name
/// shown in the header.
///
/// Constructed once at process start from durable storage and handed to the
/// component tree as a single signal. The username is the one submitted at
/// login, not a server-confirmed identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub logged_in: bool,
    pub username: String,
}

impl SessionState {
    /// Rebuild the session from durable storage. Logged in iff a token is
    /// present; the stored display name is taken as-is.
    pub fn restore(token_present: bool, stored_username: Option<String>) -> Self {
        Self {
            logged_in: token_present,
            username: stored_username.unwrap_or_default(),
        }
    }

    pub fn login(&mut self, username: &str) {
        self.logged_in = true;
        self.username = username.to_owned();
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
        self.username.clear();
    }
}
