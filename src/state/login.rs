#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

/// Shown when submit is attempted with an empty username or password.
pub const MISSING_FIELDS: &str = "Please fill in all fields";

/// Shown for every failed credential exchange. Wrong credentials, a network
/// outage, and a server error are indistinguishable to the user.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Login form fields plus submission bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub error: Option<&'static str>,
    pub loading: bool,
}

impl LoginForm {
    /// Start a submit attempt.
    ///
    /// Returns `false` with the missing-fields error set when either field
    /// is empty; no request may be issued in that case. Otherwise clears the
    /// error and enters the loading state.
    pub fn begin_submit(&mut self) -> bool {
        if self.username.is_empty() || self.password.is_empty() {
            self.error = Some(MISSING_FIELDS);
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    pub fn succeed(&mut self) {
        self.loading = false;
    }

    pub fn fail(&mut self) {
        self.error = Some(INVALID_CREDENTIALS);
        self.loading = false;
    }
}
