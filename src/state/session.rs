#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Session context: the single authenticated-user value for the lifetime of
/// the application, plus a loading flag covering the startup restore so
/// screens don't redirect before the stored session has been read.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    /// Install the authenticated user after login/register or restore.
    pub fn establish(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Explicit logout: drop the user and stop loading.
    pub fn clear(&mut self) {
        self.user = None;
        self.loading = false;
    }
}

/// Display name derived from an email address (everything before the `@`).
#[must_use]
pub fn first_name(email: &str) -> &str {
    let name = email.split('@').next().unwrap_or(email);
    if name.is_empty() { "User" } else { name }
}
