#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication session: bearer token plus the resolved user profile.
///
/// Mutations go through [`AuthState::login`], [`AuthState::logout`],
/// [`AuthState::begin_restore`], and [`AuthState::set_user`] only, so the
/// session has a single writer per entry point.
///
/// Invariant: `user` is never populated while `token` is `None`. The token
/// may be present with `user` absent while a persisted session is being
/// exchanged for a profile.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Populate the session from a successful login response.
    pub fn login(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
        self.loading = false;
    }

    /// Start restoring a persisted session; the profile arrives later via
    /// [`AuthState::set_user`].
    pub fn begin_restore(&mut self, token: String) {
        self.token = Some(token);
        self.user = None;
        self.loading = true;
    }

    /// Attach (or refresh) the profile for the current token. Ignored when
    /// no token is held, preserving the session invariant.
    pub fn set_user(&mut self, user: User) {
        if self.token.is_some() {
            self.user = Some(user);
            self.loading = false;
        }
    }

    /// Clear the session entirely.
    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// True when the signed-in user still has to confirm their email.
    /// Booking flows check this before issuing any network call.
    #[must_use]
    pub fn needs_verification(&self) -> bool {
        self.user.as_ref().is_some_and(|u| !u.is_verified)
    }
}

/// Server-assigned user category. Any value the backend returns outside the
/// known set parses to `Unknown`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
    Provider,
    Unknown,
}

impl Role {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "ADMIN" => Self::Admin,
            "USER" => Self::User,
            "PROVIDER" => Self::Provider,
            _ => Self::Unknown,
        }
    }

    /// The canonical landing route for this role. Total: unknown roles land
    /// on the regular user dashboard.
    #[must_use]
    pub fn landing_route(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Provider => "/provider-dashboard",
            Self::User | Self::Unknown => "/dashboard",
        }
    }
}

impl User {
    /// Parsed role of this profile.
    #[must_use]
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }
}
