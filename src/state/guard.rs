#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::auth::{AuthState, Role};

/// Decision of the shared route-guard state machine.
///
/// One parametrized evaluation backs both guard components: the
/// unconditional auth guard passes an empty allow-list, the role-filtered
/// guard passes the roles it admits.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardState {
    /// No token — the guard redirects to the login route, carrying the
    /// originally requested path.
    NoSession,
    /// Token held, profile still loading — render a loading indicator and
    /// take no navigation action.
    LoadingProfile,
    /// Session present and the role is admitted — render children.
    Authorized,
    /// Session present but the role is not admitted — redirect to the
    /// user's own landing route (or an explicit override), not an error
    /// page.
    Denied { redirect: String },
}

/// Evaluate the guard for the current session.
///
/// An empty `allowed` set admits any authenticated role.
#[must_use]
pub fn evaluate(auth: &AuthState, allowed: &[Role], redirect_override: Option<&str>) -> GuardState {
    if auth.token.is_none() {
        return GuardState::NoSession;
    }
    let Some(user) = &auth.user else {
        return GuardState::LoadingProfile;
    };

    let role = user.role();
    if allowed.is_empty() || allowed.contains(&role) {
        GuardState::Authorized
    } else {
        let redirect = redirect_override.map_or_else(|| role.landing_route().to_owned(), str::to_owned);
        GuardState::Denied { redirect }
    }
}

/// Decision of the root-path redirector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootDecision {
    /// No token — render nothing and stay on `/`.
    Idle,
    /// Token held, profile loading — render a loading indicator.
    Loading,
    /// Session resolved — navigate once to the role's landing route,
    /// replacing history.
    Navigate(&'static str),
}

#[must_use]
pub fn evaluate_root(auth: &AuthState) -> RootDecision {
    if auth.token.is_none() {
        return RootDecision::Idle;
    }
    match &auth.user {
        None => RootDecision::Loading,
        Some(user) => RootDecision::Navigate(user.role().landing_route()),
    }
}

/// Login route carrying the originally requested path, so the login page
/// can send the user back after authenticating.
#[must_use]
pub fn login_route_from(path: &str) -> String {
    if path.is_empty() || path == "/" || path == "/login" {
        "/login".to_owned()
    } else {
        format!("/login?from={path}")
    }
}
