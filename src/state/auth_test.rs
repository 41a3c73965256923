use super::*;

fn user(role: &str, is_verified: bool) -> User {
    User {
        id: "u-1".to_owned(),
        first_name: "Ange".to_owned(),
        last_name: "Uwase".to_owned(),
        email: "ange@example.rw".to_owned(),
        role: role.to_owned(),
        is_verified,
    }
}

// =============================================================
// Role resolver
// =============================================================

#[test]
fn role_parse_known_values() {
    assert_eq!(Role::parse("ADMIN"), Role::Admin);
    assert_eq!(Role::parse("USER"), Role::User);
    assert_eq!(Role::parse("PROVIDER"), Role::Provider);
}

#[test]
fn role_parse_is_case_sensitive_and_total() {
    assert_eq!(Role::parse("admin"), Role::Unknown);
    assert_eq!(Role::parse("SUPERADMIN"), Role::Unknown);
    assert_eq!(Role::parse(""), Role::Unknown);
}

#[test]
fn landing_route_fixed_mapping() {
    assert_eq!(Role::Admin.landing_route(), "/admin");
    assert_eq!(Role::User.landing_route(), "/dashboard");
    assert_eq!(Role::Provider.landing_route(), "/provider-dashboard");
}

#[test]
fn landing_route_unknown_falls_back_to_dashboard() {
    assert_eq!(Role::Unknown.landing_route(), "/dashboard");
    assert_eq!(Role::parse("MODERATOR").landing_route(), "/dashboard");
}

// =============================================================
// Session lifecycle
// =============================================================

#[test]
fn default_session_is_signed_out() {
    let state = AuthState::default();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn login_populates_token_and_user() {
    let mut state = AuthState::default();
    state.login("tok-1".to_owned(), user("USER", true));
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert!(state.user.is_some());
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

#[test]
fn begin_restore_holds_token_without_user() {
    let mut state = AuthState::default();
    state.begin_restore("tok-1".to_owned());
    assert!(state.is_authenticated());
    assert!(state.user.is_none());
    assert!(state.loading);
}

#[test]
fn set_user_completes_a_restore() {
    let mut state = AuthState::default();
    state.begin_restore("tok-1".to_owned());
    state.set_user(user("PROVIDER", true));
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(User::role), Some(Role::Provider));
}

#[test]
fn set_user_without_token_is_ignored() {
    let mut state = AuthState::default();
    state.set_user(user("USER", true));
    assert!(state.user.is_none());
}

#[test]
fn logout_clears_everything() {
    let mut state = AuthState::default();
    state.login("tok-1".to_owned(), user("ADMIN", true));
    state.logout();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// Verification gate
// =============================================================

#[test]
fn unverified_user_needs_verification() {
    let mut state = AuthState::default();
    state.login("tok-1".to_owned(), user("USER", false));
    assert!(state.needs_verification());
}

#[test]
fn verified_or_absent_user_does_not_need_verification() {
    let mut state = AuthState::default();
    assert!(!state.needs_verification());

    state.login("tok-1".to_owned(), user("USER", true));
    assert!(!state.needs_verification());
}
