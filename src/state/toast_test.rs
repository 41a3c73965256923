use super::*;

// =============================================================
// ToastState
// =============================================================

#[test]
fn toast_state_default_is_empty() {
    let state = ToastState::default();
    assert!(state.toasts.is_empty());
}

#[test]
fn push_appends_with_distinct_ids() {
    let mut state = ToastState::default();
    state.push(ToastKind::Error, "Payment failed");
    state.push(ToastKind::Success, "Booking confirmed");

    assert_eq!(state.toasts.len(), 2);
    assert_ne!(state.toasts[0].id, state.toasts[1].id);
    assert_eq!(state.toasts[0].kind, ToastKind::Error);
    assert_eq!(state.toasts[1].message, "Booking confirmed");
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "first");
    state.push(ToastKind::Info, "second");

    let id = state.toasts[0].id.clone();
    state.dismiss(&id);

    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "second");
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "only");
    state.dismiss("missing");
    assert_eq!(state.toasts.len(), 1);
}
