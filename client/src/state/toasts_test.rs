use super::*;
use calls::error::GENERIC_ERROR_MESSAGE;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a");
    let b = state.push_success("b");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].kind, ToastKind::Success);
}

#[test]
fn dismiss_removes_only_target() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a");
    let b = state.push(ToastKind::Info, "b");
    state.dismiss(a);
    assert_eq!(state.items.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a");
    state.dismiss(a);
    assert_ne!(state.push(ToastKind::Info, "b"), a);
}

#[test]
fn push_error_uses_backend_message_or_fallback() {
    let mut state = ToastState::default();
    state.push_error(&ApiError::from_response(422, r#"{"detail":"Email invalide"}"#));
    state.push_error(&ApiError::Network("offline".to_owned()));
    assert_eq!(state.items[0].message, "Email invalide");
    assert_eq!(state.items[0].kind, ToastKind::Error);
    assert_eq!(state.items[1].message, GENERIC_ERROR_MESSAGE);
}
