use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NotifyState::default();
    let first = state.success("Login successful");
    let second = state.warning("Server error occurred");
    assert!(second > first);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = NotifyState::default();
    let first = state.error("Unauthorized access");
    let second = state.success("Logout successful");
    state.dismiss(first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = NotifyState::default();
    state.success("hello");
    state.dismiss(99);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NotifyState::default();
    let first = state.success("one");
    state.dismiss(first);
    let second = state.success("two");
    assert!(second > first);
}
