use super::*;

#[test]
fn badge_is_empty_without_unread() {
    assert_eq!(NotificationsState::default().badge(), "");
}

#[test]
fn badge_caps_large_counts() {
    let mut state = NotificationsState::default();
    state.set_unread_count(7);
    assert_eq!(state.badge(), "7");
    state.set_unread_count(250);
    assert_eq!(state.badge(), "99+");
}
