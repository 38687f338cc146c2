use super::*;
use ::calls::Notification;
use ::calls::optimistic::apply_with_rollback;

fn list() -> NotificationList {
    NotificationList::new(vec![
        Notification {
            id: "n1".to_owned(),
            ..Notification::default()
        },
        Notification {
            id: "n2".to_owned(),
            ..Notification::default()
        },
    ])
}

#[test]
fn unread_items_are_highlighted() {
    assert!(item_class(false).ends_with("--unread"));
    assert!(!item_class(true).contains("--unread"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn mark_all_read_reverts_when_backend_is_unreachable() {
    let before = list();
    let action = NotificationAction::MarkAllRead;
    let settled = futures::executor::block_on(apply_with_rollback(&before, &action, || send_action(&action)));
    assert_eq!(settled.result, Err(ApiError::Unavailable));
    assert_eq!(settled.state, before);
    assert_eq!(settled.state.unread_count, 2);
}
