//! Header bell with the unread badge and the unread notification panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The unread count is polled every [`UNREAD_POLL_INTERVAL`] while the bell is
//! mounted; the loop stops on cleanup. Mark-read actions render immediately
//! and are rolled back when the backend refuses them.

#[cfg(test)]
#[path = "notification_bell_test.rs"]
mod notification_bell_test;

use ::calls::ApiError;
use ::calls::notifications::{NotificationAction, NotificationList, UNREAD_POLL_INTERVAL};
use ::calls::optimistic::Pending;
use ::calls::time::display_timestamp;
use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::notifications::NotificationsState;
use crate::state::toasts::ToastState;
use crate::util::feedback::report_failure;

/// Backend call mirroring a local notification action.
async fn send_action(action: &NotificationAction) -> Result<(), ApiError> {
    match action {
        NotificationAction::MarkRead(id) => crate::net::api::mark_notification_read(id).await,
        NotificationAction::MarkAllRead => crate::net::api::mark_all_notifications_read().await,
    }
}

/// Apply `action` optimistically; on failure undo just this action against the live list.
fn run_action(
    notifications: RwSignal<NotificationsState>,
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
    action: NotificationAction,
) {
    let Some(pending) = notifications.try_update(|s| Pending::apply(&mut s.list, action)) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = send_action(pending.action()).await;
        if let Err(e) = &result {
            report_failure(auth, toasts, e);
        }
        notifications.update(|s| pending.settle(&mut s.list, &result));
    });
}

fn load_unread(
    notifications: RwSignal<NotificationsState>,
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
) {
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_unread_notifications().await {
            Ok(items) => notifications.update(|s| s.list = NotificationList::new(items)),
            Err(e) => report_failure(auth, toasts, &e),
        }
    });
}

#[component]
pub fn NotificationBell() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if auth.get_untracked().tokens.is_some() {
                    // Poll failures stay in the console; a toast every 30 s would drown the UI.
                    match crate::net::api::fetch_unread_count().await {
                        Ok(count) => notifications.update(|s| s.set_unread_count(count)),
                        Err(e) => leptos::logging::warn!("unread count poll failed: {e}"),
                    }
                }
                gloo_timers::future::sleep(UNREAD_POLL_INTERVAL).await;
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = UNREAD_POLL_INTERVAL;

    let on_toggle = move |_| {
        let opening = !notifications.get_untracked().panel_open;
        notifications.update(|s| s.panel_open = opening);
        if opening {
            load_unread(notifications, auth, toasts);
        }
    };

    view! {
        <div class="notification-bell">
            <button class="btn notification-bell__button" title="Notifications" on:click=on_toggle>
                "🔔"
                <Show when=move || notifications.get().list.has_unread()>
                    <span class="notification-bell__badge">{move || notifications.get().badge()}</span>
                </Show>
            </button>
            <Show when=move || notifications.get().panel_open>
                <div class="notification-panel">
                    <header class="notification-panel__header">
                        <span>"Notifications"</span>
                        <button
                            class="btn notification-panel__read-all"
                            disabled=move || !notifications.get().list.has_unread()
                            on:click=move |_| run_action(notifications, auth, toasts, NotificationAction::MarkAllRead)
                        >
                            "Tout marquer comme lu"
                        </button>
                    </header>
                    <Show
                        when=move || !notifications.get().list.items.is_empty()
                        fallback=|| view! { <p class="notification-panel__empty">"Aucune notification"</p> }
                    >
                        <ul class="notification-panel__list">
                            {move || {
                                notifications
                                    .get()
                                    .list
                                    .items
                                    .into_iter()
                                    .map(|n| {
                                        let id = n.id.clone();
                                        let class = item_class(n.read);
                                        view! {
                                            <li class=class>
                                                <span class="notification-panel__kind">{n.kind.label()}</span>
                                                <strong>{n.title.clone()}</strong>
                                                <p>{n.message.clone()}</p>
                                                <time>{display_timestamp(n.created_at.as_deref())}</time>
                                                <Show when=move || !n.read>
                                                    <button
                                                        class="btn notification-panel__read"
                                                        on:click={
                                                            let id = id.clone();
                                                            move |_| {
                                                                run_action(
                                                                    notifications,
                                                                    auth,
                                                                    toasts,
                                                                    NotificationAction::MarkRead(id.clone()),
                                                                );
                                                            }
                                                        }
                                                    >
                                                        "Marquer comme lu"
                                                    </button>
                                                </Show>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

fn item_class(read: bool) -> &'static str {
    if read {
        "notification-panel__item"
    } else {
        "notification-panel__item notification-panel__item--unread"
    }
}
