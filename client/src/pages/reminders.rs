//! Reminders page: today's or all follow-ups, with optimistic done/delete.

#[cfg(test)]
#[path = "reminders_test.rs"]
mod reminders_test;

use ::calls::reminders::{ReminderAction, is_overdue};
use ::calls::optimistic::Pending;
use ::calls::time::display_timestamp;
use ::calls::types::ReminderStatus;
use ::calls::{ApiError, Reminder};
use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::reminders::{ReminderScope, RemindersState};
use crate::state::toasts::ToastState;
use crate::util::auth::signed_in_user;
use crate::util::feedback::report_failure;

fn row_class(reminder: &Reminder, now: DateTime<Utc>) -> &'static str {
    match reminder.status {
        ReminderStatus::Done => "reminder reminder--done",
        ReminderStatus::Canceled => "reminder reminder--canceled",
        ReminderStatus::Pending if is_overdue(reminder, now) => "reminder reminder--overdue",
        ReminderStatus::Pending => "reminder",
    }
}

fn reminder_title(reminder: &Reminder) -> String {
    match (&reminder.contact_name, reminder.title.trim()) {
        (Some(name), "") => name.clone(),
        (Some(name), title) => format!("{title} ({name})"),
        (None, "") => "Rappel".to_owned(),
        (None, title) => title.to_owned(),
    }
}

async fn send_action(action: &ReminderAction) -> Result<(), ApiError> {
    match action {
        ReminderAction::MarkDone(id) => crate::net::api::mark_reminder_done(id).await,
        ReminderAction::Delete(id) => crate::net::api::delete_reminder(id).await,
    }
}

fn load(scope: ReminderScope, reminders: RwSignal<RemindersState>, auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>) {
    reminders.update(|s| s.begin_load(scope));
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_reminders(scope).await;
        if let Err(e) = &result {
            report_failure(auth, toasts, e);
        }
        reminders.update(|s| s.finish_load(scope, result.map_err(|e| e.user_message())));
    });
}

#[component]
pub fn RemindersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let reminders = expect_context::<RwSignal<RemindersState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let user_id = signed_in_user(auth);
    Effect::new(move || {
        if user_id.get().is_some() {
            load(reminders.get_untracked().scope, reminders, auth, toasts);
        }
    });

    let run = move |action: ReminderAction| {
        let Some(pending) = reminders.try_update(|s| Pending::apply(&mut s.items, action)) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = send_action(pending.action()).await;
            if let Err(e) = &result {
                report_failure(auth, toasts, e);
            }
            reminders.update(|s| pending.settle(&mut s.items, &result));
        });
    };

    let tabs = [ReminderScope::Today, ReminderScope::All]
        .into_iter()
        .map(|scope| {
            view! {
                <button
                    class=move || {
                        if reminders.get().scope == scope { "tab tab--active" } else { "tab" }
                    }
                    on:click=move |_| load(scope, reminders, auth, toasts)
                >
                    {scope.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="reminders-page">
            <header class="reminders-page__header">
                <h1>"Rappels"</h1>
                <div class="tabs">{tabs}</div>
            </header>
            <Show when=move || !reminders.get().loading fallback=|| view! { <p>"Chargement..."</p> }>
                <Show
                    when=move || !reminders.get().items.is_empty()
                    fallback=|| view! { <p class="reminders-page__empty">"Aucun rappel"</p> }
                >
                    <ul class="reminders-page__list">
                        {move || {
                            let now = Utc::now();
                            reminders
                                .get()
                                .items
                                .into_iter()
                                .map(|r| {
                                    let done_id = r.id.clone();
                                    let delete_id = r.id.clone();
                                    let pending = r.status == ReminderStatus::Pending;
                                    view! {
                                        <li class=row_class(&r, now)>
                                            <time>{display_timestamp(Some(&r.due_at))}</time>
                                            <strong>{reminder_title(&r)}</strong>
                                            <p>{r.description.clone().unwrap_or_default()}</p>
                                            <Show when=move || pending>
                                                <button
                                                    class="btn"
                                                    on:click={
                                                        let id = done_id.clone();
                                                        move |_| run(ReminderAction::MarkDone(id.clone()))
                                                    }
                                                >
                                                    "Fait"
                                                </button>
                                            </Show>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| run(ReminderAction::Delete(delete_id.clone()))
                                            >
                                                "Supprimer"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}
