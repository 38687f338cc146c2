//! Modal form for editing one call or logging a new one.
//!
//! The form works on a [`CallEdit`] copy held in `CallsState::editing`; saving
//! reconciles it into a [`CallUpdate`] (clearing the callback for statuses
//! that do not need one) and swaps the backend's answer into the list.
//!
//! [`CallUpdate`]: calls::edit::CallUpdate

#[cfg(test)]
#[path = "call_edit_dialog_test.rs"]
mod call_edit_dialog_test;

use ::calls::{CallDirection, UiCallStatus};
use ::calls::edit::{CallEdit, REMINDER_DELIMITER};
use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::calls::CallsState;
use crate::state::toasts::ToastState;
use crate::util::feedback::{report_failure, toast_success};

fn reminder_placeholder() -> String {
    format!("AAAA-MM-JJ {REMINDER_DELIMITER} créneau")
}

/// A recall status without any date is accepted but worth flagging.
fn missing_recall_warning(edit: &CallEdit) -> Option<&'static str> {
    (edit.status.requires_recall() && edit.reminder.trim().is_empty())
        .then_some("Aucune date de rappel renseignée.")
}

fn edit_form(calls: RwSignal<CallsState>, edit: impl FnOnce(&mut CallEdit)) {
    calls.update(|s| {
        if let Some((_, form)) = s.editing.as_mut() {
            edit(form);
        }
    });
}

fn form_value(calls: RwSignal<CallsState>, read: impl Fn(&CallEdit) -> String) -> String {
    calls.get().editing.as_ref().map(|(_, form)| read(form)).unwrap_or_default()
}

#[component]
pub fn CallEditDialog() -> impl IntoView {
    let calls = expect_context::<RwSignal<CallsState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let saving = RwSignal::new(false);
    let new_direction = RwSignal::new(CallDirection::Outbound);
    let creating = move || calls.get().is_creating();

    let on_cancel = Callback::new(move |()| calls.update(CallsState::close_editor));

    let submit = Callback::new(move |()| {
        if saving.get_untracked() {
            return;
        }
        let Some((id, form)) = calls.get_untracked().editing else {
            return;
        };
        let direction = new_direction.get_untracked();
        saving.set(true);
        leptos::task::spawn_local(async move {
            let (result, done) = if id.is_empty() {
                let result = crate::net::api::create_call(&form.to_new_call(direction)).await;
                (result, "Appel enregistré")
            } else {
                (crate::net::api::update_call(&id, &form.to_update()).await, "Appel mis à jour")
            };
            match result {
                Ok(call) => {
                    calls.update(|s| {
                        s.replace_call(call);
                        s.close_editor();
                    });
                    toast_success(toasts, done);
                }
                Err(e) => report_failure(auth, toasts, &e),
            }
            saving.set(false);
        });
    });

    let status_options = UiCallStatus::ALL
        .into_iter()
        .map(|status| view! { <option value=status.key()>{status.label()}</option> })
        .collect::<Vec<_>>();

    let requires_recall = move || {
        calls.get().editing.as_ref().is_some_and(|(_, form)| form.status.requires_recall())
    };
    let warning = move || {
        calls
            .get()
            .editing
            .as_ref()
            .and_then(|(_, form)| missing_recall_warning(form))
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog call-edit" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || if creating() { "Nouvel appel" } else { "Modifier l'appel" }}</h2>
                <Show when=creating>
                    <label class="dialog__label">
                        "Sens"
                        <select
                            class="dialog__input"
                            prop:value=move || new_direction.get().key()
                            on:change=move |ev| {
                                if let Some(direction) = CallDirection::from_key(&event_target_value(&ev)) {
                                    new_direction.set(direction);
                                }
                            }
                        >
                            <option value="outbound">{CallDirection::Outbound.label()}</option>
                            <option value="inbound">{CallDirection::Inbound.label()}</option>
                        </select>
                    </label>
                </Show>
                <label class="dialog__label">
                    "Statut"
                    <select
                        class="dialog__input"
                        prop:value=move || form_value(calls, |f| f.status.key().to_owned())
                        on:change=move |ev| {
                            let status = UiCallStatus::from_key(&event_target_value(&ev));
                            edit_form(calls, |f| f.status = status);
                        }
                    >
                        {status_options}
                    </select>
                </label>
                <label class="dialog__label">
                    "Prénom"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form_value(calls, |f| f.first_name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit_form(calls, |f| f.first_name = value);
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Nom"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form_value(calls, |f| f.last_name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit_form(calls, |f| f.last_name = value);
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Téléphone"
                    <input
                        class="dialog__input"
                        type="tel"
                        prop:value=move || form_value(calls, |f| f.phone.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit_form(calls, |f| f.phone = value);
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || form_value(calls, |f| f.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit_form(calls, |f| f.email = value);
                        }
                    />
                </label>
                <Show when=requires_recall>
                    <label class="dialog__label">
                        "Rappel"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder=reminder_placeholder()
                            prop:value=move || form_value(calls, |f| f.reminder.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                edit_form(calls, |f| f.reminder = value);
                            }
                        />
                    </label>
                </Show>
                <Show when=move || warning().is_some()>
                    <p class="dialog__warning">{move || warning().unwrap_or_default()}</p>
                </Show>
                <label class="dialog__label">
                    "Notes"
                    <textarea
                        class="dialog__input dialog__input--notes"
                        prop:value=move || form_value(calls, |f| f.notes.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit_form(calls, |f| f.notes = value);
                        }
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Annuler"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || saving.get()
                        on:click=move |_| submit.run(())
                    >
                        "Enregistrer"
                    </button>
                </div>
            </div>
        </div>
    }
}
