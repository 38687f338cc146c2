//! Call list table shared by the three call views.

#[cfg(test)]
#[path = "call_table_test.rs"]
mod call_table_test;

use ::calls::time::display_timestamp;
use ::calls::{Call, CallView};
use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;

/// Header of the view-dependent column.
fn context_header(view: CallView) -> &'static str {
    match view {
        CallView::All => "Vague",
        CallView::Today => "Appelé à",
        CallView::History => "Dernier appel",
    }
}

/// Value of the view-dependent column.
fn context_cell(view: CallView, call: &Call) -> String {
    match view {
        CallView::All => call.wave.map_or_else(|| "—".to_owned(), |w| w.to_string()),
        CallView::Today => display_timestamp(call.occurred_at.as_deref()),
        CallView::History => display_timestamp(call.last_call_at.as_deref().or(call.occurred_at.as_deref())),
    }
}

fn recall_cell(call: &Call) -> String {
    ::calls::edit::compose_reminder(call.recall_date.as_deref(), call.recall_slot.as_deref())
}

#[component]
pub fn CallTable(
    view: CallView,
    rows: Signal<Vec<Call>>,
    on_edit: Callback<Call>,
    on_delete: Callback<Call>,
) -> impl IntoView {
    view! {
        <table class="call-table">
            <thead>
                <tr>
                    <th>{context_header(view)}</th>
                    <th>"Contact"</th>
                    <th>"Numéro"</th>
                    <th>"Statut"</th>
                    <th>"Rappel"</th>
                    <th>"Commercial"</th>
                    <th>"Notes"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <Show
                    when=move || !rows.get().is_empty()
                    fallback=|| view! { <tr><td class="call-table__empty" colspan="8">"Aucun appel"</td></tr> }
                >
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|call| {
                                let edit_call = call.clone();
                                let delete_call = call.clone();
                                view! {
                                    <tr class="call-table__row">
                                        <td>{context_cell(view, &call)}</td>
                                        <td>{call.display_name()}</td>
                                        <td>{call.contact_number().to_owned()}</td>
                                        <td><StatusBadge status=call.ui_status() /></td>
                                        <td>{recall_cell(&call)}</td>
                                        <td>{call.user_name.clone().unwrap_or_default()}</td>
                                        <td class="call-table__notes">{call.notes.clone()}</td>
                                        <td class="call-table__actions">
                                            <button class="btn" on:click=move |_| on_edit.run(edit_call.clone())>
                                                "Modifier"
                                            </button>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| on_delete.run(delete_call.clone())
                                            >
                                                "Supprimer"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </Show>
            </tbody>
        </table>
    }
}
