//! Toolbar for filtering a call list: search, statuses, date range, direction.
//!
//! Every change replaces `CallsState::filter` and resets to the first page.

#[cfg(test)]
#[path = "call_filters_test.rs"]
mod call_filters_test;

use ::calls::{CallDirection, CallFilter, UiCallStatus};
use chrono::NaiveDate;
use leptos::prelude::*;

use crate::state::calls::CallsState;

/// `<input type="date">` value to a date; blank or malformed clears the bound.
fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

fn direction_value(direction: Option<CallDirection>) -> &'static str {
    direction.map_or("", CallDirection::key)
}

fn edit_filter(calls: RwSignal<CallsState>, edit: impl FnOnce(&mut CallFilter)) {
    let mut filter = calls.get_untracked().filter;
    edit(&mut filter);
    calls.update(|s| s.set_filter(filter));
}

#[component]
pub fn CallFilters() -> impl IntoView {
    let calls = expect_context::<RwSignal<CallsState>>();

    let status_toggles = UiCallStatus::ALL
        .into_iter()
        .map(|status| {
            view! {
                <label class="call-filters__status">
                    <input
                        type="checkbox"
                        prop:checked=move || calls.get().filter.statuses.contains(&status)
                        on:change=move |ev| {
                            let enabled = event_target_checked(&ev);
                            edit_filter(calls, |f| f.set_status_enabled(status, enabled));
                        }
                    />
                    {status.label()}
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="call-filters">
            <input
                class="call-filters__search"
                type="search"
                placeholder="Rechercher un nom, un numéro, une note..."
                prop:value=move || calls.get().filter.search
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    edit_filter(calls, |f| f.search = value);
                }
            />
            <label class="call-filters__date">
                "Du"
                <input
                    type="date"
                    prop:value=move || date_input_value(calls.get().filter.date_from)
                    on:change=move |ev| {
                        let value = parse_date_input(&event_target_value(&ev));
                        edit_filter(calls, |f| f.date_from = value);
                    }
                />
            </label>
            <label class="call-filters__date">
                "Au"
                <input
                    type="date"
                    prop:value=move || date_input_value(calls.get().filter.date_to)
                    on:change=move |ev| {
                        let value = parse_date_input(&event_target_value(&ev));
                        edit_filter(calls, |f| f.date_to = value);
                    }
                />
            </label>
            <select
                class="call-filters__direction"
                prop:value=move || direction_value(calls.get().filter.direction)
                on:change=move |ev| {
                    let value = CallDirection::from_key(&event_target_value(&ev));
                    edit_filter(calls, |f| f.direction = value);
                }
            >
                <option value="">"Tous les sens"</option>
                <option value="inbound">{CallDirection::Inbound.label()}</option>
                <option value="outbound">{CallDirection::Outbound.label()}</option>
            </select>
            <button
                class="btn call-filters__reset"
                disabled=move || calls.get().filter.is_empty()
                on:click=move |_| calls.update(|s| s.set_filter(CallFilter::default()))
            >
                "Réinitialiser"
            </button>
            <div class="call-filters__statuses">{status_toggles}</div>
        </div>
    }
}
