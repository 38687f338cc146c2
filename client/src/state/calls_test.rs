use super::*;
use calls::{ApiCallStatus, UiCallStatus};

fn call(id: &str, last: &str, wave: Option<u32>, status: ApiCallStatus) -> Call {
    Call {
        id: id.to_owned(),
        last_name: last.to_owned(),
        wave,
        status,
        ..Call::default()
    }
}

// =============================================================
// Loading
// =============================================================

#[test]
fn switching_view_clears_items_and_page() {
    let mut state = CallsState {
        items: vec![call("c1", "Smith", None, ApiCallStatus::AContacter)],
        page: 3,
        ..CallsState::default()
    };
    state.begin_load(CallView::Today);
    assert!(state.items.is_empty());
    assert_eq!(state.page, 1);
    assert!(state.loading);
}

#[test]
fn stale_results_are_ignored() {
    let mut state = CallsState::default();
    state.begin_load(CallView::History);
    state.finish_load(CallView::All, Ok(vec![call("c1", "Smith", None, ApiCallStatus::AContacter)]));
    assert!(state.items.is_empty());
    assert!(state.loading);
}

#[test]
fn errors_are_kept_for_display() {
    let mut state = CallsState::default();
    state.begin_load(CallView::All);
    state.finish_load(CallView::All, Err("boom".to_owned()));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("boom"));
}

// =============================================================
// Derivation
// =============================================================

#[test]
fn current_page_orders_all_view_by_wave() {
    let mut state = CallsState::default();
    state.begin_load(CallView::All);
    state.finish_load(
        CallView::All,
        Ok(vec![
            call("a", "Smith", Some(2), ApiCallStatus::AContacter),
            call("b", "Jones", Some(1), ApiCallStatus::AContacter),
            call("c", "Lee", None, ApiCallStatus::AContacter),
            call("d", "Adams", Some(1), ApiCallStatus::RdvFixe),
        ]),
    );
    let ids = state.current_page().rows.into_iter().map(|c| c.id).collect::<Vec<_>>();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn set_filter_resets_page() {
    let mut state = CallsState {
        page: 4,
        ..CallsState::default()
    };
    let mut filter = CallFilter::default();
    filter.set_status_enabled(UiCallStatus::Callback, true);
    state.set_filter(filter);
    assert_eq!(state.page, 1);
    assert_eq!(state.filter.statuses.len(), 1);
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn replace_call_updates_in_place() {
    let mut state = CallsState {
        items: vec![call("c1", "Smith", None, ApiCallStatus::AContacter)],
        ..CallsState::default()
    };
    state.replace_call(call("c1", "Smith", None, ApiCallStatus::ARappeler));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].status, ApiCallStatus::ARappeler);
}

#[test]
fn editor_prefills_from_call() {
    let mut state = CallsState::default();
    let mut c = call("c1", "Smith", None, ApiCallStatus::PasDeReponse);
    c.recall_date = Some("2024-03-04".to_owned());
    c.recall_slot = Some("14h".to_owned());
    state.open_editor(&c);
    let (id, edit) = state.editing.clone().unwrap();
    assert_eq!(id, "c1");
    assert_eq!(edit.reminder, "2024-03-04 • 14h");
    state.close_editor();
    assert!(state.editing.is_none());
}

#[test]
fn remove_call_drops_row() {
    let mut state = CallsState {
        items: vec![
            call("c1", "Smith", None, ApiCallStatus::AContacter),
            call("c2", "Lee", None, ApiCallStatus::AContacter),
        ],
        ..CallsState::default()
    };
    state.remove_call("c1");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "c2");
}

#[test]
fn open_new_starts_blank_creation_form() {
    let mut state = CallsState::default();
    assert!(!state.is_creating());
    state.open_new();
    assert!(state.is_creating());
    assert_eq!(state.editing.as_ref().map(|(_, e)| e.status), Some(UiCallStatus::ToContact));
}
