use super::*;

fn call() -> Call {
    Call {
        wave: Some(3),
        occurred_at: Some("2024-05-02T09:15:00Z".to_owned()),
        recall_date: Some("2024-05-06".to_owned()),
        recall_slot: Some("matin".to_owned()),
        ..Call::default()
    }
}

#[test]
fn all_view_shows_wave() {
    assert_eq!(context_header(CallView::All), "Vague");
    assert_eq!(context_cell(CallView::All, &call()), "3");
    assert_eq!(context_cell(CallView::All, &Call::default()), "—");
}

#[test]
fn history_falls_back_to_occurrence_time() {
    assert_eq!(context_cell(CallView::History, &call()), "02/05/2024 09:15");
}

#[test]
fn recall_cell_joins_date_and_slot() {
    assert_eq!(recall_cell(&call()), "2024-05-06 • matin");
    assert_eq!(recall_cell(&Call::default()), "");
}
