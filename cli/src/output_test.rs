use super::*;
use calls::ApiCallStatus;

// =============================================================
// Table layout
// =============================================================

#[test]
fn columns_are_padded_to_widest_cell() {
    let table = render_table(
        &["ID", "NOM"],
        &[vec!["1".to_owned(), "Martin".to_owned()], vec!["10".to_owned(), "Lee".to_owned()]],
    );
    assert_eq!(table, "ID  NOM\n1   Martin\n10  Lee");
}

#[test]
fn width_counts_characters_not_bytes() {
    let table = render_table(&["A", "B"], &[vec!["é".to_owned(), "x".to_owned()]]);
    assert_eq!(table, "A  B\né  x");
}

#[test]
fn empty_table_is_header_only() {
    assert_eq!(render_table(&["ID", "NOM"], &[]), "ID  NOM");
}

// =============================================================
// Domain tables
// =============================================================

#[test]
fn calls_table_shows_french_status_and_reminder() {
    let call = Call {
        id: "c1".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        status: ApiCallStatus::ARappeler,
        recall_date: Some("2024-04-02".to_owned()),
        recall_slot: Some("10h".to_owned()),
        ..Call::default()
    };
    let table = calls_table(&[call]);
    assert!(table.contains("À rappeler"));
    assert!(table.contains("2024-04-02 • 10h"));
    assert!(table.contains("Lovelace Ada"));
}

#[test]
fn stats_table_folds_unknown_codes_into_to_contact() {
    let mut stats = UserStats::default();
    stats.by_status.insert("A_CONTACTER".to_owned(), 1);
    stats.by_status.insert("MYSTERY".to_owned(), 2);
    let table = stats_table(&stats);
    assert!(table.lines().any(|l| l.starts_with("À contacter") && l.ends_with('3')));
}

#[test]
fn footer_reports_page_and_total() {
    let page = CallListPage {
        rows: Vec::new(),
        total: 21,
        page: 3,
        page_count: 3,
    };
    assert_eq!(page_footer(&page), "page 3/3 · 21 appel(s)");
}
