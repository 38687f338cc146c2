use super::*;

#[test]
fn page_label_reports_position_and_total() {
    let page = CallListPage {
        rows: Vec::new(),
        total: 23,
        page: 2,
        page_count: 3,
    };
    assert_eq!(page_label(&page), "Page 2 / 3 (23 appels)");
}
