use super::*;
use crate::status::UiCallStatus;

#[test]
fn id_paths_are_formatted() {
    assert_eq!(call("c-1"), "/calls/c-1");
    assert_eq!(reminder_done("r-9"), "/reminders/r-9/done");
    assert_eq!(notification_read("n-2"), "/notifications/n-2/read");
    assert_eq!(admin_user_deactivate("u-3"), "/admin/users/u-3/deactivate");
    assert_eq!(admin_user_reset_password("u-3"), "/admin/users/u-3/reset-password");
    assert_eq!(admin_user_stats("u-3"), "/admin/users/u-3/stats");
}

#[test]
fn empty_query_has_no_pairs() {
    assert!(CallQuery::default().to_pairs().is_empty());
}

#[test]
fn query_pairs_follow_stable_order() {
    let query = CallQuery {
        search: Some("dupont".to_owned()),
        statuses: vec![ApiCallStatus::RdvFixe, ApiCallStatus::ARappeler],
        direction: Some(CallDirection::Inbound),
        from: NaiveDate::from_ymd_opt(2024, 1, 2),
        to: NaiveDate::from_ymd_opt(2024, 1, 31),
        page: Some(2),
        page_size: Some(50),
    };
    assert_eq!(
        query.to_pairs(),
        vec![
            ("search", "dupont".to_owned()),
            ("status", "RDV_FIXE,A_RAPPELER".to_owned()),
            ("type", "inbound".to_owned()),
            ("from", "2024-01-02".to_owned()),
            ("to", "2024-01-31".to_owned()),
            ("page", "2".to_owned()),
            ("page_size", "50".to_owned()),
        ]
    );
}

#[test]
fn from_filter_maps_ui_statuses_and_drops_blank_search() {
    let mut filter = CallFilter {
        search: "  ".to_owned(),
        ..CallFilter::default()
    };
    filter.set_status_enabled(UiCallStatus::Callback, true);
    filter.set_status_enabled(UiCallStatus::ToContact, true);

    let query = CallQuery::from_filter(&filter);
    assert_eq!(query.search, None);
    assert_eq!(query.statuses, vec![ApiCallStatus::AContacter, ApiCallStatus::ARappeler]);
}

#[test]
fn each_view_has_its_listing_path() {
    assert_eq!(calls_for_view(CallView::All), "/calls");
    assert_eq!(calls_for_view(CallView::Today), "/calls/today");
    assert_eq!(calls_for_view(CallView::History), "/calls/history");
}
