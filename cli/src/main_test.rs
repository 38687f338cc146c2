use super::*;

// =============================================================
// Value parsers
// =============================================================

#[test]
fn status_accepts_ui_keys_and_backend_codes() {
    assert_eq!(parse_status("callback"), Ok(UiCallStatus::Callback));
    assert_eq!(parse_status("RDV_FIXE"), Ok(UiCallStatus::AppointmentSet));
    assert_eq!(parse_status("pas_de_reponse"), Ok(UiCallStatus::NoAnswer));
}

#[test]
fn unknown_status_is_an_argument_error() {
    assert!(parse_status("maybe").is_err());
}

#[test]
fn day_requires_iso_format() {
    assert_eq!(parse_day("2024-05-01"), Ok(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
    assert!(parse_day("01/05/2024").is_err());
}

// =============================================================
// Argument parsing
// =============================================================

#[test]
fn calls_list_collects_filters() {
    let cli = Cli::try_parse_from([
        "calldesk",
        "--base-url",
        "http://localhost:8000/api",
        "calls",
        "list",
        "--view",
        "today",
        "--status",
        "callback",
        "--status",
        "no-answer",
        "--type",
        "inbound",
        "--from",
        "2024-01-01",
        "--page",
        "2",
    ])
    .unwrap();
    let Command::Calls(CallsCommand::List { view, filter, page }) = cli.command else {
        panic!("expected calls list");
    };
    assert_eq!(view, ViewArg::Today);
    assert_eq!(page, 2);
    let filter = filter.to_filter();
    assert_eq!(filter.statuses.len(), 2);
    assert_eq!(filter.direction, Some(CallDirection::Inbound));
    assert_eq!(filter.date_from, NaiveDate::from_ymd_opt(2024, 1, 1));
}

#[test]
fn global_flags_follow_subcommands() {
    let cli = Cli::try_parse_from(["calldesk", "kpis", "--json", "-v"]).unwrap();
    assert!(cli.json);
    assert!(cli.verbose);
}

// =============================================================
// Call field overrides
// =============================================================

#[test]
fn call_fields_override_only_given_values() {
    let mut edit = CallEdit {
        first_name: "Ada".to_owned(),
        notes: "old".to_owned(),
        ..CallEdit::default()
    };
    let fields = CallFields {
        status: Some(UiCallStatus::Callback),
        reminder: Some("2024-06-03 • 14h".to_owned()),
        ..CallFields::default()
    };
    assert!(!fields.is_empty());
    fields.apply_to(&mut edit);
    assert_eq!(edit.first_name, "Ada");
    assert_eq!(edit.notes, "old");

    let update = edit.to_update();
    assert_eq!(update.recall_date.as_deref(), Some("2024-06-03"));
    assert_eq!(update.recall_slot.as_deref(), Some("14h"));
}

#[test]
fn empty_call_fields_are_detected() {
    assert!(CallFields::default().is_empty());
}
