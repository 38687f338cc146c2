use super::*;

#[test]
fn date_input_round_trips_through_filter_bound() {
    let date = parse_date_input("2024-02-29");
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29));
    assert_eq!(date_input_value(date), "2024-02-29");
}

#[test]
fn blank_or_invalid_date_input_clears_bound() {
    assert_eq!(parse_date_input(""), None);
    assert_eq!(parse_date_input("2024-02-30"), None);
    assert_eq!(date_input_value(None), "");
}

#[test]
fn direction_select_values_match_wire_keys() {
    assert_eq!(direction_value(None), "");
    assert_eq!(direction_value(Some(CallDirection::Inbound)), "inbound");
    assert_eq!(CallDirection::from_key(direction_value(Some(CallDirection::Outbound))), Some(CallDirection::Outbound));
}
