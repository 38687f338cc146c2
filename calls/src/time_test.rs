use super::*;

#[test]
fn parses_rfc3339_with_offset() {
    let ts = parse_timestamp("2024-03-01T10:00:00+01:00").unwrap();
    assert_eq!(ts.to_rfc3339(), "2024-03-01T09:00:00+00:00");
}

#[test]
fn parses_naive_space_separated() {
    let ts = parse_timestamp("2024-03-01 10:15:30").unwrap();
    assert_eq!(ts.format("%H:%M:%S").to_string(), "10:15:30");
}

#[test]
fn parses_naive_with_fraction() {
    assert!(parse_timestamp("2024-03-01T10:15:30.123456").is_some());
}

#[test]
fn parses_bare_date_as_midnight() {
    let ts = parse_timestamp("2024-03-01").unwrap();
    assert_eq!(ts.format("%Y-%m-%d %H:%M").to_string(), "2024-03-01 00:00");
}

#[test]
fn rejects_garbage() {
    assert!(parse_timestamp("yesterday").is_none());
    assert!(parse_timestamp("").is_none());
    assert!(parse_timestamp("   ").is_none());
}

#[test]
fn missing_or_bad_dates_are_epoch_zero() {
    assert_eq!(epoch_millis_or_zero(None), 0);
    assert_eq!(epoch_millis_or_zero(Some("n/a")), 0);
    assert!(epoch_millis_or_zero(Some("2024-01-01")) > 0);
}

#[test]
fn parse_date_takes_leading_calendar_date() {
    assert_eq!(
        parse_date("2024-05-06T08:00:00Z"),
        NaiveDate::from_ymd_opt(2024, 5, 6)
    );
    assert_eq!(parse_date("06/05/2024"), None);
}

#[test]
fn display_timestamp_formats_or_echoes() {
    assert_eq!(display_timestamp(Some("2024-05-06T08:30:00Z")), "06/05/2024 08:30");
    assert_eq!(display_timestamp(Some("soon")), "soon");
    assert_eq!(display_timestamp(None), "—");
}
