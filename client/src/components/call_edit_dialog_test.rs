use super::*;

#[test]
fn placeholder_shows_delimiter() {
    assert_eq!(reminder_placeholder(), "AAAA-MM-JJ • créneau");
}

#[test]
fn warns_only_for_recall_status_without_date() {
    let mut edit = CallEdit {
        status: UiCallStatus::Callback,
        ..CallEdit::default()
    };
    assert!(missing_recall_warning(&edit).is_some());

    edit.reminder = "2024-07-01 • 9h".to_owned();
    assert!(missing_recall_warning(&edit).is_none());

    edit.status = UiCallStatus::AppointmentSet;
    edit.reminder.clear();
    assert!(missing_recall_warning(&edit).is_none());
}
