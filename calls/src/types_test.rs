use super::*;

// =============================================================
// Helpers
// =============================================================

fn call_json() -> serde_json::Value {
    serde_json::json!({
        "id": "c-1",
        "user_id": "u-1",
        "direction": "inbound",
        "caller_number": "06 12 34 56 78",
        "callee_number": "01 00 00 00 00",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "status": "A_RAPPELER",
        "wave": 3,
        "recall_date": "2024-06-01",
        "recall_slot": "10h-12h",
        "notes": "prefers mornings",
        "occurred_at": "2024-05-30T09:00:00Z"
    })
}

// =============================================================
// Call
// =============================================================

#[test]
fn call_deserializes_full_payload() {
    let call: Call = serde_json::from_value(call_json()).unwrap();
    assert_eq!(call.direction, CallDirection::Inbound);
    assert_eq!(call.status, ApiCallStatus::ARappeler);
    assert_eq!(call.ui_status(), UiCallStatus::Callback);
    assert_eq!(call.wave, Some(3));
    assert_eq!(call.recall_slot.as_deref(), Some("10h-12h"));
    assert!(call.created_at.is_none());
}

#[test]
fn call_deserializes_minimal_payload_with_defaults() {
    let call: Call = serde_json::from_value(serde_json::json!({ "id": "c-2", "user_id": "u-1" })).unwrap();
    assert_eq!(call.status, ApiCallStatus::AContacter);
    assert_eq!(call.direction, CallDirection::Outbound);
    assert!(call.wave.is_none());
    assert!(call.notes.is_empty());
}

#[test]
fn call_with_unknown_status_is_to_contact() {
    let mut json = call_json();
    json["status"] = serde_json::json!("ARCHIVED");
    let call: Call = serde_json::from_value(json).unwrap();
    assert_eq!(call.ui_status(), UiCallStatus::ToContact);
}

#[test]
fn display_name_is_last_then_first() {
    let call: Call = serde_json::from_value(call_json()).unwrap();
    assert_eq!(call.display_name(), "Lovelace Ada");
}

#[test]
fn display_name_falls_back_to_number() {
    let call = Call {
        callee_number: "0102".to_owned(),
        ..Call::default()
    };
    assert_eq!(call.display_name(), "0102");
}

#[test]
fn contact_number_depends_on_direction() {
    let mut call: Call = serde_json::from_value(call_json()).unwrap();
    assert_eq!(call.contact_number(), "06 12 34 56 78");
    call.direction = CallDirection::Outbound;
    assert_eq!(call.contact_number(), "01 00 00 00 00");
}

#[test]
fn direction_from_key_treats_other_values_as_all() {
    assert_eq!(CallDirection::from_key("inbound"), Some(CallDirection::Inbound));
    assert_eq!(CallDirection::from_key(" outbound "), Some(CallDirection::Outbound));
    assert_eq!(CallDirection::from_key("all"), None);
}

// =============================================================
// Notification / Reminder / User
// =============================================================

#[test]
fn notification_kind_uses_type_field() {
    let n: Notification = serde_json::from_value(serde_json::json!({
        "id": "n-1",
        "type": "call-missed",
        "read": false,
        "title": "Missed"
    }))
    .unwrap();
    assert_eq!(n.kind, NotificationKind::CallMissed);
    assert!(!n.read);
}

#[test]
fn reminder_status_is_lowercase() {
    let r: Reminder = serde_json::from_value(serde_json::json!({
        "id": "r-1",
        "call_id": "c-1",
        "due_at": "2024-06-01T10:00:00Z",
        "status": "canceled"
    }))
    .unwrap();
    assert_eq!(r.status, ReminderStatus::Canceled);
}

#[test]
fn user_defaults_to_active_regular() {
    let u: User = serde_json::from_value(serde_json::json!({ "id": "u-1", "email": "a@b.c" })).unwrap();
    assert!(u.active);
    assert_eq!(u.role, Role::Regular);
    assert!(!u.is_admin());
    assert_eq!(u.full_name(), "a@b.c");
}

#[test]
fn kpis_tolerate_missing_fields() {
    let k: Kpis = serde_json::from_value(serde_json::json!({ "total_calls": 12 })).unwrap();
    assert_eq!(k.total_calls, 12);
    assert_eq!(k.calls_today, 0);
}

#[test]
fn page_defaults_to_first_page() {
    let page: Page<Call> = serde_json::from_value(serde_json::json!({ "items": [] })).unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.total, 0);
}

#[test]
fn list_body_accepts_bare_arrays_and_envelopes() {
    let bare: ListBody<Reminder> = serde_json::from_value(serde_json::json!([
        { "id": "r-1", "call_id": "c-1", "due_at": "2024-06-01T10:00:00Z" }
    ]))
    .unwrap();
    let page = bare.into_page();
    assert_eq!(page.total, 1);
    assert_eq!(page.page, 1);

    let paged: ListBody<Reminder> = serde_json::from_value(serde_json::json!({
        "items": [], "total": 40, "page": 3, "page_size": 20
    }))
    .unwrap();
    let page = paged.into_page();
    assert_eq!((page.total, page.page, page.page_size), (40, 3, 20));
}
