use super::*;
use crate::status::ApiCallStatus;

fn user(id: &str, first: &str, last: &str, role: Role, active: bool) -> User {
    User {
        id: id.to_owned(),
        email: format!("{id}@calldesk.test"),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        role,
        active,
        ..User::default()
    }
}

fn call_with(status: ApiCallStatus) -> Call {
    Call {
        status,
        ..Call::default()
    }
}

// =============================================================
// Users
// =============================================================

#[test]
fn visible_users_hides_inactive_and_sorts_by_name() {
    let users = vec![
        user("z", "Zed", "Martin", Role::Regular, true),
        user("a", "Ann", "Martin", Role::Admin, true),
        user("gone", "Old", "Abel", Role::Regular, false),
        user("d", "Dan", "Durand", Role::Regular, true),
    ];
    let rows = visible_users(&users, &UserFilter::default());
    let ids = rows.iter().map(|u| u.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["d", "a", "z"]);
}

#[test]
fn user_filter_matches_role_and_email() {
    let admin = user("boss", "Big", "Boss", Role::Admin, true);
    let agent = user("agent", "Sam", "Seller", Role::Regular, true);

    let admins = UserFilter {
        role: Some(Role::Admin),
        ..UserFilter::default()
    };
    assert!(admins.allows(&admin));
    assert!(!admins.allows(&agent));

    let by_email = UserFilter {
        search: "AGENT@".to_owned(),
        ..UserFilter::default()
    };
    assert!(by_email.allows(&agent));
    assert!(!by_email.allows(&admin));
}

#[test]
fn include_inactive_shows_deactivated_users() {
    let filter = UserFilter {
        include_inactive: true,
        ..UserFilter::default()
    };
    assert!(filter.allows(&user("x", "X", "Y", Role::Regular, false)));
}

#[test]
fn user_patch_skips_absent_fields() {
    let patch = UserPatch {
        active: Some(false),
        ..UserPatch::default()
    };
    assert!(!patch.is_empty());
    assert_eq!(serde_json::to_value(&patch).unwrap(), serde_json::json!({ "active": false }));
    assert!(UserPatch::default().is_empty());
}

#[test]
fn new_user_serializes_role_lowercase() {
    let body = NewUser {
        email: "n@x.y".to_owned(),
        role: Role::Admin,
        password: "secret".to_owned(),
        ..NewUser::default()
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["role"], "admin");
    assert!(json.get("phone").is_none());
}

// =============================================================
// Breakdown
// =============================================================

#[test]
fn breakdown_counts_every_status() {
    let calls = vec![
        call_with(ApiCallStatus::RdvFixe),
        call_with(ApiCallStatus::RdvFixe),
        call_with(ApiCallStatus::AContacter),
    ];
    let breakdown = status_breakdown(&calls);
    assert_eq!(breakdown.len(), UiCallStatus::ALL.len());
    assert_eq!(breakdown[0], (UiCallStatus::ToContact, 1));
    assert_eq!(breakdown[3], (UiCallStatus::AppointmentSet, 2));
    assert_eq!(breakdown.iter().map(|(_, n)| n).sum::<usize>(), 3);
}

#[test]
fn appointment_rate_ignores_neutral_calls() {
    let calls = vec![
        call_with(ApiCallStatus::AContacter),
        call_with(ApiCallStatus::RdvFixe),
        call_with(ApiCallStatus::RdvReporte),
        call_with(ApiCallStatus::PasInteresse),
        call_with(ApiCallStatus::FauxNumero),
    ];
    assert!((appointment_rate(&calls) - 0.5).abs() < f64::EPSILON);
    assert_eq!(appointment_rate(&[]), 0.0);
    assert_eq!(format_rate(0.5), "50.0 %");
}
