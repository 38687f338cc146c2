use super::*;

// =============================================================
// Mapping
// =============================================================

#[test]
fn ui_to_api_to_ui_is_identity() {
    for status in UiCallStatus::ALL {
        assert_eq!(status.to_api().to_ui(), status);
        assert_eq!(api_to_ui(ui_to_api(status.key())), status.key());
    }
}

#[test]
fn api_to_ui_to_api_is_identity() {
    for status in ApiCallStatus::ALL {
        assert_eq!(status.to_ui().to_api(), status);
        assert_eq!(ui_to_api(api_to_ui(status.code())), status.code());
    }
}

#[test]
fn unknown_values_fall_back_to_to_contact() {
    assert_eq!(api_to_ui("NOT_A_STATUS"), "to-contact");
    assert_eq!(api_to_ui(""), "to-contact");
    assert_eq!(ui_to_api("whatever"), "A_CONTACTER");
    assert_eq!(ui_to_api(""), "A_CONTACTER");
}

#[test]
fn codes_are_case_sensitive() {
    assert_eq!(ApiCallStatus::from_code("rdv_fixe"), ApiCallStatus::AContacter);
    assert_eq!(ApiCallStatus::from_code("RDV_FIXE"), ApiCallStatus::RdvFixe);
}

#[test]
fn specific_pairs_match_vocabulary() {
    assert_eq!(api_to_ui("PAS_DE_REPONSE"), "no-answer");
    assert_eq!(api_to_ui("A_RAPPELER"), "callback");
    assert_eq!(api_to_ui("RDV_REPORTE"), "appointment-rescheduled");
    assert_eq!(ui_to_api("already-client"), "DEJA_CLIENT");
    assert_eq!(ui_to_api("send-email"), "ENVOYER_MAIL");
}

// =============================================================
// Recall subset
// =============================================================

#[test]
fn recall_subset_is_no_answer_and_callback() {
    let requiring = UiCallStatus::ALL
        .into_iter()
        .filter(|s| s.requires_recall())
        .collect::<Vec<_>>();
    assert_eq!(requiring, vec![UiCallStatus::NoAnswer, UiCallStatus::Callback]);
}

#[test]
fn only_to_contact_is_neutral() {
    assert!(UiCallStatus::ToContact.is_neutral());
    assert_eq!(UiCallStatus::ALL.iter().filter(|s| s.is_neutral()).count(), 1);
}

// =============================================================
// Serde
// =============================================================

#[test]
fn api_status_serializes_as_code() {
    assert_eq!(serde_json::to_string(&ApiCallStatus::RdvFixe).unwrap(), "\"RDV_FIXE\"");
}

#[test]
fn api_status_deserializes_unknown_as_default() {
    let status: ApiCallStatus = serde_json::from_str("\"LEGACY\"").unwrap();
    assert_eq!(status, ApiCallStatus::AContacter);
}

#[test]
fn ui_status_round_trips_through_json() {
    let json = serde_json::to_string(&UiCallStatus::WrongNumber).unwrap();
    assert_eq!(json, "\"wrong-number\"");
    let back: UiCallStatus = serde_json::from_str(&json).unwrap();
    assert_eq!(back, UiCallStatus::WrongNumber);
}

#[test]
fn badge_class_uses_key() {
    assert_eq!(UiCallStatus::Callback.badge_class(), "status-badge status-badge--callback");
}
