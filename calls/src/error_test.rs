use super::*;

#[test]
fn message_field_wins() {
    let body = r#"{"message":"Numéro déjà utilisé","detail":"ignored"}"#;
    assert_eq!(extract_message(body).as_deref(), Some("Numéro déjà utilisé"));
}

#[test]
fn detail_string_is_used() {
    assert_eq!(extract_message(r#"{"detail":"Not found"}"#).as_deref(), Some("Not found"));
}

#[test]
fn detail_validation_list_uses_first_msg() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"invalid email"},{"msg":"second"}]}"#;
    assert_eq!(extract_message(body).as_deref(), Some("invalid email"));
}

#[test]
fn error_field_is_last_resort() {
    assert_eq!(extract_message(r#"{"error":"forbidden"}"#).as_deref(), Some("forbidden"));
}

#[test]
fn blank_or_non_json_bodies_have_no_message() {
    assert_eq!(extract_message(""), None);
    assert_eq!(extract_message("<html>502</html>"), None);
    assert_eq!(extract_message(r#"{"message":"   "}"#), None);
}

#[test]
fn user_message_prefers_backend_text() {
    let err = ApiError::from_response(409, r#"{"message":"Doublon détecté"}"#);
    assert_eq!(err.user_message(), "Doublon détecté");
}

#[test]
fn user_message_falls_back_to_generic() {
    assert_eq!(ApiError::from_response(500, "").user_message(), GENERIC_ERROR_MESSAGE);
    assert_eq!(ApiError::Network("dns".to_owned()).user_message(), GENERIC_ERROR_MESSAGE);
    assert_eq!(ApiError::Decode("eof".to_owned()).user_message(), GENERIC_ERROR_MESSAGE);
}

#[test]
fn unauthorized_is_detected() {
    assert!(ApiError::from_response(401, "").is_unauthorized());
    assert!(!ApiError::from_response(403, "").is_unauthorized());
}

#[test]
fn display_includes_status() {
    assert_eq!(ApiError::from_response(404, "").to_string(), "request failed with status 404");
}
