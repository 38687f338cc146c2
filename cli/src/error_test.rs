use super::*;

#[test]
fn server_error_uses_backend_message() {
    let err = CliError::from_response(409, r#"{"message":"Doublon détecté"}"#);
    assert_eq!(err.to_string(), "server returned 409: Doublon détecté");
}

#[test]
fn server_error_falls_back_to_raw_body() {
    assert_eq!(
        CliError::from_response(502, "Bad Gateway").to_string(),
        "server returned 502: Bad Gateway"
    );
    assert_eq!(
        CliError::from_response(500, "  ").to_string(),
        "server returned 500: (empty body)"
    );
}

#[test]
fn unauthorized_is_detected() {
    assert!(CliError::from_response(401, "").is_unauthorized());
    assert!(!CliError::MissingToken.is_unauthorized());
}
