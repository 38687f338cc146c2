use super::*;

#[test]
fn credentials_trim_email_but_not_password() {
    let creds = credentials("  agent@calldesk.test ", " secret ").unwrap();
    assert_eq!(creds.email, "agent@calldesk.test");
    assert_eq!(creds.password, " secret ");
}

#[test]
fn blank_fields_are_rejected() {
    assert!(credentials("", "x").is_err());
    assert!(credentials("a@b.c", "").is_err());
}

#[test]
fn email_without_at_is_rejected() {
    assert_eq!(credentials("agent", "x"), Err("Adresse email invalide."));
}
