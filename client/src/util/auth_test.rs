use super::*;
use calls::types::{Role, User};

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        email: "alice@calldesk.test".to_owned(),
        first_name: "Alice".to_owned(),
        role,
        ..User::default()
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState::default();
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState {
        loading: true,
        ..AuthState::default()
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(user(Role::Regular)),
        ..AuthState::default()
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn agents_are_kept_out_of_admin_routes() {
    let agent = AuthState {
        user: Some(user(Role::Regular)),
        ..AuthState::default()
    };
    let admin = AuthState {
        user: Some(user(Role::Admin)),
        ..AuthState::default()
    };
    assert!(should_redirect_non_admin(&agent));
    assert!(!should_redirect_non_admin(&admin));
    assert!(!should_redirect_non_admin(&AuthState::default()));
}

#[test]
fn signed_in_id_ignores_token_refresh_and_loading() {
    let mut state = AuthState {
        user: Some(user(Role::Regular)),
        ..AuthState::default()
    };
    let before = signed_in_id(&state);
    assert_eq!(before.as_deref(), Some("u1"));

    state.set_tokens(calls::types::AuthTokens {
        access_token: "fresh".to_owned(),
        refresh_token: None,
        expires_in: Some(900),
    });
    state.loading = true;
    assert_eq!(signed_in_id(&state), before);

    state.sign_out();
    assert_eq!(signed_in_id(&state), None);
}
