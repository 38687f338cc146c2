use super::*;
use calls::types::Role;

fn tokens(access: &str, refresh: Option<&str>) -> AuthTokens {
    AuthTokens {
        access_token: access.to_owned(),
        refresh_token: refresh.map(str::to_owned),
        expires_in: None,
    }
}

#[test]
fn restore_without_stored_tokens_is_signed_out() {
    let state = AuthState::restore();
    assert!(state.tokens.is_none());
    assert!(!state.loading);
}

#[test]
fn refresh_without_refresh_token_keeps_previous_one() {
    let mut state = AuthState::default();
    state.set_tokens(tokens("a1", Some("r1")));
    state.set_tokens(tokens("a2", None));
    assert_eq!(state.access_token(), Some("a2"));
    assert_eq!(state.tokens.unwrap().refresh_token.as_deref(), Some("r1"));
}

#[test]
fn sign_in_and_sign_out() {
    let mut state = AuthState {
        loading: true,
        ..AuthState::default()
    };
    state.set_tokens(tokens("a1", None));
    state.sign_in(User {
        id: "u1".to_owned(),
        role: Role::Admin,
        ..User::default()
    });
    assert!(!state.loading);
    assert!(state.is_admin());

    state.sign_out();
    assert!(state.user.is_none());
    assert!(state.access_token().is_none());
    assert!(!state.is_admin());
}
