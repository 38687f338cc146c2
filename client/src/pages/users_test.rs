use super::*;

fn new_user() -> NewUser {
    NewUser {
        email: "agent@calldesk.test".to_owned(),
        first_name: "Claire".to_owned(),
        last_name: "Martin".to_owned(),
        password: "motdepasse".to_owned(),
        ..NewUser::default()
    }
}

// =============================================================
// Creation form
// =============================================================

#[test]
fn complete_form_is_valid() {
    assert_eq!(validate_new_user(&new_user()), Ok(()));
}

#[test]
fn short_password_is_rejected() {
    let user = NewUser {
        password: "court".to_owned(),
        ..new_user()
    };
    assert!(validate_new_user(&user).is_err());
}

#[test]
fn missing_names_are_rejected() {
    let user = NewUser {
        last_name: " ".to_owned(),
        ..new_user()
    };
    assert_eq!(validate_new_user(&user), Err("Nom et prénom requis."));
}

// =============================================================
// Roles and stats
// =============================================================

#[test]
fn role_select_values() {
    assert_eq!(role_from_select("admin"), Some(Role::Admin));
    assert_eq!(role_from_select(""), None);
    assert_eq!(other_role(Role::Regular), Role::Admin);
}

#[test]
fn stats_rows_merge_unknown_codes_into_to_contact() {
    let mut stats = UserStats::default();
    stats.by_status.insert("A_CONTACTER".to_owned(), 2);
    stats.by_status.insert("LEGACY_CODE".to_owned(), 1);
    stats.by_status.insert("RDV_FIXE".to_owned(), 4);
    assert_eq!(stats_rows(&stats), vec![("À contacter", 3), ("RDV fixé", 4)]);
}
