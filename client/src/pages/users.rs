//! User management page (administrators only).
//!
//! Lists agents with a search/role toolbar, creates accounts, switches roles,
//! deactivates accounts, resets passwords, and shows per-user statistics.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use ::calls::UiCallStatus;
use ::calls::admin::{NewUser, UserPatch};
use ::calls::status::api_to_ui;
use ::calls::types::{Role, UserStats};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::admin::AdminState;
use crate::state::auth::AuthState;
use crate::state::toasts::ToastState;
use crate::util::auth::install_admin_guard;
use crate::util::feedback::{report_failure, toast_success};

const MIN_PASSWORD_LEN: usize = 8;

/// Check a creation form before sending it.
fn validate_new_user(user: &NewUser) -> Result<(), &'static str> {
    if user.email.trim().is_empty() || !user.email.contains('@') {
        return Err("Adresse email invalide.");
    }
    if user.first_name.trim().is_empty() || user.last_name.trim().is_empty() {
        return Err("Nom et prénom requis.");
    }
    if user.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Le mot de passe doit contenir au moins 8 caractères.");
    }
    Ok(())
}

/// Per-status counts labelled in the UI vocabulary, in enumeration order.
fn stats_rows(stats: &UserStats) -> Vec<(&'static str, u64)> {
    let mut rows = UiCallStatus::ALL.map(|s| (s, 0_u64));
    for (code, count) in &stats.by_status {
        let status = UiCallStatus::from_key(api_to_ui(code));
        if let Some(row) = rows.iter_mut().find(|(s, _)| *s == status) {
            row.1 += count;
        }
    }
    rows.into_iter()
        .filter(|(_, n)| *n > 0)
        .map(|(s, n)| (s.label(), n))
        .collect()
}

fn role_from_select(value: &str) -> Option<Role> {
    match value {
        "admin" => Some(Role::Admin),
        "regular" => Some(Role::Regular),
        _ => None,
    }
}

fn other_role(role: Role) -> Role {
    match role {
        Role::Admin => Role::Regular,
        Role::Regular => Role::Admin,
    }
}

fn load(admin: RwSignal<AdminState>, auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>) {
    admin.update(|s| s.loading = true);
    leptos::task::spawn_local(async move {
        match crate::net::api::list_users().await {
            Ok(users) => admin.update(|s| s.users = users),
            Err(e) => report_failure(auth, toasts, &e),
        }
        match crate::net::api::fetch_kpis().await {
            Ok(kpis) => admin.update(|s| s.kpis = Some(kpis)),
            Err(e) => report_failure(auth, toasts, &e),
        }
        admin.update(|s| s.loading = false);
    });
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let admin = expect_context::<RwSignal<AdminState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_admin_guard(auth, use_navigate());

    let is_admin = Memo::new(move |_| auth.with(AuthState::is_admin));
    Effect::new(move || {
        if is_admin.get() {
            load(admin, auth, toasts);
        }
    });

    let show_create = RwSignal::new(false);

    let on_toggle_role = Callback::new(move |(id, role): (String, Role)| {
        let patch = UserPatch {
            role: Some(other_role(role)),
            ..UserPatch::default()
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::update_user(&id, &patch).await {
                Ok(user) => {
                    admin.update(|s| s.upsert_user(user));
                    toast_success(toasts, "Rôle mis à jour");
                }
                Err(e) => report_failure(auth, toasts, &e),
            }
        });
    });

    let on_deactivate = Callback::new(move |id: String| {
        leptos::task::spawn_local(async move {
            match crate::net::api::deactivate_user(&id).await {
                Ok(()) => {
                    admin.update(|s| s.mark_inactive(&id));
                    toast_success(toasts, "Compte désactivé");
                }
                Err(e) => report_failure(auth, toasts, &e),
            }
        });
    });

    let on_reset = Callback::new(move |id: String| {
        leptos::task::spawn_local(async move {
            match crate::net::api::reset_user_password(&id).await {
                Ok(reset) => {
                    admin.update(|s| s.revealed_password = reset.temporary_password.clone());
                    toast_success(toasts, "Mot de passe réinitialisé");
                }
                Err(e) => report_failure(auth, toasts, &e),
            }
        });
    });

    let on_stats = Callback::new(move |id: String| {
        admin.update(|s| s.select(Some(id.clone())));
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_user_stats(&id).await {
                Ok(stats) => admin.update(|s| {
                    if s.selected.as_deref() == Some(id.as_str()) {
                        s.stats = Some(stats);
                    }
                }),
                Err(e) => report_failure(auth, toasts, &e),
            }
        });
    });

    view! {
        <div class="users-page">
            <header class="users-page__header">
                <h1>"Utilisateurs"</h1>
                <input
                    class="users-page__search"
                    type="search"
                    placeholder="Nom ou email"
                    prop:value=move || admin.get().filter.search
                    on:input=move |ev| admin.update(|s| s.filter.search = event_target_value(&ev))
                />
                <select
                    class="users-page__role"
                    on:change=move |ev| admin.update(|s| s.filter.role = role_from_select(&event_target_value(&ev)))
                >
                    <option value="">"Tous les rôles"</option>
                    <option value="admin">{Role::Admin.label()}</option>
                    <option value="regular">{Role::Regular.label()}</option>
                </select>
                <label class="users-page__inactive">
                    <input
                        type="checkbox"
                        prop:checked=move || admin.get().filter.include_inactive
                        on:change=move |ev| admin.update(|s| s.filter.include_inactive = event_target_checked(&ev))
                    />
                    "Inclure les comptes désactivés"
                </label>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ Nouvel utilisateur"
                </button>
            </header>
            <Show when=move || admin.get().revealed_password.is_some()>
                <p class="users-page__password">
                    "Mot de passe temporaire : "
                    <code>{move || admin.get().revealed_password.unwrap_or_default()}</code>
                    <button class="btn" on:click=move |_| admin.update(|s| s.revealed_password = None)>
                        "Masquer"
                    </button>
                </p>
            </Show>
            <Show when=move || !admin.get().loading fallback=|| view! { <p>"Chargement..."</p> }>
                <table class="users-table">
                    <thead>
                        <tr>
                            <th>"Nom"</th>
                            <th>"Email"</th>
                            <th>"Téléphone"</th>
                            <th>"Rôle"</th>
                            <th>"Statut"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            admin
                                .get()
                                .visible()
                                .into_iter()
                                .map(|user| {
                                    let role_id = user.id.clone();
                                    let deactivate_id = user.id.clone();
                                    let reset_id = user.id.clone();
                                    let stats_id = user.id.clone();
                                    let role = user.role;
                                    let active = user.active;
                                    view! {
                                        <tr class={
                                            if active { "users-table__row" } else { "users-table__row users-table__row--inactive" }
                                        }>
                                            <td>{user.full_name()}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>{user.phone.clone().unwrap_or_default()}</td>
                                            <td>{role.label()}</td>
                                            <td>{if active { "Actif" } else { "Désactivé" }}</td>
                                            <td class="users-table__actions">
                                                <button class="btn" on:click=move |_| on_stats.run(stats_id.clone())>
                                                    "Statistiques"
                                                </button>
                                                <button class="btn" on:click=move |_| on_toggle_role.run((role_id.clone(), role))>
                                                    "Changer de rôle"
                                                </button>
                                                <button class="btn" on:click=move |_| on_reset.run(reset_id.clone())>
                                                    "Réinitialiser le mot de passe"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    disabled={!active}
                                                    on:click=move |_| on_deactivate.run(deactivate_id.clone())
                                                >
                                                    "Désactiver"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
            <Show when=move || admin.get().stats.is_some()>
                <section class="users-page__stats">
                    <h2>"Statistiques"</h2>
                    {move || {
                        admin
                            .get()
                            .stats
                            .map(|stats| {
                                let rows = stats_rows(&stats)
                                    .into_iter()
                                    .map(|(label, n)| view! { <li>{label}": "{n}</li> })
                                    .collect::<Vec<_>>();
                                view! {
                                    <dl>
                                        <dt>"Appels"</dt>
                                        <dd>{stats.total_calls}</dd>
                                        <dt>"Aujourd'hui"</dt>
                                        <dd>{stats.calls_today}</dd>
                                        <dt>"RDV fixés"</dt>
                                        <dd>{stats.appointments_set}</dd>
                                        <dt>"Rappels en attente"</dt>
                                        <dd>{stats.reminders_pending}</dd>
                                    </dl>
                                    <ul>{rows}</ul>
                                }
                            })
                    }}
                    <button class="btn" on:click=move |_| admin.update(|s| s.select(None))>
                        "Fermer"
                    </button>
                </section>
            </Show>
            <Show when=move || show_create.get()>
                <CreateUserDialog on_cancel=Callback::new(move |()| show_create.set(false)) />
            </Show>
        </div>
    }
}

/// Modal dialog for creating an account.
#[component]
fn CreateUserDialog(on_cancel: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let admin = expect_context::<RwSignal<AdminState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(NewUser::default());
    let error = RwSignal::new(None::<&'static str>);

    let submit = Callback::new(move |()| {
        let mut user = form.get_untracked();
        user.email = user.email.trim().to_owned();
        user.phone = user.phone.filter(|p| !p.trim().is_empty());
        if let Err(message) = validate_new_user(&user) {
            error.set(Some(message));
            return;
        }
        error.set(None);
        leptos::task::spawn_local(async move {
            match crate::net::api::create_user(&user).await {
                Ok(created) => {
                    admin.update(|s| s.upsert_user(created));
                    toast_success(toasts, "Utilisateur créé");
                    on_cancel.run(());
                }
                Err(e) => report_failure(auth, toasts, &e),
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Nouvel utilisateur"</h2>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Prénom"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().first_name
                        on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Nom"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().last_name
                        on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Téléphone"
                    <input
                        class="dialog__input"
                        type="tel"
                        prop:value=move || form.get().phone.unwrap_or_default()
                        on:input=move |ev| form.update(|f| f.phone = Some(event_target_value(&ev)))
                    />
                </label>
                <label class="dialog__label">
                    "Rôle"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            let role = role_from_select(&event_target_value(&ev)).unwrap_or_default();
                            form.update(|f| f.role = role);
                        }
                    >
                        <option value="regular">{Role::Regular.label()}</option>
                        <option value="admin">{Role::Admin.label()}</option>
                    </select>
                </label>
                <label class="dialog__label">
                    "Mot de passe"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__danger">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Annuler"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Créer"
                    </button>
                </div>
            </div>
        </div>
    }
}
