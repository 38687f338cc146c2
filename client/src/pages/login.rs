//! Login page: email + password exchanged for a token pair.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use ::calls::types::Credentials;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Trim the email and reject blank fields before hitting the backend.
fn credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Renseignez l'email et le mot de passe.");
    }
    if !email.contains('@') {
        return Err("Adresse email invalide.");
    }
    Ok(Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if auth.get().user.is_some() {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let creds = match credentials(&email.get(), &password.get()) {
            Ok(creds) => creds,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Connexion...".to_owned());

        leptos::task::spawn_local(async move {
            let signed_in = async {
                let tokens = crate::net::api::login(&creds).await?;
                auth.update(|a| a.set_tokens(tokens));
                crate::net::api::fetch_current_user().await
            };
            match signed_in.await {
                Ok(user) => {
                    leptos::logging::log!("signed in as {}", user.email);
                    info.set(String::new());
                    auth.update(|a| a.sign_in(user));
                }
                Err(e) => {
                    auth.update(AuthState::sign_out);
                    info.set(e.user_message());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"CallDesk"</h1>
                <p class="login-card__subtitle">"Connexion"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="vous@exemple.fr"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Mot de passe"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Se connecter"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
