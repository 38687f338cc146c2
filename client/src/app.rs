//! Root component: shell, context providers and routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every state struct is created here once and provided as an `RwSignal`
//! context. Session restore and theme detection run in effects so the server
//! render and the first client render agree.

use ::calls::CallView;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::path;

use crate::components::sidebar::Sidebar;
use crate::components::toast_stack::ToastStack;
use crate::pages::calls::CallsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::reminders::RemindersPage;
use crate::pages::users::UsersPage;
use crate::state::admin::AdminState;
use crate::state::auth::AuthState;
use crate::state::calls::CallsState;
use crate::state::notifications::NotificationsState;
use crate::state::reminders::RemindersState;
use crate::state::toasts::ToastState;
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;

/// HTML document shell used by the SSR server.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState {
        loading: true,
        ..AuthState::default()
    });
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(ui);
    provide_context(toasts);
    provide_context(RwSignal::new(CallsState::default()));
    provide_context(RwSignal::new(RemindersState::default()));
    provide_context(RwSignal::new(NotificationsState::default()));
    provide_context(RwSignal::new(AdminState::default()));

    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    Effect::new(move || {
        let restored = AuthState::restore();
        let has_tokens = restored.tokens.is_some();
        auth.set(restored);
        if !has_tokens {
            return;
        }
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_current_user().await {
                Ok(user) => auth.update(|a| a.sign_in(user)),
                Err(e) => {
                    leptos::logging::warn!("session restore failed: {e}");
                    auth.update(AuthState::sign_out);
                }
            }
        });
    });

    view! {
        <Title text="CallDesk" />
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page introuvable"</p> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=Layout>
                    <Route path=path!("") view=DashboardPage />
                    <Route path=path!("calls") view=|| view! { <CallsPage view=CallView::All /> } />
                    <Route path=path!("calls/today") view=|| view! { <CallsPage view=CallView::Today /> } />
                    <Route path=path!("calls/history") view=|| view! { <CallsPage view=CallView::History /> } />
                    <Route path=path!("reminders") view=RemindersPage />
                    <Route path=path!("admin/users") view=UsersPage />
                </ParentRoute>
            </Routes>
        </Router>
        <ToastStack />
    }
}

/// Authenticated chrome around every page but login.
#[component]
fn Layout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="app-loading">
                        <p>{move || if auth.get().loading { "Chargement..." } else { "Redirection..." }}</p>
                    </div>
                }
            }
        >
            <div class="app-layout">
                <Sidebar />
                <main class="app-main">
                    <Outlet />
                </main>
            </div>
        </Show>
    }
}
