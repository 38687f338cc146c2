//! Navigation sidebar with theme toggle, notification bell and logout.

use leptos::prelude::*;

use crate::components::notification_bell::NotificationBell;
use crate::state::auth::AuthState;
use crate::state::ui::{UiState, nav_items};

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let links = move || {
        nav_items(auth.get().is_admin())
            .into_iter()
            .map(|item| {
                view! {
                    <a class="sidebar__link" href=item.href>
                        {item.label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    let user_name = move || auth.get().user.map(|u| u.full_name()).unwrap_or_default();
    let role_label = move || auth.get().user.map(|u| u.role.label()).unwrap_or_default();

    let on_logout = move |_| {
        auth.update(AuthState::sign_out);
        #[cfg(feature = "hydrate")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
        }
    };

    view! {
        <aside class=move || {
            if ui.get().sidebar_expanded { "sidebar sidebar--expanded" } else { "sidebar" }
        }>
            <header class="sidebar__header">
                <button
                    class="btn sidebar__collapse"
                    title="Réduire le menu"
                    on:click=move |_| ui.update(|u| u.sidebar_expanded = !u.sidebar_expanded)
                >
                    "☰"
                </button>
                <span class="sidebar__brand">"CallDesk"</span>
                <NotificationBell />
            </header>
            <nav class="sidebar__nav">{links}</nav>
            <footer class="sidebar__footer">
                <span class="sidebar__user">{user_name}</span>
                <span class="sidebar__role">{role_label}</span>
                <button
                    class="btn sidebar__dark-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = crate::util::dark_mode::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Basculer le thème sombre"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
                <button class="btn sidebar__logout" on:click=on_logout title="Déconnexion">
                    "Déconnexion"
                </button>
            </footer>
        </aside>
    }
}
