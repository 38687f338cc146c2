//! Dashboard page: today's activity for every agent, KPIs for admins.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches today's calls and
//! reminders once the session is known, and the aggregate KPIs when the user
//! is an administrator.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use ::calls::admin::{appointment_rate, format_rate, status_breakdown};
use ::calls::reminders::pending_count;
use ::calls::types::Kpis;
use ::calls::{Call, CallView, UiCallStatus};
use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::state::auth::AuthState;
use crate::state::reminders::ReminderScope;
use crate::state::toasts::ToastState;
use crate::util::feedback::report_failure;

/// Label/value pairs rendered as KPI cards.
fn kpi_cards(kpis: &Kpis) -> Vec<(&'static str, String)> {
    vec![
        ("Appels au total", kpis.total_calls.to_string()),
        ("Appels aujourd'hui", kpis.calls_today.to_string()),
        ("RDV fixés", kpis.appointments_set.to_string()),
        ("Rappels en attente", kpis.callbacks_pending.to_string()),
        ("Rappels du jour", kpis.reminders_due_today.to_string()),
        ("Taux de conversion", format_rate(kpis.conversion_rate)),
        ("Commerciaux actifs", kpis.active_users.to_string()),
    ]
}

/// Non-empty status rows of today's breakdown.
fn today_breakdown(calls: &[Call]) -> Vec<(UiCallStatus, usize)> {
    status_breakdown(calls).into_iter().filter(|(_, n)| *n > 0).collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let today_calls = RwSignal::new(Vec::<Call>::new());
    let pending_reminders = RwSignal::new(0_usize);
    let kpis = RwSignal::new(None::<Kpis>);
    let requested = RwSignal::new(false);

    Effect::new(move || {
        let state = auth.get();
        if requested.get_untracked() || state.user.is_none() {
            return;
        }
        requested.set(true);
        let is_admin = state.is_admin();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_calls(CallView::Today).await {
                Ok(items) => today_calls.set(items),
                Err(e) => report_failure(auth, toasts, &e),
            }
            match crate::net::api::fetch_reminders(ReminderScope::Today).await {
                Ok(items) => pending_reminders.set(pending_count(&items)),
                Err(e) => report_failure(auth, toasts, &e),
            }
            if is_admin {
                match crate::net::api::fetch_kpis().await {
                    Ok(k) => kpis.set(Some(k)),
                    Err(e) => report_failure(auth, toasts, &e),
                }
            }
        });
    });

    view! {
        <div class="dashboard-page">
            <h1>"Tableau de bord"</h1>
            <section class="dashboard-page__today">
                <div class="kpi-card">
                    <span class="kpi-card__label">"Mes appels du jour"</span>
                    <span class="kpi-card__value">{move || today_calls.get().len()}</span>
                </div>
                <div class="kpi-card">
                    <span class="kpi-card__label">"Taux de RDV"</span>
                    <span class="kpi-card__value">
                        {move || format_rate(appointment_rate(&today_calls.get()))}
                    </span>
                </div>
                <div class="kpi-card">
                    <span class="kpi-card__label">"Rappels à traiter"</span>
                    <span class="kpi-card__value">{move || pending_reminders.get()}</span>
                </div>
            </section>
            <section class="dashboard-page__breakdown">
                <h2>"Répartition du jour"</h2>
                <ul>
                    {move || {
                        today_breakdown(&today_calls.get())
                            .into_iter()
                            .map(|(status, n)| {
                                view! {
                                    <li>
                                        <StatusBadge status=status />
                                        <span class="dashboard-page__count">{n}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </section>
            <Show when=move || kpis.get().is_some()>
                <section class="dashboard-page__kpis">
                    <h2>"Indicateurs"</h2>
                    <div class="dashboard-page__cards">
                        {move || {
                            kpis.get()
                                .map(|k| kpi_cards(&k))
                                .unwrap_or_default()
                                .into_iter()
                                .map(|(label, value)| {
                                    view! {
                                        <div class="kpi-card">
                                            <span class="kpi-card__label">{label}</span>
                                            <span class="kpi-card__value">{value}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </section>
            </Show>
        </div>
    }
}
