//! Terminal rendering: aligned text tables, or pretty JSON with `--json`.

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;

use calls::admin::format_rate;
use calls::edit::compose_reminder;
use calls::status::api_to_ui;
use calls::time::display_timestamp;
use calls::types::{Kpis, Notification, Reminder, User, UserStats};
use calls::{Call, CallListPage, UiCallStatus};
use serde::Serialize;

use crate::error::CliError;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

/// Left-aligned columns padded to the widest cell, two spaces apart.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let line = |cells: &mut dyn Iterator<Item = &str>| {
        let padded = cells
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>();
        padded.join("  ").trim_end().to_owned()
    };

    let mut out = vec![line(&mut headers.iter().copied())];
    out.extend(rows.iter().map(|row| line(&mut row.iter().map(String::as_str))));
    out.join("\n")
}

pub fn calls_table(calls: &[Call]) -> String {
    let rows = calls
        .iter()
        .map(|c| {
            vec![
                c.id.clone(),
                c.wave.map(|w| w.to_string()).unwrap_or_default(),
                c.display_name(),
                c.contact_number().to_owned(),
                c.ui_status().label().to_owned(),
                compose_reminder(c.recall_date.as_deref(), c.recall_slot.as_deref()),
                display_timestamp(c.last_call_at.as_deref().or(c.occurred_at.as_deref())),
            ]
        })
        .collect::<Vec<_>>();
    render_table(
        &["ID", "VAGUE", "CONTACT", "NUMÉRO", "STATUT", "RAPPEL", "DERNIER APPEL"],
        &rows,
    )
}

pub fn page_footer(page: &CallListPage) -> String {
    format!("page {}/{} · {} appel(s)", page.page, page.page_count, page.total)
}

pub fn call_detail(call: &Call) -> String {
    let fields = [
        ("ID", call.id.clone()),
        ("Contact", call.display_name()),
        ("Sens", call.direction.label().to_owned()),
        ("Appelant", call.caller_number.clone()),
        ("Appelé", call.callee_number.clone()),
        ("Email", call.email.clone().unwrap_or_default()),
        ("Statut", call.ui_status().label().to_owned()),
        ("Vague", call.wave.map(|w| w.to_string()).unwrap_or_default()),
        (
            "Rappel",
            compose_reminder(call.recall_date.as_deref(), call.recall_slot.as_deref()),
        ),
        ("Commercial", call.user_name.clone().unwrap_or_default()),
        ("Créé", display_timestamp(call.created_at.as_deref())),
        ("Appelé le", display_timestamp(call.occurred_at.as_deref())),
        ("Notes", call.notes.clone()),
    ];
    fields
        .iter()
        .map(|(k, v)| format!("{k:<11} {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn reminders_table(reminders: &[Reminder]) -> String {
    let rows = reminders
        .iter()
        .map(|r| {
            vec![
                r.id.clone(),
                display_timestamp(Some(&r.due_at)),
                format!("{:?}", r.status).to_lowercase(),
                r.contact_name.clone().unwrap_or_default(),
                r.title.clone(),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["ID", "ÉCHÉANCE", "ÉTAT", "CONTACT", "TITRE"], &rows)
}

pub fn notifications_table(items: &[Notification]) -> String {
    let rows = items
        .iter()
        .map(|n| {
            vec![
                n.id.clone(),
                n.kind.label().to_owned(),
                if n.read { "lu" } else { "non lu" }.to_owned(),
                display_timestamp(n.created_at.as_deref()),
                n.title.clone(),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["ID", "TYPE", "ÉTAT", "DATE", "TITRE"], &rows)
}

pub fn users_table(users: &[User]) -> String {
    let rows = users
        .iter()
        .map(|u| {
            vec![
                u.id.clone(),
                u.full_name(),
                u.email.clone(),
                u.role.label().to_owned(),
                if u.active { "actif" } else { "désactivé" }.to_owned(),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["ID", "NOM", "EMAIL", "RÔLE", "ÉTAT"], &rows)
}

pub fn kpis_table(kpis: &Kpis) -> String {
    let rows = [
        ("Appels au total", kpis.total_calls.to_string()),
        ("Appels aujourd'hui", kpis.calls_today.to_string()),
        ("RDV fixés", kpis.appointments_set.to_string()),
        ("Rappels en attente", kpis.callbacks_pending.to_string()),
        ("Rappels du jour", kpis.reminders_due_today.to_string()),
        ("Taux de conversion", format_rate(kpis.conversion_rate)),
        ("Commerciaux actifs", kpis.active_users.to_string()),
    ]
    .into_iter()
    .map(|(k, v)| vec![k.to_owned(), v])
    .collect::<Vec<_>>();
    render_table(&["INDICATEUR", "VALEUR"], &rows)
}

/// Stats summary followed by the per-status counts in UI vocabulary.
pub fn stats_table(stats: &UserStats) -> String {
    let mut rows = vec![
        vec!["Appels".to_owned(), stats.total_calls.to_string()],
        vec!["Aujourd'hui".to_owned(), stats.calls_today.to_string()],
        vec!["RDV fixés".to_owned(), stats.appointments_set.to_string()],
        vec!["Rappels en attente".to_owned(), stats.reminders_pending.to_string()],
    ];
    for status in UiCallStatus::ALL {
        let count = stats
            .by_status
            .iter()
            .filter(|(code, _)| api_to_ui(code) == status.key())
            .map(|(_, n)| n)
            .sum::<u64>();
        if count > 0 {
            rows.push(vec![status.label().to_owned(), count.to_string()]);
        }
    }
    render_table(&["", "TOTAL"], &rows)
}
