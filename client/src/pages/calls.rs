//! Call list pages: All calls, Today's calls, and History.
//!
//! One component serves the three routes; the [`CallView`] decides the backend
//! listing, the status restriction, the ordering and the page size.

#[cfg(test)]
#[path = "calls_test.rs"]
mod calls_test;

use ::calls::optimistic::{Action, Pending, remove_tracked, restore_removed};
use ::calls::{Call, CallView};
use leptos::prelude::*;

use crate::components::call_edit_dialog::CallEditDialog;
use crate::components::call_filters::CallFilters;
use crate::components::call_table::CallTable;
use crate::components::pagination::Pagination;
use crate::state::auth::AuthState;
use crate::state::calls::CallsState;
use crate::state::toasts::ToastState;
use crate::util::auth::signed_in_user;
use crate::util::feedback::{report_failure, toast_success};

/// Optimistic removal of a deleted call from the cached list.
struct RemoveCall(String);

impl Action<Vec<Call>> for RemoveCall {
    type Undo = Vec<(usize, Call)>;

    fn apply(&self, state: &mut Vec<Call>) -> Self::Undo {
        remove_tracked(state, |c| c.id == self.0)
    }

    fn undo(&self, state: &mut Vec<Call>, removed: Self::Undo) {
        restore_removed(state, removed, |a, b| a.id == b.id);
    }
}

fn summary(view: CallView, total: usize) -> String {
    match (view, total) {
        (CallView::Today, 0) => "Aucun appel traité aujourd'hui".to_owned(),
        (_, 0) => "Aucun appel".to_owned(),
        (_, 1) => "1 appel".to_owned(),
        (_, n) => format!("{n} appels"),
    }
}

fn load(view: CallView, calls: RwSignal<CallsState>, auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>) {
    calls.update(|s| s.begin_load(view));
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_calls(view).await;
        if let Err(e) = &result {
            report_failure(auth, toasts, e);
        }
        calls.update(|s| s.finish_load(view, result.map_err(|e| e.user_message())));
    });
}

#[component]
pub fn CallsPage(view: CallView) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let calls = expect_context::<RwSignal<CallsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let user_id = signed_in_user(auth);
    Effect::new(move || {
        if user_id.get().is_some() {
            load(view, calls, auth, toasts);
        }
    });

    let page = Memo::new(move |_| {
        let state = calls.get();
        if state.view == view { state.current_page() } else { ::calls::CallListPage::default() }
    });
    let rows = Signal::derive(move || page.get().rows);

    let on_page = Callback::new(move |n: usize| calls.update(|s| s.go_to_page(n)));
    let on_edit = Callback::new(move |call: Call| calls.update(|s| s.open_editor(&call)));
    let on_delete = Callback::new(move |call: Call| {
        let Some(pending) = calls.try_update(|s| Pending::apply(&mut s.items, RemoveCall(call.id.clone()))) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_call(&call.id).await;
            match &result {
                Ok(()) => toast_success(toasts, "Appel supprimé"),
                Err(e) => report_failure(auth, toasts, e),
            }
            calls.update(|s| pending.settle(&mut s.items, &result));
        });
    });

    view! {
        <div class="calls-page">
            <header class="calls-page__header">
                <h1>{view.title()}</h1>
                <span class="calls-page__summary">{move || summary(view, page.get().total)}</span>
                <span class="toolbar__spacer"></span>
                <button class="btn" on:click=move |_| load(view, calls, auth, toasts)>
                    "Actualiser"
                </button>
                <button class="btn btn--primary" on:click=move |_| calls.update(CallsState::open_new)>
                    "+ Nouvel appel"
                </button>
            </header>
            <CallFilters />
            <Show when=move || calls.get().error.is_some()>
                <p class="calls-page__error">{move || calls.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || !calls.get().loading fallback=|| view! { <p>"Chargement..."</p> }>
                <CallTable view=view rows=rows on_edit=on_edit on_delete=on_delete />
                <Pagination page=page on_change=on_page />
            </Show>
            <Show when=move || calls.get().editing.is_some()>
                <CallEditDialog />
            </Show>
        </div>
    }
}
