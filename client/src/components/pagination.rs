//! Previous / next pager for paginated call views.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use ::calls::CallListPage;
use leptos::prelude::*;

fn page_label(page: &CallListPage) -> String {
    format!("Page {} / {} ({} appels)", page.page, page.page_count, page.total)
}

/// Renders nothing when the list fits on one page.
#[component]
pub fn Pagination(page: Memo<CallListPage>, on_change: Callback<usize>) -> impl IntoView {
    view! {
        <Show when=move || { page.get().page_count > 1 }>
            <nav class="pagination">
                <button
                    class="btn pagination__prev"
                    disabled=move || !page.get().has_previous()
                    on:click=move |_| on_change.run(page.get_untracked().page.saturating_sub(1))
                >
                    "‹ Précédent"
                </button>
                <span class="pagination__label">{move || page_label(&page.get())}</span>
                <button
                    class="btn pagination__next"
                    disabled=move || !page.get().has_next()
                    on:click=move |_| on_change.run(page.get_untracked().page + 1)
                >
                    "Suivant ›"
                </button>
            </nav>
        </Show>
    }
}
