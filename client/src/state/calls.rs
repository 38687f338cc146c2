//! Call list state shared by the All / Today / History pages.
//!
//! DESIGN
//! ======
//! The backend list for the active view is cached in `items`; filtering,
//! ordering and pagination are re-derived from it on every render so toolbar
//! changes never refetch.

#[cfg(test)]
#[path = "calls_test.rs"]
mod calls_test;

use calls::edit::CallEdit;
use calls::{Call, CallFilter, CallListPage, CallView, derive_page};

#[derive(Clone, Debug, Default)]
pub struct CallsState {
    pub view: CallView,
    pub items: Vec<Call>,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: CallFilter,
    /// Requested 1-based page; clamped when derived.
    pub page: usize,
    /// Call currently open in the edit dialog, with its form values. An
    /// empty id means a call being logged by hand.
    pub editing: Option<(String, CallEdit)>,
}

impl CallsState {
    /// Switch to `view` and mark a fetch in flight. Switching views resets the
    /// page but keeps the toolbar filter.
    pub fn begin_load(&mut self, view: CallView) {
        if self.view != view {
            self.items.clear();
            self.page = 1;
            self.editing = None;
        }
        self.view = view;
        self.loading = true;
        self.error = None;
    }

    /// Store a fetch result. Results for a view that is no longer active are dropped.
    pub fn finish_load(&mut self, view: CallView, result: Result<Vec<Call>, String>) {
        if view != self.view {
            return;
        }
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(message) => self.error = Some(message),
        }
    }

    #[must_use]
    pub fn current_page(&self) -> CallListPage {
        derive_page(&self.items, &self.filter, self.view, self.page.max(1))
    }

    pub fn set_filter(&mut self, filter: CallFilter) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn open_editor(&mut self, call: &Call) {
        self.editing = Some((call.id.clone(), CallEdit::from_call(call)));
    }

    pub fn open_new(&mut self) {
        self.editing = Some((String::new(), CallEdit::default()));
    }

    #[must_use]
    pub fn is_creating(&self) -> bool {
        self.editing.as_ref().is_some_and(|(id, _)| id.is_empty())
    }

    pub fn close_editor(&mut self) {
        self.editing = None;
    }

    /// Swap in the backend's copy of an updated call.
    pub fn replace_call(&mut self, call: Call) {
        if let Some(slot) = self.items.iter_mut().find(|c| c.id == call.id) {
            *slot = call;
        } else {
            self.items.push(call);
        }
    }

    pub fn remove_call(&mut self, id: &str) {
        self.items.retain(|c| c.id != id);
    }
}
