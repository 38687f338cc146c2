//! Per-page call list derivation: restrict, filter, order, paginate.
//!
//! DESIGN
//! ======
//! Each dashboard list is a pure function of the fetched records, the
//! toolbar filter and a page number. Sorting is stable so records that tie
//! keep the order the backend returned them in.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::cmp::Ordering;

use crate::filter::CallFilter;
use crate::time::epoch_millis_or_zero;
use crate::types::Call;

/// Fixed client-side page size of the "Today" view.
pub const TODAY_PAGE_SIZE: usize = 10;

/// Which call list page is being rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CallView {
    /// Imported prospects never acted upon, in outreach order.
    #[default]
    All,
    /// Calls already acted upon today, most recent first.
    Today,
    /// Every call, most recently called first.
    History,
}

impl CallView {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::All => "Tous les appels",
            Self::Today => "Appels du jour",
            Self::History => "Historique",
        }
    }

    /// Client-side page size; `None` renders every matching row.
    #[must_use]
    pub fn page_size(self) -> Option<usize> {
        match self {
            Self::Today => Some(TODAY_PAGE_SIZE),
            Self::All | Self::History => None,
        }
    }

    /// Status restriction applied before the user's filter.
    #[must_use]
    pub fn admits(self, call: &Call) -> bool {
        match self {
            Self::All => call.ui_status().is_neutral(),
            Self::Today => !call.ui_status().is_neutral(),
            Self::History => true,
        }
    }

    fn compare(self, a: &Call, b: &Call) -> Ordering {
        match self {
            Self::All => compare_outreach_order(a, b),
            Self::Today => occurred_millis(b).cmp(&occurred_millis(a)),
            Self::History => last_call_millis(b).cmp(&last_call_millis(a)),
        }
    }
}

/// One rendered page of a derived call list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallListPage {
    pub rows: Vec<Call>,
    /// Rows matching view + filter, across all pages.
    pub total: usize,
    /// 1-based page actually rendered after clamping.
    pub page: usize,
    pub page_count: usize,
}

impl CallListPage {
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

/// Restrict, filter and order `calls` for `view` without paginating.
#[must_use]
pub fn ordered_calls(calls: &[Call], filter: &CallFilter, view: CallView) -> Vec<Call> {
    let mut rows = calls
        .iter()
        .filter(|c| view.admits(c) && filter.allows(c))
        .cloned()
        .collect::<Vec<_>>();
    rows.sort_by(|a, b| view.compare(a, b));
    rows
}

/// Derive the page of `calls` to render for `view`. `page` is 1-based and
/// clamped into range.
#[must_use]
pub fn derive_page(calls: &[Call], filter: &CallFilter, view: CallView, page: usize) -> CallListPage {
    let rows = ordered_calls(calls, filter, view);
    let total = rows.len();
    let Some(size) = view.page_size() else {
        return CallListPage {
            rows,
            total,
            page: 1,
            page_count: 1,
        };
    };

    let page_count = total.div_ceil(size).max(1);
    let page = page.clamp(1, page_count);
    let rows = rows.into_iter().skip((page - 1) * size).take(size).collect();
    CallListPage {
        rows,
        total,
        page,
        page_count,
    }
}

/// Ascending wave (unassigned last), then last name, then first name.
#[must_use]
pub fn compare_outreach_order(a: &Call, b: &Call) -> Ordering {
    compare_wave(a.wave, b.wave)
        .then_with(|| compare_names(&a.last_name, &b.last_name))
        .then_with(|| compare_names(&a.first_name, &b.first_name))
}

fn compare_wave(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Case-insensitive comparison that orders accented letters with their base
/// letter (`Élise` sorts with `Elise`, before `Fabien`). Accents only break
/// ties; case never does.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.trim().to_lowercase().cmp(&b.trim().to_lowercase()))
}

fn collation_key(value: &str) -> String {
    let mut key = String::with_capacity(value.len());
    for c in value.trim().chars().flat_map(char::to_lowercase) {
        match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => key.push('a'),
            'ç' => key.push('c'),
            'è' | 'é' | 'ê' | 'ë' => key.push('e'),
            'ì' | 'í' | 'î' | 'ï' => key.push('i'),
            'ñ' => key.push('n'),
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => key.push('o'),
            'ù' | 'ú' | 'û' | 'ü' => key.push('u'),
            'ý' | 'ÿ' => key.push('y'),
            'æ' => key.push_str("ae"),
            'œ' => key.push_str("oe"),
            'ß' => key.push_str("ss"),
            other => key.push(other),
        }
    }
    key
}

fn occurred_millis(call: &Call) -> i64 {
    epoch_millis_or_zero(call.occurred_at.as_deref())
}

/// Last-call date, falling back to the occurrence date for calls the backend
/// has not stamped yet.
fn last_call_millis(call: &Call) -> i64 {
    epoch_millis_or_zero(call.last_call_at.as_deref().or(call.occurred_at.as_deref()))
}
