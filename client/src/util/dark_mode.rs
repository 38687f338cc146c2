//! Theme preference: a stored boolean, else the system color scheme.
//!
//! The class `dark-mode` on `<html>` switches the stylesheet palette.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::storage;

const STORAGE_KEY: &str = "calldesk_dark";
const DARK_CLASS: &str = "dark-mode";

/// Stored preference if any, otherwise `prefers-color-scheme: dark`.
pub fn read_preference() -> bool {
    storage::load_json::<bool>(STORAGE_KEY).unwrap_or_else(system_prefers_dark)
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        let _ = root.class_list().toggle_with_force(DARK_CLASS, enabled);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (enabled, DARK_CLASS);
    }
}

/// Flip the theme, apply it, and persist the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::save_json(STORAGE_KEY, &next);
    next
}
