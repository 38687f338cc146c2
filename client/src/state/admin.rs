//! Admin page state: user directory, KPIs and the selected user's stats.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use calls::User;
use calls::admin::{UserFilter, visible_users};
use calls::types::{Kpis, UserStats};

#[derive(Clone, Debug, Default)]
pub struct AdminState {
    pub users: Vec<User>,
    pub filter: UserFilter,
    pub kpis: Option<Kpis>,
    pub selected: Option<String>,
    pub stats: Option<UserStats>,
    pub loading: bool,
    /// Temporary password returned by the last reset, shown once.
    pub revealed_password: Option<String>,
}

impl AdminState {
    #[must_use]
    pub fn visible(&self) -> Vec<User> {
        visible_users(&self.users, &self.filter)
    }

    pub fn upsert_user(&mut self, user: User) {
        if let Some(slot) = self.users.iter_mut().find(|u| u.id == user.id) {
            *slot = user;
        } else {
            self.users.push(user);
        }
    }

    pub fn mark_inactive(&mut self, id: &str) {
        for user in self.users.iter_mut().filter(|u| u.id == id) {
            user.active = false;
        }
    }

    /// Select a user; stats from a previous selection are discarded.
    pub fn select(&mut self, id: Option<String>) {
        if self.selected != id {
            self.stats = None;
        }
        self.selected = id;
    }
}
