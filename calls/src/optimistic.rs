//! Two-phase optimistic state transitions: apply locally, then confirm or revert.
//!
//! DESIGN
//! ======
//! An [`Action`] records what it changed as an `Undo` value. A [`Pending`]
//! keeps that record while the backend call is in flight. Settling never
//! restores a whole snapshot: success leaves the live state alone, failure
//! undoes only this action against the live state. Overlapping actions,
//! reloads and polls that landed in between therefore survive.
//! [`apply_with_rollback`] folds the whole exchange into one call.

#[cfg(test)]
#[path = "optimistic_test.rs"]
mod optimistic_test;

use std::future::Future;
use std::marker::PhantomData;

/// A local state change that mirrors a backend mutation.
pub trait Action<S> {
    /// What [`Action::apply`] changed, enough to reverse it later.
    type Undo;

    fn apply(&self, state: &mut S) -> Self::Undo;

    /// Reverse this action on `state`, which may have moved on since `apply`.
    fn undo(&self, state: &mut S, undo: Self::Undo);
}

/// An applied-but-unconfirmed action.
pub struct Pending<S, A: Action<S>> {
    action: A,
    undo: A::Undo,
    state: PhantomData<fn(&mut S)>,
}

impl<S, A: Action<S>> Pending<S, A> {
    /// Phase one: apply `action` to the live state and keep its undo record.
    pub fn apply(state: &mut S, action: A) -> Self {
        let undo = action.apply(state);
        Self {
            action,
            undo,
            state: PhantomData,
        }
    }

    pub fn action(&self) -> &A {
        &self.action
    }

    /// Phase two: keep the change on success, undo it on failure.
    pub fn settle<E>(self, state: &mut S, result: &Result<(), E>) {
        if result.is_err() {
            self.action.undo(state, self.undo);
        }
    }
}

/// Outcome of [`apply_with_rollback`]: the state to keep and the backend result.
#[derive(Clone, Debug, PartialEq)]
pub struct Settled<S, E> {
    pub state: S,
    pub result: Result<(), E>,
}

/// Apply `action` to a copy of `current`, run `backend`, and return the
/// confirmed or reverted state together with the backend result.
pub async fn apply_with_rollback<S, A, F, Fut, E>(current: &S, action: &A, backend: F) -> Settled<S, E>
where
    S: Clone,
    A: Action<S> + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let mut state = current.clone();
    let undo = action.apply(&mut state);
    let result = backend().await;
    if result.is_err() {
        action.undo(&mut state, undo);
    }
    Settled { state, result }
}

/// Remove every item matching `pred`, returning each with its former index.
pub fn remove_tracked<T>(items: &mut Vec<T>, mut pred: impl FnMut(&T) -> bool) -> Vec<(usize, T)> {
    let mut removed = Vec::new();
    let mut kept = Vec::with_capacity(items.len());
    for (index, item) in items.drain(..).enumerate() {
        if pred(&item) {
            removed.push((index, item));
        } else {
            kept.push(item);
        }
    }
    *items = kept;
    removed
}

/// Reinsert items taken by [`remove_tracked`] near their old positions.
/// Items that `same` finds already present (a reload brought them back) are skipped.
pub fn restore_removed<T>(items: &mut Vec<T>, removed: Vec<(usize, T)>, same: impl Fn(&T, &T) -> bool) {
    for (index, item) in removed {
        if items.iter().any(|existing| same(existing, &item)) {
            continue;
        }
        let at = index.min(items.len());
        items.insert(at, item);
    }
}
