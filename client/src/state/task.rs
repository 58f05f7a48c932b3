//! Explicit async task state for suspension boundaries.
//!
//! DESIGN
//! ======
//! A page that waits on data holds an `AsyncTask<T>`: a signal over
//! `TaskState<T>` that starts `Pending` and settles exactly once into
//! `Resolved` or `Rejected`. The `Boundary` component subscribes to it and
//! picks between fallback, content and error views. On the server the task
//! is never driven, so SSR always renders the fallback and hydration picks
//! up from there.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::fmt::Display;
use std::future::Future;

use leptos::prelude::*;

/// Lifecycle of one async load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TaskState<T> {
    #[default]
    Pending,
    Resolved(T),
    Rejected(String),
}

impl<T> TaskState<T> {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Move out of `Pending`. Later results are ignored; returns whether
    /// this call settled the state.
    pub fn settle<E: Display>(&mut self, result: Result<T, E>) -> bool {
        if !self.is_pending() {
            return false;
        }
        *self = match result {
            Ok(value) => Self::Resolved(value),
            Err(err) => Self::Rejected(err.to_string()),
        };
        true
    }
}

/// Reactive handle over a [`TaskState`].
pub struct AsyncTask<T: Send + Sync + 'static> {
    state: RwSignal<TaskState<T>>,
}

impl<T: Send + Sync + 'static> Clone for AsyncTask<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for AsyncTask<T> {}

impl<T: Send + Sync + 'static> AsyncTask<T> {
    /// A task that stays pending until [`AsyncTask::settle`] is called.
    #[must_use]
    pub fn pending() -> Self {
        Self { state: RwSignal::new(TaskState::Pending) }
    }

    /// Start `load` in the browser and settle with its result.
    pub fn spawn<F, E>(load: F) -> Self
    where
        F: Future<Output = Result<T, E>> + 'static,
        E: Display + 'static,
    {
        let task = Self::pending();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = load.await;
            task.settle(result);
        });
        #[cfg(not(feature = "hydrate"))]
        drop(load);
        task
    }

    /// Settle the task; ignored once settled or after the owner is disposed.
    pub fn settle<E: Display>(&self, result: Result<T, E>) {
        self.state.try_update(|s| s.settle(result));
    }

    /// Current state, tracked.
    #[must_use]
    pub fn state(&self) -> TaskState<T>
    where
        T: Clone,
    {
        self.state.get()
    }
}
