use log::warn;

use takatrack_core::{Error, Result};

/// Settled result of one fetch in a fan-out. Unlike `?`, a rejected
/// outcome does not abort the sibling fetches; each card degrades alone.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    Fulfilled(T),
    Rejected(Error),
}

impl<T> FetchOutcome<T> {
    /// Capture a finished fetch without short-circuiting.
    pub fn settle(result: Result<T>) -> Self {
        match result {
            Ok(value) => FetchOutcome::Fulfilled(value),
            Err(err) => FetchOutcome::Rejected(err),
        }
    }

    pub fn is_fulfilled(&self) -> bool {
        matches!(self, FetchOutcome::Fulfilled(_))
    }

    /// The fetched value, discarding the error if there was one.
    pub fn ok(self) -> Option<T> {
        match self {
            FetchOutcome::Fulfilled(value) => Some(value),
            FetchOutcome::Rejected(_) => None,
        }
    }

    /// The fetched value, or the type's default after logging the failure.
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            FetchOutcome::Fulfilled(value) => value,
            FetchOutcome::Rejected(err) => {
                warn!("[Dashboard] fetch failed, using empty data: {}", err);
                T::default()
            }
        }
    }
}

// ==================== Tests ====================
