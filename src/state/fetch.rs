//! Per-screen fetch state and local reconciliation after writes.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::AppError;
use crate::net::types::{Application, VisaListing};

/// Three-way state of a screen's primary read.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState<T> {
    #[default]
    Loading,
    Failed(AppError),
    Ready(T),
}

impl<T> FetchState<T> {
    pub fn from_result(result: Result<T, AppError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(error) => Self::Failed(error),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }
}

/// Numbers the reads a screen issues so a response to a superseded read can
/// be dropped.
///
/// A mounted page that refetches when its route param changes must ignore a
/// slower response for the previous param.
#[derive(Clone, Debug, Default)]
pub struct RequestSeq(Arc<AtomicU64>);

impl RequestSeq {
    /// Start a read; the returned ticket supersedes every earlier one.
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::Relaxed) == ticket
    }
}

/// Records that carry a server-assigned identifier.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for VisaListing {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Application {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Drop the record with `id` from a loaded collection after a successful
/// delete. Returns whether anything was removed; no-op unless `Ready`.
pub fn remove_by_key<T: Keyed>(state: &mut FetchState<Vec<T>>, id: &str) -> bool {
    let Some(items) = state.ready_mut() else {
        return false;
    };
    let before = items.len();
    items.retain(|item| item.key() != id);
    items.len() != before
}
