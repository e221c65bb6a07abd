//! Signal writes from async continuations.
//!
//! A page can unmount while its request is still in flight. Continuations
//! write through these helpers, which no-op on a disposed signal and log the
//! dropped result instead of panicking.

#[cfg(test)]
#[path = "reactive_test.rs"]
mod reactive_test;

use leptos::prelude::*;

/// Set `signal` unless its owner has been disposed.
pub fn set_if_live<T: Send + Sync + 'static>(signal: RwSignal<T>, value: T) {
    if signal.try_set(value).is_some() {
        log::debug!("signal disposed; result dropped");
    }
}

/// Update `signal` in place unless its owner has been disposed.
pub fn update_if_live<T, U>(signal: RwSignal<T>, f: impl FnOnce(&mut T) -> U)
where
    T: Send + Sync + 'static,
{
    if signal.try_update(f).is_none() {
        log::debug!("signal disposed; update dropped");
    }
}
