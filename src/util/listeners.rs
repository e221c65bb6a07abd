//! Keyed observer list used by the identity provider and the session store.

#[cfg(test)]
#[path = "listeners_test.rs"]
mod listeners_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handle returned when registering a listener; pass it back to remove it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Ordered set of callbacks, notified in registration order.
pub struct ListenerSet<T> {
    next_id: u64,
    entries: Vec<(ListenerId, Listener<T>)>,
}

impl<T> Default for ListenerSet<T> {
    fn default() -> Self {
        Self { next_id: 0, entries: Vec::new() }
    }
}

impl<T> ListenerSet<T> {
    pub fn insert(&mut self, listener: Listener<T>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Clone out the current callbacks so they can run without holding a lock.
    pub fn snapshot(&self) -> Vec<Listener<T>> {
        self.entries.iter().map(|(_, listener)| Arc::clone(listener)).collect()
    }
}

/// Lock a mutex, recovering the data if a previous holder panicked.
///
/// The browser runtime is single-threaded; poisoning can only come from a
/// panicking observer, and the protected data stays consistent in that case.
pub fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
