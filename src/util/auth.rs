//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same three-way decision. `Initializing`
//! must render a placeholder: treating it as signed out would bounce
//! already-authenticated users to `/login` on every page load.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::auth::{Session, SessionStore};
use crate::util::reactive::set_if_live;

pub const LOGIN_PATH: &str = "/login";

/// Where an unauthenticated visitor is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedirectTarget {
    pub path: &'static str,
    /// Replace the history entry so "back" does not return to the guarded route.
    pub replace: bool,
}

/// What a protected route should show for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not yet known: neutral placeholder, no redirect.
    Loading,
    Redirect(RedirectTarget),
    /// Render the requested view unmodified.
    Render,
}

/// Decide how a protected route renders. Never fails.
pub fn guard_decision(session: &Session) -> GuardDecision {
    match session {
        Session::Initializing => GuardDecision::Loading,
        Session::Unauthenticated => {
            GuardDecision::Redirect(RedirectTarget { path: LOGIN_PATH, replace: true })
        }
        Session::Authenticated(_) => GuardDecision::Render,
    }
}

/// Mirror the store into a signal for the lifetime of the current owner.
///
/// The observer and the provider link are released in `on_cleanup`, so the
/// store stops listening when the app unmounts.
pub fn install_session_signal(store: &SessionStore) -> RwSignal<Session> {
    let session = RwSignal::new(store.current());
    let observer = store.subscribe(move |next| set_if_live(session, next.clone()));
    let link = store.connect();
    on_cleanup(move || {
        drop(observer);
        drop(link);
    });
    session
}

/// Email of the signed-in identity, read without tracking.
pub fn signed_in_email(session: RwSignal<Session>) -> Option<String> {
    session.with_untracked(|s| s.identity().map(|identity| identity.email.clone()))
}
