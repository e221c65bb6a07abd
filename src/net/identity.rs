//! Identity provider boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store never talks to a vendor SDK directly. It holds an
//! `Arc<dyn IdentityProvider>` and learns about sign-in state only through the
//! provider's change notifications; the operation futures below report
//! failures, never success state.

use std::sync::Arc;

use futures::future::LocalBoxFuture;

use super::types::{Identity, ProfileUpdate};
use crate::error::AppError;
use crate::util::listeners::ListenerId;

/// Callback invoked with the provider's current identity, or `None` when
/// signed out.
pub type IdentityListener = Arc<dyn Fn(&Option<Identity>) + Send + Sync>;

/// Result of an identity operation. Success carries no data: the resulting
/// identity arrives through the state-change subscription.
pub type IdentityResult<'a> = LocalBoxFuture<'a, Result<(), AppError>>;

/// An external identity service.
///
/// Futures are `!Send`: the browser runtime is single-threaded and the
/// implementations hold JS handles across await points.
pub trait IdentityProvider: Send + Sync {
    /// Register for state-change notifications.
    fn subscribe(&self, listener: IdentityListener) -> ListenerId;

    fn unsubscribe(&self, id: ListenerId);

    /// Restore a persisted session and emit the first notification, with or
    /// without an identity.
    fn restore(&self) -> LocalBoxFuture<'_, ()>;

    fn sign_in_with_password(&self, email: String, password: String) -> IdentityResult<'_>;

    fn sign_up(&self, email: String, password: String) -> IdentityResult<'_>;

    /// Interactive consent flow; fails with `UserCancelled` when dismissed.
    fn sign_in_federated(&self) -> IdentityResult<'_>;

    fn sign_out(&self) -> IdentityResult<'_>;

    /// Update the signed-in identity's profile and re-emit it.
    fn update_profile(&self, profile: ProfileUpdate) -> IdentityResult<'_>;
}
