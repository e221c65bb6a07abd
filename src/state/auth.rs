//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the only writer of the process-wide [`Session`]. It is
//! fed exclusively by identity provider notifications and fans every
//! transition out to its observers (the UI's `RwSignal<Session>` mirror,
//! navbar, route guards).
//!
//! LIFECYCLE
//! =========
//! `Initializing` until the provider's first notification, then
//! `Authenticated`/`Unauthenticated` forever after. The provider subscription
//! is held by a [`ProviderLink`] and released when the link is dropped.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, Mutex, Weak};

use crate::error::AppError;
use crate::net::identity::IdentityProvider;
use crate::net::types::{Identity, ProfileUpdate};
use crate::util::listeners::{ListenerId, ListenerSet, lock};

/// Who is signed in, as last reported by the identity provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// The provider has not reported yet. Not the same as signed out.
    #[default]
    Initializing,
    Unauthenticated,
    Authenticated(Identity),
}

impl Session {
    /// Session implied by a provider notification.
    pub fn from_notification(identity: Option<Identity>) -> Self {
        match identity {
            Some(identity) => Self::Authenticated(identity),
            None => Self::Unauthenticated,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Initializing | Self::Unauthenticated => None,
        }
    }

    pub fn is_initializing(&self) -> bool {
        matches!(self, Self::Initializing)
    }
}

#[derive(Default)]
struct StoreInner {
    session: Session,
    observers: ListenerSet<Session>,
}

/// Process-wide session store wrapping an identity provider.
///
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<StoreInner>>,
    provider: Arc<dyn IdentityProvider>,
}

impl SessionStore {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { inner: Arc::new(Mutex::new(StoreInner::default())), provider }
    }

    pub fn current(&self) -> Session {
        lock(&self.inner).session.clone()
    }

    /// Register an observer for session transitions.
    ///
    /// The observer is not called with the current value; read [`current`]
    /// first if needed.
    ///
    /// [`current`]: Self::current
    pub fn subscribe<F>(&self, observer: F) -> SessionSubscription
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        let id = lock(&self.inner).observers.insert(Arc::new(observer));
        SessionSubscription { inner: Arc::downgrade(&self.inner), id }
    }

    /// Start listening to the provider. Notifications drive transitions until
    /// the returned link is dropped.
    pub fn connect(&self) -> ProviderLink {
        let inner = Arc::downgrade(&self.inner);
        let id = self.provider.subscribe(Arc::new(move |identity: &Option<Identity>| {
            if let Some(inner) = inner.upgrade() {
                apply_notification(&inner, identity.clone());
            }
        }));
        ProviderLink { provider: Arc::clone(&self.provider), id }
    }

    /// Ask the provider to restore a persisted session; it answers with the
    /// first notification.
    pub async fn restore(&self) {
        self.provider.restore().await;
    }

    /// Email/password sign-in. Success shows up as a notification.
    ///
    /// # Errors
    ///
    /// `Validation` for blank input, otherwise whatever the provider reports
    /// (`InvalidCredentials`, `Network`, ...).
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AppError> {
        let email = required_email(email)?;
        let password = required_password(password)?;
        log::info!("signing in with password");
        self.provider
            .sign_in_with_password(email, password)
            .await
            .inspect_err(|e| log::warn!("password sign-in failed: {} ({e})", e.error_code()))
    }

    /// Create an account. Success shows up as a notification.
    ///
    /// # Errors
    ///
    /// Same contract as [`login`](Self::login).
    pub async fn register(&self, email: &str, password: &str) -> Result<(), AppError> {
        let email = required_email(email)?;
        let password = required_password(password)?;
        log::info!("registering new account");
        self.provider
            .sign_up(email, password)
            .await
            .inspect_err(|e| log::warn!("sign-up failed: {} ({e})", e.error_code()))
    }

    /// Federated sign-in through the provider's consent popup.
    ///
    /// # Errors
    ///
    /// `UserCancelled` when the popup is dismissed.
    pub async fn login_with_federated_provider(&self) -> Result<(), AppError> {
        log::info!("starting federated sign-in");
        self.provider
            .sign_in_federated()
            .await
            .inspect_err(|e| log::warn!("federated sign-in failed: {} ({e})", e.error_code()))
    }

    /// Sign out. The session flips to `Unauthenticated` via notification, not
    /// via this call's return value.
    ///
    /// # Errors
    ///
    /// Provider failure.
    pub async fn logout(&self) -> Result<(), AppError> {
        log::info!("signing out");
        self.provider
            .sign_out()
            .await
            .inspect_err(|e| log::warn!("sign-out failed: {} ({e})", e.error_code()))
    }

    /// Set display name and avatar for the signed-in identity.
    ///
    /// # Errors
    ///
    /// `Validation` when nobody is signed in, otherwise provider failure.
    pub async fn update_profile(&self, profile: ProfileUpdate) -> Result<(), AppError> {
        if self.current().identity().is_none() {
            return Err(AppError::validation("You must be signed in to update your profile."));
        }
        self.provider
            .update_profile(profile)
            .await
            .inspect_err(|e| log::warn!("profile update failed: {} ({e})", e.error_code()))
    }
}

fn apply_notification(inner: &Mutex<StoreInner>, identity: Option<Identity>) {
    let next = Session::from_notification(identity);
    let observers = {
        let mut state = lock(inner);
        if state.session == next {
            return;
        }
        log::debug!("session transition: {} -> {}", kind(&state.session), kind(&next));
        state.session = next.clone();
        state.observers.snapshot()
    };
    // Lock released: observers may read the store.
    for observer in observers {
        observer(&next);
    }
}

fn kind(session: &Session) -> &'static str {
    match session {
        Session::Initializing => "initializing",
        Session::Unauthenticated => "unauthenticated",
        Session::Authenticated(_) => "authenticated",
    }
}

fn required_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(AppError::validation("Email is required."));
    }
    Ok(email.to_owned())
}

fn required_password(raw: &str) -> Result<String, AppError> {
    if raw.is_empty() {
        return Err(AppError::validation("Password is required."));
    }
    Ok(raw.to_owned())
}

/// Keeps a store observer registered; dropping it unregisters.
#[must_use = "dropping the subscription unregisters the observer"]
pub struct SessionSubscription {
    inner: Weak<Mutex<StoreInner>>,
    id: ListenerId,
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            lock(&inner).observers.remove(self.id);
        }
    }
}

/// Keeps the store subscribed to its provider; dropping it unsubscribes.
#[must_use = "dropping the link disconnects the store from its provider"]
pub struct ProviderLink {
    provider: Arc<dyn IdentityProvider>,
    id: ListenerId,
}

impl Drop for ProviderLink {
    fn drop(&mut self) {
        self.provider.unsubscribe(self.id);
    }
}
