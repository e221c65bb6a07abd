//! Scripted identity provider shared by unit tests.

use std::sync::{Arc, Mutex};

use futures::future::LocalBoxFuture;

use crate::error::AppError;
use crate::net::identity::{IdentityListener, IdentityProvider, IdentityResult};
use crate::net::types::{Identity, ProfileUpdate};
use crate::util::listeners::{ListenerId, ListenerSet, lock};

pub fn identity(email: &str) -> Identity {
    Identity {
        uid: format!("uid-{email}"),
        email: email.to_owned(),
        display_name: None,
        photo_url: None,
    }
}

/// Provider whose notifications are emitted on demand by the test.
#[derive(Default)]
pub struct ScriptedProvider {
    listeners: Mutex<ListenerSet<Option<Identity>>>,
    calls: Mutex<Vec<String>>,
    failure: Mutex<Option<AppError>>,
    current: Mutex<Option<Identity>>,
}

impl ScriptedProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Identity returned by the next `restore`.
    pub fn with_persisted(identity: Identity) -> Arc<Self> {
        let provider = Self::default();
        *lock(&provider.current) = Some(identity);
        Arc::new(provider)
    }

    /// Deliver a notification to every subscriber, in order.
    pub fn emit(&self, identity: Option<Identity>) {
        *lock(&self.current) = identity.clone();
        let listeners = lock(&self.listeners).snapshot();
        for listener in listeners {
            listener(&identity);
        }
    }

    /// Make the next operation fail with `error`.
    pub fn fail_next(&self, error: AppError) {
        *lock(&self.failure) = Some(error);
    }

    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).snapshot().len()
    }

    fn record(&self, call: String) -> Result<(), AppError> {
        lock(&self.calls).push(call);
        match lock(&self.failure).take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl IdentityProvider for ScriptedProvider {
    fn subscribe(&self, listener: IdentityListener) -> ListenerId {
        lock(&self.listeners).insert(listener)
    }

    fn unsubscribe(&self, id: ListenerId) {
        lock(&self.listeners).remove(id);
    }

    fn restore(&self) -> LocalBoxFuture<'_, ()> {
        Box::pin(async move {
            lock(&self.calls).push("restore".to_owned());
            let persisted = lock(&self.current).clone();
            self.emit(persisted);
        })
    }

    fn sign_in_with_password(&self, email: String, password: String) -> IdentityResult<'_> {
        Box::pin(async move {
            self.record(format!("sign_in:{email}:{}", password.len()))?;
            self.emit(Some(identity(&email)));
            Ok(())
        })
    }

    fn sign_up(&self, email: String, password: String) -> IdentityResult<'_> {
        Box::pin(async move {
            self.record(format!("sign_up:{email}:{}", password.len()))?;
            self.emit(Some(identity(&email)));
            Ok(())
        })
    }

    fn sign_in_federated(&self) -> IdentityResult<'_> {
        Box::pin(async move {
            self.record("federated".to_owned())?;
            self.emit(Some(identity("federated@x.com")));
            Ok(())
        })
    }

    fn sign_out(&self) -> IdentityResult<'_> {
        Box::pin(async move {
            self.record("sign_out".to_owned())?;
            self.emit(None);
            Ok(())
        })
    }

    fn update_profile(&self, profile: ProfileUpdate) -> IdentityResult<'_> {
        Box::pin(async move {
            self.record("update_profile".to_owned())?;
            let updated = lock(&self.current).clone().map(|mut identity| {
                identity.display_name = profile.display_name;
                identity.photo_url = profile.photo_url;
                identity
            });
            self.emit(updated);
            Ok(())
        })
    }
}
