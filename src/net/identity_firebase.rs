//! Firebase Identity Toolkit adapter for [`IdentityProvider`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Talks to the Identity Toolkit REST API directly (no JS SDK). Credentials
//! (ID token, refresh token, profile) are persisted in `localStorage` under
//! [`SESSION_STORAGE_KEY`]; `restore` exchanges the refresh token for a fresh
//! ID token and re-reads the profile before announcing the identity.
//!
//! DESIGN
//! ======
//! Every successful operation ends in `establish` or `clear`, which persist
//! the new credentials and notify listeners. Listener callbacks run after the
//! lock is released so they may call back into the provider.
//!
//! ERROR HANDLING
//! ==============
//! Provider error codes are mapped by [`map_identity_error`]. A refresh that
//! fails for a transport reason keeps the cached identity; a refresh the
//! provider rejects clears it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_firebase_test.rs"]
mod identity_firebase_test;

use std::sync::Mutex;

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use super::identity::{IdentityListener, IdentityProvider, IdentityResult};
use super::types::{Identity, ProfileUpdate};
use crate::config::IdentityConfig;
use crate::error::AppError;
use crate::util::listeners::{ListenerId, ListenerSet, lock};
use crate::util::storage;
use crate::util::url::encode_component;

/// `localStorage` key holding [`StoredCredentials`] as JSON.
pub const SESSION_STORAGE_KEY: &str = "visa-navigator.session";

const IDENTITY_TOOLKIT_BASE: &str = "https://identitytoolkit.googleapis.com/v1";
const SECURE_TOKEN_BASE: &str = "https://securetoken.googleapis.com/v1";

/// Tokens and profile kept between page loads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct StoredCredentials {
    id_token: String,
    refresh_token: String,
    identity: Identity,
}

/// Response of `signInWithPassword`, `signUp` and `signInWithIdp`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    id_token: String,
    refresh_token: String,
    local_id: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
}

impl SignInResponse {
    fn into_credentials(self) -> StoredCredentials {
        StoredCredentials {
            id_token: self.id_token,
            refresh_token: self.refresh_token,
            identity: Identity {
                uid: self.local_id,
                email: self.email,
                display_name: non_blank(self.display_name),
                photo_url: non_blank(self.photo_url),
            },
        }
    }
}

/// Response of the secure-token refresh grant (snake_case on the wire).
#[derive(Debug, Deserialize)]
struct TokenResponse {
    id_token: String,
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
}

impl From<LookupUser> for Identity {
    fn from(user: LookupUser) -> Self {
        Self {
            uid: user.local_id,
            email: user.email,
            display_name: non_blank(user.display_name),
            photo_url: non_blank(user.photo_url),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[cfg(any(test, feature = "csr"))]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IdpRequest {
    post_body: String,
    request_uri: String,
    return_secure_token: bool,
    return_idp_credential: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    id_token: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateRequest<'a> {
    id_token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo_url: Option<&'a str>,
    return_secure_token: bool,
}

/// Identity Toolkit REST endpoint for `accounts:{method}`.
fn identity_endpoint(method: &str, api_key: &str) -> String {
    format!("{IDENTITY_TOOLKIT_BASE}/accounts:{method}?key={}", encode_component(api_key))
}

fn token_endpoint(api_key: &str) -> String {
    format!("{SECURE_TOKEN_BASE}/token?key={}", encode_component(api_key))
}

fn refresh_form(refresh_token: &str) -> String {
    format!("grant_type=refresh_token&refresh_token={}", encode_component(refresh_token))
}

#[cfg(any(test, feature = "csr"))]
fn idp_request(id_token: &str, request_uri: String) -> IdpRequest {
    IdpRequest {
        post_body: format!("id_token={}&providerId=google.com", encode_component(id_token)),
        request_uri,
        return_secure_token: true,
        return_idp_credential: true,
    }
}

/// Map an Identity Toolkit error response to [`AppError`].
///
/// The provider reports `{"error": {"message": "CODE : detail"}}`; only the
/// code before the first space or colon is significant.
pub fn map_identity_error(status: u16, body: &str) -> AppError {
    #[derive(Deserialize)]
    struct Envelope {
        error: ErrorBody,
    }
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    let Ok(envelope) = serde_json::from_str::<Envelope>(body) else {
        return crate::error::server_error(status, body);
    };
    let message = envelope.error.message;
    let code = message.split([' ', ':']).next().unwrap_or_default();
    match code {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" | "USER_DISABLED" => {
            AppError::InvalidCredentials
        }
        "EMAIL_EXISTS" => AppError::validation("An account with this email already exists."),
        "WEAK_PASSWORD" => AppError::validation("Password should be at least 6 characters."),
        "INVALID_EMAIL" => AppError::validation("The email address is badly formatted."),
        "MISSING_PASSWORD" => AppError::validation("Password is required."),
        _ => AppError::Server { status, message },
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Identity provider backed by Firebase Authentication.
pub struct FirebaseIdentity {
    config: IdentityConfig,
    listeners: Mutex<ListenerSet<Option<Identity>>>,
    credentials: Mutex<Option<StoredCredentials>>,
}

impl FirebaseIdentity {
    pub fn new(config: IdentityConfig) -> Self {
        Self { config, listeners: Mutex::new(ListenerSet::default()), credentials: Mutex::new(None) }
    }

    fn notify(&self, identity: Option<Identity>) {
        let listeners = lock(&self.listeners).snapshot();
        for listener in listeners {
            listener(&identity);
        }
    }

    /// Persist `credentials` and announce their identity.
    fn establish(&self, credentials: StoredCredentials) {
        storage::save_json(SESSION_STORAGE_KEY, &credentials);
        let identity = credentials.identity.clone();
        *lock(&self.credentials) = Some(credentials);
        self.notify(Some(identity));
    }

    /// Forget persisted credentials and announce sign-out.
    fn clear(&self) {
        storage::remove(SESSION_STORAGE_KEY);
        *lock(&self.credentials) = None;
        self.notify(None);
    }

    async fn refresh(&self, refresh_token: &str) -> Result<StoredCredentials, AppError> {
        let token: TokenResponse = self
            .post_form(&token_endpoint(&self.config.api_key), refresh_form(refresh_token))
            .await?;
        let lookup: LookupResponse = self
            .post_json(
                &identity_endpoint("lookup", &self.config.api_key),
                &LookupRequest { id_token: &token.id_token },
            )
            .await?;
        let identity = lookup
            .users
            .into_iter()
            .next()
            .map(Identity::from)
            .ok_or_else(|| AppError::Server { status: 400, message: "USER_NOT_FOUND".to_owned() })?;
        Ok(StoredCredentials { id_token: token.id_token, refresh_token: token.refresh_token, identity })
    }

    async fn password_request(&self, method: &str, email: &str, password: &str) -> Result<(), AppError> {
        let response: SignInResponse = self
            .post_json(
                &identity_endpoint(method, &self.config.api_key),
                &PasswordRequest { email, password, return_secure_token: true },
            )
            .await?;
        self.establish(response.into_credentials());
        Ok(())
    }

    #[cfg(feature = "csr")]
    async fn federated(&self, client_id: &str) -> Result<(), AppError> {
        let id_token = super::identity_popup::run_consent_popup(client_id).await?;
        let window = web_sys::window().ok_or_else(|| AppError::Network("no browser window".to_owned()))?;
        let request_uri = window
            .location()
            .origin()
            .map_err(|e| AppError::Network(format!("{e:?}")))?;
        let response: SignInResponse = self
            .post_json(
                &identity_endpoint("signInWithIdp", &self.config.api_key),
                &idp_request(&id_token, request_uri),
            )
            .await?;
        self.establish(response.into_credentials());
        Ok(())
    }

    #[cfg(not(feature = "csr"))]
    async fn federated(&self, client_id: &str) -> Result<(), AppError> {
        Err(browser_only(&format!("federated sign-in for client {client_id}")))
    }

    async fn post_json<B, R>(&self, url: &str, body: &B) -> Result<R, AppError>
    where
        B: Serialize,
        R: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(url)
                .json(body)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            read_response(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let size = serde_json::to_vec(body).map_or(0, |bytes| bytes.len());
            Err(browser_only(&format!("POST {url} ({size} byte body)")))
        }
    }

    async fn post_form<R>(&self, url: &str, form: String) -> Result<R, AppError>
    where
        R: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(url)
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(form)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            read_response(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(browser_only(&format!("POST {url} ({} byte form)", form.len())))
        }
    }
}

impl IdentityProvider for FirebaseIdentity {
    fn subscribe(&self, listener: IdentityListener) -> ListenerId {
        lock(&self.listeners).insert(listener)
    }

    fn unsubscribe(&self, id: ListenerId) {
        lock(&self.listeners).remove(id);
    }

    fn restore(&self) -> LocalBoxFuture<'_, ()> {
        Box::pin(async move {
            let Some(cached) = storage::load_json::<StoredCredentials>(SESSION_STORAGE_KEY) else {
                self.notify(None);
                return;
            };
            match self.refresh(&cached.refresh_token).await {
                Ok(fresh) => self.establish(fresh),
                Err(AppError::Network(reason)) => {
                    log::warn!("identity: refresh unavailable, using cached profile: {reason}");
                    let identity = cached.identity.clone();
                    *lock(&self.credentials) = Some(cached);
                    self.notify(Some(identity));
                }
                Err(e) => {
                    log::info!("identity: persisted session rejected ({}): {e}", e.error_code());
                    self.clear();
                }
            }
        })
    }

    fn sign_in_with_password(&self, email: String, password: String) -> IdentityResult<'_> {
        Box::pin(async move { self.password_request("signInWithPassword", &email, &password).await })
    }

    fn sign_up(&self, email: String, password: String) -> IdentityResult<'_> {
        Box::pin(async move { self.password_request("signUp", &email, &password).await })
    }

    fn sign_in_federated(&self) -> IdentityResult<'_> {
        Box::pin(async move {
            let Some(client_id) = self.config.google_client_id.clone() else {
                return Err(AppError::validation("Google sign-in is not configured."));
            };
            self.federated(&client_id).await
        })
    }

    fn sign_out(&self) -> IdentityResult<'_> {
        Box::pin(async move {
            self.clear();
            Ok(())
        })
    }

    fn update_profile(&self, profile: ProfileUpdate) -> IdentityResult<'_> {
        Box::pin(async move {
            let Some(mut credentials) = lock(&self.credentials).clone() else {
                return Err(AppError::validation("You must be signed in to update your profile."));
            };
            let display_name = profile.display_name.as_deref().map(str::trim).filter(|v| !v.is_empty());
            let photo_url = profile.photo_url.as_deref().map(str::trim).filter(|v| !v.is_empty());
            let _: serde_json::Value = self
                .post_json(
                    &identity_endpoint("update", &self.config.api_key),
                    &UpdateRequest {
                        id_token: &credentials.id_token,
                        display_name,
                        photo_url,
                        return_secure_token: false,
                    },
                )
                .await?;
            if let Some(name) = display_name {
                credentials.identity.display_name = Some(name.to_owned());
            }
            if let Some(url) = photo_url {
                credentials.identity.photo_url = Some(url.to_owned());
            }
            self.establish(credentials);
            Ok(())
        })
    }
}

#[cfg(feature = "csr")]
fn transport(error: gloo_net::Error) -> AppError {
    AppError::Network(error.to_string())
}

#[cfg(feature = "csr")]
async fn read_response<R: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<R, AppError> {
    if !(200..300).contains(&resp.status()) {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(map_identity_error(status, &body));
    }
    resp.json::<R>()
        .await
        .map_err(|e| AppError::Network(format!("invalid identity response: {e}")))
}

#[cfg(not(feature = "csr"))]
fn browser_only(request: &str) -> AppError {
    log::trace!("{request}: not sent outside the browser");
    AppError::Network("not available outside the browser".to_owned())
}
