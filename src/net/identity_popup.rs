//! Federated sign-in consent popup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The main window opens the OAuth consent page in a popup with an implicit
//! `id_token` response. The popup returns to `/auth/callback`, which writes
//! its URL fragment to `localStorage` and closes itself. The main window polls
//! for that entry and for the popup closing.
//!
//! ERROR HANDLING
//! ==============
//! A blocked popup, a popup closed without a result, a provider `error`
//! response, and a `state` mismatch all surface as `AppError::UserCancelled`.

#[cfg(test)]
#[path = "identity_popup_test.rs"]
mod identity_popup_test;

use crate::error::AppError;
use crate::util::url::{encode_component, parse_pairs};

/// Route rendered inside the popup once consent completes.
pub const CALLBACK_PATH: &str = "/auth/callback";

/// `localStorage` key the callback page writes its fragment to.
pub const CONSENT_STORAGE_KEY: &str = "visa-navigator.consent";

const AUTHORIZE_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";

#[cfg(feature = "csr")]
const POLL_INTERVAL_MS: u32 = 250;

/// A single consent attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsentRequest {
    pub url: String,
    pub state: String,
    pub nonce: String,
}

impl ConsentRequest {
    /// New attempt with random `state` and `nonce`.
    pub fn new(client_id: &str, redirect_uri: &str) -> Self {
        Self::with_values(
            client_id,
            redirect_uri,
            uuid::Uuid::new_v4().simple().to_string(),
            uuid::Uuid::new_v4().simple().to_string(),
        )
    }

    fn with_values(client_id: &str, redirect_uri: &str, state: String, nonce: String) -> Self {
        let params = [
            ("client_id", client_id),
            ("redirect_uri", redirect_uri),
            ("response_type", "id_token"),
            ("scope", "openid email profile"),
            ("nonce", nonce.as_str()),
            ("state", state.as_str()),
            ("prompt", "select_account"),
        ];
        let query = params
            .iter()
            .map(|(key, value)| format!("{key}={}", encode_component(value)))
            .collect::<Vec<_>>()
            .join("&");
        Self { url: format!("{AUTHORIZE_ENDPOINT}?{query}"), state, nonce }
    }
}

/// Extract the `id_token` from a callback fragment.
///
/// # Errors
///
/// `UserCancelled` when the provider reported an error, the state does not
/// match, or no token is present.
pub fn parse_consent_fragment(fragment: &str, expected_state: &str) -> Result<String, AppError> {
    let pairs = parse_pairs(fragment);
    let value = |name: &str| pairs.iter().find(|(key, _)| *key == name).map(|(_, v)| *v);

    if let Some(error) = value("error") {
        log::info!("consent: provider returned {error}");
        return Err(AppError::UserCancelled);
    }
    if value("state") != Some(expected_state) {
        log::warn!("consent: state mismatch");
        return Err(AppError::UserCancelled);
    }
    match value("id_token") {
        Some(token) if !token.is_empty() => Ok(token.to_owned()),
        _ => Err(AppError::UserCancelled),
    }
}

/// Open the consent popup and wait for its `id_token`.
///
/// # Errors
///
/// `UserCancelled` as described above; `Network` when the window is missing.
#[cfg(feature = "csr")]
pub async fn run_consent_popup(client_id: &str) -> Result<String, AppError> {
    use crate::util::storage;

    let window = web_sys::window().ok_or_else(|| AppError::Network("no browser window".to_owned()))?;
    let origin = window.location().origin().map_err(js_error)?;
    let request = ConsentRequest::new(client_id, &format!("{origin}{CALLBACK_PATH}"));

    storage::remove(CONSENT_STORAGE_KEY);
    let Some(popup) = window
        .open_with_url_and_target_and_features(&request.url, "visa-navigator-consent", "width=500,height=640")
        .map_err(js_error)?
    else {
        log::info!("consent: popup blocked");
        return Err(AppError::UserCancelled);
    };

    loop {
        gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;
        if let Some(fragment) = storage::load_text(CONSENT_STORAGE_KEY) {
            storage::remove(CONSENT_STORAGE_KEY);
            if let Err(e) = popup.close() {
                log::debug!("consent: could not close popup: {e:?}");
            }
            return parse_consent_fragment(&fragment, &request.state);
        }
        if popup.closed().unwrap_or(true) {
            return Err(AppError::UserCancelled);
        }
    }
}

/// Called by the callback page inside the popup.
///
/// # Errors
///
/// `Network` when the window, location, or storage is unavailable.
#[cfg(feature = "csr")]
pub fn deliver_consent_result() -> Result<(), AppError> {
    let window = web_sys::window().ok_or_else(|| AppError::Network("no browser window".to_owned()))?;
    let fragment = window.location().hash().map_err(js_error)?;
    if !crate::util::storage::save_text(CONSENT_STORAGE_KEY, &fragment) {
        return Err(AppError::Network("local storage unavailable".to_owned()));
    }
    window.close().map_err(js_error)
}

#[cfg(feature = "csr")]
fn js_error<E: std::fmt::Debug>(error: E) -> AppError {
    AppError::Network(format!("{error:?}"))
}
