//! REST client for the visa listing server.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every call returns `AppError::Network` so pure logic and
//! tests compile without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures become `AppError::Network`; non-2xx responses go through
//! `error::server_error` so the server's `message` reaches the notice.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Application, NewApplication, NewVisa, VisaListing, VisaUpdate};
use crate::error::AppError;
use crate::util::url::{encode_component, with_query};

/// Filters accepted by `GET /visas`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisaQuery {
    pub limit: Option<usize>,
    pub added_by: Option<String>,
}

impl VisaQuery {
    /// Every listing.
    pub fn all() -> Self {
        Self::default()
    }

    /// The `limit` most recent listings.
    pub fn latest(limit: usize) -> Self {
        Self { limit: Some(limit), added_by: None }
    }

    /// Listings created by `email`.
    pub fn owned_by(email: impl Into<String>) -> Self {
        Self { limit: None, added_by: Some(email.into()) }
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(owner) = self.added_by.as_deref().filter(|owner| !owner.is_empty()) {
            pairs.push(("addedBy", owner.to_owned()));
        }
        pairs
    }
}

/// Handle to the REST server; cheap to clone into views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisaApi {
    base_url: String,
}

impl VisaApi {
    /// `base_url` must already be normalized (no trailing `/`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn visas_url(&self, query: &VisaQuery) -> String {
        with_query(&format!("{}/visas", self.base_url), &query.pairs())
    }

    fn visa_url(&self, id: &str) -> String {
        format!("{}/visas/{}", self.base_url, encode_component(id))
    }

    fn add_visa_url(&self) -> String {
        format!("{}/add-visa", self.base_url)
    }

    fn applications_url(&self) -> String {
        format!("{}/applications", self.base_url)
    }

    fn application_url(&self, id: &str) -> String {
        format!("{}/applications/{}", self.base_url, encode_component(id))
    }

    fn my_applications_url(&self, email: &str) -> String {
        with_query(
            &format!("{}/my-applications", self.base_url),
            &[("addedBy", email.to_owned())],
        )
    }

    /// `GET /visas` with optional `limit` / `addedBy`.
    ///
    /// # Errors
    ///
    /// `Network` on transport failure, `Server` on a non-2xx status.
    pub async fn list_visas(&self, query: &VisaQuery) -> Result<Vec<VisaListing>, AppError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.visas_url(query))
                .send()
                .await
                .map_err(transport)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(browser_only("GET", &self.visas_url(query)))
        }
    }

    /// `GET /visas/:id`.
    ///
    /// # Errors
    ///
    /// `Network` on transport failure, `Server` on a non-2xx status.
    pub async fn get_visa(&self, id: &str) -> Result<VisaListing, AppError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.visa_url(id))
                .send()
                .await
                .map_err(transport)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(browser_only("GET", &self.visa_url(id)))
        }
    }

    /// `POST /add-visa`.
    ///
    /// # Errors
    ///
    /// `Network` on transport failure, `Server` on a non-2xx status.
    pub async fn create_visa(&self, visa: &NewVisa) -> Result<(), AppError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.add_visa_url())
                .json(visa)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            check_status(resp).await.map(drop)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(browser_only_with("POST", &self.add_visa_url(), visa))
        }
    }

    /// `PUT /visas/:id` with only the changed fields.
    ///
    /// # Errors
    ///
    /// `Network` on transport failure, `Server` on a non-2xx status.
    pub async fn update_visa(&self, id: &str, update: &VisaUpdate) -> Result<(), AppError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::put(&self.visa_url(id))
                .json(update)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            check_status(resp).await.map(drop)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(browser_only_with("PUT", &self.visa_url(id), update))
        }
    }

    /// `DELETE /visas/:id`.
    ///
    /// # Errors
    ///
    /// `Network` on transport failure, `Server` on a non-2xx status.
    pub async fn delete_visa(&self, id: &str) -> Result<(), AppError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::delete(&self.visa_url(id))
                .send()
                .await
                .map_err(transport)?;
            check_status(resp).await.map(drop)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(browser_only("DELETE", &self.visa_url(id)))
        }
    }

    /// `POST /applications`.
    ///
    /// # Errors
    ///
    /// `Network` on transport failure, `Server` on a non-2xx status.
    pub async fn create_application(&self, application: &NewApplication) -> Result<(), AppError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.applications_url())
                .json(application)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            check_status(resp).await.map(drop)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(browser_only_with("POST", &self.applications_url(), application))
        }
    }

    /// `GET /my-applications?addedBy=email`.
    ///
    /// # Errors
    ///
    /// `Network` on transport failure, `Server` on a non-2xx status.
    pub async fn list_applications(&self, email: &str) -> Result<Vec<Application>, AppError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.my_applications_url(email))
                .send()
                .await
                .map_err(transport)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(browser_only("GET", &self.my_applications_url(email)))
        }
    }

    /// `DELETE /applications/:id`.
    ///
    /// # Errors
    ///
    /// `Network` on transport failure, `Server` on a non-2xx status.
    pub async fn delete_application(&self, id: &str) -> Result<(), AppError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::delete(&self.application_url(id))
                .send()
                .await
                .map_err(transport)?;
            check_status(resp).await.map(drop)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(browser_only("DELETE", &self.application_url(id)))
        }
    }
}

#[cfg(feature = "csr")]
fn transport(error: gloo_net::Error) -> AppError {
    AppError::Network(error.to_string())
}

#[cfg(feature = "csr")]
async fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, AppError> {
    if (200..300).contains(&resp.status()) {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(crate::error::server_error(status, &body))
}

#[cfg(feature = "csr")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, AppError> {
    let resp = check_status(resp).await?;
    resp.json::<T>()
        .await
        .map_err(|e| AppError::Network(format!("invalid response body: {e}")))
}

#[cfg(not(feature = "csr"))]
fn browser_only(method: &str, url: &str) -> AppError {
    log::trace!("{method} {url}: not sent outside the browser");
    AppError::Network("not available outside the browser".to_owned())
}

#[cfg(not(feature = "csr"))]
fn browser_only_with<B: serde::Serialize>(method: &str, url: &str, body: &B) -> AppError {
    let size = serde_json::to_vec(body).map_or(0, |bytes| bytes.len());
    log::trace!("{method} {url} ({size} byte body): not sent outside the browser");
    AppError::Network("not available outside the browser".to_owned())
}
