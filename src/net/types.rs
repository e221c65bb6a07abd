//! Wire DTOs for the visa REST API and the identity provider boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the server's camelCase JSON. Older listings were posted
//! from plain text inputs, so `fee` accepts JSON numbers, numeric strings, and
//! free text such as "100 USD"; text that is not a number is kept verbatim
//! rather than failing the whole response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// The signed-in user's profile as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-assigned stable user id.
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

impl Identity {
    /// Name shown in the navbar; falls back to the email address.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

/// Profile fields a freshly registered user can set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

/// Visa category. Unknown strings from the server are kept as `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VisaCategory {
    Tourist,
    Business,
    Work,
    Study,
    Other(String),
}

impl VisaCategory {
    /// The categories offered in select inputs, in display order.
    pub const KNOWN: [Self; 4] = [Self::Tourist, Self::Business, Self::Work, Self::Study];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Tourist => "Tourist",
            Self::Business => "Business",
            Self::Work => "Work",
            Self::Study => "Study",
            Self::Other(raw) => raw,
        }
    }

    /// Parse a select value; blank means "no category".
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() { None } else { Some(Self::from(raw.to_owned())) }
    }
}

impl From<String> for VisaCategory {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Tourist" => Self::Tourist,
            "Business" => Self::Business,
            "Work" => Self::Work,
            "Study" => Self::Study,
            _ => Self::Other(raw),
        }
    }
}

impl From<VisaCategory> for String {
    fn from(category: VisaCategory) -> Self {
        match category {
            VisaCategory::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for VisaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A visa listing as returned by `GET /visas` and `GET /visas/:id`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisaListing {
    #[serde(rename = "_id")]
    pub id: String,
    pub country: String,
    #[serde(rename = "visaType")]
    pub category: VisaCategory,
    #[serde(default)]
    pub fee: Fee,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub validity: Option<String>,
    #[serde(default)]
    pub processing_time: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "countryImageUrl", default)]
    pub image_url: String,
    #[serde(default)]
    pub application_method: Option<String>,
    /// Email of the identity that created the listing.
    #[serde(default)]
    pub added_by: Option<String>,
}

/// A listing fee as stored by the server.
///
/// Serializes back to the same JSON shape it came from, so application
/// snapshots carry the listing's fee unchanged.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fee {
    Amount(f64),
    /// Free text that does not parse as an amount, e.g. "Free".
    Text(String),
}

impl Fee {
    pub fn amount(&self) -> Option<f64> {
        match self {
            Self::Amount(amount) => Some(*amount),
            Self::Text(_) => None,
        }
    }
}

impl Default for Fee {
    fn default() -> Self {
        Self::Amount(0.0)
    }
}

impl From<f64> for Fee {
    fn from(amount: f64) -> Self {
        Self::Amount(amount)
    }
}

impl<'de> Deserialize<'de> for Fee {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Null => Self::default(),
            serde_json::Value::Number(number) => {
                number.as_f64().map_or_else(|| Self::Text(number.to_string()), Self::Amount)
            }
            serde_json::Value::String(text) if text.trim().is_empty() => Self::default(),
            serde_json::Value::String(text) => {
                parse_fee(&text).map_or_else(|| Self::Text(text.trim().to_owned()), Self::Amount)
            }
            other => Self::Text(other.to_string()),
        })
    }
}

/// Body of `POST /add-visa`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVisa {
    pub country: String,
    pub country_image_url: String,
    pub visa_type: VisaCategory,
    pub processing_time: String,
    pub fee: f64,
    pub validity: String,
    pub description: String,
    pub added_by: String,
}

/// Body of `PUT /visas/:id`; absent fields are left untouched by the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visa_type: Option<VisaCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A submitted application, as listed by `GET /my-applications`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub visa_id: Option<String>,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub visa_type: Option<VisaCategory>,
    #[serde(default)]
    pub fee: Fee,
    #[serde(default)]
    pub country_image_url: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub applied_date: String,
}

/// Body of `POST /applications`, carrying a snapshot of the listing.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub visa_id: String,
    pub country: String,
    pub visa_type: VisaCategory,
    pub country_image_url: String,
    pub fee: Fee,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub applied_date: String,
}

/// Parse a user-entered or server-sent fee.
pub fn parse_fee(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let raw = raw.strip_prefix('$').unwrap_or(raw).trim();
    match raw.parse::<f64>() {
        Ok(fee) if fee.is_finite() && fee >= 0.0 => Some(fee),
        _ => None,
    }
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(text) if text.trim().is_empty() => Ok(None),
        serde_json::Value::String(text) => Ok(Some(text)),
        serde_json::Value::Number(number) => Ok(Some(number.to_string())),
        other => Ok(Some(other.to_string())),
    }
}
