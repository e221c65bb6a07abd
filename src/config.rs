//! Application configuration baked in from the build environment.
//!
//! The WASM bundle has no process environment at runtime, so values are
//! captured with `option_env!` when the crate is compiled and parsed through
//! [`AppConfig::from_lookup`], which tests drive with a plain map.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const SERVER_URL_VAR: &str = "VISA_SERVER_URL";
pub const IDENTITY_API_KEY_VAR: &str = "VISA_IDENTITY_API_KEY";
pub const GOOGLE_CLIENT_ID_VAR: &str = "VISA_GOOGLE_CLIENT_ID";

/// Errors produced while building [`AppConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable was absent or blank at build time.
    #[error("missing configuration: {var} not set")]
    Missing { var: &'static str },

    /// A variable was present but unusable.
    #[error("invalid configuration for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Identity provider settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityConfig {
    pub api_key: String,
    /// OAuth client id for the federated consent popup; `None` disables it.
    pub google_client_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// REST base URL without a trailing slash.
    pub server_url: String,
    pub identity: IdentityConfig,
}

impl AppConfig {
    /// Build typed config from the variables captured at compile time.
    ///
    /// Required:
    /// - `VISA_SERVER_URL`
    /// - `VISA_IDENTITY_API_KEY`
    ///
    /// Optional:
    /// - `VISA_GOOGLE_CLIENT_ID`
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match key {
            SERVER_URL_VAR => option_env!("VISA_SERVER_URL").map(str::to_owned),
            IDENTITY_API_KEY_VAR => option_env!("VISA_IDENTITY_API_KEY").map(str::to_owned),
            GOOGLE_CLIENT_ID_VAR => option_env!("VISA_GOOGLE_CLIENT_ID").map(str::to_owned),
            _ => None,
        })
    }

    /// Build typed config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_url = parse_server_url(required(&lookup, SERVER_URL_VAR)?)?;
        let api_key = required(&lookup, IDENTITY_API_KEY_VAR)?;
        let google_client_id = optional(&lookup, GOOGLE_CLIENT_ID_VAR);

        Ok(Self { server_url, identity: IdentityConfig { api_key, google_client_id } })
    }
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, var).ok_or(ConfigError::Missing { var })
}

fn optional<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_server_url(raw: String) -> Result<String, ConfigError> {
    let scheme_and_rest = raw
        .split_once("://")
        .filter(|(scheme, _)| matches!(*scheme, "http" | "https"));
    let Some((scheme, rest)) = scheme_and_rest else {
        return Err(ConfigError::Invalid {
            var: SERVER_URL_VAR,
            reason: format!("expected an http(s) URL, got '{raw}'"),
        });
    };
    let rest = rest.trim_end_matches('/');
    if rest.is_empty() {
        return Err(ConfigError::Invalid { var: SERVER_URL_VAR, reason: "URL has no host".to_owned() });
    }
    Ok(format!("{scheme}://{rest}"))
}
