//! Endpoint and credential for the events listing.
//!
//! The credential is baked in at build time (`EVENTBOARD_CLIENT_ID`), which is
//! the only option on wasm. Native builds additionally honour the same names
//! from the runtime environment.

use url::Url;

use crate::error::Result;

pub const DEFAULT_ENDPOINT: &str = "https://api.seatgeek.com/2/events";

const CLIENT_ID_VAR: &str = "EVENTBOARD_CLIENT_ID";
const ENDPOINT_VAR: &str = "EVENTBOARD_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub endpoint: String,
    pub client_id: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            client_id: None,
        }
    }
}

impl ApiConfig {
    pub fn new(endpoint: impl Into<String>, client_id: Option<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client_id: non_empty(client_id),
        }
    }

    /// Values captured by `option_env!` when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("EVENTBOARD_API_URL").unwrap_or(DEFAULT_ENDPOINT),
            option_env!("EVENTBOARD_CLIENT_ID").map(str::to_string),
        )
    }

    /// Build-time values, overridden by the runtime environment where one exists.
    pub fn resolve() -> Self {
        let base = Self::from_build_env();

        #[cfg(not(target_arch = "wasm32"))]
        let base = {
            let endpoint = std::env::var(ENDPOINT_VAR).unwrap_or(base.endpoint);
            let client_id = std::env::var(CLIENT_ID_VAR).ok().or(base.client_id);
            Self::new(endpoint, client_id)
        };

        if base.client_id.is_none() {
            tracing::warn!(
                "{CLIENT_ID_VAR} is not set; requests to {} will likely be rejected",
                base.endpoint
            );
        }
        tracing::debug!(var = ENDPOINT_VAR, endpoint = %base.endpoint, "resolved events endpoint");
        base
    }

    pub fn request_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.endpoint)?;
        if let Some(id) = &self.client_id {
            url.query_pairs_mut().append_pair("client_id", id);
        }
        Ok(url)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
