//! # Parrot BIN Data Adapter
//!
//! Parrot HTTP adapter — implements [`BinDataPort`] against the Pagos
//! Parrot card-data API.
//!
//! ## Overview
//!
//! One lookup is one `GET /bins?bin=<value>&enhanced=<true|false>` with a
//! static `x-api-key` header. The full body is awaited, decoded through the
//! wire schema, and mapped into the domain model; nothing is retried,
//! cached, or pooled across calls.
//!
//! ## Example
//!
//! ```rust,ignore
//! use bindata_adapters::parrot::ParrotClient;
//! use bindata_core::{ports::BinDataPort, types::BinLookup};
//!
//! let client = ParrotClient::from_env()?;
//!
//! match client.get_bin_data("411111", None).await? {
//!     BinLookup::Found(card) => println!("{:?}", card.card_brand),
//!     BinLookup::NotFound => println!("no data"),
//! }
//! ```

use bindata_core::{
    error::{ConfigError, LookupError},
    ports::BinDataPort,
    types::BinLookup,
};

use crate::wire;

/// Default Parrot API endpoint.
const BASE_URL: &str = "https://parrot.prod.pagosapi.com/bins";
/// Environment variable holding the API key.
const API_KEY_VAR: &str = "PAGOS_API_KEY";
/// Environment variable selecting the enhanced response shape by default.
const ENHANCED_VAR: &str = "ENHANCED_BIN_DATA";

/// Adapter that looks up BIN metadata via the Parrot API.
pub struct ParrotClient {
    api_key: String,
    enhanced: bool,
    base_url: String,
}

impl std::fmt::Debug for ParrotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The API key stays out of Debug output.
        f.debug_struct("ParrotClient")
            .field("enhanced", &self.enhanced)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ParrotClient {
    /// Create a client with an explicit API key and enhanced-mode default.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingApiKey`] for an empty key.
    pub fn new(api_key: impl Into<String>, enhanced: bool) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(Self { api_key, enhanced, base_url: BASE_URL.to_string() })
    }

    /// Create a client from the process environment: `PAGOS_API_KEY`
    /// (required) and `ENHANCED_BIN_DATA` (optional, defaults to basic).
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingApiKey`] when the key is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_VAR).unwrap_or_default();
        let enhanced = std::env::var(ENHANCED_VAR)
            .map(|value| parse_enhanced_flag(&value))
            .unwrap_or(false);
        Self::new(api_key, enhanced)
    }

    /// Override the provider endpoint (e.g. to point at a staging host).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// `"true"` in any casing selects enhanced mode; anything else is basic.
fn parse_enhanced_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

#[async_trait::async_trait]
impl BinDataPort for ParrotClient {
    async fn get_bin_data(
        &self,
        bin: &str,
        enhanced: Option<bool>,
    ) -> Result<BinLookup, LookupError> {
        let enhanced = enhanced.unwrap_or(self.enhanced);
        tracing::debug!(bin = %bin, enhanced, "BIN lookup request");

        // A fresh client per call: connections are scoped to one lookup.
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| LookupError::Transport(err.to_string()))?;

        let response = client
            .get(&self.base_url)
            .query(&[("bin", bin), ("enhanced", if enhanced { "true" } else { "false" })])
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(|err| LookupError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status { code: status.as_u16() });
        }

        let body = response
            .text()
            .await
            .map_err(|err| LookupError::Transport(err.to_string()))?;

        wire::parse_body(&body)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
