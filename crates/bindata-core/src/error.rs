//! Error types for the BIN data service.

/// Configuration errors, fatal at adapter construction time.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("PAGOS_API_KEY environment variable is required")]
    MissingApiKey,
}

/// BIN lookup errors.
///
/// Each variant tags one failure class so the tool boundary can log the
/// distinction before collapsing all of them into its fixed user-facing
/// reply.
#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    /// Connection or timeout failure before a response arrived.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-success HTTP status.
    #[error("provider returned HTTP status {code}")]
    Status { code: u16 },

    /// The response body could not be decoded into the wire schema.
    #[error("malformed provider payload: {0}")]
    MalformedPayload(String),
}

// ── Tests ────────────────────────────────────────────────────────────
