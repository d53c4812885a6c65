//! Bindata Core — domain types, ports, and rendering
//!
//! This crate defines the boundary of the BIN data service: the card
//! metadata domain model, the error taxonomy, the provider port trait, and
//! the deterministic report formatter.
//!
//! **No concrete implementations live here** — only contracts and pure
//! functions.

// ── Modules ──────────────────────────────────────────────────────────

pub mod error;
pub mod format;
pub mod ports;
pub mod types;

// ── Re-exports ───────────────────────────────────────────────────────

pub use error::{ConfigError, LookupError};
pub use format::{NO_BIN_DATA, format_bin_data};
pub use ports::BinDataPort;
pub use types::*;
