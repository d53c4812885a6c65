//! Bindata Adapter Implementations
//!
//! Concrete implementations of the `bindata-core` port traits:
//! - `parrot`: BIN lookup via the Pagos Parrot HTTP API

pub use bindata_core as core;

pub mod parrot;

mod wire;
