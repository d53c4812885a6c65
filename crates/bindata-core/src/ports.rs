//! Hexagonal port trait for the BIN data service.
//!
//! The single boundary an adapter must implement. Async and `dyn`-compatible
//! via `async_trait`.

use crate::{error::LookupError, types::BinLookup};

// ── BIN Data Port ────────────────────────────────────────────────────

/// Port for card metadata lookup against a card-data provider.
#[async_trait::async_trait]
pub trait BinDataPort: Send + Sync {
    /// Look up card metadata for `bin`.
    ///
    /// `enhanced` selects the richer provider response shape; `None` falls
    /// back to the adapter's configured default. The BIN is passed through
    /// to the provider unvalidated.
    async fn get_bin_data(
        &self,
        bin: &str,
        enhanced: Option<bool>,
    ) -> Result<BinLookup, LookupError>;
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::types::CardRecord;

    // ── Mock Port ────────────────────────────────────────────────

    struct MockPort {
        outcome: BinLookup,
    }

    #[async_trait::async_trait]
    impl BinDataPort for MockPort {
        async fn get_bin_data(
            &self,
            _bin: &str,
            _enhanced: Option<bool>,
        ) -> Result<BinLookup, LookupError> {
            Ok(self.outcome.clone())
        }
    }

    struct FailingPort;

    #[async_trait::async_trait]
    impl BinDataPort for FailingPort {
        async fn get_bin_data(
            &self,
            _bin: &str,
            _enhanced: Option<bool>,
        ) -> Result<BinLookup, LookupError> {
            Err(LookupError::Status { code: 503 })
        }
    }

    // ── Tests ────────────────────────────────────────────────────

    #[tokio::test]
    async fn port_returns_found_record() {
        let port: Arc<dyn BinDataPort> = Arc::new(MockPort {
            outcome: BinLookup::Found(CardRecord {
                card_brand: Some("VISA".to_string()),
                ..CardRecord::default()
            }),
        });

        let outcome = port.get_bin_data("411111", None).await.unwrap();
        match outcome {
            BinLookup::Found(card) => assert_eq!(card.card_brand.as_deref(), Some("VISA")),
            BinLookup::NotFound => panic!("expected a record"),
        }
    }

    #[tokio::test]
    async fn port_returns_not_found() {
        let port: Arc<dyn BinDataPort> = Arc::new(MockPort { outcome: BinLookup::NotFound });
        let outcome = port.get_bin_data("000000", Some(true)).await.unwrap();
        assert_eq!(outcome, BinLookup::NotFound);
    }

    #[tokio::test]
    async fn port_surfaces_tagged_errors() {
        let port: Arc<dyn BinDataPort> = Arc::new(FailingPort);
        let err = port.get_bin_data("411111", None).await.unwrap_err();
        assert!(matches!(err, LookupError::Status { code: 503 }));
    }
}
