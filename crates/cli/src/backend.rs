//! Simulated order backend.
//!
//! Stands in for the real portal API: every call sleeps for the configured
//! latency, then answers locally. Submissions are re-validated with the full
//! submission rule set and receive a fabricated receipt reference. Nothing is
//! stored.

use std::time::Duration;

use chrono::{DateTime, Utc};
use parcelport_core::rules::{ValidationPolicy, blocks_submission, check_submission};
use parcelport_core::{
    BackendError, OrderBackend, Receipt, ReceiptId, SessionContext, ShipmentOrder, SignInRequest,
};
use rand::Rng;
use tracing::{info, instrument, warn};

/// Receipt references look like `PP-20261018-004217`.
const REFERENCE_PREFIX: &str = "PP";

/// A backend that only pretends to talk to a server.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    latency: Duration,
    policy: ValidationPolicy,
}

impl SimulatedBackend {
    #[must_use]
    pub const fn new(latency: Duration, policy: ValidationPolicy) -> Self {
        Self { latency, policy }
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl OrderBackend for SimulatedBackend {
    #[instrument(skip(self, request), fields(account = %request.account))]
    async fn sign_in(&self, request: SignInRequest) -> Result<SessionContext, BackendError> {
        self.delay().await;

        let display_name = request.display_name.trim();
        if display_name.is_empty() {
            return Err(BackendError::SignInRefused(
                "display name is required".to_string(),
            ));
        }

        info!(tier = %request.tier, "Signed in");
        Ok(SessionContext::new(request.account, display_name, request.tier))
    }

    #[instrument(skip(self, session, order), fields(account = %session.account, items = order.items.len()))]
    async fn submit(
        &self,
        session: &SessionContext,
        order: &ShipmentOrder,
    ) -> Result<Receipt, BackendError> {
        self.delay().await;

        let messages = check_submission(order, &self.policy);
        if blocks_submission(&messages) {
            warn!(messages = messages.len(), "Order rejected");
            return Err(BackendError::Rejected(messages));
        }

        let submitted_at = Utc::now();
        let receipt = Receipt {
            id: ReceiptId::new(),
            reference: fabricate_reference(submitted_at),
            account: session.account.clone(),
            totals: order.totals(),
            submitted_at,
        };
        info!(reference = %receipt.reference, "Order accepted");
        Ok(receipt)
    }
}

fn fabricate_reference(at: DateTime<Utc>) -> String {
    let serial: u32 = rand::rng().random_range(0..1_000_000);
    format!("{REFERENCE_PREFIX}-{}-{serial:06}", at.format("%Y%m%d"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use parcelport_core::{AccountCode, AccountTier, Country, LineItem, ShipmentMode};

    use super::*;

    fn backend() -> SimulatedBackend {
        SimulatedBackend::new(Duration::ZERO, ValidationPolicy::default())
    }

    fn request(name: &str) -> SignInRequest {
        SignInRequest {
            account: AccountCode::parse("acme").unwrap(),
            display_name: name.to_string(),
            tier: AccountTier::Individual,
        }
    }

    #[test]
    fn test_reference_format() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
        let reference = fabricate_reference(at);
        assert!(reference.starts_with("PP-20261018-"));
        assert_eq!(reference.len(), "PP-20261018-000000".len());
    }

    #[tokio::test]
    async fn test_sign_in_requires_name() {
        let err = backend().sign_in(request("  ")).await.unwrap_err();
        assert!(matches!(err, BackendError::SignInRefused(_)));

        let session = backend().sign_in(request(" Acme ")).await.unwrap();
        assert_eq!(session.display_name, "Acme");
    }

    #[tokio::test]
    async fn test_submit_rejects_blocked_order() {
        let backend = backend();
        let session = backend.sign_in(request("Acme")).await.unwrap();
        let order = ShipmentOrder::new(ShipmentMode::Sea, Country::China);

        let err = backend.submit(&session, &order).await.unwrap_err();
        let BackendError::Rejected(messages) = err else {
            panic!("expected rejection");
        };
        assert!(blocks_submission(&messages));
    }

    #[tokio::test]
    async fn test_submit_accepts_valid_order() {
        let backend = backend();
        let session = backend.sign_in(request("Acme")).await.unwrap();
        let mut order = ShipmentOrder::new(ShipmentMode::Sea, Country::China);
        order.tracking_number = "TH-0001".to_string();
        order.add_item(
            LineItem::new("6109.10", "T-shirts")
                .with_quantity(10)
                .with_weight("0.3".parse().unwrap())
                .with_dimensions(30.into(), 20.into(), 5.into()),
        );

        let receipt = backend.submit(&session, &order).await.unwrap();
        assert_eq!(receipt.account, session.account);
        assert_eq!(receipt.totals.quantity, 10);
        assert_eq!(receipt.totals.cbm, "0.03".parse().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let backend = SimulatedBackend::new(Duration::from_secs(2), ValidationPolicy::default());
        let started = tokio::time::Instant::now();
        backend.sign_in(request("Acme")).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(2));
    }
}
