//! The boundary between the order form and whatever accepts orders.
//!
//! Everything above this trait is synchronous and pure. Implementations may
//! perform real I/O or, as the CLI does, only simulate latency.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::order::{OrderTotals, ShipmentOrder};
use crate::rules::ValidationMessage;
use crate::session::SessionContext;
use crate::types::{AccountCode, AccountTier, ReceiptId};

/// Errors returned by an [`OrderBackend`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The order failed validation on the receiving side.
    #[error("order rejected with {} blocking message(s)", blocking_count(.0))]
    Rejected(Vec<ValidationMessage>),

    /// Sign-in was refused.
    #[error("sign-in refused: {0}")]
    SignInRefused(String),

    /// The backend could not be reached.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

fn blocking_count(messages: &[ValidationMessage]) -> usize {
    messages.iter().filter(|m| m.is_blocking()).count()
}

/// Credentials presented at sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub account: AccountCode,
    pub display_name: String,
    pub tier: AccountTier,
}

/// Proof of a submitted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: ReceiptId,
    /// Human-facing reference printed on shipping labels.
    pub reference: String,
    pub account: AccountCode,
    pub totals: OrderTotals,
    pub submitted_at: DateTime<Utc>,
}

/// Accepts sign-ins and orders.
pub trait OrderBackend {
    /// Establish a session.
    fn sign_in(
        &self,
        request: SignInRequest,
    ) -> impl Future<Output = Result<SessionContext, BackendError>> + Send;

    /// Submit an order on behalf of `session`.
    fn submit(
        &self,
        session: &SessionContext,
        order: &ShipmentOrder,
    ) -> impl Future<Output = Result<Receipt, BackendError>> + Send;
}
