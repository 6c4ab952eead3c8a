//! Signed-in customer identity.
//!
//! A [`SessionContext`] is handed explicitly to whatever needs to know who is
//! acting. Loading and saving it is the application's job; this crate holds
//! no global session state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AccountCode, AccountTier};

/// The signed-in customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub account: AccountCode,
    pub display_name: String,
    pub tier: AccountTier,
    pub signed_in_at: DateTime<Utc>,
}

impl SessionContext {
    #[must_use]
    pub fn new(account: AccountCode, display_name: impl Into<String>, tier: AccountTier) -> Self {
        Self {
            account,
            display_name: display_name.into(),
            tier,
            signed_in_at: Utc::now(),
        }
    }

    /// Bulk upload is limited to corporate accounts.
    #[must_use]
    pub fn can_bulk_import(&self) -> bool {
        self.tier == AccountTier::Corporate
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_import_requires_corporate() {
        let code = AccountCode::parse("acme").unwrap();
        let individual = SessionContext::new(code.clone(), "Somchai", AccountTier::Individual);
        let corporate = SessionContext::new(code, "Acme Co.", AccountTier::Corporate);
        assert!(!individual.can_bulk_import());
        assert!(corporate.can_bulk_import());
    }

    #[test]
    fn test_serde_roundtrip() {
        let session = SessionContext::new(
            AccountCode::parse("CORP-1").unwrap(),
            "Acme Co.",
            AccountTier::Corporate,
        );
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"tier\":\"corporate\""));
        let parsed: SessionContext = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session);
    }
}
