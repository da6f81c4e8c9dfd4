use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use iglobal_core::{DomainError, DomainResult, ValueObject};
use iglobal_pricing::Quote;

/// Order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Shipping details collected by the order form.
///
/// Held only for the duration of a submission; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetails {
    pub full_name: String,
    pub phone: String,
    pub address: String,
}

impl ShippingDetails {
    pub fn validate(&self) -> DomainResult<()> {
        if self.full_name.trim().is_empty() {
            return Err(DomainError::validation("full name cannot be empty"));
        }
        if self.phone.trim().is_empty() {
            return Err(DomainError::validation("phone number cannot be empty"));
        }
        if self.address.trim().is_empty() {
            return Err(DomainError::validation("shipping address cannot be empty"));
        }
        Ok(())
    }
}

impl ValueObject for ShippingDetails {}

/// Acknowledgement returned to the buyer after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: OrderId,
    /// The quote shown at submission time, echoed back verbatim.
    pub quote: Quote,
    pub placed_at: DateTime<Utc>,
}

/// Order submission boundary.
pub trait OrderIntake: Send + Sync {
    fn submit(&self, details: &ShippingDetails, quote: Quote) -> DomainResult<OrderReceipt>;
}

/// Local intake stub: validates and acknowledges, nothing else.
///
/// No storage, no payment. A concierge follows up within 24 hours using the
/// details the buyer just confirmed on screen.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalOrderIntake;

impl OrderIntake for LocalOrderIntake {
    fn submit(&self, details: &ShippingDetails, quote: Quote) -> DomainResult<OrderReceipt> {
        details.validate()?;

        let receipt = OrderReceipt {
            order_id: OrderId::new(),
            quote,
            placed_at: Utc::now(),
        };
        tracing::info!(order_id = %receipt.order_id, total = quote.total, "order acknowledged");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> ShippingDetails {
        ShippingDetails {
            full_name: "Wei Chen".to_string(),
            phone: "+86 138 0000 0000".to_string(),
            address: "88 Nanjing Road, Shanghai".to_string(),
        }
    }

    fn quote() -> Quote {
        Quote {
            subtotal: 10683,
            fee: 534,
            total: 11217,
        }
    }

    #[test]
    fn submission_echoes_quote_in_receipt() {
        let receipt = LocalOrderIntake.submit(&details(), quote()).unwrap();
        assert_eq!(receipt.quote, quote());
    }

    #[test]
    fn each_submission_gets_a_fresh_order_id() {
        let first = LocalOrderIntake.submit(&details(), quote()).unwrap();
        let second = LocalOrderIntake.submit(&details(), quote()).unwrap();
        assert_ne!(first.order_id, second.order_id);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut bad = details();
        bad.full_name = "   ".to_string();

        let err = LocalOrderIntake.submit(&bad, quote()).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("full name")),
            _ => panic!("Expected Validation error for blank name"),
        }
    }

    #[test]
    fn blank_phone_is_rejected() {
        let mut bad = details();
        bad.phone = String::new();

        let err = LocalOrderIntake.submit(&bad, quote()).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("phone")),
            _ => panic!("Expected Validation error for blank phone"),
        }
    }

    #[test]
    fn blank_address_is_rejected() {
        let mut bad = details();
        bad.address = "\n".to_string();

        let err = LocalOrderIntake.submit(&bad, quote()).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("address")),
            _ => panic!("Expected Validation error for blank address"),
        }
    }
}
