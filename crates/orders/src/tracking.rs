use serde::{Deserialize, Serialize};

use iglobal_core::{DomainError, DomainResult};

/// Shipment stages surfaced by the tracking widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingStatus {
    OrderPlaced,
    Shipped,
    InTransit,
    Customs,
    Delivered,
}

/// Tracking lookup stub.
///
/// There is no carrier integration: any non-blank reference reports the
/// in-transit stage, matching the concierge's manual fulfilment flow.
pub fn track(reference: &str) -> DomainResult<TrackingStatus> {
    if reference.trim().is_empty() {
        return Err(DomainError::validation("tracking reference cannot be empty"));
    }
    Ok(TrackingStatus::InTransit)
}
