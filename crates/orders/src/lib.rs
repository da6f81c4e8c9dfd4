//! Order intake and shipment tracking stubs.
//!
//! Neither has a real backend: intake acknowledges locally and keeps nothing,
//! tracking always reports the in-transit stage. The concierge handles actual
//! payment and fulfilment out of band.

pub mod intake;
pub mod tracking;

pub use intake::{LocalOrderIntake, OrderId, OrderIntake, OrderReceipt, ShippingDetails};
pub use tracking::{TrackingStatus, track};
