//! Storefront view state.
//!
//! Presentation-side state only: the current language, region and product
//! selection for one browsing session. The catalog and rate table stay in
//! read-only constants outside this state, and quotes are derived on demand
//! rather than cached.

pub mod state;

pub use state::{StorefrontError, StorefrontState};
