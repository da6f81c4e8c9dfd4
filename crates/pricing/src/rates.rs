//! Settlement-rate configuration.
//!
//! Rates are fixed constants, not fetched live: the storefront quotes an
//! estimate, and the concierge confirms the final amount out of band.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use iglobal_core::{Region, ValueObject};

/// Conversion of one region's list prices into the settlement currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    /// Positive multiplier from region-local whole units into settlement
    /// whole units.
    pub multiplier: f64,
    /// Display symbol of the region-local currency.
    pub currency_symbol: char,
}

impl ValueObject for Rate {}

/// Mapping from region to its settlement conversion rate.
///
/// The calculator takes this as a parameter; the static table below is the
/// reference configuration, not an implicit global.
pub type RateTable = BTreeMap<Region, Rate>;

static SETTLEMENT_RATES: LazyLock<RateTable> = LazyLock::new(|| {
    BTreeMap::from([
        (
            Region::Au,
            Rate {
                multiplier: 4.75,
                currency_symbol: '$',
            },
        ),
        (
            Region::Uk,
            Rate {
                multiplier: 9.25,
                currency_symbol: '£',
            },
        ),
    ])
});

/// Reference settlement rates (AUD→CNY, GBP→CNY), loaded once and read-only.
pub fn settlement_rates() -> &'static RateTable {
    &SETTLEMENT_RATES
}
