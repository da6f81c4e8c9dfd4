//! Quote derivation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use iglobal_catalog::{Product, ProductId};
use iglobal_core::{Region, ValueObject};

use crate::rates::RateTable;

/// Service fee applied to the converted subtotal.
pub const SERVICE_FEE_RATE: f64 = 0.05;

/// Derived price breakdown in whole settlement-currency units.
///
/// A quote is a view-model value: recomputed on every selection change, never
/// stored, no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Region base price converted into the settlement currency.
    pub subtotal: u64,
    /// Concierge service fee on the converted subtotal.
    pub fee: u64,
    /// `subtotal + fee`.
    pub total: u64,
}

impl ValueObject for Quote {}

/// Quote computation failures.
///
/// Both are fatal to the computation: the calculator never substitutes a
/// default price or another region's data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("product {product_id} has no base price for region {region}")]
    MissingPrice {
        product_id: ProductId,
        region: Region,
    },

    #[error("no settlement rate configured for region {region}")]
    MissingRate { region: Region },
}

/// Derive the quote for `product` purchased in `region`, settled via `rates`.
///
/// Pure function of its inputs: identical inputs always yield identical
/// output. Rounding is to the nearest whole unit, half away from zero.
pub fn compute_quote(
    product: &Product,
    region: Region,
    rates: &RateTable,
) -> Result<Quote, QuoteError> {
    let base_price = product
        .base_price(region)
        .ok_or_else(|| QuoteError::MissingPrice {
            product_id: product.id.clone(),
            region,
        })?;
    let rate = rates.get(&region).ok_or(QuoteError::MissingRate { region })?;

    // `f64::round` rounds half away from zero; all inputs are non-negative.
    let subtotal = (base_price as f64 * rate.multiplier).round() as u64;
    let fee = (subtotal as f64 * SERVICE_FEE_RATE).round() as u64;

    Ok(Quote {
        subtotal,
        fee,
        total: subtotal + fee,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use iglobal_catalog::products;

    use crate::rates::{Rate, settlement_rates};

    fn product(id: &str) -> &'static Product {
        products()
            .iter()
            .find(|p| p.id.as_str() == id)
            .unwrap_or_else(|| panic!("catalog product {id} missing"))
    }

    #[test]
    fn pro_max_in_au_quotes_reference_breakdown() {
        let quote = compute_quote(product("17-pro-max"), Region::Au, settlement_rates()).unwrap();
        assert_eq!(
            quote,
            Quote {
                subtotal: 10683,
                fee: 534,
                total: 11217
            }
        );
    }

    #[test]
    fn pro_max_in_uk_quotes_reference_breakdown() {
        let quote = compute_quote(product("17-pro-max"), Region::Uk, settlement_rates()).unwrap();
        assert_eq!(
            quote,
            Quote {
                subtotal: 11553,
                fee: 578,
                total: 12131
            }
        );
    }

    #[test]
    fn base_model_in_au_quotes_reference_breakdown() {
        let quote = compute_quote(product("17-base"), Region::Au, settlement_rates()).unwrap();
        assert_eq!(
            quote,
            Quote {
                subtotal: 6883,
                fee: 344,
                total: 7227
            }
        );
    }

    #[test]
    fn identical_inputs_yield_identical_quotes() {
        let first = compute_quote(product("17-pro"), Region::Uk, settlement_rates()).unwrap();
        let second = compute_quote(product("17-pro"), Region::Uk, settlement_rates()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_region_price_is_rejected() {
        let mut product = product("17-pro").clone();
        product.base_price_by_region.remove(&Region::Uk);

        let err = compute_quote(&product, Region::Uk, settlement_rates()).unwrap_err();
        match err {
            QuoteError::MissingPrice { product_id, region } => {
                assert_eq!(product_id, product.id);
                assert_eq!(region, Region::Uk);
            }
            _ => panic!("Expected MissingPrice error"),
        }
    }

    #[test]
    fn missing_rate_is_rejected() {
        let mut rates = settlement_rates().clone();
        rates.remove(&Region::Au);

        let err = compute_quote(product("17-pro"), Region::Au, &rates).unwrap_err();
        match err {
            QuoteError::MissingRate { region } => assert_eq!(region, Region::Au),
            _ => panic!("Expected MissingRate error"),
        }
    }

    #[test]
    fn region_switch_changes_total_without_mutating_inputs() {
        let product = product("17-pro-max");
        let rates = settlement_rates();

        let product_before = product.clone();
        let rates_before = rates.clone();

        let au = compute_quote(product, Region::Au, rates).unwrap();
        let uk = compute_quote(product, Region::Uk, rates).unwrap();

        assert_ne!(au.total, uk.total);
        assert_eq!(*product, product_before);
        assert_eq!(*rates, rates_before);
    }

    #[test]
    fn higher_converted_base_price_yields_higher_total() {
        // UK converts higher than AU for the Pro Max (11553.25 vs 10682.75).
        let au = compute_quote(product("17-pro-max"), Region::Au, settlement_rates()).unwrap();
        let uk = compute_quote(product("17-pro-max"), Region::Uk, settlement_rates()).unwrap();
        assert!(uk.subtotal > au.subtotal);
        assert!(uk.total > au.total);
    }

    fn test_product(base_price: u64) -> Product {
        Product {
            id: ProductId::new("prop-phone"),
            name: "Prop Phone".to_string(),
            spec_summary: String::new(),
            base_price_by_region: BTreeMap::from([(Region::Au, base_price)]),
            image_ref: String::new(),
            features: vec![],
        }
    }

    fn test_rates(multiplier: f64) -> RateTable {
        BTreeMap::from([(
            Region::Au,
            Rate {
                multiplier,
                currency_symbol: '$',
            },
        )])
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: quotes are deterministic for any valid input.
            #[test]
            fn compute_quote_is_deterministic(
                base_price in 1u64..5_000_000,
                multiplier in 0.01f64..100.0,
            ) {
                let product = test_product(base_price);
                let rates = test_rates(multiplier);

                let first = compute_quote(&product, Region::Au, &rates).unwrap();
                let second = compute_quote(&product, Region::Au, &rates).unwrap();
                prop_assert_eq!(first, second);
            }

            /// Property: the fee is exactly 5% of the rounded subtotal.
            #[test]
            fn fee_is_five_percent_of_subtotal(
                base_price in 1u64..5_000_000,
                multiplier in 0.01f64..100.0,
            ) {
                let product = test_product(base_price);
                let rates = test_rates(multiplier);

                let quote = compute_quote(&product, Region::Au, &rates).unwrap();
                let expected_fee = (quote.subtotal as f64 * SERVICE_FEE_RATE).round() as u64;
                prop_assert_eq!(quote.fee, expected_fee);
            }

            /// Property: the total is exactly subtotal + fee.
            #[test]
            fn total_is_subtotal_plus_fee(
                base_price in 1u64..5_000_000,
                multiplier in 0.01f64..100.0,
            ) {
                let product = test_product(base_price);
                let rates = test_rates(multiplier);

                let quote = compute_quote(&product, Region::Au, &rates).unwrap();
                prop_assert_eq!(quote.total, quote.subtotal + quote.fee);
            }

            /// Property: totals order the same way as converted subtotals.
            #[test]
            fn totals_follow_subtotal_ordering(
                base_a in 1u64..5_000_000,
                base_b in 1u64..5_000_000,
                multiplier in 0.01f64..100.0,
            ) {
                let rates = test_rates(multiplier);

                let quote_a = compute_quote(&test_product(base_a), Region::Au, &rates).unwrap();
                let quote_b = compute_quote(&test_product(base_b), Region::Au, &rates).unwrap();

                if quote_a.subtotal > quote_b.subtotal {
                    prop_assert!(quote_a.total > quote_b.total);
                } else if quote_a.subtotal < quote_b.subtotal {
                    prop_assert!(quote_a.total < quote_b.total);
                } else {
                    prop_assert_eq!(quote_a.total, quote_b.total);
                }
            }
        }
    }
}
