//! The compiled-in product catalog.
//!
//! Four models, authored in release order. The list is process-wide static
//! configuration: initialized once, read-only for the life of the process.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use iglobal_core::{DomainError, DomainResult, Region};

use crate::product::{Product, ProductId};

static CATALOG: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        Product {
            id: ProductId::new("17-pro-max"),
            name: "iPhone 17 Pro Max".to_string(),
            spec_summary: "6.9\" Super Retina, A19 Pro, 48MP Periscope".to_string(),
            base_price_by_region: BTreeMap::from([(Region::Au, 2249), (Region::Uk, 1249)]),
            image_ref: "https://images.unsplash.com/photo-1695420950337-f10df0551101?auto=format&fit=crop&q=80&w=1200".to_string(),
            features: vec![
                "Polished Titanium".to_string(),
                "A19 Pro Chip".to_string(),
                "ProMotion 120Hz".to_string(),
            ],
        },
        Product {
            id: ProductId::new("17-pro"),
            name: "iPhone 17 Pro".to_string(),
            spec_summary: "6.3\" ProMotion, A19 Pro, New Action Button".to_string(),
            base_price_by_region: BTreeMap::from([(Region::Au, 1899), (Region::Uk, 1049)]),
            image_ref: "https://images.unsplash.com/photo-1678911820864-e2c567c655d7?auto=format&fit=crop&q=80&w=1200".to_string(),
            features: vec![
                "Siri with Apple Intelligence+".to_string(),
                "USB-C 4.0".to_string(),
                "ProRes Video".to_string(),
            ],
        },
        Product {
            id: ProductId::new("17-slim"),
            name: "iPhone 17 Air".to_string(),
            spec_summary: "6.6\" Ultra Slim Design, A19 Chip".to_string(),
            base_price_by_region: BTreeMap::from([(Region::Au, 1699), (Region::Uk, 949)]),
            image_ref: "https://images.unsplash.com/photo-1726053350320-c756209b0b46?auto=format&fit=crop&q=80&w=1200".to_string(),
            features: vec![
                "Ultra Lightweight".to_string(),
                "Single Powerful Cam".to_string(),
                "MagSafe 3".to_string(),
            ],
        },
        Product {
            id: ProductId::new("17-base"),
            name: "iPhone 17".to_string(),
            spec_summary: "6.1\" Dynamic Island, A19 Chip".to_string(),
            base_price_by_region: BTreeMap::from([(Region::Au, 1449), (Region::Uk, 849)]),
            image_ref: "https://images.unsplash.com/photo-1726581944517-575510f2795c?auto=format&fit=crop&q=80&w=1200".to_string(),
            features: vec![
                "A19 Chipset".to_string(),
                "Vibrant Colors".to_string(),
                "Advanced Spatial Video".to_string(),
            ],
        },
    ]
});

/// The fixed product catalog, in authored order.
///
/// No filtering, sorting or search: callers get the list as authored, every
/// time, and the read cannot fail.
pub fn products() -> &'static [Product] {
    &CATALOG
}

/// Check the catalog invariants against a set of supported regions.
///
/// Every product must carry a positive base price for every region, and ids
/// must be unique. The static catalog upholds this by construction; callers
/// assembling their own product lists get the same check.
pub fn validate_catalog(products: &[Product], regions: &[Region]) -> DomainResult<()> {
    let mut seen = BTreeSet::new();
    for product in products {
        if !seen.insert(&product.id) {
            return Err(DomainError::invariant(format!(
                "duplicate product id: {}",
                product.id
            )));
        }
        for region in regions {
            match product.base_price(*region) {
                Some(price) if price > 0 => {}
                Some(_) => {
                    return Err(DomainError::invariant(format!(
                        "product {} has a zero base price for region {region}",
                        product.id
                    )));
                }
                None => {
                    return Err(DomainError::invariant(format!(
                        "product {} has no base price for region {region}",
                        product.id
                    )));
                }
            }
        }
    }
    Ok(())
}
