use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use iglobal_core::Region;

/// Product identifier: an opaque stable string key, unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A catalog product.
///
/// Products are authored at build time and never mutated: the storefront only
/// ever reads them. Prices are region-local list prices in whole currency
/// units, before conversion or fees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Free-text spec line; display-only, never parsed.
    pub spec_summary: String,
    /// Region-local list price per supported region, in whole currency units.
    pub base_price_by_region: BTreeMap<Region, u64>,
    /// Opaque image URI; not validated here.
    pub image_ref: String,
    /// Ordered marketing feature list; may be empty.
    pub features: Vec<String>,
}

impl Product {
    /// Region-local base price, if the product is listed in `region`.
    pub fn base_price(&self, region: Region) -> Option<u64> {
        self.base_price_by_region.get(&region).copied()
    }
}
