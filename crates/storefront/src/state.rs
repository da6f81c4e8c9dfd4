use serde::{Deserialize, Serialize};
use thiserror::Error;

use iglobal_catalog::{Product, ProductId, products};
use iglobal_core::{DomainError, Language, Region};
use iglobal_pricing::{Quote, QuoteError, compute_quote, settlement_rates};

/// Failures surfaced by storefront operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Quote(#[from] QuoteError),
}

/// Serializable selection state for one storefront session.
///
/// Owns the three UI selections and nothing else. Quotes are recomputed on
/// every [`StorefrontState::quote`] call: the calculator is cheap and
/// side-effect-free, so there is nothing to cache or invalidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontState {
    pub language: Language,
    pub region: Region,
    selected: ProductId,
}

impl StorefrontState {
    /// Fresh session: Chinese copy, Australian pricing, first catalog entry.
    pub fn new() -> Self {
        // The catalog is compiled-in and non-empty.
        let selected = products()[0].id.clone();
        Self {
            language: Language::Zh,
            region: Region::Au,
            selected,
        }
    }

    /// Switch the active product. Unknown ids are rejected, so a state built
    /// through this API always points at a catalog entry.
    pub fn select_product(&mut self, id: &ProductId) -> Result<(), StorefrontError> {
        if products().iter().any(|p| &p.id == id) {
            self.selected = id.clone();
            Ok(())
        } else {
            Err(DomainError::not_found().into())
        }
    }

    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// The currently selected catalog product.
    ///
    /// Fails only for states deserialized with an id the catalog no longer
    /// carries; selections made through [`StorefrontState::select_product`]
    /// cannot dangle.
    pub fn selected_product(&self) -> Result<&'static Product, StorefrontError> {
        products()
            .iter()
            .find(|p| p.id == self.selected)
            .ok_or_else(|| DomainError::not_found().into())
    }

    /// Derive the quote for the current selection against the reference
    /// settlement rates. Recomputed on every call.
    pub fn quote(&self) -> Result<Quote, StorefrontError> {
        let product = self.selected_product()?;
        Ok(compute_quote(product, self.region, settlement_rates())?)
    }
}

impl Default for StorefrontState {
    fn default() -> Self {
        Self::new()
    }
}
