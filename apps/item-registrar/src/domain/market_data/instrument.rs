//! Instrument entry of the dealer catalog.

use serde::{Deserialize, Serialize};

use crate::domain::shared::ItemCode;

/// A tradable contract listed in the dealer's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    /// Commodity code used for registration.
    pub code: ItemCode,
    /// Human-readable contract name.
    pub name: String,
}

impl Instrument {
    /// Create a new instrument.
    #[must_use]
    pub fn new(code: impl Into<ItemCode>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Check whether `code` appears in a catalog.
#[must_use]
pub fn contains_code(catalog: &[Instrument], code: &ItemCode) -> bool {
    catalog.iter().any(|instrument| &instrument.code == code)
}
