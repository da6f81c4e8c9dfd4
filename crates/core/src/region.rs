//! Supported purchasing jurisdictions.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A purchasing region the concierge sources from.
///
/// Closed set: every region carries exactly one listed price per product and
/// one settlement conversion rate. `Ord` is derived so regions can key sorted
/// maps with deterministic iteration order.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Region {
    #[serde(rename = "AU")]
    Au,
    #[serde(rename = "UK")]
    Uk,
}

impl Region {
    /// All supported regions, in stable display order.
    pub const ALL: [Region; 2] = [Region::Au, Region::Uk];

    /// Two-letter region code as shown in the UI and in serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            Region::Au => "AU",
            Region::Uk => "UK",
        }
    }
}

impl core::fmt::Display for Region {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AU" => Ok(Region::Au),
            "UK" => Ok(Region::Uk),
            other => Err(DomainError::validation(format!("unknown region: {other}"))),
        }
    }
}
