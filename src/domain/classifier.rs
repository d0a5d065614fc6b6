//! Deal classification.
//!
//! [`classify`] is pure: it looks at one listing and the configured criteria
//! and returns a [`Verdict`]. Missing pricing data is an expected condition
//! on this feed and yields [`Verdict::Ineligible`] rather than an error.

use serde::Deserialize;
use std::fmt;

use super::listing::{Cents, Listing};

/// Which price a listing's ask is compared against.
///
/// The two sources are not interchangeable; pick one per deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceSource {
    /// Steam Community Market price of the item.
    #[default]
    Steam,
    /// The platform's own base/reference price for the listing.
    Platform,
}

impl ReferenceSource {
    /// Resolve the reference price for `listing`, if the feed supplied one.
    #[must_use]
    pub fn resolve(self, listing: &Listing) -> Option<Cents> {
        match self {
            Self::Steam => listing.item.steam_price,
            Self::Platform => listing.reference.and_then(|r| r.base_price),
        }
    }
}

impl fmt::Display for ReferenceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Steam => f.write_str("steam"),
            Self::Platform => f.write_str("platform"),
        }
    }
}

/// Criteria a listing must meet to count as a deal.
#[derive(Debug, Clone, Deserialize)]
pub struct DealCriteria {
    /// Minimum discount percentage. A discount equal to this is not enough.
    #[serde(default = "default_min_discount")]
    pub min_discount: f64,

    /// Price floor in cents. The reference price must exceed it.
    #[serde(default = "default_min_price")]
    pub min_price: Cents,

    /// Price ceiling in cents. The list price must not exceed it.
    #[serde(default = "default_max_price")]
    pub max_price: Cents,

    /// Name substrings, matched case-sensitively. `★` matches knives and gloves.
    #[serde(default = "default_allow_list")]
    pub allow_list: Vec<String>,

    /// Admit Well-Worn and Battle-Scarred items. When false, both tiers are
    /// rejected.
    #[serde(default)]
    pub include_well_worn: bool,

    #[serde(default)]
    pub include_souvenir: bool,

    #[serde(default)]
    pub reference_source: ReferenceSource,

    /// Compare the seller's minimum accepted offer instead of the list price.
    #[serde(default)]
    pub bargain: bool,
}

fn default_min_discount() -> f64 {
    24.0
}

fn default_min_price() -> Cents {
    1_000
}

fn default_max_price() -> Cents {
    50_000
}

fn default_allow_list() -> Vec<String> {
    ["AWP", "AK-47", "M4A1-S", "M4A4", "Desert Eagle", "USP-S", "★"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for DealCriteria {
    fn default() -> Self {
        Self {
            min_discount: default_min_discount(),
            min_price: default_min_price(),
            max_price: default_max_price(),
            allow_list: default_allow_list(),
            include_well_worn: false,
            include_souvenir: false,
            reference_source: ReferenceSource::default(),
            bargain: false,
        }
    }
}

impl DealCriteria {
    /// Whether any allow-list entry occurs in `name`.
    #[must_use]
    pub fn allows(&self, name: &str) -> bool {
        self.allow_list.iter().any(|entry| name.contains(entry.as_str()))
    }
}

/// A field the classifier needed but the listing did not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    ReferencePrice,
    ListPrice,
    BargainPrice,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReferencePrice => write!(f, "reference price"),
            Self::ListPrice => write!(f, "list price"),
            Self::BargainPrice => write!(f, "minimum offer price"),
        }
    }
}

/// Why an eligible listing was not a deal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    BelowThreshold { discount: f64 },
    BelowPriceFloor { reference: Cents },
    AbovePriceCeiling { price: Cents },
    NotAllowListed,
    WellWorn,
    Souvenir,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowThreshold { discount } => write!(f, "discount {discount:.1}% too small"),
            Self::BelowPriceFloor { reference } => {
                write!(f, "reference price {reference} at or below floor")
            }
            Self::AbovePriceCeiling { price } => write!(f, "price {price} above ceiling"),
            Self::NotAllowListed => write!(f, "name not in allow-list"),
            Self::WellWorn => write!(f, "well-worn items excluded"),
            Self::Souvenir => write!(f, "souvenir items excluded"),
        }
    }
}

/// Outcome of classifying one listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// The listing is a deal at `discount` percent below reference.
    Deal { discount: f64 },
    Rejected(Rejection),
    Ineligible(MissingField),
}

impl Verdict {
    #[must_use]
    pub fn is_deal(&self) -> bool {
        matches!(self, Self::Deal { .. })
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deal { discount } => write!(f, "deal at {discount:.1}% off"),
            Self::Rejected(reason) => write!(f, "rejected: {reason}"),
            Self::Ineligible(field) => write!(f, "ineligible: missing {field}"),
        }
    }
}

/// Discount of `ask` against `reference`, in percent.
///
/// Equal to `(1 - ask / reference) * 100`, computed from the integer
/// difference so that round figures compare exactly against the threshold.
#[must_use]
pub fn discount_pct(ask: Cents, reference: Cents) -> f64 {
    (reference as f64 - ask as f64) * 100.0 / reference as f64
}

/// Classify a listing against `criteria`.
#[must_use]
pub fn classify(listing: &Listing, criteria: &DealCriteria) -> Verdict {
    let reference = match criteria.reference_source.resolve(listing) {
        Some(reference) if reference > 0 => reference,
        _ => return Verdict::Ineligible(MissingField::ReferencePrice),
    };

    let ask = if criteria.bargain {
        match listing.min_offer_price {
            Some(price) => price,
            None => return Verdict::Ineligible(MissingField::BargainPrice),
        }
    } else {
        match listing.price {
            Some(price) => price,
            None => return Verdict::Ineligible(MissingField::ListPrice),
        }
    };

    let discount = discount_pct(ask, reference);
    if ask >= reference || discount <= criteria.min_discount {
        return Verdict::Rejected(Rejection::BelowThreshold { discount });
    }
    if reference <= criteria.min_price {
        return Verdict::Rejected(Rejection::BelowPriceFloor { reference });
    }
    if let Some(price) = listing.price.filter(|price| *price > criteria.max_price) {
        return Verdict::Rejected(Rejection::AbovePriceCeiling { price });
    }

    let item = &listing.item;
    if !criteria.allows(&item.name) {
        return Verdict::Rejected(Rejection::NotAllowListed);
    }
    if !criteria.include_well_worn && item.wear.is_some_and(|w| w.is_well_worn_or_worse()) {
        return Verdict::Rejected(Rejection::WellWorn);
    }
    if !criteria.include_souvenir && item.is_souvenir {
        return Verdict::Rejected(Rejection::Souvenir);
    }

    Verdict::Deal { discount }
}
