//! Marketplace listing types.
//!
//! These are transport-neutral views of a CSFloat listing. The feed adapter
//! converts wire DTOs into these types, so every optional field here is one
//! the feed may legitimately omit.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

use super::dedup::DedupKey;

/// Price in minor currency units (cents).
pub type Cents = u64;

/// Listing type as understood by the feed's `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    BuyNow,
    Auction,
}

impl ListingType {
    /// Wire name used in feed queries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BuyNow => "buy_now",
            Self::Auction => "auction",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exterior wear tier, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Wear {
    FactoryNew,
    MinimalWear,
    FieldTested,
    WellWorn,
    BattleScarred,
}

impl Wear {
    /// Parse the feed's human-readable wear name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Factory New" => Some(Self::FactoryNew),
            "Minimal Wear" => Some(Self::MinimalWear),
            "Field-Tested" => Some(Self::FieldTested),
            "Well-Worn" => Some(Self::WellWorn),
            "Battle-Scarred" => Some(Self::BattleScarred),
            _ => None,
        }
    }

    /// True for Well-Worn and the worst tier, Battle-Scarred.
    #[must_use]
    pub fn is_well_worn_or_worse(self) -> bool {
        self >= Self::WellWorn
    }
}

impl fmt::Display for Wear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FactoryNew => "Factory New",
            Self::MinimalWear => "Minimal Wear",
            Self::FieldTested => "Field-Tested",
            Self::WellWorn => "Well-Worn",
            Self::BattleScarred => "Battle-Scarred",
        };
        f.write_str(name)
    }
}

/// The item being sold.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Display name, e.g. `★ Karambit | Doppler (Factory New)`.
    pub name: String,
    pub wear: Option<Wear>,
    /// Wear float. Stable across relistings of the same physical item.
    pub float_value: Option<f64>,
    pub is_souvenir: bool,
    /// Steam Community Market price in cents.
    pub steam_price: Option<Cents>,
}

/// Auction-only listing details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuctionDetails {
    pub expires_at: DateTime<Utc>,
}

/// Platform-provided reference pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReferenceData {
    pub base_price: Option<Cents>,
}

/// One marketplace offer.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub kind: ListingType,
    /// Ask price in cents. Absent when the feed entry omitted it.
    pub price: Option<Cents>,
    /// Lowest offer the seller accepts, present on bargain-enabled listings.
    pub min_offer_price: Option<Cents>,
    pub item: Item,
    pub auction: Option<AuctionDetails>,
    pub reference: Option<ReferenceData>,
}

impl Listing {
    /// Key used to recognise the same physical item across relistings.
    ///
    /// The listing id changes on relist but the wear float does not, so the
    /// float is preferred. Items without a float fall back to the id.
    #[must_use]
    pub fn dedup_key(&self) -> DedupKey {
        match self.item.float_value {
            Some(value) => DedupKey::float(value),
            None => DedupKey::id(&self.id),
        }
    }

    /// Key used for auctions, whose id is stable until the auction ends.
    #[must_use]
    pub fn auction_key(&self) -> DedupKey {
        DedupKey::id(&self.id)
    }

    /// Auction expiry, if this is an auction.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.auction.map(|details| details.expires_at)
    }

    /// Whether this listing expires at or before `deadline`.
    ///
    /// Listings without auction details never fall inside a window.
    #[must_use]
    pub fn expires_by(&self, deadline: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|at| at <= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wear_parses_feed_names() {
        assert_eq!(Wear::from_name("Field-Tested"), Some(Wear::FieldTested));
        assert_eq!(Wear::from_name("Battle-Scarred"), Some(Wear::BattleScarred));
        assert_eq!(Wear::from_name("Pristine"), None);
    }

    #[test]
    fn well_worn_or_worse_covers_bottom_two_tiers() {
        assert!(Wear::WellWorn.is_well_worn_or_worse());
        assert!(Wear::BattleScarred.is_well_worn_or_worse());
        assert!(!Wear::FieldTested.is_well_worn_or_worse());
        assert!(!Wear::FactoryNew.is_well_worn_or_worse());
    }

    #[test]
    fn wear_display_round_trips_through_from_name() {
        for wear in [
            Wear::FactoryNew,
            Wear::MinimalWear,
            Wear::FieldTested,
            Wear::WellWorn,
            Wear::BattleScarred,
        ] {
            assert_eq!(Wear::from_name(&wear.to_string()), Some(wear));
        }
    }
}
