//! Wire types for the listings endpoint.
//!
//! Only the fields the classifier reads are modelled; everything else in
//! the payload is ignored.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use crate::domain::{AuctionDetails, Cents, Item, Listing, ListingType, ReferenceData, Wear};
use crate::error::Result;

/// Decode a listings body.
///
/// The endpoint answers with either a bare array or `{ "data": [...] }`.
/// Entries are converted one at a time; a malformed entry is skipped and
/// the rest of the page is kept.
///
/// # Errors
///
/// Returns an error if the body is not JSON or has neither shape.
pub(super) fn decode_listings(body: &str, requested: ListingType) -> Result<Vec<Listing>> {
    let entries = match serde_json::from_str::<Value>(body)? {
        Value::Array(entries) => entries,
        Value::Object(mut object) => match object.remove("data") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(serde_json::Error::custom("expected a \"data\" array").into()),
        },
        _ => return Err(serde_json::Error::custom("expected an array of listings").into()),
    };

    let listings = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<ListingDto>(entry) {
            Ok(dto) => Some(dto.into_listing(requested)),
            Err(err) => {
                debug!(index, error = %err, "Skipping malformed listing");
                None
            }
        })
        .collect();
    Ok(listings)
}

#[derive(Debug, Deserialize)]
struct ListingDto {
    #[serde(deserialize_with = "string_or_number")]
    id: String,
    #[serde(rename = "type", default)]
    kind: Option<ListingType>,
    #[serde(default)]
    price: Option<Cents>,
    #[serde(default)]
    min_offer_price: Option<Cents>,
    item: ItemDto,
    #[serde(default)]
    auction_details: Option<AuctionDetailsDto>,
    #[serde(default)]
    reference: Option<ReferenceDto>,
}

#[derive(Debug, Deserialize)]
struct ItemDto {
    market_hash_name: String,
    #[serde(default)]
    wear_name: Option<String>,
    #[serde(default)]
    float_value: Option<f64>,
    #[serde(default)]
    is_souvenir: bool,
    #[serde(default)]
    scm: Option<ScmDto>,
}

/// Steam Community Market pricing.
#[derive(Debug, Deserialize)]
struct ScmDto {
    #[serde(default)]
    price: Option<Cents>,
}

#[derive(Debug, Deserialize)]
struct AuctionDetailsDto {
    expires_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct ReferenceDto {
    #[serde(default)]
    base_price: Option<Cents>,
}

impl ListingDto {
    /// Listings that omit `type` take the type that was queried.
    fn into_listing(self, requested: ListingType) -> Listing {
        Listing {
            id: self.id,
            kind: self.kind.unwrap_or(requested),
            price: self.price,
            min_offer_price: self.min_offer_price,
            item: self.item.into(),
            auction: self.auction_details.map(|details| AuctionDetails {
                expires_at: details.expires_at,
            }),
            reference: self.reference.map(|reference| ReferenceData {
                base_price: reference.base_price,
            }),
        }
    }
}

impl From<ItemDto> for Item {
    fn from(dto: ItemDto) -> Self {
        Self {
            name: dto.market_hash_name,
            wear: dto.wear_name.as_deref().and_then(Wear::from_name),
            float_value: dto.float_value,
            is_souvenir: dto.is_souvenir,
            steam_price: dto.scm.and_then(|scm| scm.price),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}
