use chrono::{DateTime, Utc};

use floatscout::domain::{AuctionDetails, Cents, Item, Listing, ListingType, ReferenceData, Wear};

/// Buy-now listing with a Steam reference price and a float derived from
/// the id, so distinct ids never collide in the dedup store.
pub fn buy_now(id: &str, name: &str, price: Cents, steam_price: Cents) -> Listing {
    Listing {
        id: id.to_string(),
        kind: ListingType::BuyNow,
        price: Some(price),
        min_offer_price: None,
        item: Item {
            name: name.to_string(),
            wear: Some(Wear::FieldTested),
            float_value: Some(float_for(id)),
            is_souvenir: false,
            steam_price: Some(steam_price),
        },
        auction: None,
        reference: None,
    }
}

/// Auction listing expiring at `expires_at`.
pub fn auction(
    id: &str,
    name: &str,
    price: Cents,
    steam_price: Cents,
    expires_at: DateTime<Utc>,
) -> Listing {
    let mut listing = buy_now(id, name, price, steam_price);
    listing.kind = ListingType::Auction;
    listing.auction = Some(AuctionDetails { expires_at });
    listing
}

pub fn with_float(mut listing: Listing, float_value: f64) -> Listing {
    listing.item.float_value = Some(float_value);
    listing
}

pub fn with_wear(mut listing: Listing, wear: Wear) -> Listing {
    listing.item.wear = Some(wear);
    listing
}

pub fn souvenir(mut listing: Listing) -> Listing {
    listing.item.is_souvenir = true;
    listing
}

pub fn with_base_price(mut listing: Listing, base_price: Cents) -> Listing {
    listing.reference = Some(ReferenceData {
        base_price: Some(base_price),
    });
    listing
}

pub fn without_reference(mut listing: Listing) -> Listing {
    listing.item.steam_price = None;
    listing.reference = None;
    listing
}

fn float_for(id: &str) -> f64 {
    let seed = id.bytes().fold(7_u64, |acc, byte| acc.wrapping_mul(31).wrapping_add(u64::from(byte)));
    (seed % 1_000_000) as f64 / 1_000_000.0
}
