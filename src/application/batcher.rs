//! Notification batching and formatting.
//!
//! One poll cycle yields at most one notification: nothing for an empty
//! cycle, a detailed message for a single deal, and a digest for several.
//! The digest keeps the very first cycle, which has no baseline and often
//! surfaces many existing deals, from flooding the inbox.

use std::fmt::Write as _;

use crate::domain::{Cents, Listing, ListingType};
use crate::port::Notification;

/// A listing that passed classification and deduplication this cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Accepted {
    pub listing: Listing,
    /// Percent below the reference price.
    pub discount: f64,
}

/// Base URLs used to build links in notification bodies.
#[derive(Debug, Clone)]
pub struct Links {
    /// Listing page prefix; the listing id is appended.
    pub item_url: String,
    /// Page showing the newest listings.
    pub search_url: String,
    /// Price-lookup prefix; the normalized name is appended.
    pub price_lookup_url: String,
}

impl Links {
    #[must_use]
    pub fn listing(&self, listing: &Listing) -> String {
        format!("{}/{}", self.item_url.trim_end_matches('/'), listing.id)
    }

    #[must_use]
    pub fn price_lookup(&self, name: &str) -> String {
        format!(
            "{}/{}",
            self.price_lookup_url.trim_end_matches('/'),
            price_lookup_slug(name)
        )
    }
}

/// Formats accepted listings into notifications.
#[derive(Debug, Clone)]
pub struct NotificationBatcher {
    links: Links,
}

impl NotificationBatcher {
    #[must_use]
    pub fn new(links: Links) -> Self {
        Self { links }
    }

    /// Build the notification for one cycle's new deals, if any.
    #[must_use]
    pub fn compose(&self, kind: ListingType, accepted: &[Accepted]) -> Option<Notification> {
        match accepted {
            [] => None,
            [single] => Some(self.single(kind, single)),
            many => Some(self.digest(kind, many)),
        }
    }

    fn single(&self, kind: ListingType, deal: &Accepted) -> Notification {
        let name = display_name(&deal.listing.item.name);
        let subject = match kind {
            ListingType::BuyNow => format!("Potential Deal Identified: {name}"),
            ListingType::Auction => format!("Auction Deal Ending Soon: {name}"),
        };

        let mut body = String::from("A potential deal was found on CSFloat.\n\n");
        self.write_entry(&mut body, deal);
        Notification { subject, body }
    }

    fn digest(&self, kind: ListingType, deals: &[Accepted]) -> Notification {
        let subject = match kind {
            ListingType::BuyNow => format!("{} Potential Deals Identified", deals.len()),
            ListingType::Auction => format!("{} Auction Deals Ending Soon", deals.len()),
        };

        let mut body = match kind {
            ListingType::BuyNow => format!(
                "Multiple potential deals were just listed on CSFloat.\nNewest listings: {}\n\n",
                self.links.search_url
            ),
            ListingType::Auction => {
                String::from("Multiple auctions below reference price are ending soon.\n\n")
            }
        };
        for deal in deals {
            body.push_str("-\n");
            self.write_entry(&mut body, deal);
        }
        Notification { subject, body }
    }

    fn write_entry(&self, body: &mut String, deal: &Accepted) {
        let listing = &deal.listing;
        let _ = writeln!(body, "{}", display_name(&listing.item.name));
        let _ = writeln!(
            body,
            "Price: {} ({:.1}% below reference)",
            listing
                .price
                .or(listing.min_offer_price)
                .map_or_else(|| "n/a".to_string(), format_cents),
            deal.discount
        );
        if let Some(expires_at) = listing.expires_at() {
            let _ = writeln!(body, "Ends: {}", expires_at.format("%Y-%m-%d %H:%M UTC"));
        }
        let _ = writeln!(body, "Listing: {}", self.links.listing(listing));
        let _ = writeln!(
            body,
            "Price check: {}\n",
            self.links.price_lookup(&listing.item.name)
        );
    }
}

/// Name without the `★ ` and `™` markers, for subjects and bodies.
#[must_use]
pub fn display_name(name: &str) -> String {
    name.replace("★ ", "").replace(['★', '™'], "")
}

/// URL slug for the price-lookup site.
///
/// Drops decorative glyphs and the `|`, `(`, `)` punctuation, joins words
/// with single hyphens and lowercases. Hyphens inside words are kept, so
/// `AK-47` stays `ak-47`.
#[must_use]
pub fn price_lookup_slug(name: &str) -> String {
    let stripped: String = name
        .chars()
        .filter(|c| !matches!(c, '★' | '™' | '|' | '(' | ')'))
        .collect();
    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Dollar rendering with two decimals and no thousands separator, e.g. `$1234.56`.
#[must_use]
pub fn format_cents(cents: Cents) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AuctionDetails, Item, Wear};
    use chrono::{TimeZone, Utc};

    fn links() -> Links {
        Links {
            item_url: "https://csfloat.com/item".into(),
            search_url: "https://csfloat.com/search?sort_by=most_recent".into(),
            price_lookup_url: "https://pricempire.com/item/csgo/skin".into(),
        }
    }

    fn accepted(id: &str, name: &str) -> Accepted {
        Accepted {
            listing: Listing {
                id: id.into(),
                kind: ListingType::BuyNow,
                price: Some(7_000),
                min_offer_price: None,
                item: Item {
                    name: name.into(),
                    wear: Some(Wear::FactoryNew),
                    float_value: Some(0.01),
                    is_souvenir: false,
                    steam_price: Some(10_000),
                },
                auction: None,
                reference: None,
            },
            discount: 30.0,
        }
    }

    #[test]
    fn slug_strips_glyphs_and_punctuation() {
        assert_eq!(
            price_lookup_slug("★ Karambit | Doppler (Factory New)"),
            "karambit-doppler-factory-new"
        );
        assert_eq!(
            price_lookup_slug("StatTrak™ AK-47 | Redline (Field-Tested)"),
            "stattrak-ak-47-redline-field-tested"
        );
    }

    #[test]
    fn display_name_drops_markers() {
        assert_eq!(display_name("★ Karambit | Fade"), "Karambit | Fade");
        assert_eq!(display_name("StatTrak™ AWP | Asiimov"), "StatTrak AWP | Asiimov");
    }

    #[test]
    fn empty_cycle_produces_nothing() {
        let batcher = NotificationBatcher::new(links());
        assert!(batcher.compose(ListingType::BuyNow, &[]).is_none());
    }

    #[test]
    fn single_deal_gets_detailed_message() {
        let batcher = NotificationBatcher::new(links());
        let deal = accepted("111", "★ Karambit | Doppler (Factory New)");

        let notification = batcher.compose(ListingType::BuyNow, &[deal]).unwrap();

        assert_eq!(
            notification.subject,
            "Potential Deal Identified: Karambit | Doppler (Factory New)"
        );
        assert!(notification.body.contains("https://csfloat.com/item/111"));
        assert!(notification
            .body
            .contains("https://pricempire.com/item/csgo/skin/karambit-doppler-factory-new"));
        assert!(notification.body.contains("$70.00 (30.0% below reference)"));
    }

    #[test]
    fn several_deals_share_one_digest() {
        let batcher = NotificationBatcher::new(links());
        let deals = [
            accepted("111", "AWP | Asiimov (Field-Tested)"),
            accepted("222", "USP-S | Kill Confirmed (Minimal Wear)"),
        ];

        let notification = batcher.compose(ListingType::BuyNow, &deals).unwrap();

        assert_eq!(notification.subject, "2 Potential Deals Identified");
        assert!(notification.body.contains("https://csfloat.com/item/111"));
        assert!(notification.body.contains("https://csfloat.com/item/222"));
        assert!(notification.body.contains("awp-asiimov-field-tested"));
        assert!(notification.body.contains("usp-s-kill-confirmed-minimal-wear"));
    }

    #[test]
    fn auction_entries_show_expiry() {
        let batcher = NotificationBatcher::new(links());
        let mut deal = accepted("333", "M4A4 | Howl (Minimal Wear)");
        deal.listing.kind = ListingType::Auction;
        deal.listing.auction = Some(AuctionDetails {
            expires_at: Utc.with_ymd_and_hms(2026, 3, 1, 18, 30, 0).unwrap(),
        });

        let notification = batcher.compose(ListingType::Auction, &[deal]).unwrap();

        assert_eq!(
            notification.subject,
            "Auction Deal Ending Soon: M4A4 | Howl (Minimal Wear)"
        );
        assert!(notification.body.contains("Ends: 2026-03-01 18:30 UTC"));
    }

    #[test]
    fn cents_render_as_dollars() {
        assert_eq!(format_cents(7_000), "$70.00");
        assert_eq!(format_cents(12_345), "$123.45");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(123_456), "$1234.56");
    }
}
