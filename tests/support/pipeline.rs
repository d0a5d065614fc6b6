use std::sync::Arc;
use std::time::Duration;

use floatscout::application::{Links, Pipeline, PipelineSettings};
use floatscout::domain::DealCriteria;
use floatscout::port::ListingFeed;

use crate::harness::manual_clock::ManualClock;
use crate::harness::recording_notifier::RecordingNotifier;

pub const COOLDOWN: Duration = Duration::from_secs(120);

pub fn links() -> Links {
    Links {
        item_url: "https://csfloat.com/item".into(),
        search_url: "https://csfloat.com/search?sort_by=most_recent".into(),
        price_lookup_url: "https://pricempire.com/item/csgo/skin".into(),
    }
}

pub fn settings() -> PipelineSettings {
    PipelineSettings {
        page_size: 20,
        initial_page_size: None,
        auction_page_size: 3,
        max_auction_pages: 10,
        rate_limit_cooldown: COOLDOWN,
        checkpoint_every: 75,
    }
}

pub fn pipeline(
    feed: Arc<dyn ListingFeed>,
    notifier: &RecordingNotifier,
    clock: &ManualClock,
) -> Pipeline {
    pipeline_with(feed, notifier, clock, DealCriteria::default(), settings())
}

pub fn pipeline_with(
    feed: Arc<dyn ListingFeed>,
    notifier: &RecordingNotifier,
    clock: &ManualClock,
    criteria: DealCriteria,
    settings: PipelineSettings,
) -> Pipeline {
    Pipeline::new(
        feed,
        Arc::new(notifier.clone()),
        Arc::new(clock.clone()),
        criteria,
        links(),
        settings,
    )
}
