use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use floatscout::domain::Listing;
use floatscout::error::Result;
use floatscout::port::{FeedPage, FeedQuery, ListingFeed};

/// Deterministic test double for the listing feed.
///
/// Serves scripted pages in order, then empty pages. Every query is
/// recorded.
#[derive(Clone, Default)]
pub struct ScriptedFeed {
    pages: Arc<Mutex<VecDeque<FeedPage>>>,
    queries: Arc<Mutex<Vec<FeedQuery>>>,
}

impl ScriptedFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_listings(&self, listings: Vec<Listing>) {
        self.pages
            .lock()
            .expect("lock pages")
            .push_back(FeedPage::Listings(listings));
    }

    pub fn push_throttled(&self) {
        self.pages
            .lock()
            .expect("lock pages")
            .push_back(FeedPage::Throttled { status: 429 });
    }

    pub fn fetches(&self) -> usize {
        self.queries.lock().expect("lock queries").len()
    }

    pub fn queries(&self) -> Vec<FeedQuery> {
        self.queries.lock().expect("lock queries").clone()
    }
}

#[async_trait]
impl ListingFeed for ScriptedFeed {
    async fn fetch(&self, query: &FeedQuery) -> Result<FeedPage> {
        self.queries.lock().expect("lock queries").push(query.clone());
        let next = self.pages.lock().expect("lock pages").pop_front();
        Ok(next.unwrap_or(FeedPage::Listings(Vec::new())))
    }
}

/// Feed that pages through a fixed, expiry-sorted list by `limit`/`page`.
#[derive(Clone)]
pub struct PagedFeed {
    listings: Arc<Vec<Listing>>,
    fetches: Arc<Mutex<usize>>,
}

impl PagedFeed {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings: Arc::new(listings),
            fetches: Arc::new(Mutex::new(0)),
        }
    }

    pub fn fetches(&self) -> usize {
        *self.fetches.lock().expect("lock fetches")
    }
}

#[async_trait]
impl ListingFeed for PagedFeed {
    async fn fetch(&self, query: &FeedQuery) -> Result<FeedPage> {
        *self.fetches.lock().expect("lock fetches") += 1;
        let size = query.limit.unwrap_or(50) as usize;
        let page = self
            .listings
            .iter()
            .skip(query.page as usize * size)
            .take(size)
            .cloned()
            .collect();
        Ok(FeedPage::Listings(page))
    }
}
