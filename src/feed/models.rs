//! Feed payload types.
//!
//! The feed is a Reddit-style listing. [`Listing`] mirrors the wire shape and
//! converts into the transport-neutral [`FeedPage`].

use serde::{Deserialize, Serialize};

/// One feed entry: a candidate image URL plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub permalink: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub over_18: bool,
}

impl Thread {
    /// Create a thread with only the required fields set.
    pub fn new(id: impl Into<String>, url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            title: title.into(),
            permalink: None,
            author: None,
            score: None,
            over_18: false,
        }
    }
}

/// A decoded page of the feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedPage {
    /// Threads in feed order
    pub threads: Vec<Thread>,
    /// Token for the next page, `None` when the feed is exhausted
    pub next_token: Option<String>,
}

impl FeedPage {
    pub fn new(threads: Vec<Thread>, next_token: Option<String>) -> Self {
        Self {
            threads,
            next_token,
        }
    }
}

/// Wire shape of a listing response.
#[derive(Debug, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
pub struct ListingChild {
    pub data: serde_json::Value,
}

impl From<Listing> for FeedPage {
    /// Children that do not deserialize as a [`Thread`] (no `url`, deleted
    /// posts) are skipped.
    fn from(listing: Listing) -> Self {
        let threads = listing
            .data
            .children
            .into_iter()
            .filter_map(|child| serde_json::from_value::<Thread>(child.data).ok())
            .collect();
        FeedPage::new(threads, listing.data.after)
    }
}
