//! Typed response bodies of the Brave Search API.
//!
//! Only the fields the tools project are modelled. Everything is optional
//! because the API omits fields freely.

pub mod image;
pub mod local;
pub mod news;
pub mod summarizer;
pub mod video;
pub mod web;

use serde::Deserialize;

pub use image::{ImageProperties, ImageResult, ImageSearchApiResponse};
pub use local::{
    Contact, DayOpeningHours, LocalDescriptionsApiResponse, LocalPoiApiResponse,
    LocationDescription, LocationResult, OpeningHours, PostalAddress, Rating,
};
pub use news::{NewsResult, NewsSearchApiResponse};
pub use summarizer::{SummarizerApiResponse, SummaryContext, SummaryEnrichments, SummaryMessage};
pub use video::{VideoData, VideoResult, VideoSearchApiResponse};
pub use web::{
    DiscussionResult, Discussions, Faq, ForumData, Locations, QaResult, SearchResult,
    SummarizerKey, WebResults, WebSearchApiResponse,
};

/// Thumbnail attached to a result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnail {
    pub src: Option<String>,
}
