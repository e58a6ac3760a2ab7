//! Brave Search tools.
//!
//! One tool per search category, all backed by the shared [`BraveApi`]
//! client.
//!
//! [`BraveApi`]: crate::domains::brave::BraveApi

pub mod common;
pub mod image;
pub mod local;
pub mod news;
pub mod summarizer;
pub mod video;
pub mod web;

pub use image::{ImageSearchParams, ImageSearchTool};
pub use local::{LocalSearchParams, LocalSearchTool};
pub use news::{NewsSearchParams, NewsSearchTool};
pub use summarizer::{SummarizerParams, SummarizerTool};
pub use video::{VideoSearchParams, VideoSearchTool};
pub use web::{WebSearchParams, WebSearchTool};
