//! Brave local search tool.
//!
//! Runs a web search restricted to location results, then fetches point of
//! interest details and AI descriptions for the returned ids. Queries that
//! yield no locations fall back to the plain web projection.

use std::collections::HashMap;

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::common::{
    SafeSearch, Units, default_country, default_search_lang, default_true, default_ui_lang,
    json_block,
};
use super::web::{WebSearchParams, default_count, web_blocks};
use crate::domains::brave::types::{
    LocalDescriptionsApiResponse, LocalPoiApiResponse, LocationResult, OpeningHours,
    WebSearchApiResponse,
};
use crate::domains::brave::{BraveApi, Endpoint};
use crate::domains::tools::{SearchTool, ToolError};

/// Result types requested from the web endpoint.
const LOCAL_RESULT_FILTER: [&str; 3] = ["web", "query", "locations"];

/// Parameters for the local search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LocalSearchParams {
    /// Local search query, e.g. "pizza near Central Park" (max 400 characters, 50 words).
    pub query: String,

    /// Two-letter country code the results come from.
    #[serde(default = "default_country")]
    pub country: String,

    /// Language of the results.
    #[serde(default = "default_search_lang")]
    pub search_lang: String,

    /// User interface language of the response.
    #[serde(default = "default_ui_lang")]
    pub ui_lang: String,

    /// Number of results to return (1-20).
    #[serde(default = "default_count")]
    pub count: u32,

    /// Zero-based page offset (0-9).
    #[serde(default)]
    pub offset: u32,

    /// Adult content filter: off, moderate or strict.
    #[serde(default)]
    pub safesearch: SafeSearch,

    /// Discovery window: pd, pw, pm, py or YYYY-MM-DDtoYYYY-MM-DD.
    #[serde(default)]
    pub freshness: Option<String>,

    /// Let Brave correct misspelled queries.
    #[serde(default = "default_true")]
    pub spellcheck: bool,

    /// Measurement units: metric or imperial.
    #[serde(default)]
    pub units: Option<Units>,

    /// Return up to five extra snippets per result.
    #[serde(default)]
    pub extra_snippets: Option<bool>,
}

impl From<LocalSearchParams> for WebSearchParams {
    fn from(p: LocalSearchParams) -> Self {
        Self {
            query: p.query,
            country: p.country,
            search_lang: p.search_lang,
            ui_lang: p.ui_lang,
            count: p.count,
            offset: p.offset,
            safesearch: p.safesearch,
            freshness: p.freshness,
            text_decorations: false,
            spellcheck: p.spellcheck,
            result_filter: Some(LOCAL_RESULT_FILTER.iter().map(|s| s.to_string()).collect()),
            goggles: None,
            units: p.units,
            extra_snippets: p.extra_snippets,
            summary: None,
        }
    }
}

// ============================================================================
// Projection
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RatingView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u64>,
}

/// A place as returned to the client.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LocationView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<RatingView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LocationView {
    pub fn project(location: &LocationResult, description: Option<String>) -> Self {
        let contact = location.contact.as_ref();
        Self {
            name: location.title.clone(),
            address: location.postal_address.as_ref().and_then(|a| a.formatted()),
            phone: contact.and_then(|c| c.telephone.clone()),
            email: contact.and_then(|c| c.email.clone()),
            rating: location.rating.as_ref().map(|r| RatingView {
                value: r.rating_value,
                best: r.best_rating,
                reviews: r.review_count,
            }),
            price_range: location.price_range.clone(),
            opening_hours: location.opening_hours.as_ref().and_then(format_opening_hours),
            categories: location.categories.clone(),
            coordinates: location.coordinates.clone(),
            description,
        }
    }
}

/// One "Day HH:MM-HH:MM" line per opening period.
fn format_opening_hours(hours: &OpeningHours) -> Option<Vec<String>> {
    let periods: Vec<_> = match (&hours.days, &hours.current_day) {
        (Some(days), _) => days.iter().flatten().collect(),
        (None, Some(today)) => today.iter().collect(),
        (None, None) => return None,
    };

    let lines: Vec<String> = periods
        .into_iter()
        .map(|p| {
            let day = p
                .full_name
                .as_deref()
                .or(p.abbr_name.as_deref())
                .unwrap_or("");
            let opens = p.opens.as_deref().unwrap_or("?");
            let closes = p.closes.as_deref().unwrap_or("?");
            format!("{} {}-{}", day, opens, closes).trim().to_string()
        })
        .collect();

    (!lines.is_empty()).then_some(lines)
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Local search tool - businesses and places with details.
pub struct LocalSearchTool;

#[async_trait::async_trait]
impl SearchTool for LocalSearchTool {
    const NAME: &'static str = "brave_local_search";
    const TITLE: &'static str = "Brave Local Search";
    const DESCRIPTION: &'static str = "Searches for local businesses and places using the Brave Search API. \
        Best for queries about physical locations such as restaurants, shops or services near a place.\n\n\
        Returns one JSON object per place with name, address, phone, rating, price range, opening hours \
        and description. Falls back to web results when no locations match.\n\n\
        Example input: {\"query\": \"coffee shops near Union Square San Francisco\"}.\n\n\
        When relaying results, present each place with its address and rating, \
        e.g. \"**Blue Bottle Coffee**, 66 Mint St, San Francisco (4.5/5, $$)\".";

    type Params = LocalSearchParams;

    #[instrument(skip_all, fields(query = %params.query))]
    async fn execute(
        api: &BraveApi,
        params: LocalSearchParams,
    ) -> Result<CallToolResult, ToolError> {
        let web_params = WebSearchParams::from(params);
        web_params.validate()?;
        info!("Local search: {}", web_params.query);

        let response: WebSearchApiResponse = api.issue_request(Endpoint::Web, &web_params).await?;
        let locations = response
            .locations
            .as_ref()
            .map(|l| l.results.as_slice())
            .unwrap_or_default();

        if locations.is_empty() {
            info!("No location results, falling back to web results");
            return Ok(CallToolResult::success(web_blocks(&response)?));
        }

        let ids: Vec<(&str, &str)> = locations.iter().map(|l| ("ids", l.id.as_str())).collect();
        debug!("Fetching details for {} locations", ids.len());

        let (pois, descriptions) = futures::try_join!(
            api.issue_request::<_, LocalPoiApiResponse>(Endpoint::LocalPois, &ids),
            api.issue_request::<_, LocalDescriptionsApiResponse>(Endpoint::LocalDescriptions, &ids),
        )?;

        let mut descriptions: HashMap<String, Option<String>> = descriptions
            .results
            .into_iter()
            .map(|d| (d.id, d.description))
            .collect();

        // Expired ids yield no POIs; the summary data from the web response still applies.
        let places = if pois.results.is_empty() {
            locations
        } else {
            pois.results.as_slice()
        };

        let blocks = places
            .iter()
            .map(|place| {
                let description = descriptions.remove(&place.id).flatten();
                json_block(&LocationView::project(place, description))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CallToolResult::success(blocks))
    }
}
