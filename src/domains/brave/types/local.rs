//! Location results and the `/local/pois` and `/local/descriptions` responses.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalPoiApiResponse {
    #[serde(default)]
    pub results: Vec<LocationResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalDescriptionsApiResponse {
    #[serde(default)]
    pub results: Vec<LocationDescription>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationDescription {
    pub id: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationResult {
    /// Temporary id, valid for about eight hours, used by the POI endpoints.
    pub id: String,
    pub title: Option<String>,
    pub url: Option<String>,
    /// `[latitude, longitude]`.
    pub coordinates: Option<Vec<f64>>,
    pub postal_address: Option<PostalAddress>,
    pub opening_hours: Option<OpeningHours>,
    pub contact: Option<Contact>,
    pub price_range: Option<String>,
    pub rating: Option<Rating>,
    pub categories: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub street_address: Option<String>,
    pub address_locality: Option<String>,
    pub address_region: Option<String>,
    pub display_address: Option<String>,
}

impl PostalAddress {
    /// The display address, or the parts joined with commas.
    pub fn formatted(&self) -> Option<String> {
        if let Some(display) = self.display_address.as_ref().filter(|d| !d.is_empty()) {
            return Some(display.clone());
        }

        let parts: Vec<&str> = [
            &self.street_address,
            &self.address_locality,
            &self.address_region,
            &self.postal_code,
            &self.country,
        ]
        .into_iter()
        .filter_map(|p| p.as_deref())
        .filter(|p| !p.is_empty())
        .collect();

        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpeningHours {
    pub current_day: Option<Vec<DayOpeningHours>>,
    pub days: Option<Vec<Vec<DayOpeningHours>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DayOpeningHours {
    pub abbr_name: Option<String>,
    pub full_name: Option<String>,
    pub opens: Option<String>,
    pub closes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    pub email: Option<String>,
    pub telephone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub rating_value: Option<f64>,
    pub best_rating: Option<f64>,
    pub review_count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postal_address_prefers_display_address() {
        let address = PostalAddress {
            display_address: Some("1 Main St, Springfield".to_string()),
            street_address: Some("ignored".to_string()),
            ..Default::default()
        };
        assert_eq!(address.formatted().as_deref(), Some("1 Main St, Springfield"));
    }

    #[test]
    fn test_postal_address_joins_parts() {
        let address = PostalAddress {
            street_address: Some("1 Main St".to_string()),
            address_locality: Some("Springfield".to_string()),
            postal_code: Some("12345".to_string()),
            ..Default::default()
        };
        assert_eq!(
            address.formatted().as_deref(),
            Some("1 Main St, Springfield, 12345")
        );
        assert!(PostalAddress::default().formatted().is_none());
    }

    #[test]
    fn test_location_deserializes_camel_case_fields() {
        let json = r#"{
            "id": "loc-1",
            "title": "Cafe",
            "postal_address": {"streetAddress": "1 Main St", "displayAddress": "1 Main St"},
            "rating": {"ratingValue": 4.5, "bestRating": 5, "reviewCount": 12}
        }"#;
        let location: LocationResult = serde_json::from_str(json).unwrap();
        let rating = location.rating.unwrap();
        assert_eq!(rating.rating_value, Some(4.5));
        assert_eq!(rating.review_count, Some(12));
        assert_eq!(
            location.postal_address.unwrap().street_address.as_deref(),
            Some("1 Main St")
        );
    }
}
