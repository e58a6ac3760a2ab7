//! Query string helpers for Brave Search parameters.

use serde::Serializer;

/// Serialize an optional list as a single comma-separated value.
///
/// `serde_urlencoded` cannot encode sequences inside structs; the Brave API
/// accepts list parameters such as `result_filter` joined with commas.
pub fn comma_separated<S>(values: &Option<Vec<String>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match values {
        Some(values) => serializer.serialize_str(&values.join(",")),
        None => serializer.serialize_none(),
    }
}
