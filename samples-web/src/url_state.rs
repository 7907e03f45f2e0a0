//! URL state persistence for the gallery filters
//!
//! The selection is serialized as base64-encoded JSON in the `state` query
//! parameter, keeping URLs opaque and free of per-filter parameter names.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use samples_common::{FilterCategory, FilterSelection, SelectionSet, SortOption};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("state parameter is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("state parameter is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown sort option '{0}'")]
    UnknownSort(String),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct EncodedSelection {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    language: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    domain: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    level: Vec<String>,
    #[serde(
        default,
        rename = "contentType",
        skip_serializing_if = "Vec::is_empty"
    )]
    content_type: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sort: Option<String>,
}

impl EncodedSelection {
    fn values_mut(&mut self, category: FilterCategory) -> &mut Vec<String> {
        match category {
            FilterCategory::Language => &mut self.language,
            FilterCategory::Domain => &mut self.domain,
            FilterCategory::Level => &mut self.level,
            FilterCategory::ContentType => &mut self.content_type,
        }
    }
}

/// Encode a selection for the URL. The default selection encodes to `None`.
pub fn encode_selection(selection: &FilterSelection) -> Option<String> {
    if *selection == FilterSelection::default() {
        return None;
    }

    let mut encoded = EncodedSelection::default();
    for category in FilterCategory::ALL {
        *encoded.values_mut(category) = selection
            .get(category)
            .iter()
            .map(|v| v.to_string())
            .collect();
    }
    if selection.sort_by != SortOption::default() {
        encoded.sort = Some(selection.sort_by.label().to_string());
    }

    let json = serde_json::to_string(&encoded).ok()?;
    Some(URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

/// Decode a selection from the URL. Option values unknown to a category are dropped.
pub fn decode_selection(encoded: &str) -> Result<FilterSelection, StateError> {
    if encoded.is_empty() {
        return Ok(FilterSelection::default());
    }

    let json_bytes = URL_SAFE_NO_PAD.decode(encoded)?;
    let mut decoded: EncodedSelection = serde_json::from_slice(&json_bytes)?;

    let sort_by = match decoded.sort.take() {
        Some(label) => SortOption::from_label(&label).ok_or(StateError::UnknownSort(label))?,
        None => SortOption::default(),
    };

    let mut selection = FilterSelection {
        sort_by,
        ..Default::default()
    };
    for category in FilterCategory::ALL {
        let values: SelectionSet = decoded
            .values_mut(category)
            .iter()
            .filter_map(|v| category.option(v))
            .collect();
        selection.set(category, values);
    }

    Ok(selection)
}
