//! Dataset loading and validation.
//!
//! The dataset is a JSON array of sentence records. Records are validated
//! once here, so the rest of the crate works with fully-populated
//! `SentenceItem`s instead of sprinkling per-field fallbacks. The legacy
//! `frases.json` column names (`linha`, `ENG`, `PTBR`) are accepted as
//! aliases, so existing datasets load unmodified.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::DatasetError;
use crate::types::{Level, SentenceItem};

/// A record as it appears on disk: everything optional until validated.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(alias = "linha")]
    id: Option<i64>,
    #[serde(alias = "ENG")]
    english: Option<String>,
    #[serde(alias = "PTBR")]
    reference: Option<String>,
    level: Option<String>,
}

/// Parse and validate a JSON dataset.
///
/// Empty input (or an empty array) yields an empty list; the caller decides
/// how to surface "no items available".
pub fn parse_dataset(json: &str) -> Result<Vec<SentenceItem>, DatasetError> {
    if json.trim().is_empty() {
        return Ok(vec![]);
    }

    let raw: Vec<RawRecord> = serde_json::from_str(json)?;

    let mut items = Vec::with_capacity(raw.len());
    let mut seen_ids = HashSet::new();

    for (index, record) in raw.into_iter().enumerate() {
        let id = record.id.ok_or(DatasetError::MissingId { index })?;
        if !seen_ids.insert(id) {
            return Err(DatasetError::DuplicateId { id });
        }

        let english = non_empty(record.english).ok_or(DatasetError::MissingEnglish { index })?;
        let reference =
            non_empty(record.reference).ok_or(DatasetError::MissingReference { index })?;

        let level = match record.level {
            None => None,
            Some(value) => Some(
                Level::from_str(&value)
                    .ok_or(DatasetError::InvalidLevel { index, value })?,
            ),
        };

        items.push(SentenceItem {
            id,
            english,
            reference,
            level,
        });
    }

    Ok(items)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
