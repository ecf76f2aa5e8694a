//! Payload normalization for the two catalog backend shapes.
//!
//! Variant A wraps a `results` array of episode records (snake_case
//! fields, numeric episode id). Variant B maps opaque storage keys to
//! partial camelCase movie objects. Both normalize into the uniform
//! `Movie` shape.

use std::collections::BTreeMap;

use serde::Deserialize;

use marquee_core::{Movie, MovieId};

/// A movie-list response in either backend shape.
///
/// Deserialization is untagged: Variant A is tried first (it requires the
/// `results` array), and anything else that is a JSON object falls through
/// to the keyed mapping.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MoviesPayload {
    /// Variant A: `{"results": [{"episode_id": 4, ...}, ...]}`.
    Episodes { results: Vec<EpisodeRecord> },

    /// Variant B: `{"<key>": {"title": ..., ...}, ...}`.
    Keyed(BTreeMap<String, KeyedRecord>),
}

/// One record of the Variant A `results` array.
///
/// Backends serve more fields than these; the rest are ignored. Absent
/// fields are not an error (no record is rejected for incompleteness).
#[derive(Debug, Deserialize)]
pub struct EpisodeRecord {
    #[serde(default)]
    pub episode_id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub opening_crawl: String,
    #[serde(default)]
    pub release_date: String,
}

/// One value of the Variant B key-to-movie mapping.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyedRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub opening_text: String,
    #[serde(default)]
    pub release_date: String,
}

/// Map a decoded payload into the uniform record shape.
///
/// Variant A preserves source order and renders the numeric episode id as
/// the record id. Variant B uses the storage key as the id and enumerates
/// keys in sorted order (the backend's own key order is not guaranteed
/// stable).
#[must_use]
pub fn normalize(payload: MoviesPayload) -> Vec<Movie> {
    match payload {
        MoviesPayload::Episodes { results } => results
            .into_iter()
            .map(|record| Movie {
                id: MovieId::from(record.episode_id),
                title: record.title,
                opening_text: record.opening_crawl,
                release_date: record.release_date,
            })
            .collect(),
        MoviesPayload::Keyed(records) => records
            .into_iter()
            .map(|(key, record)| Movie {
                id: MovieId::new(key),
                title: record.title,
                opening_text: record.opening_text,
                release_date: record.release_date,
            })
            .collect(),
    }
}
