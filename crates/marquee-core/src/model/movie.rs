use serde::{Deserialize, Serialize};

use crate::model::ids::MovieId;

/// A movie record as displayed by the list view.
///
/// The shape is uniform regardless of which backend variant served it;
/// the transformer in `marquee-api` maps both remote shapes into this
/// one. Fields the backend omitted are carried as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,

    /// Opening crawl / synopsis text.
    pub opening_text: String,

    /// Release date exactly as served by the backend (not parsed locally).
    pub release_date: String,
}

impl Movie {
    #[must_use]
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            opening_text: String::new(),
            release_date: String::new(),
        }
    }

    #[must_use]
    pub fn with_opening_text(mut self, text: impl Into<String>) -> Self {
        self.opening_text = text.into();
        self
    }

    #[must_use]
    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = date.into();
        self
    }
}

/// A movie submission without an id.
///
/// Serialized with the wire's camelCase field names, so the POST body
/// reads `{"title": ..., "openingText": ..., "releaseDate": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDraft {
    pub title: String,
    pub opening_text: String,
    pub release_date: String,
}

impl MovieDraft {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        opening_text: impl Into<String>,
        release_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            opening_text: opening_text.into(),
            release_date: release_date.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_new() {
        let movie = Movie::new(4, "A New Hope");
        assert_eq!(movie.id.as_str(), "4");
        assert_eq!(movie.title, "A New Hope");
        assert!(movie.opening_text.is_empty());
    }

    #[test]
    fn test_movie_builder() {
        let movie = Movie::new(5, "The Empire Strikes Back")
            .with_opening_text("It is a dark time for the Rebellion...")
            .with_release_date("1980-05-17");

        assert_eq!(
            movie.opening_text,
            "It is a dark time for the Rebellion..."
        );
        assert_eq!(movie.release_date, "1980-05-17");
    }

    #[test]
    fn test_draft_serializes_with_wire_field_names() {
        let draft = MovieDraft::new("X", "Y", "2020-01-01");
        let json = serde_json::to_string(&draft).unwrap();
        assert_eq!(
            json,
            r#"{"title":"X","openingText":"Y","releaseDate":"2020-01-01"}"#
        );
    }

    #[test]
    fn test_draft_round_trips_from_wire_shape() {
        let json = r#"{"title":"X","openingText":"Y","releaseDate":"2020-01-01"}"#;
        let draft: MovieDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft, MovieDraft::new("X", "Y", "2020-01-01"));
    }
}
