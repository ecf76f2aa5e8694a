use crate::model::Movie;

/// Message rendered when a completed fetch produced no movies.
pub const EMPTY_MESSAGE: &str = "Found no movies...";

/// State of the movie-list fetch lifecycle.
///
/// One tagged union instead of separate loading/error/result flags, so
/// inconsistent combinations (loading alongside a stale error, say) are
/// unrepresentable. One value exists per list view; only the fetch
/// controller mutates it, and it is discarded with the view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    /// No fetch cycle has started yet.
    #[default]
    Idle,

    /// A request is in flight.
    Loading,

    /// The last cycle succeeded; movies are in remote response order.
    Loaded(Vec<Movie>),

    /// The last cycle failed, with the message to display.
    Failed(String),
}

impl FetchState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The failure message of the last cycle, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The fetched movies; empty unless the last cycle succeeded.
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        match self {
            Self::Loaded(movies) => movies,
            _ => &[],
        }
    }

    /// Select the rendering for this state.
    ///
    /// Priority is fixed: loading beats error, error beats content, a
    /// non-empty list beats the empty-state message. A failed refresh of a
    /// previously empty list therefore shows the error, not the message.
    #[must_use]
    pub fn view(&self) -> ViewContent<'_> {
        match self {
            Self::Loading => ViewContent::Loading,
            Self::Failed(message) => ViewContent::Error(message),
            Self::Loaded(movies) if !movies.is_empty() => ViewContent::List(movies),
            Self::Loaded(_) | Self::Idle => ViewContent::Empty,
        }
    }
}

/// The four mutually exclusive renderings of the list view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewContent<'a> {
    Loading,
    Error(&'a str),
    List(&'a [Movie]),
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_movies() -> Vec<Movie> {
        vec![Movie::new(4, "A New Hope").with_release_date("1977-05-25")]
    }

    #[test]
    fn test_idle_renders_empty_message() {
        assert_eq!(FetchState::Idle.view(), ViewContent::Empty);
    }

    #[test]
    fn test_loaded_empty_renders_empty_message() {
        assert_eq!(FetchState::Loaded(Vec::new()).view(), ViewContent::Empty);
    }

    #[test]
    fn test_loaded_renders_list_in_order() {
        let state = FetchState::Loaded(sample_movies());
        match state.view() {
            ViewContent::List(movies) => {
                assert_eq!(movies.len(), 1);
                assert_eq!(movies[0].title, "A New Hope");
            }
            other => panic!("expected List, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_renders_error() {
        let state = FetchState::Failed("timeout".to_string());
        assert_eq!(state.view(), ViewContent::Error("timeout"));
        assert_eq!(state.error(), Some("timeout"));
    }

    #[test]
    fn test_loading_takes_precedence() {
        let state = FetchState::Loading;
        assert!(state.is_loading());
        assert_eq!(state.view(), ViewContent::Loading);
    }

    #[test]
    fn test_movies_accessor_is_empty_outside_loaded() {
        assert!(FetchState::Idle.movies().is_empty());
        assert!(FetchState::Loading.movies().is_empty());
        assert!(FetchState::Failed("x".to_string()).movies().is_empty());
        assert_eq!(FetchState::Loaded(sample_movies()).movies().len(), 1);
    }
}
