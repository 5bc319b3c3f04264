//! Search request lifecycle.
//!
//! Tracks the observable state of the search box (results, loading flag,
//! error text) together with a generation counter that supersedes in-flight
//! requests: every query change bumps the generation, and a result tagged
//! with a stale generation is dropped without touching any state.

/// User-facing message when the API reports no match for the query.
pub const NOT_FOUND_MESSAGE: &str = "Movie not found";

/// User-facing message for transport-level failures.
pub const FETCH_FAILED_MESSAGE: &str = "Something went wrong with fetching movies";

/// Why a search request did not produce results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The API's own "no result" sentinel.
    NotFound,
    /// Non-OK status or any other transport failure. The payload is the
    /// underlying reason, kept for logging only.
    Failed(String),
}

/// State machine driving the search box.
#[derive(Debug, Default)]
pub struct SearchLifecycle<T> {
    results: Vec<T>,
    is_loading: bool,
    error: String,
    generation: u64,
}

impl<T> SearchLifecycle<T> {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
            is_loading: false,
            error: String::new(),
            generation: 0,
        }
    }

    pub fn results(&self) -> &[T] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Current error text; empty means no error.
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Start a new search for `query`, superseding any request still in
    /// flight. An empty query short-circuits to the idle state and returns
    /// `None`; otherwise returns the generation the caller must tag the
    /// spawned request with.
    pub fn begin(&mut self, query: &str) -> Option<u64> {
        // Bumping unconditionally invalidates the previous request even
        // when no new one is issued.
        self.generation += 1;
        self.error.clear();

        if query.is_empty() {
            self.results.clear();
            self.is_loading = false;
            return None;
        }

        self.is_loading = true;
        Some(self.generation)
    }

    /// Commit the outcome of a request, unless it was superseded.
    pub fn resolve(&mut self, generation: u64, outcome: Result<Vec<T>, SearchError>) {
        if generation != self.generation {
            tracing::debug!("dropping result of superseded search request");
            return;
        }

        self.is_loading = false;
        match outcome {
            Ok(results) => {
                self.results = results;
                self.error.clear();
            }
            Err(SearchError::NotFound) => {
                self.error = NOT_FOUND_MESSAGE.into();
            }
            Err(SearchError::Failed(reason)) => {
                tracing::warn!("search request failed: {reason}");
                self.error = FETCH_FAILED_MESSAGE.into();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_idle_and_issues_no_request() {
        let mut search = SearchLifecycle::<&str>::new();
        assert_eq!(search.begin(""), None);
        assert!(search.results().is_empty());
        assert!(search.error().is_empty());
        assert!(!search.is_loading());
    }

    #[test]
    fn successful_search_replaces_results() {
        let mut search = SearchLifecycle::new();
        let generation = search.begin("rambo").unwrap();
        assert!(search.is_loading());

        search.resolve(generation, Ok(vec!["Rambo", "Rambo III"]));
        assert_eq!(search.results(), &["Rambo", "Rambo III"]);
        assert!(search.error().is_empty());
        assert!(!search.is_loading());
    }

    #[test]
    fn no_match_ends_in_failed_with_fixed_message() {
        let mut search = SearchLifecycle::<&str>::new();
        let generation = search.begin("zzzzzz").unwrap();
        search.resolve(generation, Err(SearchError::NotFound));
        assert_eq!(search.error(), NOT_FOUND_MESSAGE);
        assert!(search.results().is_empty());
        assert!(!search.is_loading());
    }

    #[test]
    fn transport_failure_uses_generic_message_and_keeps_results() {
        let mut search = SearchLifecycle::new();
        let generation = search.begin("rambo").unwrap();
        search.resolve(generation, Ok(vec!["Rambo"]));

        let generation = search.begin("rambo i").unwrap();
        search.resolve(generation, Err(SearchError::Failed("timeout".into())));
        assert_eq!(search.error(), FETCH_FAILED_MESSAGE);
        // Prior results stay as they were.
        assert_eq!(search.results(), &["Rambo"]);
    }

    #[test]
    fn stale_results_never_overwrite_newer_state() {
        let mut search = SearchLifecycle::new();
        let first = search.begin("ram").unwrap();
        let second = search.begin("rambo").unwrap();

        // The superseded request lands late, in both success and error shape.
        search.resolve(first, Ok(vec!["wrong"]));
        assert!(search.results().is_empty());
        assert!(search.is_loading());
        search.resolve(first, Err(SearchError::Failed("aborted".into())));
        assert!(search.error().is_empty());

        search.resolve(second, Ok(vec!["Rambo"]));
        assert_eq!(search.results(), &["Rambo"]);
    }

    #[test]
    fn clearing_the_query_supersedes_the_inflight_request() {
        let mut search = SearchLifecycle::new();
        let generation = search.begin("rambo").unwrap();
        assert_eq!(search.begin(""), None);

        // Late result for "rambo" must not resurrect anything.
        search.resolve(generation, Ok(vec!["Rambo", "Rambo III"]));
        assert!(search.results().is_empty());
        assert!(search.error().is_empty());
        assert!(!search.is_loading());
    }
}
