//! OMDb wire format.
//!
//! OMDb spells its JSON fields in PascalCase and encodes "no value" as the
//! literal string `"N/A"` rather than null, so the numeric accessors below
//! all return `Option`.

use serde::{Deserialize, Serialize};

/// A lightweight record from the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Poster")]
    pub poster: String,
}

impl MovieSummary {
    pub fn poster_url(&self) -> Option<&str> {
        (self.poster != "N/A").then_some(self.poster.as_str())
    }
}

/// A full record from the lookup-by-id endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Released")]
    pub released: String,
    /// Free text, e.g. "142 min".
    #[serde(rename = "Runtime")]
    pub runtime: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Plot")]
    pub plot: String,
    #[serde(rename = "Actors")]
    pub actors: String,
    #[serde(rename = "Director")]
    pub director: String,
    #[serde(rename = "Poster")]
    pub poster: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
}

impl MovieDetail {
    pub fn poster_url(&self) -> Option<&str> {
        (self.poster != "N/A").then_some(self.poster.as_str())
    }

    /// Parse the leading number out of the runtime text ("142 min" -> 142).
    pub fn runtime_minutes(&self) -> Option<u32> {
        self.runtime.split_whitespace().next()?.parse().ok()
    }

    /// Parse the aggregate IMDb rating ("8.1" -> 8.1, "N/A" -> None).
    pub fn rating(&self) -> Option<f32> {
        self.imdb_rating.parse().ok()
    }
}

/// Envelope of the search endpoint. `response` is `"True"` or `"False"`;
/// only one of `search` / `error` is populated.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Vec<MovieSummary>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_OK: &str = r#"{
        "Search": [
            {"Title": "Rambo", "Year": "2008", "imdbID": "tt0462499", "Type": "movie", "Poster": "https://m.media-amazon.com/images/rambo.jpg"},
            {"Title": "Rambo III", "Year": "1988", "imdbID": "tt0095956", "Type": "movie", "Poster": "N/A"}
        ],
        "totalResults": "2",
        "Response": "True"
    }"#;

    const SEARCH_MISS: &str = r#"{"Response": "False", "Error": "Movie not found!"}"#;

    const DETAIL: &str = r#"{
        "Title": "Rambo III", "Year": "1988", "Rated": "R", "Released": "25 May 1988",
        "Runtime": "102 min", "Genre": "Action, Adventure, Thriller",
        "Director": "Peter MacDonald", "Writer": "Sylvester Stallone",
        "Actors": "Sylvester Stallone, Richard Crenna, Marc de Jonge",
        "Plot": "Rambo mounts a one-man mission to rescue his friend.",
        "Poster": "https://m.media-amazon.com/images/rambo3.jpg",
        "imdbRating": "5.8", "imdbID": "tt0095956", "Type": "movie", "Response": "True"
    }"#;

    #[test]
    fn parses_search_payload() {
        let resp: SearchResponse = serde_json::from_str(SEARCH_OK).unwrap();
        assert_eq!(resp.response, "True");
        assert_eq!(resp.search.len(), 2);
        assert_eq!(resp.search[0].imdb_id, "tt0462499");
        assert_eq!(resp.search[0].poster_url(), Some("https://m.media-amazon.com/images/rambo.jpg"));
        assert_eq!(resp.search[1].poster_url(), None);
    }

    #[test]
    fn parses_not_found_sentinel() {
        let resp: SearchResponse = serde_json::from_str(SEARCH_MISS).unwrap();
        assert_eq!(resp.response, "False");
        assert!(resp.search.is_empty());
        assert_eq!(resp.error.as_deref(), Some("Movie not found!"));
    }

    #[test]
    fn parses_detail_payload() {
        let detail: MovieDetail = serde_json::from_str(DETAIL).unwrap();
        assert_eq!(detail.title, "Rambo III");
        assert_eq!(detail.runtime_minutes(), Some(102));
        assert_eq!(detail.rating(), Some(5.8));
        assert_eq!(detail.director, "Peter MacDonald");
    }

    #[test]
    fn runtime_and_rating_tolerate_missing_values() {
        let mut detail: MovieDetail = serde_json::from_str(DETAIL).unwrap();
        detail.runtime = "N/A".into();
        detail.imdb_rating = "N/A".into();
        assert_eq!(detail.runtime_minutes(), None);
        assert_eq!(detail.rating(), None);
    }
}
