use reqwest::Client;

use super::error::OmdbError;
use super::types::{MovieDetail, MovieSummary, SearchResponse};

const BASE_URL: &str = "https://www.omdbapi.com/";

/// OMDb HTTP client. Both endpoints are read-only GETs keyed by a static
/// API key in the query string.
#[derive(Clone)]
pub struct OmdbClient {
    api_key: String,
    http: Client,
}

impl OmdbClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, OmdbError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(OmdbError::Api {
                status,
                message: body,
            })
        }
    }

    /// Search by title substring.
    pub async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, OmdbError> {
        tracing::debug!("searching OMDb for {query:?}");
        let resp = self
            .http
            .get(BASE_URL)
            .query(&[("apikey", self.api_key.as_str()), ("s", query)])
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let body: SearchResponse = resp
            .json()
            .await
            .map_err(|e| OmdbError::Parse(e.to_string()))?;

        if body.response == "False" {
            let message = body.error.unwrap_or_else(|| "no results".into());
            return Err(OmdbError::NotFound(message));
        }

        Ok(body.search)
    }

    /// Look up the full record for one IMDb id.
    pub async fn lookup(&self, imdb_id: &str) -> Result<MovieDetail, OmdbError> {
        tracing::debug!("fetching OMDb detail for {imdb_id}");
        let resp = self
            .http
            .get(BASE_URL)
            .query(&[("apikey", self.api_key.as_str()), ("i", imdb_id)])
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        // Error responses share the envelope's `Response`/`Error` pair but
        // lack the detail fields, so sniff before deserializing fully.
        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| OmdbError::Parse(e.to_string()))?;

        if body.get("Response").and_then(|v| v.as_str()) == Some("False") {
            let message = body
                .get("Error")
                .and_then(|v| v.as_str())
                .unwrap_or("no result")
                .to_string();
            return Err(OmdbError::NotFound(message));
        }

        serde_json::from_value(body).map_err(|e| OmdbError::Parse(e.to_string()))
    }
}
