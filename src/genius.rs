use serde::Deserialize;

const GENIUS_API_BASE: &str = "https://api.genius.com";

const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LyricsResult {
    Found(String),
    NotFound,
    UpstreamError,
}

#[derive(Debug, thiserror::Error)]
pub enum GeniusError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

/// Thin client for the Genius `/search` endpoint. Only the URL of the first
/// hit is ever used.
pub struct GeniusClient {
    http: reqwest::Client,
    token: String,
}

impl GeniusClient {
    pub fn new(token: String) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .expect("failed to build http client");
        Self { http, token }
    }

    /// Every upstream failure, including a malformed response body, collapses
    /// into `UpstreamError` instead of taking the handler down with it.
    pub async fn search(&self, query: &str) -> LyricsResult {
        match self.request(query).await {
            Ok(result) => result,
            Err(e) => {
                log::error!("lyrics search failed: {}", e);
                LyricsResult::UpstreamError
            }
        }
    }

    async fn request(&self, query: &str) -> Result<LyricsResult, GeniusError> {
        let resp = self
            .http
            .get(format!("{}/search", GENIUS_API_BASE))
            .bearer_auth(&self.token)
            .query(&[("q", query)])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(GeniusError::Status(resp.status()));
        }

        Ok(first_hit(resp.json::<SearchResponse>().await?))
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    response: Hits,
}

#[derive(Debug, Deserialize)]
struct Hits {
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    result: SongResult,
}

#[derive(Debug, Deserialize)]
struct SongResult {
    url: String,
}

fn first_hit(resp: SearchResponse) -> LyricsResult {
    match resp.response.hits.into_iter().next() {
        Some(hit) => LyricsResult::Found(hit.result.url),
        None => LyricsResult::NotFound,
    }
}

#[cfg(test)]
mod genius_tests {
    use super::*;

    #[test]
    fn empty_hits_test() {
        let resp =
            serde_json::from_str::<SearchResponse>(r#"{"response": {"hits": []}}"#).unwrap();
        assert_eq!(first_hit(resp), LyricsResult::NotFound);
    }

    #[test]
    fn first_hit_wins_test() {
        let resp = serde_json::from_str::<SearchResponse>(
            r#"{
            "meta": {
                "status": 200
            },
            "response": {
                "hits": [
                    {
                        "highlights": [],
                        "index": "song",
                        "type": "song",
                        "result": {
                            "id": 1,
                            "title": "Bohemian Rhapsody",
                            "url": "https://genius.com/Queen-bohemian-rhapsody-lyrics"
                        }
                    },
                    {
                        "highlights": [],
                        "index": "song",
                        "type": "song",
                        "result": {
                            "id": 2,
                            "title": "Radio Ga Ga",
                            "url": "https://genius.com/Queen-radio-ga-ga-lyrics"
                        }
                    }
                ]
            }
        }"#,
        )
        .unwrap();

        assert_eq!(
            first_hit(resp),
            LyricsResult::Found("https://genius.com/Queen-bohemian-rhapsody-lyrics".to_string())
        );
    }

    #[test]
    fn missing_url_test() {
        assert!(serde_json::from_str::<SearchResponse>(
            r#"{"response": {"hits": [{"result": {"id": 5, "title": "No Url"}}]}}"#
        )
        .is_err());
    }

    #[test]
    fn error_body_test() {
        assert!(serde_json::from_str::<SearchResponse>(
            r#"{"error": "invalid_token", "error_description": "The access token provided is expired."}"#
        )
        .is_err());
    }
}
