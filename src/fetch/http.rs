// src/fetch/http.rs
// =============================================================================
// This module fetches wiki articles over HTTP.
//
// How it works:
// 1. Canonicalize the search phrase into a title ("Mr. Mime" -> "Mr._Mime")
// 2. Push the title onto the base URL as a single path segment
//    (the url crate percent-encodes it for us)
// 3. GET it with a fixed User-Agent
// 4. Classify the outcome:
//    - 2xx        -> FetchResult
//    - 404        -> NotFound (the crawler skips these)
//    - everything else, including network errors -> Fetch (fatal)
//
// There is deliberately no retry here; the crawler treats a non-404 failure
// as a sign the wiki is unavailable and stops.
// =============================================================================

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use super::{canonical_title, FetchResult, PageSource};
use crate::config::Config;
use crate::error::{Result, ScraperError};

/// HTTP page source for a MediaWiki site.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    base_url: Url,
}

impl PageFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ScraperError::InvalidArgument(format!("invalid base URL '{}': {}", config.base_url, e))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ScraperError::InvalidArgument(format!(
                "base URL cannot hold article paths: {}",
                config.base_url
            )));
        }

        // Reuse one client for the whole run (connection pooling)
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ScraperError::Fetch {
                url: config.base_url.clone(),
                message: format!("could not build HTTP client: {}", e),
            })?;

        Ok(Self { client, base_url })
    }

    /// Builds the article URL for a search phrase.
    ///
    /// Example:
    ///   base = "https://bulbapedia.bulbagarden.net/wiki/"
    ///   phrase = "Team Rocket" -> ".../wiki/Team_Rocket"
    pub fn build_article_url(&self, phrase: &str) -> Result<Url> {
        let title = canonical_title(phrase);
        if title.is_empty() {
            return Err(ScraperError::InvalidArgument(
                "search phrase must not be empty".to_string(),
            ));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ScraperError::InvalidArgument(format!("base URL cannot hold article paths: {}", self.base_url))
            })?
            .pop_if_empty()
            .push(&title);

        Ok(url)
    }
}

#[async_trait]
impl PageSource for PageFetcher {
    async fn fetch_document(&self, title: &str) -> Result<FetchResult> {
        let url = self.build_article_url(title)?;
        debug!(%url, "fetching article");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| fetch_error(&url, e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound(title.to_string()));
        }
        if !status.is_success() {
            return Err(fetch_error(&url, format!("HTTP {}", status.as_u16())));
        }

        let final_url = response.url().to_string();
        let html = response
            .text()
            .await
            .map_err(|e| fetch_error(&url, e.to_string()))?;

        Ok(FetchResult { final_url, html })
    }
}

fn fetch_error(url: &Url, message: String) -> ScraperError {
    ScraperError::Fetch {
        url: url.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher_for(base_url: &str) -> PageFetcher {
        let config = Config {
            base_url: base_url.to_string(),
            ..Config::default()
        };
        PageFetcher::new(&config).unwrap()
    }

    #[test]
    fn test_build_article_url_replaces_spaces() {
        let fetcher = fetcher_for("https://bulbapedia.bulbagarden.net/wiki/");
        let url = fetcher.build_article_url("Team Rocket").unwrap();
        assert_eq!(url.as_str(), "https://bulbapedia.bulbagarden.net/wiki/Team_Rocket");
    }

    #[test]
    fn test_build_article_url_encodes_reserved_characters() {
        let fetcher = fetcher_for("https://bulbapedia.bulbagarden.net/wiki/");
        let url = fetcher.build_article_url("What? #1").unwrap();
        assert_eq!(url.as_str(), "https://bulbapedia.bulbagarden.net/wiki/What%3F_%231");
    }

    #[test]
    fn test_build_article_url_keeps_parentheses() {
        let fetcher = fetcher_for("https://bulbapedia.bulbagarden.net/wiki/");
        let url = fetcher.build_article_url("Pikachu (Pokémon)").unwrap();
        assert_eq!(
            url.as_str(),
            "https://bulbapedia.bulbagarden.net/wiki/Pikachu_(Pok%C3%A9mon)"
        );
    }

    #[test]
    fn test_empty_phrase_is_rejected() {
        let fetcher = fetcher_for("https://bulbapedia.bulbagarden.net/wiki/");
        let err = fetcher.build_article_url("   ").unwrap_err();
        assert!(matches!(err, ScraperError::InvalidArgument(_)));
    }

    #[test]
    fn test_invalid_base_url() {
        let config = Config {
            base_url: "not a url".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            PageFetcher::new(&config),
            Err(ScraperError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wiki/Pikachu"))
            .and(header("user-agent", "WikiScraper/1.0 (Educational project)"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>Pikachu</p>"))
            .mount(&server)
            .await;

        let fetcher = fetcher_for(&format!("{}/wiki/", server.uri()));
        let result = fetcher.fetch_document("Pikachu").await.unwrap();

        assert_eq!(result.html, "<p>Pikachu</p>");
        assert!(result.final_url.ends_with("/wiki/Pikachu"));
    }

    #[tokio::test]
    async fn test_fetch_404_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = fetcher_for(&format!("{}/wiki/", server.uri()));
        let err = fetcher.fetch_document("Missingno").await.unwrap_err();
        assert!(matches!(err, ScraperError::NotFound(ref t) if t == "Missingno"));
    }

    #[tokio::test]
    async fn test_fetch_500_is_fatal_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let fetcher = fetcher_for(&format!("{}/wiki/", server.uri()));
        let err = fetcher.fetch_document("Pikachu").await.unwrap_err();
        match err {
            ScraperError::Fetch { message, .. } => assert_eq!(message, "HTTP 500"),
            other => panic!("expected Fetch error, got {:?}", other),
        }
    }
}
