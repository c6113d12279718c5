//! Best-effort video title lookup through YouTube's public oEmbed endpoint.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::config::OembedConfig;

use super::video_id::VideoId;

#[derive(Debug, Error)]
pub enum OembedError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid oEmbed endpoint '{endpoint}': {source}")]
    Endpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("oEmbed request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("oEmbed returned HTTP {status}")]
    Status { status: u16 },

    #[error("Failed to decode oEmbed response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct OembedResponse {
    title: String,
}

/// Client for the oEmbed title lookup.
#[derive(Clone)]
pub struct OembedClient {
    client: Client,
    endpoint: String,
}

impl OembedClient {
    pub fn new(config: &OembedConfig) -> Result<Self, OembedError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(OembedError::Client)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// `<endpoint>?url=<watch url>&format=json`
    pub fn lookup_url(&self, id: &VideoId) -> Result<Url, OembedError> {
        Url::parse_with_params(
            &self.endpoint,
            &[("url", id.watch_url().as_str()), ("format", "json")],
        )
        .map_err(|source| OembedError::Endpoint {
            endpoint: self.endpoint.clone(),
            source,
        })
    }

    /// Fetch the display title of `id`.
    pub async fn fetch_title(&self, id: &VideoId) -> Result<String, OembedError> {
        let url = self.lookup_url(id)?;
        tracing::debug!(video_id = %id, url = %url, "Fetching oEmbed title");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(OembedError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(OembedError::Status {
                status: status.as_u16(),
            });
        }

        let body: OembedResponse = response.json().await.map_err(OembedError::Decode)?;
        Ok(body.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_url_encodes_watch_url() {
        let client = OembedClient::new(&OembedConfig::default()).unwrap();
        let id = VideoId::parse("dQw4w9WgXcQ").unwrap();
        let url = client.lookup_url(&id).unwrap();

        assert_eq!(url.host_str(), Some("www.youtube.com"));
        assert_eq!(url.path(), "/oembed");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (
                    "url".to_string(),
                    "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string()
                ),
                ("format".to_string(), "json".to_string()),
            ]
        );
    }

    #[test]
    fn bad_endpoint_is_reported() {
        let config = OembedConfig {
            endpoint: "not a url".into(),
            ..OembedConfig::default()
        };
        let client = OembedClient::new(&config).unwrap();
        let id = VideoId::parse("dQw4w9WgXcQ").unwrap();
        assert!(matches!(
            client.lookup_url(&id),
            Err(OembedError::Endpoint { .. })
        ));
    }
}
