use crate::config::ScraperConfig;
use crate::error::FetchError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Body of a successfully fetched page and the URL it was finally served from
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: Url,
    pub body: String,
}

/// Thin wrapper over a reqwest client that issues plain GET requests
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }

    /// GET `url` and return its body as text. Non-2xx responses are errors.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let target = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self.client.get(target).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let final_url = response.url().clone();
        let body = response.text().await?;
        ::log::debug!("Fetched {} bytes from {}", body.len(), final_url);

        Ok(FetchedPage {
            url: final_url,
            body,
        })
    }
}
