use std::future::Future;

use anyhow::Context;
use reqwest::{Client, StatusCode};

use crate::configuration::ScraperSettings;

/// A listing page as it came back over the wire. The status is kept for
/// logging only; error statuses still carry a body worth parsing.
pub struct FetchedPage {
    pub status: StatusCode,
    pub body: String,
}

pub trait PageFetcher {
    fn fetch(&self) -> impl Future<Output = anyhow::Result<FetchedPage>> + Send;
}

pub struct HttpFetcher {
    client: Client,
    url: String,
}

impl HttpFetcher {
    pub fn new(settings: &ScraperSettings) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .user_agent(settings.user_agent.clone())
            .build()
            .context("Failed to build http client")?;

        Ok(HttpFetcher {
            client,
            url: settings.target_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self) -> anyhow::Result<FetchedPage> {
        log::info!("Fetching {}", self.url);

        let res = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("No response from {}", self.url))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read body from {}", self.url))?;

        Ok(FetchedPage { status, body })
    }
}
