//! HTTP page loading for the browser session

use crate::{browser::PageSource, core::config::SessionConfig, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use std::future::Future;

/// Build the one client configuration every session uses.
pub fn build_client(config: &SessionConfig) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en"));

    let client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .timeout(config.request_timeout)
        .build()?;
    Ok(client)
}

/// Fetches live pages over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPages {
    client: Client,
}

impl HttpPages {
    pub fn new(config: &SessionConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
        })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl PageSource for HttpPages {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send {
        let request = self.client.get(url);
        async move {
            let body = request.send().await?.error_for_status()?.text().await?;
            Ok(body)
        }
    }
}
