//! Navigation state and element queries for one scraping run.

use super::PageSource;
use crate::{core::config::SessionConfig, error::ScrapeError, Result};
use log::debug;
use scraper::{ElementRef, Html, Selector};
use tokio::time::{sleep, Instant};

/// An open page session.
///
/// Owned by the command that created it and lent by `&mut` down the scrape
/// call chain. Queries never hand out element handles: every call re-parses
/// the document that is loaded right now, so a navigation in between can't
/// leave a caller holding a detached node.
pub struct BrowserSession<S: PageSource> {
    source: S,
    config: SessionConfig,
    history: Vec<String>,
    document: Option<String>,
    page_loads: usize,
}

impl<S: PageSource> BrowserSession<S> {
    pub fn new(source: S, config: SessionConfig) -> Self {
        Self {
            source,
            config,
            history: Vec::new(),
            document: None,
            page_loads: 0,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn current_url(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn page_loads(&self) -> usize {
        self.page_loads
    }

    /// Load a site-relative path such as `Team_Liquid/Results`.
    pub async fn navigate(&mut self, path: &str) -> Result<()> {
        let url = self.config.page_url(path);
        self.navigate_url(&url).await
    }

    /// Load an absolute URL and push it onto the history.
    ///
    /// The URL is recorded even when the load fails, so a following
    /// [`back`](Self::back) returns to the page before it.
    pub async fn navigate_url(&mut self, url: &str) -> Result<()> {
        self.history.push(url.to_string());
        self.load_current().await
    }

    /// Return to the previous history entry and load it again.
    pub async fn back(&mut self) -> Result<()> {
        if self.history.len() < 2 {
            return Err(ScrapeError::NoHistory);
        }
        self.history.pop();
        self.load_current().await
    }

    /// Load the current history entry again.
    pub async fn reload(&mut self) -> Result<()> {
        if self.history.is_empty() {
            return Err(ScrapeError::NoPageLoaded);
        }
        self.load_current().await
    }

    /// Wait until `selector` matches at least one element.
    ///
    /// Checks the loaded document first, then reloads the current page every
    /// `poll_interval` until the selector resolves or `wait_timeout` elapses.
    pub async fn wait_for(&mut self, selector: &str) -> Result<()> {
        self.poll(selector, false).await.map(|_| ())
    }

    /// Check for `selector` on a page where it may legitimately be absent.
    ///
    /// A loaded document is final: the result is whether it matches, with no
    /// further reloads. Only a failed load is retried on the
    /// [`wait_for`](Self::wait_for) schedule, ending in `WaitTimeout` when no
    /// document ever arrives.
    pub async fn wait_for_optional(&mut self, selector: &str) -> Result<bool> {
        self.poll(selector, true).await
    }

    /// Number of elements matching `selector` on the current page.
    pub fn count(&self, selector: &str) -> Result<usize> {
        let parsed = parse_selector(selector)?;
        self.with_document(|doc| doc.select(&parsed).count())
    }

    /// Rendered text of every element matching `selector`, in document order.
    pub fn texts(&self, selector: &str) -> Result<Vec<String>> {
        let parsed = parse_selector(selector)?;
        self.with_document(|doc| doc.select(&parsed).map(rendered_text).collect())
    }

    /// Value of `attr` on every element matching `selector`, in document order.
    pub fn attrs(&self, selector: &str, attr: &str) -> Result<Vec<Option<String>>> {
        let parsed = parse_selector(selector)?;
        self.with_document(|doc| {
            doc.select(&parsed)
                .map(|el| el.value().attr(attr).map(str::to_string))
                .collect()
        })
    }

    async fn poll(&mut self, selector: &str, accept_missing: bool) -> Result<bool> {
        let parsed = parse_selector(selector)?;
        let url = self
            .current_url()
            .map(str::to_string)
            .ok_or(ScrapeError::NoPageLoaded)?;
        let started = Instant::now();

        loop {
            // a failed load leaves no document; keep polling
            match self.with_document(|doc| doc.select(&parsed).next().is_some()) {
                Ok(true) => return Ok(true),
                Ok(false) if accept_missing => {
                    debug!("{:?} not present on {}", selector, url);
                    return Ok(false);
                }
                _ => {}
            }

            let waited = started.elapsed();
            if waited >= self.config.wait_timeout {
                return Err(ScrapeError::WaitTimeout {
                    selector: selector.to_string(),
                    url,
                    waited_ms: waited.as_millis(),
                });
            }

            let remaining = self.config.wait_timeout - waited;
            sleep(self.config.poll_interval.min(remaining)).await;

            debug!("Polling {} for {:?}", url, selector);
            if let Err(e) = self.load_current().await {
                debug!("Reload of {} failed while waiting: {}", url, e);
            }
        }
    }

    async fn load_current(&mut self) -> Result<()> {
        let url = self
            .current_url()
            .map(str::to_string)
            .ok_or(ScrapeError::NoPageLoaded)?;

        debug!("Loading {}", url);
        self.page_loads += 1;
        match self.source.fetch(&url).await {
            Ok(html) => {
                self.document = Some(html);
                Ok(())
            }
            Err(e) => {
                self.document = None;
                Err(e)
            }
        }
    }

    fn with_document<T>(&self, f: impl FnOnce(&Html) -> T) -> Result<T> {
        let html = self.document.as_deref().ok_or(ScrapeError::NoPageLoaded)?;
        let doc = Html::parse_document(html);
        Ok(f(&doc))
    }
}

impl<S: PageSource> Drop for BrowserSession<S> {
    fn drop(&mut self) {
        debug!(
            "Closing browser session after {} page loads",
            self.page_loads
        );
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Text nodes under `el`, whitespace-collapsed and joined with single spaces.
pub fn rendered_text(el: ElementRef<'_>) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
