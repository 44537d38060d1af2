//! Browser-style page session used by the scrapers
//!
//! This module provides the navigation layer the scrapers are written against:
//! - `PageSource`: Anything that can turn a URL into an HTML document
//! - `BrowserSession`: History, wait-for-selector and element queries over the
//!   currently loaded document
//! - `StaticPages`: In-memory pages for offline replay and tests
//!
//! Live pages come from [`crate::core::HttpPages`].

pub mod session;

#[cfg(test)]
mod tests;

pub use session::BrowserSession;

use crate::{error::ScrapeError, Result};
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::Mutex;

/// Loads the HTML for an absolute URL.
pub trait PageSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Serves pre-registered HTML keyed by absolute URL.
///
/// A URL may be registered with a sequence of documents; each load serves the
/// next one and the last keeps being served once the sequence is exhausted.
#[derive(Debug, Default)]
pub struct StaticPages {
    pages: Mutex<HashMap<String, VecDeque<String>>>,
    requests: Mutex<Vec<String>>,
}

impl StaticPages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the document served for `url`.
    pub fn with_page(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.insert_sequence(url, vec![html.into()]);
        self
    }

    /// Register documents served in order on successive loads of `url`.
    pub fn insert_sequence(&self, url: impl Into<String>, documents: Vec<String>) {
        let mut pages = self.pages.lock().unwrap_or_else(|e| e.into_inner());
        pages.insert(url.into(), documents.into());
    }

    /// Every URL requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn load(&self, url: &str) -> Result<String> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(url.to_string());

        let mut pages = self.pages.lock().unwrap_or_else(|e| e.into_inner());
        let documents = pages.get_mut(url).ok_or_else(|| ScrapeError::UnknownPage {
            url: url.to_string(),
        })?;

        let html = if documents.len() > 1 {
            documents.pop_front()
        } else {
            documents.front().cloned()
        };
        html.ok_or_else(|| ScrapeError::UnknownPage {
            url: url.to_string(),
        })
    }
}

impl PageSource for StaticPages {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send {
        let result = self.load(url);
        async move { result }
    }
}
