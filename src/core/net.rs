// src/core/net.rs
// Blocking HTTP GET plus the politeness wrapper. One request at a time.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::info;

use crate::config::options::NetOptions;
use crate::error::{Error, Result};

/// Anything that turns a URL into a response body.
pub trait Fetch {
    fn fetch(&mut self, url: &str) -> Result<String>;
}

impl<F: Fetch + ?Sized> Fetch for &mut F {
    fn fetch(&mut self, url: &str) -> Result<String> {
        (**self).fetch(url)
    }
}

/// Plain GET over reqwest. No retries; any non-2xx status is an error.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &NetOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(opts.timeout)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&mut self, url: &str) -> Result<String> {
        info!("Fetching {url}");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| Error::Http { url: s!(url), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch { url: s!(url), reason: format!("HTTP {status}") });
        }
        response
            .text()
            .map_err(|source| Error::Http { url: s!(url), source })
    }
}

/// Sleeps for `pause` after every call forwarded to `inner`, failed or not.
/// Wrap only the network-facing fetcher so cache hits stay free.
pub struct Polite<F> {
    inner: F,
    pause: Duration,
}

impl<F: Fetch> Polite<F> {
    pub fn new(inner: F, pause: Duration) -> Self {
        Self { inner, pause }
    }

    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F: Fetch> Fetch for Polite<F> {
    fn fetch(&mut self, url: &str) -> Result<String> {
        let result = self.inner.fetch(url);
        if !self.pause.is_zero() {
            thread::sleep(self.pause);
        }
        result
    }
}
