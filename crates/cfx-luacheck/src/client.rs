//! Catalog retrieval over HTTP (or from local files for offline runs).

use crate::catalog::Catalog;
use crate::error::{LintError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Base URL of the public natives documentation.
pub const DEFAULT_BASE_URL: &str = "https://runtime.fivem.net/doc";

const TIMEOUT: Duration = Duration::from_secs(10);

/// Where a catalog document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Remote(String),
    File(PathBuf),
}

impl CatalogSource {
    /// `<base>/natives.json`
    pub fn natives(base_url: &str) -> Self {
        CatalogSource::Remote(format!("{}/natives.json", base_url.trim_end_matches('/')))
    }

    /// `<base>/natives_cfx.json`
    pub fn natives_cfx(base_url: &str) -> Self {
        CatalogSource::Remote(format!(
            "{}/natives_cfx.json",
            base_url.trim_end_matches('/')
        ))
    }
}

/// Blocking HTTP client for the natives catalogs.
pub struct NativesClient {
    agent: ureq::Agent,
}

impl Default for NativesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NativesClient {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new().timeout(TIMEOUT).build();
        Self { agent }
    }

    /// Load one catalog. `what` names it in errors ("natives", "CFX natives").
    pub fn fetch(&self, source: &CatalogSource, what: &str) -> Result<Catalog> {
        match source {
            CatalogSource::Remote(url) => {
                debug!(url = %url, "fetching {}", what);
                let response = self.get(url).map_err(|message| LintError::Network {
                    what: what.to_string(),
                    message,
                })?;
                Catalog::from_reader(BufReader::new(response.into_reader()))
            }
            CatalogSource::File(path) => {
                debug!(path = %path.display(), "reading {}", what);
                let file = File::open(path).map_err(|e| LintError::io(path, e))?;
                Catalog::from_reader(BufReader::new(file))
            }
        }
    }

    /// Load the base and CFX catalogs concurrently. Either failure fails the pair.
    pub fn fetch_both(
        &self,
        natives: &CatalogSource,
        natives_cfx: &CatalogSource,
    ) -> Result<(Catalog, Catalog)> {
        let (base, cfx) = thread::scope(|s| {
            let base = s.spawn(|| self.fetch(natives, "natives"));
            let cfx = s.spawn(|| self.fetch(natives_cfx, "CFX natives"));
            (join(base), join(cfx))
        });
        Ok((base?, cfx?))
    }

    fn get(&self, url: &str) -> std::result::Result<ureq::Response, String> {
        self.agent
            .get(url)
            .set("Content-Type", "application/json")
            .call()
            .map_err(|e| e.to_string())
    }
}

fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    match handle.join() {
        Ok(value) => value,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}
