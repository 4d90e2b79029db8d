//! One-shot retrieval of the catalog document.
//!
//! The document is fetched over HTTP or read from disk, gunzipped when it
//! arrives compressed, and handed to [`OfferRepository`] for validation. There
//! is no retry: a failed load ends the session.

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use flate2::read::GzDecoder;
use reqwest::blocking::Client;
use tracing::{info, warn};

use crate::error::LoadError;
use crate::repository::OfferRepository;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

// ---------------------------------------------------------------------------
// DataSource
// ---------------------------------------------------------------------------

/// Where the catalog document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
    /// A document already held in memory (tests, embedded data).
    Inline(String),
}

impl DataSource {
    /// Treat `http://` and `https://` locations as URLs and anything else as
    /// a filesystem path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            DataSource::Url(location.to_string())
        } else {
            DataSource::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => f.write_str(url),
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Inline(_) => f.write_str("<inline>"),
        }
    }
}

// ---------------------------------------------------------------------------
// DataLoader
// ---------------------------------------------------------------------------

pub struct DataLoader {
    timeout: Duration,
}

impl DataLoader {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Fetch the raw document bytes, decompressed.
    pub fn fetch(&self, source: &DataSource) -> Result<Vec<u8>, LoadError> {
        let bytes = match source {
            DataSource::Url(url) => {
                info!(%url, "fetching catalog");
                let client = Client::builder()
                    .timeout(self.timeout)
                    .redirect(reqwest::redirect::Policy::limited(10))
                    .build()?;
                let resp = client.get(url).send()?.error_for_status()?;
                resp.bytes()?.to_vec()
            }
            DataSource::File(path) => {
                info!(path = %path.display(), "reading catalog");
                read_file(path)?
            }
            DataSource::Inline(raw) => raw.clone().into_bytes(),
        };
        gunzip_if_needed(bytes)
    }

    /// Fetch, parse and validate the catalog.
    pub fn load(&self, source: &DataSource) -> Result<OfferRepository, LoadError> {
        let result = self
            .fetch(source)
            .and_then(|bytes| OfferRepository::from_slice(&bytes));
        if let Err(err) = &result {
            warn!(%source, error = %err, "catalog unavailable");
        }
        result
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, LoadError> {
    Ok(fs::read(path)?)
}

fn gunzip_if_needed(bytes: Vec<u8>) -> Result<Vec<u8>, LoadError> {
    if !bytes.starts_with(&GZIP_MAGIC) {
        return Ok(bytes);
    }
    let mut decoder = GzDecoder::new(bytes.as_slice());
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}
