//! Car offers catalog for Rust.
//!
//! Loads a static catalog of car purchase offers (`offers.json`), classifies
//! the free-text spec fields once, and answers filter/sort/group queries from
//! memory. Results come back as plain projection structs ready for a view
//! layer to render.
//!
//! # Quick start
//!
//! ```no_run
//! use car_offers::{Catalog, FilterState, FuelFilter, SortKey};
//!
//! let catalog = Catalog::builder()
//!     .location("https://example.com/data/offers.json")
//!     .build()
//!     .unwrap();
//!
//! // Hybrids, cheapest first
//! let filter = FilterState::new().fuel(FuelFilter::Hybrid).sort(SortKey::PriceAsc);
//! let offers = catalog.offers().list(&filter);
//!
//! // Stateful browsing
//! let mut session = catalog.into_session();
//! session.apply_selections("Dacia", "", "credit", "monthly-asc").unwrap();
//! let page = session.projection();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod classify;
pub mod config;
pub mod error;
pub mod format;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod queries;
pub mod repository;
pub mod session;
pub mod view;

#[cfg(feature = "async")]
pub use async_client::AsyncCatalog;
pub use error::{CatalogError, LoadError, Result};
pub use loader::{DataLoader, DataSource};
pub use pipeline::{FilterState, FuelFilter, SortKey};
pub use repository::{CatalogEntry, OfferRepository};
pub use session::{CatalogSession, LoadState};

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

// ---------------------------------------------------------------------------
// CatalogBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and loading a [`Catalog`].
///
/// Use [`Catalog::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CatalogBuilder::build) to load the data.
pub struct CatalogBuilder {
    source: DataSource,
    timeout: Duration,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self {
            source: DataSource::File(PathBuf::from(config::DEFAULT_DATA_FILE)),
            timeout: config::default_timeout(),
        }
    }
}

impl CatalogBuilder {
    /// Set the data source explicitly.
    pub fn source(mut self, source: DataSource) -> Self {
        self.source = source;
        self
    }

    /// Set the data source from a URL or filesystem path.
    ///
    /// `http://` and `https://` locations are fetched; anything else is read
    /// from disk. Defaults to `data/offers.json`.
    pub fn location(mut self, location: &str) -> Self {
        self.source = DataSource::parse(location);
        self
    }

    /// Use a document already held in memory.
    pub fn inline(mut self, raw: impl Into<String>) -> Self {
        self.source = DataSource::Inline(raw.into());
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load and validate the catalog.
    ///
    /// This performs the only I/O in the crate. A failure is final; build a
    /// new catalog to try again.
    pub fn build(self) -> Result<Catalog> {
        let loader = DataLoader::new(self.timeout);
        let repo = loader.load(&self.source)?;
        Ok(Catalog { repo })
    }

    /// Load the catalog and wrap the outcome in a [`LoadState`], so a failed
    /// load becomes a displayable "data unavailable" state.
    pub fn load_state(self) -> LoadState {
        let loader = DataLoader::new(self.timeout);
        LoadState::from(loader.load(&self.source))
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A loaded offer catalog.
///
/// Owns the [`OfferRepository`] and exposes query interfaces as lightweight
/// borrowing wrappers.
#[derive(Debug, Clone)]
pub struct Catalog {
    repo: OfferRepository,
}

impl Catalog {
    /// Create a new builder for loading a catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Wrap an already-loaded repository.
    pub fn from_repository(repo: OfferRepository) -> Self {
        Self { repo }
    }

    /// Access the offer query interface.
    pub fn offers(&self) -> queries::OfferQuery<'_> {
        queries::OfferQuery::new(&self.repo)
    }

    /// Access the pending offer query interface.
    pub fn pending(&self) -> queries::PendingQuery<'_> {
        queries::PendingQuery::new(&self.repo)
    }

    /// The opaque "last updated" label from the data file.
    pub fn last_updated(&self) -> &str {
        self.repo.last_updated()
    }

    /// The underlying repository, for direct lookups and classified entries.
    pub fn repository(&self) -> &OfferRepository {
        &self.repo
    }

    /// Start a browsing session over this catalog.
    pub fn into_session(self) -> CatalogSession {
        CatalogSession::new(self.repo)
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Catalog(offers={}, pending={}, makers=[{}], last_updated={})",
            self.repo.len(),
            self.repo.pending().len(),
            self.repo.makers().join(", "),
            self.repo.last_updated()
        )
    }
}
