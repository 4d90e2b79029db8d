//! Async wrapper around [`CatalogSession`] for use in async runtimes (Tokio, etc.).
//!
//! The initial load is the only operation that may block, so it runs on the
//! blocking thread pool via [`tokio::task::spawn_blocking`]. Everything after
//! that is in-memory and cheap; calls lock the session and run inline.
//!
//! # Example
//!
//! ```no_run
//! use car_offers::{AsyncCatalog, FilterState, SortKey};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let catalog = AsyncCatalog::builder()
//!         .location("https://example.com/data/offers.json")
//!         .build()
//!         .await
//!         .unwrap();
//!
//!     let page = catalog
//!         .apply(FilterState::new().sort(SortKey::PriceAsc))
//!         .unwrap();
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{CatalogError, Result};
use crate::pipeline::FilterState;
use crate::session::CatalogSession;
use crate::view::{CatalogProjection, OfferDetail};
use crate::{config, Catalog, DataSource};

// ---------------------------------------------------------------------------
// AsyncCatalogBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCatalog`] instance.
pub struct AsyncCatalogBuilder {
    source: Option<DataSource>,
    timeout: Duration,
}

impl Default for AsyncCatalogBuilder {
    fn default() -> Self {
        Self {
            source: None,
            timeout: config::default_timeout(),
        }
    }
}

impl AsyncCatalogBuilder {
    pub fn source(mut self, source: DataSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.source = Some(DataSource::parse(location));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load the catalog on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncCatalog> {
        tokio::task::spawn_blocking(move || {
            let mut builder = Catalog::builder().timeout(self.timeout);
            if let Some(source) = self.source {
                builder = builder.source(source);
            }
            let catalog = builder.build()?;
            Ok(AsyncCatalog {
                inner: Arc::new(Mutex::new(catalog.into_session())),
            })
        })
        .await
        .map_err(|e| CatalogError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncCatalog
// ---------------------------------------------------------------------------

/// Shareable handle to a loaded [`CatalogSession`].
///
/// The session is protected by a [`Mutex`]; each call runs to completion
/// before the next one sees the session, matching the single-flow model of
/// the synchronous API.
#[derive(Clone)]
pub struct AsyncCatalog {
    inner: Arc<Mutex<CatalogSession>>,
}

impl AsyncCatalog {
    pub fn builder() -> AsyncCatalogBuilder {
        AsyncCatalogBuilder::default()
    }

    /// Run an operation against the session.
    pub fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut CatalogSession) -> Result<T>,
    {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| CatalogError::InvalidArgument("Session lock poisoned".into()))?;
        f(&mut guard)
    }

    /// Replace the selections and return the new page projection.
    pub fn apply(&self, filter: FilterState) -> Result<CatalogProjection> {
        self.run(|s| {
            s.apply(filter);
            Ok(s.projection())
        })
    }

    pub fn projection(&self) -> Result<CatalogProjection> {
        self.run(|s| Ok(s.projection()))
    }

    pub fn select(&self, id: &str) -> Result<OfferDetail> {
        self.run(|s| s.select(id))
    }
}
