//! Browsing state for one loaded catalog.
//!
//! A [`CatalogSession`] owns the repository, the current selections and the
//! view they produce. Changing a selection rebuilds the view from scratch.

use tracing::debug;

use crate::error::{CatalogError, LoadError, Result};
use crate::pipeline::{self, group_by_maker, FilterState, GroupedView};
use crate::repository::{CatalogEntry, OfferRepository};
use crate::view::{CatalogProjection, OfferDetail, OffersView, PendingSummary};

#[derive(Debug, Clone)]
pub struct CatalogSession {
    repo: OfferRepository,
    filter: FilterState,
    /// Load-order indices of the current view, in display order.
    view: Vec<usize>,
}

impl CatalogSession {
    /// Start with no selections: every offer, in load order.
    pub fn new(repo: OfferRepository) -> Self {
        let view = (0..repo.len()).collect();
        Self {
            repo,
            filter: FilterState::default(),
            view,
        }
    }

    pub fn repository(&self) -> &OfferRepository {
        &self.repo
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// Replace the selections and rebuild the view. Returns the number of
    /// matching offers.
    pub fn apply(&mut self, filter: FilterState) -> usize {
        let view: Vec<usize> = pipeline::run(self.repo.entries(), &filter)
            .into_iter()
            .filter_map(|entry| self.repo.position(entry.id()))
            .collect();
        debug!(matched = view.len(), "view rebuilt");
        self.view = view;
        self.filter = filter;
        self.view.len()
    }

    /// Like [`apply`](Self::apply) but from the raw selection values.
    pub fn apply_selections(
        &mut self,
        maker: &str,
        fuel: &str,
        payment: &str,
        sort: &str,
    ) -> Result<usize> {
        let filter = FilterState::from_selections(maker, fuel, payment, sort)?;
        Ok(self.apply(filter))
    }

    /// Current view in display order.
    pub fn view(&self) -> Vec<&CatalogEntry> {
        let entries = self.repo.entries();
        self.view.iter().map(|&idx| &entries[idx]).collect()
    }

    pub fn grouped(&self) -> GroupedView<'_> {
        group_by_maker(&self.view())
    }

    /// Everything the list page needs: grouped cards, pending offers and the
    /// data timestamp.
    pub fn projection(&self) -> CatalogProjection {
        CatalogProjection {
            offers: OffersView::from_grouped(&self.grouped()),
            pending: self
                .repo
                .pending()
                .iter()
                .map(PendingSummary::from_pending)
                .collect(),
            last_updated: self.repo.last_updated().to_string(),
        }
    }

    /// Detail projection for the offer a card refers to.
    pub fn select(&self, id: &str) -> Result<OfferDetail> {
        self.repo
            .entry(id)
            .map(OfferDetail::from_entry)
            .ok_or_else(|| CatalogError::NotFound(format!("offer {id}")))
    }
}

// ---------------------------------------------------------------------------
// LoadState
// ---------------------------------------------------------------------------

/// Outcome of the one-shot load. `Unavailable` is terminal for the session:
/// there is no partially loaded catalog to filter.
#[derive(Debug)]
pub enum LoadState {
    Ready(CatalogSession),
    Unavailable(LoadError),
}

impl LoadState {
    pub fn session(&self) -> Option<&CatalogSession> {
        match self {
            LoadState::Ready(session) => Some(session),
            LoadState::Unavailable(_) => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut CatalogSession> {
        match self {
            LoadState::Ready(session) => Some(session),
            LoadState::Unavailable(_) => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadState::Ready(_) => None,
            LoadState::Unavailable(err) => Some(err),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }
}

impl From<std::result::Result<OfferRepository, LoadError>> for LoadState {
    fn from(result: std::result::Result<OfferRepository, LoadError>) -> Self {
        match result {
            Ok(repo) => LoadState::Ready(CatalogSession::new(repo)),
            Err(err) => LoadState::Unavailable(err),
        }
    }
}
