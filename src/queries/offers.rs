//! Offer queries over the in-memory repository.
//!
//! Every call runs the full filter → sort pipeline against the loaded
//! entries; nothing is cached between calls.

use crate::error::{CatalogError, Result};
use crate::models::Offer;
use crate::pipeline::{self, group_by_maker, FilterState, GroupedView};
use crate::repository::{CatalogEntry, OfferRepository};
use crate::view::{OfferDetail, OfferSummary, OffersView};

// ---------------------------------------------------------------------------
// OfferQuery
// ---------------------------------------------------------------------------

/// Query interface for offers, borrowing the loaded repository.
pub struct OfferQuery<'a> {
    repo: &'a OfferRepository,
}

impl<'a> OfferQuery<'a> {
    /// Create a new `OfferQuery` bound to the given repository.
    pub fn new(repo: &'a OfferRepository) -> Self {
        Self { repo }
    }

    /// All offers in load order.
    pub fn all(&self) -> Vec<&'a Offer> {
        self.repo.all().collect()
    }

    /// Retrieve a single offer by its `id`.
    pub fn get_by_id(&self, id: &str) -> Result<&'a Offer> {
        self.repo.by_id(id)
    }

    /// Filtered and sorted entries.
    pub fn entries(&self, filter: &FilterState) -> Vec<&'a CatalogEntry> {
        pipeline::run(self.repo.entries(), filter)
    }

    /// Filtered and sorted offers.
    pub fn list(&self, filter: &FilterState) -> Vec<&'a Offer> {
        self.entries(filter)
            .into_iter()
            .map(CatalogEntry::offer)
            .collect()
    }

    /// Filtered, sorted and grouped by maker.
    pub fn grouped(&self, filter: &FilterState) -> GroupedView<'a> {
        group_by_maker(&self.entries(filter))
    }

    /// Card projections, grouped by maker.
    pub fn summaries(&self, filter: &FilterState) -> OffersView {
        OffersView::from_grouped(&self.grouped(filter))
    }

    /// Detail projection for one offer.
    pub fn detail(&self, id: &str) -> Result<OfferDetail> {
        self.entry(id).map(OfferDetail::from_entry)
    }

    /// Card projection for one offer.
    pub fn summary(&self, id: &str) -> Result<OfferSummary> {
        self.entry(id).map(OfferSummary::from_entry)
    }

    fn entry(&self, id: &str) -> Result<&'a CatalogEntry> {
        self.repo
            .entry(id)
            .ok_or_else(|| CatalogError::NotFound(format!("offer {id}")))
    }

    /// Distinct makers, sorted, for the maker selection.
    pub fn makers(&self) -> Vec<&'a str> {
        self.repo.makers()
    }
}
