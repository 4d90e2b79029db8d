//! Pending (announced, not yet published) offers. Display only.

use crate::models::PendingOffer;
use crate::repository::OfferRepository;
use crate::view::PendingSummary;

/// Query interface for pending offers, borrowing the loaded repository.
pub struct PendingQuery<'a> {
    repo: &'a OfferRepository,
}

impl<'a> PendingQuery<'a> {
    pub fn new(repo: &'a OfferRepository) -> Self {
        Self { repo }
    }

    pub fn list(&self) -> &'a [PendingOffer] {
        self.repo.pending()
    }

    pub fn summaries(&self) -> Vec<PendingSummary> {
        self.repo
            .pending()
            .iter()
            .map(PendingSummary::from_pending)
            .collect()
    }

    pub fn count(&self) -> usize {
        self.repo.pending().len()
    }
}
