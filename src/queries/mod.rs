//! Query modules for the offer catalog.
//!
//! Each module provides a query struct that borrows the loaded
//! [`OfferRepository`](crate::repository::OfferRepository) and answers from
//! memory.

pub mod offers;
pub mod pending;

pub use offers::OfferQuery;
pub use pending::PendingQuery;
