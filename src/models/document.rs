use serde::{Deserialize, Serialize};

use super::{lenient, Offer, PendingOffer};

// ---------------------------------------------------------------------------
// CatalogDocument — The published data file
// ---------------------------------------------------------------------------

/// Top-level shape of `offers.json`.
///
/// `pendingOffers` and `lastUpdated` are optional and tolerate null or
/// ill-typed values; `offers` is required and its absence is reported by the
/// repository as a load error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    pub offers: Vec<Offer>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub pending_offers: Vec<PendingOffer>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub last_updated: String,
}
