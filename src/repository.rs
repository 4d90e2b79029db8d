//! In-memory store for a loaded catalog.
//!
//! The repository is populated once from a [`CatalogDocument`] and never
//! mutated afterwards. Each offer is stored as a [`CatalogEntry`] carrying the
//! fuel and power classification computed at load time.

use std::collections::{BTreeSet, HashMap};

use serde_json::Value;
use tracing::{debug, info};

use crate::classify::{EnginePower, FuelProfile};
use crate::error::{CatalogError, LoadError, Result};
use crate::models::{CatalogDocument, Offer, PendingOffer};

// ---------------------------------------------------------------------------
// CatalogEntry
// ---------------------------------------------------------------------------

/// An offer together with the structured facts mined from its free-text specs.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    offer: Offer,
    fuel: FuelProfile,
    power: Option<EnginePower>,
}

impl CatalogEntry {
    pub fn new(offer: Offer) -> Self {
        let fuel = FuelProfile::from_text(&offer.specs.fuel_type);
        let power = EnginePower::parse(&offer.specs.engine_power);
        Self { offer, fuel, power }
    }

    pub fn offer(&self) -> &Offer {
        &self.offer
    }

    pub fn id(&self) -> &str {
        &self.offer.id
    }

    pub fn fuel(&self) -> &FuelProfile {
        &self.fuel
    }

    pub fn power(&self) -> Option<EnginePower> {
        self.power
    }
}

// ---------------------------------------------------------------------------
// OfferRepository
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct OfferRepository {
    entries: Vec<CatalogEntry>,
    by_id: HashMap<String, usize>,
    pending: Vec<PendingOffer>,
    last_updated: String,
}

impl OfferRepository {
    /// Parse and validate a raw JSON document.
    pub fn load(raw: &str) -> std::result::Result<Self, LoadError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    pub fn from_slice(bytes: &[u8]) -> std::result::Result<Self, LoadError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    /// Build from an already-parsed JSON value.
    ///
    /// A document without an `offers` array is rejected with
    /// [`LoadError::MissingOffers`] rather than treated as an empty catalog.
    pub fn from_value(value: Value) -> std::result::Result<Self, LoadError> {
        if !matches!(value.get("offers"), Some(Value::Array(_))) {
            return Err(LoadError::MissingOffers);
        }
        let document: CatalogDocument = serde_json::from_value(value)?;
        Self::from_document(document)
    }

    /// Validate a typed document and classify its offers.
    pub fn from_document(document: CatalogDocument) -> std::result::Result<Self, LoadError> {
        let CatalogDocument {
            offers,
            pending_offers,
            last_updated,
        } = document;

        let mut entries = Vec::with_capacity(offers.len());
        let mut by_id = HashMap::with_capacity(offers.len());

        for offer in offers {
            validate(&offer)?;
            if by_id.insert(offer.id.clone(), entries.len()).is_some() {
                return Err(LoadError::DuplicateId(offer.id));
            }
            let entry = CatalogEntry::new(offer);
            if entry.power().is_none() {
                debug!(
                    id = entry.id(),
                    engine_power = %entry.offer().specs.engine_power,
                    "engine power not recognised, ranking as 0"
                );
            }
            entries.push(entry);
        }

        info!(
            offers = entries.len(),
            pending = pending_offers.len(),
            last_updated = %last_updated,
            "catalog loaded"
        );

        Ok(Self {
            entries,
            by_id,
            pending: pending_offers,
            last_updated,
        })
    }

    // -- Accessors ---------------------------------------------------------

    /// All offers in load order.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &Offer> + '_ {
        self.entries.iter().map(CatalogEntry::offer)
    }

    /// All classified entries in load order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Look up an offer by its `id`.
    pub fn by_id(&self, id: &str) -> Result<&Offer> {
        self.entry(id)
            .map(CatalogEntry::offer)
            .ok_or_else(|| CatalogError::NotFound(format!("offer {id}")))
    }

    pub fn entry(&self, id: &str) -> Option<&CatalogEntry> {
        self.position(id).map(|idx| &self.entries[idx])
    }

    /// Load-order index of the offer with this `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn pending(&self) -> &[PendingOffer] {
        &self.pending
    }

    pub fn last_updated(&self) -> &str {
        &self.last_updated
    }

    /// Distinct makers present in the catalog, sorted.
    pub fn makers(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|e| e.offer().maker.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate(offer: &Offer) -> std::result::Result<(), LoadError> {
    let invalid = |reason: &str| LoadError::InvalidOffer {
        id: offer.id.clone(),
        reason: reason.to_string(),
    };

    if offer.price.total.is_some_and(|t| t < 0.0) {
        return Err(invalid("negative price total"));
    }
    if offer
        .financing
        .as_ref()
        .and_then(|f| f.monthly_payment)
        .is_some_and(|m| m < 0.0)
    {
        return Err(invalid("negative monthly payment"));
    }
    Ok(())
}
