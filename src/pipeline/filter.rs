//! Filter predicate over classified catalog entries.

use std::fmt;
use std::str::FromStr;

use crate::classify::FuelProfile;
use crate::error::{CatalogError, Result};
use crate::models::PaymentType;
use crate::repository::CatalogEntry;

use super::sort::SortKey;

// ---------------------------------------------------------------------------
// FuelFilter
// ---------------------------------------------------------------------------

/// Fuel categories offered by the fuel selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelFilter {
    Hybrid,
    FullHybrid,
    MildHybrid,
    Benzina,
    Diesel,
    Electric,
}

impl FuelFilter {
    pub const ALL: [FuelFilter; 6] = [
        FuelFilter::Hybrid,
        FuelFilter::FullHybrid,
        FuelFilter::MildHybrid,
        FuelFilter::Benzina,
        FuelFilter::Diesel,
        FuelFilter::Electric,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelFilter::Hybrid => "hybrid",
            FuelFilter::FullHybrid => "full-hybrid",
            FuelFilter::MildHybrid => "mild-hybrid",
            FuelFilter::Benzina => "benzina",
            FuelFilter::Diesel => "diesel",
            FuelFilter::Electric => "electric",
        }
    }

    pub fn matches(&self, fuel: &FuelProfile) -> bool {
        match self {
            FuelFilter::Hybrid => fuel.hybrid,
            FuelFilter::FullHybrid => fuel.full_hybrid,
            FuelFilter::MildHybrid => fuel.mild_hybrid,
            // Gasoline-hybrid drivetrains are listed under gasoline as well.
            FuelFilter::Benzina => fuel.benzina || fuel.hybrid,
            FuelFilter::Diesel => fuel.diesel,
            // Requires both words: a plain "Electric" offer does not match.
            FuelFilter::Electric => fuel.electric && fuel.hybrid,
        }
    }
}

impl FromStr for FuelFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        FuelFilter::ALL
            .into_iter()
            .find(|f| f.as_str() == lower)
            .ok_or_else(|| CatalogError::InvalidArgument(format!("unknown fuel filter: {s}")))
    }
}

impl fmt::Display for FuelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FilterState
// ---------------------------------------------------------------------------

/// Current combination of user selections.
///
/// Each constraint is optional; `None` means "any". Active constraints are
/// ANDed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub maker: Option<String>,
    pub fuel: Option<FuelFilter>,
    pub payment: Option<PaymentType>,
    pub sort: SortKey,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the raw values of the four selection controls, where an
    /// empty string means "no constraint".
    pub fn from_selections(maker: &str, fuel: &str, payment: &str, sort: &str) -> Result<Self> {
        Ok(Self {
            maker: non_empty(maker).map(str::to_string),
            fuel: non_empty(fuel).map(str::parse::<FuelFilter>).transpose()?,
            payment: non_empty(payment).map(str::parse::<PaymentType>).transpose()?,
            sort: SortKey::from(sort),
        })
    }

    pub fn maker(mut self, maker: impl Into<String>) -> Self {
        self.maker = Some(maker.into());
        self
    }

    pub fn fuel(mut self, fuel: FuelFilter) -> Self {
        self.fuel = Some(fuel);
        self
    }

    pub fn payment(mut self, payment: PaymentType) -> Self {
        self.payment = Some(payment);
        self
    }

    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

// ---------------------------------------------------------------------------
// Predicate
// ---------------------------------------------------------------------------

/// Whether `entry` satisfies every active constraint in `state`.
pub fn matches(entry: &CatalogEntry, state: &FilterState) -> bool {
    let offer = entry.offer();

    if let Some(maker) = &state.maker {
        if offer.maker != *maker {
            return false;
        }
    }
    if let Some(fuel) = state.fuel {
        if !fuel.matches(entry.fuel()) {
            return false;
        }
    }
    if let Some(payment) = &state.payment {
        if offer.payment_type != *payment {
            return false;
        }
    }
    true
}

/// Keep the entries matching `state`, preserving input order.
pub fn filter<'a, I>(entries: I, state: &FilterState) -> Vec<&'a CatalogEntry>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    entries.into_iter().filter(|e| matches(e, state)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(text: &str) -> FuelProfile {
        FuelProfile::from_text(text)
    }

    #[test]
    fn benzina_includes_hybrids() {
        assert!(FuelFilter::Benzina.matches(&profile("Benzina")));
        assert!(FuelFilter::Benzina.matches(&profile("Mild Hybrid")));
        assert!(!FuelFilter::Benzina.matches(&profile("Diesel")));
    }

    #[test]
    fn hybrid_sub_kinds() {
        let full = profile("Hybrid - Full Hybrid");
        assert!(FuelFilter::Hybrid.matches(&full));
        assert!(FuelFilter::FullHybrid.matches(&full));
        assert!(!FuelFilter::MildHybrid.matches(&full));
    }

    #[test]
    fn electric_needs_hybrid_too() {
        assert!(!FuelFilter::Electric.matches(&profile("Electric")));
        assert!(FuelFilter::Electric.matches(&profile("Plug-in Hybrid Electric")));
        assert!(!FuelFilter::Electric.matches(&profile("Full Hybrid")));
    }

    #[test]
    fn fuel_filter_parses_option_values() {
        assert_eq!("full-hybrid".parse::<FuelFilter>().unwrap(), FuelFilter::FullHybrid);
        assert_eq!("Diesel".parse::<FuelFilter>().unwrap(), FuelFilter::Diesel);
        assert!("lpg".parse::<FuelFilter>().is_err());
    }

    #[test]
    fn selections_with_empty_values_are_unconstrained() {
        let state = FilterState::from_selections("", "", "", "").unwrap();
        assert_eq!(state, FilterState::default());

        let state = FilterState::from_selections("BMW", "hybrid", "leasing", "price-asc").unwrap();
        assert_eq!(state.maker.as_deref(), Some("BMW"));
        assert_eq!(state.fuel, Some(FuelFilter::Hybrid));
        assert_eq!(state.payment, Some(PaymentType::Leasing));
        assert_eq!(state.sort, SortKey::PriceAsc);
    }

    #[test]
    fn unknown_payment_selection_is_rejected() {
        assert!(FilterState::from_selections("", "", "barter", "").is_err());
    }
}
