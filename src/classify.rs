//! One-time normalization of the free-text spec fields.
//!
//! Fuel descriptions ("Hybrid - Full Hybrid", "Benzina", ...) and engine power
//! strings ("150 CP", "110 kW (150 CP)") are mined once per offer at load time.
//! The filter and sort stages only look at the structured results.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static POWER_CP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s*CP").unwrap());
static POWER_KW: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s*kW").unwrap());

// ---------------------------------------------------------------------------
// FuelProfile
// ---------------------------------------------------------------------------

/// Substring facts about a fuel description, matched case-insensitively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FuelProfile {
    pub hybrid: bool,
    pub full_hybrid: bool,
    pub mild_hybrid: bool,
    pub benzina: bool,
    pub diesel: bool,
    pub electric: bool,
}

impl FuelProfile {
    pub fn from_text(fuel_type: &str) -> Self {
        let text = fuel_type.to_lowercase();
        Self {
            hybrid: text.contains("hybrid"),
            full_hybrid: text.contains("full hybrid"),
            mild_hybrid: text.contains("mild hybrid"),
            benzina: text.contains("benzina"),
            diesel: text.contains("diesel"),
            electric: text.contains("electric"),
        }
    }

    /// Badge colour class for cards and the modal header.
    pub fn badge(&self) -> FuelBadge {
        if self.electric && !self.hybrid {
            FuelBadge::Electric
        } else if self.hybrid {
            FuelBadge::Hybrid
        } else if self.diesel {
            FuelBadge::Diesel
        } else {
            FuelBadge::Benzina
        }
    }

    /// Short human label. Anything unrecognised reads as gasoline.
    pub fn label(&self) -> &'static str {
        if self.full_hybrid {
            "Full Hybrid"
        } else if self.mild_hybrid {
            "Mild Hybrid"
        } else if self.hybrid {
            "Hybrid"
        } else if self.electric {
            "Electric"
        } else if self.diesel {
            "Diesel"
        } else {
            "Benzina"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelBadge {
    Electric,
    Hybrid,
    Diesel,
    Benzina,
}

// ---------------------------------------------------------------------------
// EnginePower
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PowerUnit {
    /// Cai putere (metric horsepower).
    Cp,
    Kw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnginePower {
    pub value: u32,
    pub unit: PowerUnit,
}

impl EnginePower {
    /// Extract the first `<digits> CP` figure, falling back to the first
    /// `<digits> kW` figure. Returns `None` when neither is present or the
    /// number does not fit.
    pub fn parse(text: &str) -> Option<Self> {
        let (caps, unit) = match POWER_CP.captures(text) {
            Some(caps) => (caps, PowerUnit::Cp),
            None => (POWER_KW.captures(text)?, PowerUnit::Kw),
        };
        let value = caps.get(1)?.as_str().parse().ok()?;
        Some(Self { value, unit })
    }
}

/// Power figure used for sorting: the parsed number in whatever unit was
/// found, or 0 for unparseable text.
pub fn power_value(power: Option<EnginePower>) -> u32 {
    power.map(|p| p.value).unwrap_or(0)
}
