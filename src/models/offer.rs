use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::lenient;
use crate::error::CatalogError;

// ---------------------------------------------------------------------------
// Offer — One advertised car purchase option
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub maker: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub model: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub version: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub specs: Specs,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub price: Price,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub financing: Option<Financing>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub payment_type: PaymentType,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub services: Services,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub features: BTreeMap<String, Vec<String>>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub accessories: Vec<String>,

    // -- Dealer metadata --
    #[serde(default, deserialize_with = "lenient::text")]
    pub dealership: String,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub dealer_contact: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub offer_date: String,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub offer_valid_until: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub offer_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub official_page_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub image_url: Option<String>,
}

impl Offer {
    /// `"<maker> <model>"`, the heading used on cards and in the modal.
    pub fn title(&self) -> String {
        format!("{} {}", self.maker, self.model)
    }

    /// Currency the monthly payment is quoted in, falling back to the price
    /// currency when financing does not name one.
    pub fn monthly_currency(&self) -> &Currency {
        self.financing
            .as_ref()
            .and_then(|f| f.monthly_payment_currency.as_ref())
            .unwrap_or(&self.price.currency)
    }
}

// ---------------------------------------------------------------------------
// Specs — Technical data, mostly free text
// ---------------------------------------------------------------------------

/// Technical specification block.
///
/// Only `fuel_type` and `engine_power` feed the pipeline; the rest is shown
/// as-is. Fields typed as [`serde_json::Value`] appear in the data both as
/// strings and as numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specs {
    #[serde(default, deserialize_with = "lenient::text")]
    pub fuel_type: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub engine_power: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub consumption: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub transmission: String,
    pub engine_displacement: Option<serde_json::Value>,
    pub torque: Option<serde_json::Value>,
    pub drivetrain: Option<serde_json::Value>,
    pub emissions: Option<serde_json::Value>,
    pub max_speed: Option<serde_json::Value>,
    pub acceleration: Option<serde_json::Value>,
    pub body_type: Option<serde_json::Value>,
    pub doors: Option<serde_json::Value>,
    pub seats: Option<serde_json::Value>,
    pub tank_capacity: Option<serde_json::Value>,
    pub trunk_capacity: Option<serde_json::Value>,
    pub tires: Option<serde_json::Value>,
    pub color: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub dimensions: Option<Dimensions>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub weight: Option<Weight>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub length: Option<serde_json::Value>,
    pub width: Option<serde_json::Value>,
    pub height: Option<serde_json::Value>,
    pub wheelbase: Option<serde_json::Value>,
    pub ground_clearance: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weight {
    pub curb: Option<serde_json::Value>,
    pub max_authorized: Option<serde_json::Value>,
    pub towing_braked: Option<serde_json::Value>,
    pub towing_unbraked: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Price / Currency
// ---------------------------------------------------------------------------

/// Cash price. A missing `total` means "price on request".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    #[serde(default, deserialize_with = "lenient::amount")]
    pub total: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub currency: Currency,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub discount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Ron,
    Eur,
    #[serde(untagged)]
    Other(String),
}

impl Currency {
    pub fn code(&self) -> &str {
        match self {
            Currency::Ron => "RON",
            Currency::Eur => "EUR",
            Currency::Other(code) => code,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// Financing — Present only when the offer comes with a credit/leasing plan
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Financing {
    #[serde(default, deserialize_with = "lenient::amount")]
    pub monthly_payment: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub monthly_payment_currency: Option<Currency>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub down_payment: Option<f64>,
    #[serde(default, deserialize_with = "lenient::months")]
    pub duration: Option<u32>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub interest_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub effective_interest_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub total_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub credit_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub fees: Option<Fees>,
    #[serde(rename = "type", default, deserialize_with = "lenient::opt_text")]
    pub type_field: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fees {
    #[serde(default, deserialize_with = "lenient::amount")]
    pub dosar_analysis: Option<f64>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub monthly_admin: Option<f64>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub insurance: Option<f64>,
}

impl Fees {
    pub fn is_empty(&self) -> bool {
        self.dosar_analysis.is_none() && self.monthly_admin.is_none() && self.insurance.is_none()
    }
}

// ---------------------------------------------------------------------------
// PaymentType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Cash,
    Credit,
    Leasing,
    #[serde(untagged)]
    Other(String),
}

impl PaymentType {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentType::Cash => "cash",
            PaymentType::Credit => "credit",
            PaymentType::Leasing => "leasing",
            PaymentType::Other(raw) => raw,
        }
    }

    /// Label shown on the payment badge.
    pub fn label(&self) -> &str {
        match self {
            PaymentType::Cash => "Cash",
            PaymentType::Credit => "Credit",
            PaymentType::Leasing => "Leasing",
            PaymentType::Other(raw) => raw,
        }
    }
}

/// A missing or unreadable payment type; never matches a payment filter.
impl Default for PaymentType {
    fn default() -> Self {
        PaymentType::Other(String::new())
    }
}

impl FromStr for PaymentType {
    type Err = CatalogError;

    /// Parses one of the selectable payment options. Free-form values are
    /// rejected: the filter only ever offers the three known kinds.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentType::Cash),
            "credit" => Ok(PaymentType::Credit),
            "leasing" => Ok(PaymentType::Leasing),
            other => Err(CatalogError::InvalidArgument(format!(
                "unknown payment type: {other}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Services — Bundled service and insurance flags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Services {
    #[serde(default)]
    pub service_package: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub service_package_details: Option<String>,
    #[serde(default)]
    pub extended_warranty: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub extended_warranty_details: Option<String>,
    #[serde(default)]
    pub traffic_accident_insurance: bool,
    #[serde(default)]
    pub casco_insurance: bool,
}
