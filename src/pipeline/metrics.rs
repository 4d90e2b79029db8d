//! Numeric metrics derived from offer fields, used only for ordering.

use crate::classify::power_value;
use crate::config::EUR_TO_RON;
use crate::models::{Currency, Offer};
use crate::repository::CatalogEntry;

/// Price expressed in RON so offers in different currencies can be ranked.
///
/// `None` when the price is on request. A zero total is published for
/// on-request offers too and is treated the same way.
pub fn comparable_price(offer: &Offer) -> Option<f64> {
    let total = offer.price.total.filter(|&t| t != 0.0)?;
    match offer.price.currency {
        Currency::Eur => Some(total * EUR_TO_RON),
        _ => Some(total),
    }
}

/// Monthly instalment, `None` for offers without a financing plan.
pub fn monthly_payment(offer: &Offer) -> Option<f64> {
    offer
        .financing
        .as_ref()?
        .monthly_payment
        .filter(|&m| m != 0.0)
}

/// Parsed engine power, 0 when the text carried no recognisable figure.
pub fn engine_power(entry: &CatalogEntry) -> u32 {
    power_value(entry.power())
}

/// Sort rank for an optional money amount. Absent values rank as +∞, so
/// they trail every priced offer in ascending order and lead it in
/// descending order.
pub(crate) fn rank(value: Option<f64>) -> f64 {
    value.unwrap_or(f64::INFINITY)
}
