//! Shared test fixtures for the car offers integration tests.
//!
//! Provides a small sample catalog covering every fuel kind, both price
//! currencies, a price-on-request offer and offers with and without
//! financing.

#![allow(dead_code)]

use car_offers::OfferRepository;
use serde_json::{json, Value};

/// Minimal offer with the fields the pipeline reads.
pub fn offer(
    id: &str,
    maker: &str,
    model: &str,
    fuel: &str,
    power: &str,
    total: Option<f64>,
    currency: &str,
    payment: &str,
) -> Value {
    json!({
        "id": id,
        "maker": maker,
        "model": model,
        "version": "Base",
        "specs": {
            "fuelType": fuel,
            "enginePower": power,
            "consumption": "5.5 l/100km",
            "transmission": "Manuala"
        },
        "price": { "total": total, "currency": currency },
        "paymentType": payment,
        "dealership": "Auto Test SRL",
        "offerDate": "2025-01-10"
    })
}

/// Attach a financing block to an offer.
pub fn with_financing(mut offer: Value, monthly: f64, currency: &str, duration: u32) -> Value {
    offer["financing"] = json!({
        "monthlyPayment": monthly,
        "monthlyPaymentCurrency": currency,
        "duration": duration,
        "type": "Leasing financiar"
    });
    offer
}

pub fn sample_document() -> Value {
    json!({
        "lastUpdated": "15 ianuarie 2025",
        "offers": [
            offer("dacia-duster-1", "Dacia", "Duster", "Benzina", "130 CP",
                  Some(100_000.0), "RON", "cash"),
            with_financing(
                offer("bmw-x1-1", "BMW", "X1", "Diesel", "150 CP",
                      Some(40_000.0), "EUR", "leasing"),
                800.0, "EUR", 48),
            with_financing(
                offer("toyota-chr-1", "Toyota", "C-HR", "Hybrid - Full Hybrid", "140 CP",
                      Some(30_000.0), "EUR", "credit"),
                2_500.0, "RON", 60),
            with_financing(
                offer("suzuki-vitara-1", "Suzuki", "Vitara", "Benzina - Mild Hybrid", "95 kW",
                      None, "RON", "credit"),
                1_500.0, "RON", 60),
            offer("vw-id4-1", "Volkswagen", "ID.4", "Electric", "204 CP",
                  Some(50_000.0), "EUR", "cash"),
            offer("kia-niro-1", "Kia", "Niro", "Plug-in Hybrid Electric", "N/A",
                  Some(150_000.0), "RON", "leasing"),
            offer("dacia-jogger-1", "Dacia", "Jogger", "GPL", "100 CP",
                  Some(20_000.0), "EUR", "cash"),
        ],
        "pendingOffers": [
            { "maker": "Renault", "model": "Clio", "version": "Evolution", "status": "Asteptam oferta",
              "officialPageUrl": "https://example.com/clio" },
            { "maker": "Skoda", "model": "Elroq", "status": "In curand" }
        ]
    })
}

pub fn sample_json() -> String {
    sample_document().to_string()
}

pub fn sample_repository() -> OfferRepository {
    OfferRepository::from_value(sample_document()).unwrap()
}

/// Ids of a list of offers, in order.
pub fn ids<'a, I>(offers: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a car_offers::models::Offer>,
{
    offers.into_iter().map(|o| o.id.clone()).collect()
}
