//! Display projections handed to the rendering layer.
//!
//! Nothing here produces markup. Each struct carries the strings a card, the
//! detail modal or the pending list needs, already formatted for ro-RO.

use serde::Serialize;
use serde_json::Value;

use crate::classify::FuelBadge;
use crate::format::{
    category_name, display_value, format_currency, is_present, offer_count_label,
};
use crate::models::{Currency, Offer, PendingOffer};
use crate::pipeline::{GroupedView, MakerGroup};
use crate::repository::CatalogEntry;

// ---------------------------------------------------------------------------
// OfferSummary — Card data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferSummary {
    pub id: String,
    pub title: String,
    pub version: String,
    pub image_url: Option<String>,
    pub fuel_badge: FuelBadge,
    pub fuel_label: &'static str,
    pub payment_label: String,
    pub engine_power: String,
    pub consumption: String,
    pub transmission: String,
    /// `None` for "price on request".
    pub price: Option<String>,
    /// `"<amount> <currency>/luna"`.
    pub monthly: Option<String>,
    pub down_payment: Option<String>,
    /// `"<n> luni"`.
    pub duration: Option<String>,
    pub dealership: String,
}

impl OfferSummary {
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        let offer = entry.offer();
        let financing = offer.financing.as_ref();
        let monthly_currency = offer.monthly_currency();

        Self {
            id: offer.id.clone(),
            title: offer.title(),
            version: offer.version.clone(),
            image_url: offer.image_url.clone(),
            fuel_badge: entry.fuel().badge(),
            fuel_label: entry.fuel().label(),
            payment_label: offer.payment_type.label().to_string(),
            engine_power: offer.specs.engine_power.clone(),
            consumption: offer.specs.consumption.clone(),
            transmission: offer.specs.transmission.clone(),
            price: price_text(offer),
            monthly: financing
                .map(|f| format!("{}/luna", format_currency(f.monthly_payment, monthly_currency))),
            down_payment: financing
                .and_then(|f| nonzero(f.down_payment))
                .map(|d| format_currency(Some(d), monthly_currency)),
            duration: financing
                .and_then(|f| f.duration)
                .filter(|&d| d != 0)
                .map(|d| format!("{d} luni")),
            dealership: offer.dealership.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Grouped projection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub maker: String,
    pub count_label: String,
    pub offers: Vec<OfferSummary>,
}

impl GroupSummary {
    pub fn from_group(group: &MakerGroup<'_>) -> Self {
        Self {
            maker: group.maker.to_string(),
            count_label: offer_count_label(group.len()),
            offers: group.entries.iter().map(|e| OfferSummary::from_entry(e)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "groups", rename_all = "snake_case")]
pub enum OffersView {
    /// The current selections matched nothing.
    NoResults,
    Groups(Vec<GroupSummary>),
}

impl OffersView {
    pub fn from_grouped(grouped: &GroupedView<'_>) -> Self {
        match grouped {
            GroupedView::NoResults => OffersView::NoResults,
            GroupedView::Groups(groups) => {
                OffersView::Groups(groups.iter().map(GroupSummary::from_group).collect())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Pending offers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingSummary {
    pub title: String,
    pub version: Option<String>,
    pub status: String,
    pub link: Option<String>,
}

impl PendingSummary {
    pub fn from_pending(pending: &PendingOffer) -> Self {
        Self {
            title: format!("{} {}", pending.maker, pending.model),
            version: pending.version.clone().filter(|v| !v.is_empty()),
            status: pending.status.clone(),
            link: pending.official_page_url.clone().filter(|u| !u.is_empty()),
        }
    }

    pub fn is_clickable(&self) -> bool {
        self.link.is_some()
    }
}

// ---------------------------------------------------------------------------
// CatalogProjection — Everything the list page shows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogProjection {
    pub offers: OffersView,
    pub pending: Vec<PendingSummary>,
    pub last_updated: String,
}

// ---------------------------------------------------------------------------
// OfferDetail — Modal data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceStatus {
    pub name: String,
    pub included: bool,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureGroup {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum SectionBody {
    Fields(Vec<Field>),
    Services(Vec<ServiceStatus>),
    Features(Vec<FeatureGroup>),
    Tags(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailSection {
    pub title: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfficialLink {
    pub url: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferDetail {
    pub id: String,
    pub title: String,
    pub version: String,
    pub image_url: Option<String>,
    pub fuel_badge: FuelBadge,
    pub fuel_label: &'static str,
    pub payment_label: String,
    /// Formatted total, or "Pret la cerere".
    pub price: String,
    /// `"-<amount> <currency>"`.
    pub discount: Option<String>,
    /// `"<amount> <currency>"`, followed by `" x <n> luni"` when a duration
    /// is known.
    pub monthly: Option<String>,
    pub official_link: Option<OfficialLink>,
    pub sections: Vec<DetailSection>,
}

impl OfferDetail {
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        let offer = entry.offer();
        let financing = offer.financing.as_ref();

        let monthly = financing.and_then(|f| {
            let amount = nonzero(f.monthly_payment)?;
            let mut line = format_currency(Some(amount), offer.monthly_currency());
            if let Some(d) = f.duration.filter(|&d| d != 0) {
                line.push_str(&format!(" x {d} luni"));
            }
            Some(line)
        });

        let mut sections = vec![dealer_section(offer)];
        sections.extend(financing_sections(offer));
        sections.push(services_section(offer));
        sections.push(specs_section(offer));
        sections.extend(dimensions_section(offer));
        sections.extend(weight_section(offer));
        sections.extend(features_section(offer));
        if !offer.accessories.is_empty() {
            sections.push(DetailSection {
                title: "Accesorii incluse".to_string(),
                body: SectionBody::Tags(offer.accessories.clone()),
            });
        }

        Self {
            id: offer.id.clone(),
            title: offer.title(),
            version: offer.version.clone(),
            image_url: offer.image_url.clone(),
            fuel_badge: entry.fuel().badge(),
            fuel_label: entry.fuel().label(),
            payment_label: offer.payment_type.label().to_string(),
            price: price_text(offer).unwrap_or_else(|| "Pret la cerere".to_string()),
            discount: nonzero(offer.price.discount)
                .map(|d| format!("-{}", format_currency(Some(d), &offer.price.currency))),
            monthly,
            official_link: offer.official_page_url.as_ref().map(|url| OfficialLink {
                url: url.clone(),
                label: format!("Vezi pagina oficiala {}", offer.maker),
            }),
            sections,
        }
    }

    pub fn section(&self, title: &str) -> Option<&DetailSection> {
        self.sections.iter().find(|s| s.title == title)
    }
}

// ---------------------------------------------------------------------------
// Section builders
// ---------------------------------------------------------------------------

fn field(label: &str, value: impl Into<String>) -> Field {
    Field {
        label: label.to_string(),
        value: value.into(),
    }
}

fn nonzero(amount: Option<f64>) -> Option<f64> {
    amount.filter(|&a| a != 0.0)
}

fn price_text(offer: &Offer) -> Option<String> {
    nonzero(offer.price.total).map(|t| format_currency(Some(t), &offer.price.currency))
}

fn dealer_section(offer: &Offer) -> DetailSection {
    let mut fields = vec![field("Dealer", offer.dealership.clone())];
    if let Some(contact) = offer.dealer_contact.as_ref().filter(|c| !c.is_empty()) {
        fields.push(field("Contact", contact.clone()));
    }
    fields.push(field("Data ofertei", offer.offer_date.clone()));
    if let Some(until) = offer.offer_valid_until.as_ref().filter(|u| !u.is_empty()) {
        fields.push(field("Valabila pana la", until.clone()));
    }
    fields.push(field("ID Oferta", offer.offer_id.clone().unwrap_or_default()));

    DetailSection {
        title: "Informatii dealer".to_string(),
        body: SectionBody::Fields(fields),
    }
}

fn financing_sections(offer: &Offer) -> Vec<DetailSection> {
    let Some(f) = offer.financing.as_ref() else {
        return Vec::new();
    };
    let cur = &offer.price.currency;
    let money = |amount: f64, currency: &Currency| format_currency(Some(amount), currency);

    let mut fields = Vec::new();
    if let Some(v) = nonzero(f.down_payment) {
        fields.push(field("Avans", money(v, cur)));
    }
    if let Some(v) = nonzero(f.monthly_payment) {
        fields.push(field("Rata lunara", money(v, offer.monthly_currency())));
    }
    if let Some(d) = f.duration.filter(|&d| d != 0) {
        fields.push(field("Luni", d.to_string()));
    }
    if let Some(r) = nonzero(f.interest_rate) {
        fields.push(field("Dobanda fixa", format!("{r}%")));
    }
    if let Some(r) = nonzero(f.effective_interest_rate) {
        fields.push(field("DAE", format!("{r}%")));
    }
    if let Some(v) = nonzero(f.total_amount) {
        fields.push(field("Total de plata", money(v, cur)));
    }
    if let Some(v) = nonzero(f.credit_value) {
        fields.push(field("Valoare credit", money(v, cur)));
    }

    let kind = f
        .type_field
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or("Credit");
    let mut sections = vec![DetailSection {
        title: format!("Detalii finantare - {kind}"),
        body: SectionBody::Fields(fields),
    }];

    if let Some(fees) = f.fees.as_ref().filter(|fees| !fees.is_empty()) {
        let mut fee_fields = Vec::new();
        if let Some(v) = nonzero(fees.dosar_analysis) {
            fee_fields.push(field("Analiza dosar", money(v, cur)));
        }
        if let Some(v) = nonzero(fees.monthly_admin) {
            fee_fields.push(field("Administrare lunara", money(v, cur)));
        }
        if let Some(v) = nonzero(fees.insurance) {
            fee_fields.push(field("Asigurare lunara", money(v, cur)));
        }
        sections.push(DetailSection {
            title: "Comisioane".to_string(),
            body: SectionBody::Fields(fee_fields),
        });
    }

    sections
}

fn services_section(offer: &Offer) -> DetailSection {
    let s = &offer.services;
    let status = |name: &str, included: bool, details: Option<&String>| ServiceStatus {
        name: name.to_string(),
        included,
        details: details
            .filter(|d| !d.is_empty())
            .cloned()
            .unwrap_or_else(|| included_text(included).to_string()),
    };

    DetailSection {
        title: "Servicii si asigurari".to_string(),
        body: SectionBody::Services(vec![
            status(
                "Pachet service",
                s.service_package,
                s.service_package_details.as_ref(),
            ),
            status(
                "Garantie extinsa",
                s.extended_warranty,
                s.extended_warranty_details.as_ref(),
            ),
            status("Asigurare accident", s.traffic_accident_insurance, None),
            status("Asigurare CASCO", s.casco_insurance, None),
        ]),
    }
}

fn included_text(included: bool) -> &'static str {
    if included {
        "Inclus"
    } else {
        "Nu este inclus"
    }
}

fn specs_section(offer: &Offer) -> DetailSection {
    let s = &offer.specs;
    let mut fields = vec![
        field("Combustibil", s.fuel_type.clone()),
        field("Putere", s.engine_power.clone()),
    ];
    push_if_present(&mut fields, "Cilindree", s.engine_displacement.as_ref(), " cc");
    push_if_present(&mut fields, "Cuplu", s.torque.as_ref(), "");
    fields.push(field("Transmisie", s.transmission.clone()));
    push_if_present(&mut fields, "Tractiune", s.drivetrain.as_ref(), "");
    fields.push(field("Consum", s.consumption.clone()));
    fields.push(field("Emisii CO2", display_value(s.emissions.as_ref())));
    push_if_present(&mut fields, "Viteza maxima", s.max_speed.as_ref(), "");
    push_if_present(&mut fields, "Acceleratie 0-100", s.acceleration.as_ref(), "");
    fields.push(field("Tip caroserie", display_value(s.body_type.as_ref())));
    fields.push(field("Numar usi", display_value(s.doors.as_ref())));
    fields.push(field("Numar locuri", display_value(s.seats.as_ref())));
    push_if_present(&mut fields, "Rezervor", s.tank_capacity.as_ref(), " L");
    push_if_present(&mut fields, "Portbagaj", s.trunk_capacity.as_ref(), " L");
    push_if_present(&mut fields, "Anvelope", s.tires.as_ref(), "");
    push_if_present(&mut fields, "Culoare", s.color.as_ref(), "");

    DetailSection {
        title: "Specificatii tehnice".to_string(),
        body: SectionBody::Fields(fields),
    }
}

fn dimensions_section(offer: &Offer) -> Option<DetailSection> {
    let d = offer.specs.dimensions.as_ref()?;
    let mut fields = Vec::new();
    push_if_present(&mut fields, "Lungime", d.length.as_ref(), " mm");
    push_if_present(&mut fields, "Latime", d.width.as_ref(), " mm");
    push_if_present(&mut fields, "Inaltime", d.height.as_ref(), " mm");
    push_if_present(&mut fields, "Ampatament", d.wheelbase.as_ref(), " mm");
    push_if_present(&mut fields, "Garda la sol", d.ground_clearance.as_ref(), " mm");

    Some(DetailSection {
        title: "Dimensiuni".to_string(),
        body: SectionBody::Fields(fields),
    })
}

fn weight_section(offer: &Offer) -> Option<DetailSection> {
    let w = offer.specs.weight.as_ref()?;
    let mut fields = Vec::new();
    push_if_present(&mut fields, "Masa proprie", w.curb.as_ref(), "");
    push_if_present(&mut fields, "Masa maxima autorizata", w.max_authorized.as_ref(), " kg");
    push_if_present(&mut fields, "Remorcabil cu franare", w.towing_braked.as_ref(), " kg");
    push_if_present(&mut fields, "Remorcabil fara franare", w.towing_unbraked.as_ref(), " kg");

    Some(DetailSection {
        title: "Greutati".to_string(),
        body: SectionBody::Fields(fields),
    })
}

fn features_section(offer: &Offer) -> Option<DetailSection> {
    if offer.features.is_empty() {
        return None;
    }
    let groups = offer
        .features
        .iter()
        .map(|(category, items)| FeatureGroup {
            title: category_name(category),
            items: items.clone(),
        })
        .collect();

    Some(DetailSection {
        title: "Dotari complete".to_string(),
        body: SectionBody::Features(groups),
    })
}

fn push_if_present(fields: &mut Vec<Field>, label: &str, value: Option<&Value>, suffix: &str) {
    if is_present(value) {
        fields.push(field(label, format!("{}{suffix}", display_value(value))));
    }
}
