//! Property tests for the filter and sort stages.

mod common;

use car_offers::classify::{EnginePower, PowerUnit};
use car_offers::pipeline::{self, FilterState, FuelFilter, SortKey};
use car_offers::OfferRepository;
use proptest::prelude::*;
use serde_json::{json, Value};

const MAKERS: [&str; 4] = ["Dacia", "BMW", "Toyota", "Kia"];
const FUELS: [&str; 6] = [
    "Benzina",
    "Diesel",
    "Electric",
    "Hybrid - Full Hybrid",
    "Benzina - Mild Hybrid",
    "Plug-in Hybrid Electric",
];
const PAYMENTS: [&str; 3] = ["cash", "credit", "leasing"];
const SORTS: [SortKey; 7] = [
    SortKey::Unspecified,
    SortKey::PriceAsc,
    SortKey::PriceDesc,
    SortKey::MonthlyAsc,
    SortKey::MonthlyDesc,
    SortKey::PowerDesc,
    SortKey::MakerAsc,
];

fn arb_offer() -> impl Strategy<Value = (usize, usize, usize, Option<u32>, bool, u16)> {
    (
        0..MAKERS.len(),
        0..FUELS.len(),
        0..PAYMENTS.len(),
        proptest::option::of(1u32..200_000),
        any::<bool>(),
        0u16..400,
    )
}

fn arb_repository() -> impl Strategy<Value = OfferRepository> {
    proptest::collection::vec(arb_offer(), 0..12).prop_map(|specs| {
        let offers: Vec<Value> = specs
            .into_iter()
            .enumerate()
            .map(|(i, (maker, fuel, payment, total, eur, power))| {
                common::offer(
                    &format!("offer-{i}"),
                    MAKERS[maker],
                    "Model",
                    FUELS[fuel],
                    &format!("{power} CP"),
                    total.map(f64::from),
                    if eur { "EUR" } else { "RON" },
                    PAYMENTS[payment],
                )
            })
            .collect();
        OfferRepository::from_value(json!({ "offers": offers })).unwrap()
    })
}

fn arb_filter() -> impl Strategy<Value = FilterState> {
    (
        proptest::option::of(0..MAKERS.len()),
        proptest::option::of(0..FuelFilter::ALL.len()),
        proptest::option::of(0..PAYMENTS.len()),
        0..SORTS.len(),
    )
        .prop_map(|(maker, fuel, payment, sort)| FilterState {
            maker: maker.map(|m| MAKERS[m].to_string()),
            fuel: fuel.map(|f| FuelFilter::ALL[f]),
            payment: payment.map(|p| PAYMENTS[p].parse().unwrap()),
            sort: SORTS[sort],
        })
}

fn ids(view: &[&car_offers::CatalogEntry]) -> Vec<String> {
    view.iter().map(|e| e.id().to_string()).collect()
}

proptest! {
    #[test]
    fn filtered_view_is_exactly_the_matching_subset(repo in arb_repository(), filter in arb_filter()) {
        let view = pipeline::run(repo.entries(), &filter);

        prop_assert!(view.iter().all(|e| pipeline::matches(e, &filter)));
        let expected = repo.entries().iter().filter(|e| pipeline::matches(e, &filter)).count();
        prop_assert_eq!(view.len(), expected);
    }

    #[test]
    fn rerunning_on_the_view_changes_nothing(repo in arb_repository(), filter in arb_filter()) {
        let first = pipeline::run(repo.entries(), &filter);
        let mut second: Vec<_> = first
            .iter()
            .copied()
            .filter(|e| pipeline::matches(e, &filter))
            .collect();
        pipeline::sort::sort(&mut second, filter.sort);

        prop_assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn view_is_ordered_by_the_sort_key(repo in arb_repository(), filter in arb_filter()) {
        let view = pipeline::run(repo.entries(), &filter);

        for pair in view.windows(2) {
            prop_assert_ne!(
                pipeline::compare(pair[0], pair[1], filter.sort),
                std::cmp::Ordering::Greater
            );
        }
    }

    #[test]
    fn on_request_offers_trail_ascending_price(repo in arb_repository()) {
        let view = pipeline::run(repo.entries(), &FilterState::new().sort(SortKey::PriceAsc));
        let priced: Vec<bool> = view.iter().map(|e| e.offer().price.total.is_some()).collect();

        if let Some(first_absent) = priced.iter().position(|p| !p) {
            prop_assert!(priced[first_absent..].iter().all(|p| !p));
        }
    }

    #[test]
    fn eur_prices_rank_at_five_ron(total in 1u32..100_000) {
        let eur = common::offer("e", "A", "A", "Benzina", "1 CP", Some(f64::from(total)), "EUR", "cash");
        let ron = common::offer("r", "B", "B", "Benzina", "1 CP", Some(f64::from(total) * 5.0), "RON", "cash");
        let repo = OfferRepository::from_value(json!({ "offers": [eur, ron] })).unwrap();

        prop_assert_eq!(
            pipeline::compare(&repo.entries()[0], &repo.entries()[1], SortKey::PriceAsc),
            std::cmp::Ordering::Equal
        );
    }

    #[test]
    fn power_prefers_cp_over_kw(kw in 1u32..1000, cp in 1u32..1000) {
        let parsed = EnginePower::parse(&format!("{kw} kW ({cp} CP)")).unwrap();

        prop_assert_eq!(parsed, EnginePower { value: cp, unit: PowerUnit::Cp });
    }

    #[test]
    fn power_text_without_figures_parses_to_nothing(text in "[a-zA-Z /]{0,20}") {
        prop_assert_eq!(EnginePower::parse(&text), None);
    }
}
