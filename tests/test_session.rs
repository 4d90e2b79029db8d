mod common;

use car_offers::view::OffersView;
use car_offers::{
    Catalog, CatalogError, CatalogSession, FilterState, FuelFilter, LoadError, LoadState, SortKey,
};

fn session() -> CatalogSession {
    CatalogSession::new(common::sample_repository())
}

fn view_ids(session: &CatalogSession) -> Vec<String> {
    session.view().iter().map(|e| e.id().to_string()).collect()
}

#[test]
fn new_session_shows_everything_in_load_order() {
    let s = session();

    assert_eq!(s.filter_state(), &FilterState::default());
    assert_eq!(view_ids(&s), common::ids(s.repository().all()));
}

#[test]
fn apply_replaces_previous_selections() {
    let mut s = session();

    assert_eq!(s.apply(FilterState::new().maker("Dacia")), 2);
    assert_eq!(s.apply(FilterState::new().fuel(FuelFilter::Diesel)), 1);
    assert_eq!(view_ids(&s), vec!["bmw-x1-1"]);
    assert_eq!(s.filter_state().maker, None);
}

#[test]
fn apply_selections_parses_raw_values() {
    let mut s = session();

    let matched = s.apply_selections("", "hybrid", "credit", "price-desc").unwrap();

    assert_eq!(matched, 2);
    assert_eq!(view_ids(&s), vec!["suzuki-vitara-1", "toyota-chr-1"]);
    assert_eq!(s.filter_state().sort, SortKey::PriceDesc);
}

#[test]
fn apply_selections_rejects_unknown_fuel() {
    let mut s = session();
    s.apply(FilterState::new().maker("BMW"));

    let err = s.apply_selections("", "hydrogen", "", "").unwrap_err();

    assert!(matches!(err, CatalogError::InvalidArgument(_)));
    assert_eq!(view_ids(&s), vec!["bmw-x1-1"]);
}

#[test]
fn apply_selections_rejects_unknown_payment() {
    let err = session().apply_selections("", "", "barter", "").unwrap_err();
    assert!(matches!(err, CatalogError::InvalidArgument(_)));
}

#[test]
fn projection_groups_cards_and_lists_pending() {
    let s = session();
    let page = s.projection();

    let OffersView::Groups(groups) = &page.offers else {
        panic!("expected groups");
    };
    let makers: Vec<&str> = groups.iter().map(|g| g.maker.as_str()).collect();
    assert_eq!(makers, vec!["BMW", "Dacia", "Kia", "Suzuki", "Toyota", "Volkswagen"]);

    assert_eq!(page.last_updated, "15 ianuarie 2025");
    assert_eq!(page.pending.len(), 2);
    assert!(page.pending[0].is_clickable());
    assert!(!page.pending[1].is_clickable());
    assert_eq!(page.pending[1].version, None);
}

#[test]
fn projection_reports_no_results() {
    let mut s = session();
    s.apply(FilterState::new().maker("Dacia").fuel(FuelFilter::Diesel));

    let page = s.projection();
    assert_eq!(page.offers, OffersView::NoResults);
    assert_eq!(page.pending.len(), 2);
}

#[test]
fn select_builds_detail_regardless_of_view() {
    let mut s = session();
    s.apply(FilterState::new().maker("Dacia"));

    let detail = s.select("bmw-x1-1").unwrap();
    assert_eq!(detail.title, "BMW X1");
}

#[test]
fn select_unknown_id_is_not_found() {
    let err = session().select("missing").unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

// ---------------------------------------------------------------------------
// LoadState
// ---------------------------------------------------------------------------

#[test]
fn load_state_ready_from_inline_document() {
    let mut state = Catalog::builder().inline(common::sample_json()).load_state();

    assert!(state.is_available());
    assert!(state.error().is_none());
    let s = state.session_mut().unwrap();
    assert_eq!(s.apply(FilterState::new().maker("Kia")), 1);
}

#[test]
fn load_state_unavailable_on_bad_document() {
    let state = Catalog::builder().inline(r#"{"items": []}"#).load_state();

    assert!(!state.is_available());
    assert!(state.session().is_none());
    assert!(matches!(state, LoadState::Unavailable(LoadError::MissingOffers)));
}
