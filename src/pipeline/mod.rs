//! The filter → sort → group pipeline.
//!
//! Every stage is a pure function over borrowed [`CatalogEntry`] values, so
//! a run can be repeated on each selection change without touching the
//! repository.

pub mod filter;
pub mod group;
pub mod metrics;
pub mod sort;

pub use filter::{matches, FilterState, FuelFilter};
pub use group::{group_by_maker, GroupedView, MakerGroup};
pub use metrics::{comparable_price, engine_power, monthly_payment};
pub use sort::{compare, locale_cmp, SortKey};

use tracing::debug;

use crate::repository::CatalogEntry;

/// Filter then sort `entries` according to `state`.
pub fn run<'a>(entries: &'a [CatalogEntry], state: &FilterState) -> Vec<&'a CatalogEntry> {
    let mut view = filter::filter(entries, state);
    sort::sort(&mut view, state.sort);
    debug!(
        total = entries.len(),
        matched = view.len(),
        sort = %state.sort,
        "pipeline run"
    );
    view
}
