//! Grouping of the filtered, sorted view by maker.

use std::collections::BTreeMap;

use crate::repository::CatalogEntry;

/// Offers from one maker, in the order they arrived from the sort stage.
#[derive(Debug, Clone)]
pub struct MakerGroup<'a> {
    pub maker: &'a str,
    pub entries: Vec<&'a CatalogEntry>,
}

impl MakerGroup<'_> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of grouping. An empty selection is its own state, never an empty
/// list of groups.
#[derive(Debug, Clone)]
pub enum GroupedView<'a> {
    NoResults,
    Groups(Vec<MakerGroup<'a>>),
}

impl<'a> GroupedView<'a> {
    pub fn is_empty(&self) -> bool {
        matches!(self, GroupedView::NoResults)
    }

    pub fn groups(&self) -> &[MakerGroup<'a>] {
        match self {
            GroupedView::NoResults => &[],
            GroupedView::Groups(groups) => groups,
        }
    }

    pub fn makers(&self) -> Vec<&'a str> {
        self.groups().iter().map(|g| g.maker).collect()
    }
}

/// Bucket entries by maker. Makers come out in lexicographic order; within a
/// maker the input order is kept.
pub fn group_by_maker<'a>(entries: &[&'a CatalogEntry]) -> GroupedView<'a> {
    if entries.is_empty() {
        return GroupedView::NoResults;
    }

    let mut buckets: BTreeMap<&'a str, Vec<&'a CatalogEntry>> = BTreeMap::new();
    for &entry in entries {
        buckets
            .entry(entry.offer().maker.as_str())
            .or_default()
            .push(entry);
    }

    GroupedView::Groups(
        buckets
            .into_iter()
            .map(|(maker, entries)| MakerGroup { maker, entries })
            .collect(),
    )
}
