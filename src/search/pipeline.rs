use tracing::debug;

use crate::models::Property;
use crate::search::{FilterSpec, SortKey};

/// Filter `properties` through `filters`, then order the survivors by `sort`.
///
/// The sort is stable, so properties with equal keys keep their source order.
pub fn search<'a>(properties: &'a [Property], filters: &FilterSpec, sort: SortKey) -> Vec<&'a Property> {
    let mut matched: Vec<&Property> = properties.iter().filter(|p| filters.matches(p)).collect();
    let compare = sort.comparator();
    matched.sort_by(|a, b| compare(a, b));
    matched
}

/// Memoized search results over a fixed property collection.
///
/// Results are recomputed only when the filters or the sort key differ from
/// the previous call.
#[derive(Debug)]
pub struct SearchView<'a> {
    properties: &'a [Property],
    cached: Option<CachedSearch<'a>>,
    recomputations: usize,
}

#[derive(Debug)]
struct CachedSearch<'a> {
    filters: FilterSpec,
    sort: SortKey,
    results: Vec<&'a Property>,
}

impl<'a> SearchView<'a> {
    pub fn new(properties: &'a [Property]) -> Self {
        Self {
            properties,
            cached: None,
            recomputations: 0,
        }
    }

    pub fn results(&mut self, filters: &FilterSpec, sort: SortKey) -> &[&'a Property] {
        let stale = match &self.cached {
            Some(cached) => cached.sort != sort || cached.filters != *filters,
            None => true,
        };

        if stale {
            let results = search(self.properties, filters, sort);
            self.recomputations += 1;
            debug!(
                sort = %sort,
                matched = results.len(),
                total = self.properties.len(),
                "Recomputed property search"
            );
            self.cached = Some(CachedSearch {
                filters: filters.clone(),
                sort,
                results,
            });
        }

        match &self.cached {
            Some(cached) => &cached.results,
            None => &[],
        }
    }

    /// Number of times results were actually recomputed
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    pub fn total(&self) -> usize {
        self.properties.len()
    }
}
