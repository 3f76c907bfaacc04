//! The filter → sort → paginate pipeline.
//!
//! Every function here is pure: inputs are borrowed, never mutated, and the
//! same inputs always produce the same snapshot.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};

use crate::catalog::Product;
use crate::search::filter::apply_filters;
use crate::search::results::DEFAULT_ITEMS_PER_PAGE;
use crate::search::{CatalogSnapshot, FilterState, Pagination, SortOption};

/// Which page to cut out of the sorted collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Requested page (1-indexed). Not clamped to the page count.
    pub page: usize,
    /// Items per page (at least 1).
    pub per_page: usize,
}

impl PageRequest {
    /// Create a page request. Page 0 is read as page 1, and a page size of 0
    /// as 1.
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// First page at the given size.
    pub fn first(per_page: usize) -> Self {
        Self::new(1, per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_ITEMS_PER_PAGE)
    }
}

/// Run the whole pipeline.
///
/// A page past the last one yields an empty slice; the page number in the
/// returned pagination is left as requested.
pub fn apply(products: &[Product], filters: &FilterState, page: PageRequest) -> CatalogSnapshot {
    let mut matched = apply_filters(products, &filters.filters());
    sort_refs(&mut matched, filters.sort_by);

    let pagination = Pagination::new(page.page, page.per_page, matched.len());
    let visible = matched
        .iter()
        .skip(pagination.start_index())
        .take(pagination.items_per_page)
        .map(|product| (*product).clone())
        .collect();

    CatalogSnapshot::new(visible, pagination)
}

/// Sort a copy of `products`; the input order is untouched.
pub fn sort_products(products: &[Product], sort: SortOption) -> Vec<Product> {
    let mut refs: Vec<&Product> = products.iter().collect();
    sort_refs(&mut refs, sort);
    refs.into_iter().cloned().collect()
}

/// Stable sort, so equal keys keep their relative order.
fn sort_refs(products: &mut [&Product], sort: SortOption) {
    match sort {
        SortOption::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOption::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOption::TitleAsc => {
            let collator = TitleCollator::new();
            products.sort_by(|a, b| collator.compare(&a.title, &b.title));
        }
        SortOption::TitleDesc => {
            let collator = TitleCollator::new();
            products.sort_by(|a, b| collator.compare(&b.title, &a.title));
        }
    }
}

/// Natural-language title ordering over the root Unicode collation.
///
/// Accents and punctuation sort where a reader expects them ("Éclair" before
/// "Zebra"); strings that differ only in case put the lower-case form first
/// ("apple" < "Apple" < "banana").
pub struct TitleCollator {
    collator: Option<Collator>,
}

impl TitleCollator {
    /// Root-locale collator at tertiary strength.
    pub fn new() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        // Root data is compiled in; the case-folded order is only a fallback.
        let collator = Collator::try_new(&Default::default(), options).ok();
        Self { collator }
    }

    /// Compare two titles. Titles the collation ranks equal fall back to a
    /// raw comparison so the order stays total.
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        let primary = match &self.collator {
            Some(collator) => collator.compare(left, right),
            None => case_folded(left, right),
        };
        primary.then_with(|| right.cmp(left))
    }
}

impl Default for TitleCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two titles with a one-off [`TitleCollator`].
pub fn collate(left: &str, right: &str) -> Ordering {
    TitleCollator::new().compare(left, right)
}

fn case_folded(left: &str, right: &str) -> Ordering {
    let l = left.chars().flat_map(char::to_lowercase);
    let r = right.chars().flat_map(char::to_lowercase);
    l.cmp(r)
}
