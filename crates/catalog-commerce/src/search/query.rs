//! Filter state and sort options.

use crate::search::Filter;
use crate::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel category selector meaning "every category".
pub const ALL_CATEGORIES: &str = "all";

/// Sort options for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Sort by title A-Z.
    #[default]
    #[serde(rename = "title-asc")]
    TitleAsc,
    /// Sort by title Z-A.
    #[serde(rename = "title-desc")]
    TitleDesc,
    /// Sort by price, low to high.
    #[serde(rename = "price-asc")]
    PriceAsc,
    /// Sort by price, high to low.
    #[serde(rename = "price-desc")]
    PriceDesc,
}

impl SortOption {
    /// All sort options, in menu order.
    pub const ALL: [SortOption; 4] = [
        SortOption::TitleAsc,
        SortOption::TitleDesc,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
    ];

    /// Wire value (e.g. `"price-asc"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::TitleAsc => "title-asc",
            SortOption::TitleDesc => "title-desc",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::TitleAsc => "Name: A-Z",
            SortOption::TitleDesc => "Name: Z-A",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
        }
    }

    /// The same key in the opposite direction.
    pub fn reversed(&self) -> Self {
        match self {
            SortOption::TitleAsc => SortOption::TitleDesc,
            SortOption::TitleDesc => SortOption::TitleAsc,
            SortOption::PriceAsc => SortOption::PriceDesc,
            SortOption::PriceDesc => SortOption::PriceAsc,
        }
    }

    /// Parse a wire value; unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s.trim())
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::parse(s).ok_or_else(|| CommerceError::UnknownSortOption(s.to_string()))
    }
}

/// Category selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Exact, case-sensitive slug match.
    Slug(String),
}

impl CategoryFilter {
    /// Create a slug selector. `"all"` and the empty string map to [`CategoryFilter::All`].
    pub fn slug(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        if slug.is_empty() || slug == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Slug(slug)
        }
    }

    /// Wire value: `"all"` or the slug.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Slug(slug) => slug,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        CategoryFilter::slug(s)
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        CategoryFilter::slug(s)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Slug(slug) => slug,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current filter, sort and search selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Category selector.
    pub category: CategoryFilter,
    /// Sort order.
    pub sort_by: SortOption,
    /// Free-text search, may be empty.
    pub search_term: String,
}

impl FilterState {
    /// Create the default selection: all categories, title A-Z, no search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category selector.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort_by = sort;
        self
    }

    /// Set the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Merge a partial update; fields absent from the update are kept.
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(sort_by) = update.sort_by {
            self.sort_by = sort_by;
        }
        if let Some(search_term) = update.search_term {
            self.search_term = search_term;
        }
    }

    /// Filters to run, in pipeline order (search, then category).
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::with_capacity(2);
        if let Some(text) = Filter::text(&self.search_term) {
            filters.push(text);
        }
        if let CategoryFilter::Slug(slug) = &self.category {
            filters.push(Filter::category(slug.clone()));
        }
        filters
    }

    /// Whether any filter narrows the collection.
    pub fn is_filtered(&self) -> bool {
        !self.filters().is_empty()
    }
}

/// A partial [`FilterState`] update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
}

impl FilterUpdate {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the category.
    pub fn category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Change the sort option.
    pub fn sort(mut self, sort: SortOption) -> Self {
        self.sort_by = Some(sort);
        self
    }

    /// Change the sort option from its wire value.
    ///
    /// Unrecognized values leave the current order untouched.
    pub fn sort_str(mut self, sort: &str) -> Self {
        if let Some(sort) = SortOption::parse(sort) {
            self.sort_by = Some(sort);
        }
        self
    }

    /// Change the search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.sort_by.is_none() && self.search_term.is_none()
    }
}
