//! Category types for product organization.

use serde::{Deserialize, Serialize};

/// A product category.
///
/// The remote catalog is flat: a category is a slug (e.g. `"home-decoration"`)
/// plus a display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "CategoryEntry")]
pub struct Category {
    /// URL-friendly slug, matched exactly against `Product::category`.
    pub slug: String,
    /// Display name.
    pub name: String,
}

impl Category {
    /// Create a category with an explicit display name.
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
        }
    }

    /// Create a category whose display name is derived from the slug.
    pub fn from_slug(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        let name = format_category_name(&slug);
        Self { slug, name }
    }
}

/// Wire shape of `/products/categories` entries.
///
/// Older API revisions return bare slug strings; newer ones return
/// `{slug, name, url}` objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryEntry {
    Slug(String),
    Detailed {
        slug: String,
        #[serde(default)]
        name: Option<String>,
    },
}

impl From<CategoryEntry> for Category {
    fn from(entry: CategoryEntry) -> Self {
        match entry {
            CategoryEntry::Slug(slug) => Category::from_slug(slug),
            CategoryEntry::Detailed { slug, name: Some(name) } => Category::new(slug, name),
            CategoryEntry::Detailed { slug, name: None } => Category::from_slug(slug),
        }
    }
}

/// Turn a slug into a display name: `"home-decoration"` → `"Home Decoration"`.
pub fn format_category_name(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
