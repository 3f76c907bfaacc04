//! Category listing.

use anyhow::{bail, Result};
use serde::Serialize;

use super::CategoriesArgs;
use crate::context::Context;
use crate::render;

#[derive(Serialize)]
struct CategoryRow<'a> {
    slug: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    loaded: Option<usize>,
}

/// Run the categories command.
pub async fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.store(ctx.store_config())?;

    let spinner = ctx.output.spinner("Loading categories...");
    store.initialize().await;
    spinner.finish_and_clear();

    if store.categories().is_empty() {
        // Category failures are only logged by the store.
        bail!("No categories available from {}", ctx.config.api.base_url);
    }
    if args.counts {
        if let Some(error) = store.error() {
            ctx.output.warn(&format!("Product counts unavailable: {}", error));
        }
    }

    let counts: Vec<usize> = store
        .categories()
        .iter()
        .map(|category| {
            store
                .products()
                .iter()
                .filter(|product| product.category == category.slug)
                .count()
        })
        .collect();

    if ctx.output.is_json() {
        let rows: Vec<CategoryRow> = store
            .categories()
            .iter()
            .zip(&counts)
            .map(|(category, count)| CategoryRow {
                slug: &category.slug,
                name: &category.name,
                loaded: args.counts.then_some(*count),
            })
            .collect();
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header(&format!("Categories ({})", store.categories().len()));
    if args.counts {
        render::category_list(&ctx.output, store.categories(), &counts);
    } else {
        for category in store.categories() {
            ctx.output.list_item(&format!("{} ({})", category.name, category.slug));
        }
    }

    Ok(())
}
