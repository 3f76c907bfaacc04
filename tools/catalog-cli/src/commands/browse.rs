//! One-shot page listing.

use anyhow::{bail, Result};

use super::BrowseArgs;
use crate::context::Context;
use crate::render;

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.store(args.filters.store_config(ctx.store_config()))?;

    let spinner = ctx.output.spinner("Loading products...");
    store.initialize().await;
    spinner.finish_and_clear();

    if let Some(error) = store.error() {
        bail!("Failed to load catalog: {}", error);
    }
    ctx.output.debug(&format!(
        "Loaded {} products in {} categories",
        store.products().len(),
        store.categories().len()
    ));

    let update = args.filters.to_update();
    if !update.is_empty() {
        store.update_filters(update);
    }
    if args.page != 1 {
        store.change_page(args.page);
    }

    let view = store.view();
    if ctx.output.is_json() {
        ctx.output.json(&view);
    } else {
        render::catalog_page(&ctx.output, &view);
    }

    Ok(())
}
