//! Product detail.

use anyhow::{bail, Result};
use catalog_commerce::ProductId;

use super::ShowArgs;
use crate::context::Context;
use crate::render;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.store(ctx.store_config())?;
    let id = ProductId::new(args.id);

    let spinner = ctx.output.spinner(&format!("Fetching product {}...", id));
    let found = store.open_product(id).await;
    spinner.finish_and_clear();

    let product = match store.selected() {
        Some(product) if found => product,
        _ => bail!("Product {} could not be loaded", id),
    };

    if ctx.output.is_json() {
        ctx.output.json(product);
    } else {
        render::product_detail(&ctx.output, product, store.categories());
    }

    Ok(())
}
