//! Line-driven catalog browser.
//!
//! Plain lines are search text and go through the debouncer; lines starting
//! with `:` are commands. The screen is redrawn from every view the store
//! publishes.

use std::future::Future;
use std::io::Write as _;
use std::time::Duration;

use anyhow::{Context as _, Result};
use catalog_commerce::search::{CategoryFilter, FilterUpdate, SortOption};
use catalog_commerce::ProductId;
use catalog_store::{CatalogView, Debouncer};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::debug;

use super::InteractiveArgs;
use crate::context::Context;
use crate::render;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Free text, debounced into the search filter.
    Search(String),
    ClearSearch,
    Category(String),
    Sort(String),
    Page(usize),
    Next,
    Prev,
    Open(u64),
    Close,
    Retry,
    Dismiss,
    Redraw,
    Help,
    Quit,
    Invalid(String),
}

/// Parse one input line.
pub fn parse_input(line: &str) -> Input {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(command) = line.strip_prefix(':') else {
        return if line.trim().is_empty() {
            Input::Redraw
        } else {
            Input::Search(line.to_string())
        };
    };

    let mut parts = command.trim().splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::trim).unwrap_or_default();

    match (name, arg) {
        ("q" | "quit" | "exit", _) => Input::Quit,
        ("h" | "help", _) => Input::Help,
        ("clear", _) => Input::ClearSearch,
        ("c" | "category", slug) if !slug.is_empty() => Input::Category(slug.to_string()),
        ("s" | "sort", sort) if !sort.is_empty() => Input::Sort(sort.to_string()),
        ("p" | "page", page) => match page.parse() {
            Ok(page) => Input::Page(page),
            Err(_) => Input::Invalid(format!("not a page number: {:?}", page)),
        },
        ("n" | "next", _) => Input::Next,
        ("b" | "prev", _) => Input::Prev,
        ("o" | "open", id) => match id.parse() {
            Ok(id) => Input::Open(id),
            Err(_) => Input::Invalid(format!("not a product id: {:?}", id)),
        },
        ("x" | "close", _) => Input::Close,
        ("r" | "retry", _) => Input::Retry,
        ("d" | "dismiss", _) => Input::Dismiss,
        _ => Input::Invalid(format!("unknown command: :{}", command.trim())),
    }
}

/// Run the interactive command.
pub async fn run(args: InteractiveArgs, ctx: &Context) -> Result<()> {
    let mut store_config = args.filters.store_config(ctx.store_config());
    if let Some(ms) = args.debounce_ms {
        store_config = store_config.with_search_debounce(Duration::from_millis(ms));
    }

    let mut store = ctx.store(store_config)?;
    let mut views = store.subscribe();
    let (mut debouncer, mut terms) = Debouncer::new(store.config().search_debounce);

    print_help(ctx);
    ctx.output.info("Loading products...");
    store.initialize().await;
    let update = args.filters.to_update();
    if !update.is_empty() {
        store.update_filters(update);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            changed = views.changed() => {
                if changed.is_err() {
                    break;
                }
                let view = views.borrow_and_update().clone();
                draw(ctx, &view);
            }
            Some(term) = terms.recv() => {
                debug!(term = %term, "search applied");
                store.update_filters(FilterUpdate::new().search(term));
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    break;
                };

                match parse_input(&line) {
                    Input::Quit => break,
                    Input::Help => print_help(ctx),
                    Input::Redraw => draw(ctx, &store.view()),
                    Input::Search(term) => {
                        debouncer.schedule(term);
                    }
                    Input::ClearSearch => {
                        debouncer.cancel();
                        store.update_filters(FilterUpdate::new().search(""));
                    }
                    Input::Category(slug) => {
                        store.update_filters(FilterUpdate::new().category(CategoryFilter::slug(slug)));
                    }
                    Input::Sort(sort) => {
                        if SortOption::parse(&sort).is_none() {
                            ctx.output.warn(&format!(
                                "Unknown sort {:?}; expected one of: {}",
                                sort,
                                sort_names()
                            ));
                        }
                        store.update_filters(FilterUpdate::new().sort_str(&sort));
                    }
                    Input::Page(page) => store.change_page(page),
                    Input::Next => {
                        let page = store.snapshot().pagination.current_page.saturating_add(1);
                        store.change_page(page);
                    }
                    Input::Prev => {
                        let page = store.snapshot().pagination.current_page.saturating_sub(1);
                        store.change_page(page);
                    }
                    Input::Open(id) => {
                        let open = store.open_product(ProductId::new(id));
                        if !redraw_while(&mut views, open, |view| draw(ctx, view)).await {
                            ctx.output.warn(&format!("Product {} could not be loaded", id));
                        }
                    }
                    Input::Close => store.close_product(),
                    Input::Retry => {
                        redraw_while(&mut views, store.retry(), |view| draw(ctx, view)).await;
                    }
                    Input::Dismiss => store.clear_error(),
                    Input::Invalid(message) => ctx.output.warn(&message),
                }
            }
        }
    }

    debouncer.cancel();
    Ok(())
}

/// Drive a store intent to completion, handing every view it publishes on
/// the way to `on_view`. The final view is left unseen for the main loop.
async fn redraw_while<F: Future>(
    views: &mut watch::Receiver<CatalogView>,
    intent: F,
    mut on_view: impl FnMut(&CatalogView),
) -> F::Output {
    tokio::pin!(intent);
    loop {
        tokio::select! {
            biased;
            Ok(()) = views.changed() => {
                let view = views.borrow_and_update().clone();
                on_view(&view);
            }
            output = &mut intent => return output,
        }
    }
}

fn draw(ctx: &Context, view: &CatalogView) {
    match &view.selected {
        Some(product) => {
            render::product_detail(&ctx.output, product, &view.categories);
            ctx.output.line("");
            ctx.output.line("  :close to go back");
        }
        None => render::catalog_page(&ctx.output, view),
    }
    prompt();
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn sort_names() -> String {
    SortOption::ALL
        .iter()
        .map(SortOption::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_help(ctx: &Context) {
    ctx.output.header("Catalog");
    ctx.output.line("  Type to search. Commands:");
    for (command, description) in [
        (":category <slug|all>", "filter by category"),
        (":sort <option>", sort_names().as_str()),
        (":page <n>  :next  :prev", "move between pages"),
        (":open <id>  :close", "product details"),
        (":clear", "clear the search"),
        (":retry  :dismiss", "reload after an error, or hide it"),
        (":quit", "exit"),
    ] {
        ctx.output.kv(command, description);
    }
}
