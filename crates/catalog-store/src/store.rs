//! The catalog state container.

use std::sync::Arc;

use catalog_commerce::catalog::{Category, Product};
use catalog_commerce::search::{pipeline, CatalogSnapshot, FilterState, FilterUpdate, PageRequest};
use catalog_commerce::ProductId;
use catalog_data::ProductGateway;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::{CatalogView, LoadStatus, StoreConfig};

/// Owns the unfiltered collection and everything derived from it.
///
/// Intents take `&mut self`, so a fetch can never overlap another intent.
/// After every mutation the visible page is recomputed and a fresh
/// [`CatalogView`] is published to subscribers.
pub struct CatalogStore {
    gateway: Arc<dyn ProductGateway>,
    config: StoreConfig,
    products: Vec<Product>,
    categories: Vec<Category>,
    filters: FilterState,
    current_page: usize,
    status: LoadStatus,
    error: Option<String>,
    selected: Option<Product>,
    snapshot: CatalogSnapshot,
    views: watch::Sender<CatalogView>,
}

impl CatalogStore {
    /// Create an idle store. Nothing is fetched until [`initialize`](Self::initialize).
    pub fn new(gateway: Arc<dyn ProductGateway>, config: StoreConfig) -> Self {
        let snapshot = pipeline::apply(&[], &FilterState::default(), PageRequest::first(config.items_per_page));
        let (views, _) = watch::channel(CatalogView {
            snapshot: snapshot.clone(),
            ..Default::default()
        });

        Self {
            gateway,
            config,
            products: Vec::new(),
            categories: Vec::new(),
            filters: FilterState::default(),
            current_page: 1,
            status: LoadStatus::Idle,
            error: None,
            selected: None,
            snapshot,
            views,
        }
    }

    /// Store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Receive a fresh view after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<CatalogView> {
        self.views.subscribe()
    }

    /// Current view.
    pub fn view(&self) -> CatalogView {
        CatalogView {
            snapshot: self.snapshot.clone(),
            status: self.status,
            loading: self.status.is_loading(),
            error: self.error.clone(),
            selected: self.selected.clone(),
            filters: self.filters.clone(),
            categories: self.categories.clone(),
            total_products: self.products.len(),
        }
    }

    /// Load status.
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Message of the last failed fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The unfiltered collection.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Known categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Active filters.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Visible page.
    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    /// Open product, if any.
    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    /// Fetch products and categories concurrently.
    ///
    /// A category failure is logged and otherwise ignored. A product failure
    /// moves the store to `Failed` and keeps the previous collection.
    pub async fn initialize(&mut self) {
        self.transition(LoadStatus::Loading);
        self.error = None;
        self.publish();

        let limit = self.config.fetch_limit;
        let gateway = Arc::clone(&self.gateway);
        let (products, categories) =
            futures::join!(gateway.fetch_products(limit, 0), gateway.fetch_categories());

        match categories {
            Ok(categories) => {
                debug!(count = categories.len(), "categories loaded");
                self.categories = categories;
            }
            Err(e) => warn!(error = %e, "failed to fetch categories"),
        }

        match products {
            Ok(page) => {
                info!(count = page.products.len(), total = page.total, "products loaded");
                self.products = page.products;
                self.transition(LoadStatus::Ready);
            }
            Err(e) => {
                error!(
                    error = %e,
                    network = e.is_network(),
                    status = e.status(),
                    "failed to fetch products"
                );
                self.error = Some(e.to_string());
                self.transition(LoadStatus::Failed);
            }
        }

        self.recompute();
        // A smaller collection may leave the kept page out of range.
        let clamped = self.snapshot.pagination.clamp_page(self.current_page);
        if clamped != self.current_page {
            self.current_page = clamped;
            self.recompute();
        }
        self.publish();
    }

    /// Fetch again after a failure.
    pub async fn retry(&mut self) {
        info!("retrying catalog load");
        self.initialize().await;
    }

    /// Merge a partial filter update and go back to page 1.
    pub fn update_filters(&mut self, update: FilterUpdate) {
        self.filters.merge(update);
        self.current_page = 1;
        self.recompute();
        self.publish();
    }

    /// Move to `page`, clamped into `[1, total_pages]`.
    pub fn change_page(&mut self, page: usize) {
        self.current_page = self.snapshot.pagination.clamp_page(page);
        self.recompute();
        self.publish();
    }

    /// Open or close the detail view.
    pub fn select_product(&mut self, product: Option<Product>) {
        self.selected = product;
        self.publish();
    }

    /// Open a product from the loaded collection. Returns `false` when the id
    /// is not loaded.
    pub fn select_product_by_id(&mut self, id: ProductId) -> bool {
        match self.products.iter().find(|product| product.id == id).cloned() {
            Some(product) => {
                self.select_product(Some(product));
                true
            }
            None => false,
        }
    }

    /// Close the detail view.
    pub fn close_product(&mut self) {
        self.select_product(None);
    }

    /// Open a product, fetching it when it is not in the loaded collection.
    ///
    /// On a failed fetch the selection is left as it was.
    pub async fn open_product(&mut self, id: ProductId) -> bool {
        if self.select_product_by_id(id) {
            return true;
        }

        match self.gateway.fetch_product(id).await {
            Ok(product) => {
                self.select_product(Some(product));
                true
            }
            Err(e) => {
                warn!(id = %id, error = %e, "failed to fetch product");
                false
            }
        }
    }

    /// Dismiss the last error.
    pub fn clear_error(&mut self) {
        self.error = None;
        self.publish();
    }

    fn transition(&mut self, next: LoadStatus) {
        debug_assert!(self.status.can_transition_to(next), "{} -> {}", self.status, next);
        debug!(from = %self.status, to = %next, "load status");
        self.status = next;
    }

    fn recompute(&mut self) {
        let request = PageRequest::new(self.current_page, self.config.items_per_page);
        self.snapshot = pipeline::apply(&self.products, &self.filters, request);
        debug!(
            page = self.snapshot.pagination.current_page,
            visible = self.snapshot.len(),
            matched = self.snapshot.pagination.total_items,
            "recomputed"
        );
    }

    fn publish(&self) {
        self.views.send_replace(self.view());
    }
}
