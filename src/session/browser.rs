//! Catalog browser.
//!
//! Owns the loaded catalog and everything derived from it:
//!
//! ```text
//! catalog ──facets──▶ cards ──feature query──▶ filtered ──navigator──▶ current card
//! ```
//!
//! Facet filtering either runs inline or on a `FilterWorker`. The feature
//! query always runs inline. Any change upstream of `filtered` resets the
//! navigator to the first card.

use std::time::Duration;

use im::Vector;
use tracing::{debug, info};

use crate::backend::{Backend, DetailCache};
use crate::cards::{Card, Catalog, Format};
use crate::core::{BrowserConfig, Observers, Result};
use crate::filter::{FacetFilter, FeatureQuery, FilterWorker, LifeBurstFilter, WorkerMessage};
use crate::navigation::{CursorState, Navigator, Step};

/// Change notifications from `CardBrowser`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowserEvent {
    /// The facet-filtered sequence was replaced.
    CardsReplaced { count: usize },
    /// The feature query changed and `filtered` was recomputed.
    QueryChanged(FeatureQuery),
    /// Selection moved. `None` when nothing is selected.
    SelectionChanged(Option<usize>),
    PageChanged(usize),
}

#[derive(Debug)]
pub struct CardBrowser {
    catalog: Catalog,
    format: Format,
    cards: Vector<Card>,
    query: FeatureQuery,
    filtered: Vector<Card>,
    navigator: Navigator,
    current: Option<Card>,
    cache: DetailCache,
    facets: FacetFilter,
    worker: Option<FilterWorker>,
    observers: Observers<BrowserEvent>,
}

impl Default for CardBrowser {
    fn default() -> Self {
        Self::from_config(&BrowserConfig::default())
    }
}

impl CardBrowser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &BrowserConfig) -> Self {
        let facets = FacetFilter {
            format: config.default_format,
            ..FacetFilter::default()
        };
        Self {
            catalog: Catalog::new(),
            format: config.default_format,
            cards: Vector::new(),
            query: FeatureQuery::unconstrained(),
            filtered: Vector::new(),
            navigator: Navigator::new(config.page_size),
            current: None,
            cache: DetailCache::new(),
            facets,
            worker: None,
            observers: Observers::new(),
        }
    }

    // === Loading ===

    /// Fetch the catalog for a format and show all of it.
    ///
    /// Returns the number of cards loaded.
    pub async fn load<B: Backend>(&mut self, backend: &B, format: Format) -> Result<usize> {
        let cards = backend.load_catalog(format).await?;
        let catalog = Catalog::from_cards(cards)?;
        info!(count = catalog.len(), %format, "catalog loaded");
        self.set_catalog(catalog, format);
        Ok(self.catalog.len())
    }

    /// Replace the catalog. Facets are re-applied and the worker, if any,
    /// receives the new snapshot.
    pub fn set_catalog(&mut self, catalog: Catalog, format: Format) {
        self.catalog = catalog;
        self.format = format;
        self.facets.format = format;

        if self.worker.is_some() {
            let cards = self.catalog.snapshot();
            self.post(WorkerMessage::InitializeCards { cards, format });
        }
        self.refilter_facets();
    }

    /// Replace the facet-filtered sequence and select its first card.
    pub fn set_cards(&mut self, cards: Vector<Card>) {
        self.cards = cards;
        self.observers.notify(&BrowserEvent::CardsReplaced {
            count: self.cards.len(),
        });
        self.recompute();
    }

    // === Feature query ===

    pub fn set_query(&mut self, query: FeatureQuery) {
        self.query = query;
        debug!(%query, "feature query changed");
        self.observers.notify(&BrowserEvent::QueryChanged(query));
        self.recompute();
    }

    pub fn set_f1(&mut self, bits1: u64) {
        self.set_query(FeatureQuery::new(bits1, self.query.bits2));
    }

    pub fn set_f2(&mut self, bits2: u64) {
        self.set_query(FeatureQuery::new(self.query.bits1, bits2));
    }

    fn recompute(&mut self) {
        self.filtered = if self.query.is_unconstrained() {
            self.cards.clone()
        } else {
            self.query.apply(self.cards.iter())
        };
        let len = self.filtered.len();
        self.navigate(|nav| nav.reset(len));
    }

    // === Facets ===

    pub fn set_filter_word(&mut self, word: impl Into<String>) {
        self.facets.filter_word = word.into();
        self.update_facets(WorkerMessage::FilterWord(self.facets.filter_word.clone()));
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.facets.color = color.into();
        self.update_facets(WorkerMessage::Color(self.facets.color.clone()));
    }

    pub fn set_card_type(&mut self, card_type: impl Into<String>) {
        self.facets.card_type = card_type.into();
        self.update_facets(WorkerMessage::CardType(self.facets.card_type.clone()));
    }

    pub fn set_format(&mut self, format: Format) {
        self.facets.format = format;
        self.update_facets(WorkerMessage::Format(format));
    }

    pub fn set_has_lb(&mut self, has_lb: LifeBurstFilter) {
        self.facets.has_lb = has_lb;
        self.update_facets(WorkerMessage::HasLb(has_lb));
    }

    fn update_facets(&mut self, message: WorkerMessage) {
        if self.worker.is_some() {
            self.post(message);
        } else {
            self.refilter_facets();
        }
    }

    /// Inline facet pass. Skipped while a worker owns facet filtering.
    fn refilter_facets(&mut self) {
        if self.worker.is_some() {
            return;
        }
        let cards = if self.facets.is_open() {
            self.catalog.snapshot()
        } else {
            self.catalog
                .iter()
                .filter(|c| self.facets.matches(c))
                .cloned()
                .collect()
        };
        self.set_cards(cards);
    }

    // === Worker ===

    /// Hand facet filtering to a worker. The current catalog and every facet
    /// already set, including the selected format, are sent right away if a
    /// catalog is loaded.
    pub fn install_worker(&mut self, worker: FilterWorker) {
        self.worker = Some(worker);
        if !self.catalog.is_empty() {
            let cards = self.catalog.snapshot();
            let format = self.facets.format;
            self.post(WorkerMessage::InitializeCards { cards, format });
            for message in self.facet_messages() {
                self.post(message);
            }
        }
    }

    /// Spawn and install a worker thread.
    pub fn spawn_worker(&mut self) -> Result<()> {
        let worker = FilterWorker::spawn()?;
        self.install_worker(worker);
        Ok(())
    }

    #[must_use]
    pub fn has_worker(&self) -> bool {
        self.worker.is_some()
    }

    /// Apply every delivery received so far, oldest first.
    ///
    /// Returns how many were applied. The last one applied is what stays.
    pub fn poll_worker(&mut self) -> usize {
        let deliveries = match &self.worker {
            Some(worker) => worker.drain(),
            None => return 0,
        };
        let applied = deliveries.len();
        for delivery in deliveries {
            debug!(seq = delivery.seq, count = delivery.cards.len(), "applying worker delivery");
            self.set_cards(delivery.cards);
        }
        applied
    }

    /// Wait for one delivery and apply it.
    ///
    /// Returns `false` on timeout or without a worker.
    pub fn wait_worker(&mut self, timeout: Duration) -> Result<bool> {
        let delivery = match &self.worker {
            Some(worker) => worker.recv_timeout(timeout)?,
            None => return Ok(false),
        };
        match delivery {
            Some(delivery) => {
                debug!(seq = delivery.seq, count = delivery.cards.len(), "applying worker delivery");
                self.set_cards(delivery.cards);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Stop the worker and go back to inline facet filtering.
    pub fn shutdown_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.shutdown();
            self.refilter_facets();
        }
    }

    fn post(&mut self, message: WorkerMessage) {
        if let Some(worker) = self.worker.as_mut() {
            worker.post(message);
        }
    }

    fn facet_messages(&self) -> Vec<WorkerMessage> {
        let facets = &self.facets;
        let mut messages = Vec::new();
        if !facets.filter_word.is_empty() {
            messages.push(WorkerMessage::FilterWord(facets.filter_word.clone()));
        }
        if !facets.color.is_empty() {
            messages.push(WorkerMessage::Color(facets.color.clone()));
        }
        if !facets.card_type.is_empty() {
            messages.push(WorkerMessage::CardType(facets.card_type.clone()));
        }
        if facets.has_lb != LifeBurstFilter::Any {
            messages.push(WorkerMessage::HasLb(facets.has_lb));
        }
        messages
    }

    // === Navigation ===

    pub fn jump_to(&mut self, index: usize) -> Option<&Card> {
        let len = self.filtered.len();
        self.navigate(|nav| nav.jump_to(index, len));
        self.current.as_ref()
    }

    pub fn step_by(&mut self, step: Step) -> Option<&Card> {
        let len = self.filtered.len();
        self.navigate(|nav| nav.step_by(step, len));
        self.current.as_ref()
    }

    pub fn set_page(&mut self, page: usize) -> Option<&Card> {
        let len = self.filtered.len();
        self.navigate(|nav| nav.set_page(page, len));
        self.current.as_ref()
    }

    pub fn advance_page(&mut self) -> Option<&Card> {
        let len = self.filtered.len();
        self.navigate(|nav| nav.advance_page(len));
        self.current.as_ref()
    }

    pub fn retreat_page(&mut self) -> Option<&Card> {
        let len = self.filtered.len();
        self.navigate(|nav| nav.retreat_page(len));
        self.current.as_ref()
    }

    pub fn next_row(&mut self) -> Option<&Card> {
        let len = self.filtered.len();
        self.navigate(|nav| nav.next_row(len));
        self.current.as_ref()
    }

    pub fn prev_row(&mut self) -> Option<&Card> {
        let len = self.filtered.len();
        self.navigate(|nav| nav.prev_row(len));
        self.current.as_ref()
    }

    fn navigate(&mut self, op: impl FnOnce(&mut Navigator) -> Option<usize>) {
        let page = self.navigator.page();
        let selected = op(&mut self.navigator);

        self.current = selected.and_then(|i| self.filtered.get(i).cloned());
        if let Some(card) = &self.current {
            self.cache.insert(card.clone());
        }

        if self.navigator.page() != page {
            self.observers.notify(&BrowserEvent::PageChanged(self.navigator.page()));
        }
        self.observers.notify(&BrowserEvent::SelectionChanged(selected));
    }

    // === Detail ===

    /// Resolve a card by slug or pronounce.
    ///
    /// Checks the cache, then the loaded catalog, then the backend. Hits
    /// from the catalog or backend are cached. A key nobody knows is
    /// `Ok(None)`.
    pub async fn detail<B: Backend>(&mut self, backend: &B, key: &str) -> Result<Option<Card>> {
        if let Some(card) = self.cache.get(key) {
            debug!(key, "detail cache hit");
            return Ok(Some(card.clone()));
        }

        if let Some(card) = self.catalog.lookup(key).cloned() {
            debug!(key, "detail served from catalog");
            self.cache.insert(card.clone());
            return Ok(Some(card));
        }

        debug!(key, "detail cache miss, asking backend");
        let card = backend.card_detail(key).await?;
        if let Some(card) = &card {
            self.cache.insert(card.clone());
        }
        Ok(card)
    }

    // === Accessors ===

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Format the catalog was loaded for.
    #[must_use]
    pub fn format(&self) -> Format {
        self.format
    }

    /// Facet-filtered sequence, before the feature query.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    #[must_use]
    pub fn query(&self) -> FeatureQuery {
        self.query
    }

    #[must_use]
    pub fn facets(&self) -> &FacetFilter {
        &self.facets
    }

    /// Sequence the navigator walks.
    #[must_use]
    pub fn filtered(&self) -> &Vector<Card> {
        &self.filtered
    }

    /// Cards on the current page. Empty past the last page.
    #[must_use]
    pub fn paged_cards(&self) -> Vector<Card> {
        let range = self.navigator.page_range(self.filtered.len());
        self.filtered
            .iter()
            .skip(range.start)
            .take(range.len())
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn position(&self) -> CursorState {
        self.navigator.position()
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn cache(&self) -> &DetailCache {
        &self.cache
    }

    /// Replace the detail cache, e.g. with one restored from a snapshot.
    pub fn set_cache(&mut self, cache: DetailCache) {
        self.cache = cache;
    }

    pub fn observers_mut(&mut self) -> &mut Observers<BrowserEvent> {
        &mut self.observers
    }
}
