//! Per-session ownership of every store.

use tracing::info;

use super::browser::CardBrowser;
use crate::backend::Backend;
use crate::cards::{Card, Format};
use crate::core::{BrowserConfig, Result};
use crate::deck::{Deck, DeckGroup, DeckMetadata, Keep};
use crate::windows::WindowStack;

/// One browsing session.
///
/// Stores are constructed here and handed out by reference; nothing is
/// global. `teardown` stops background work and gives the backend back.
///
/// ```
/// use deck_keeper::backend::InMemoryBackend;
/// use deck_keeper::cards::{Card, Format};
/// use deck_keeper::core::BrowserConfig;
/// use deck_keeper::session::Session;
/// use futures::executor::block_on;
///
/// let backend = InMemoryBackend::new(vec![Card::new("a", "WX-1", "アーク", "シグニ")]);
/// let mut session = Session::new(backend, BrowserConfig::default().with_format(Format::AllStar));
///
/// assert_eq!(block_on(session.start_default()).unwrap(), 1);
/// session.keep_current();
/// assert_eq!(session.keep().main_count(), 1);
/// ```
#[derive(Debug)]
pub struct Session<B> {
    backend: B,
    config: BrowserConfig,
    browser: CardBrowser,
    keep: Keep,
    windows: WindowStack,
}

impl<B: Backend> Session<B> {
    #[must_use]
    pub fn new(backend: B, config: BrowserConfig) -> Self {
        let browser = CardBrowser::from_config(&config);
        let windows = WindowStack::with_config(config.stack.clone());
        Self {
            backend,
            config,
            browser,
            keep: Keep::new(),
            windows,
        }
    }

    /// Seed the panels and load the catalog for `format`.
    pub async fn start(&mut self, format: Format) -> Result<usize> {
        self.windows.initialize();
        let count = self.browser.load(&self.backend, format).await?;
        info!(count, %format, "session started");
        Ok(count)
    }

    /// `start` with the configured default format.
    pub async fn start_default(&mut self) -> Result<usize> {
        let format = self.config.default_format;
        self.start(format).await
    }

    /// Keep one more copy of the selected card.
    pub fn keep_current(&mut self) -> Option<DeckGroup> {
        let card = self.browser.current_card()?.clone();
        Some(self.keep.append(&card))
    }

    /// Resolve a card through the browser's cache and the backend.
    pub async fn detail(&mut self, key: &str) -> Result<Option<Card>> {
        self.browser.detail(&self.backend, key).await
    }

    /// Trim and persist the deck.
    pub async fn save(&mut self, metadata: &DeckMetadata) -> Result<Deck> {
        self.keep.save_deck(&self.backend, metadata).await
    }

    /// Stop the filter worker and hand back the backend.
    pub fn teardown(mut self) -> B {
        self.browser.shutdown_worker();
        info!("session torn down");
        self.backend
    }

    #[must_use]
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn browser(&self) -> &CardBrowser {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut CardBrowser {
        &mut self.browser
    }

    #[must_use]
    pub fn keep(&self) -> &Keep {
        &self.keep
    }

    pub fn keep_mut(&mut self) -> &mut Keep {
        &mut self.keep
    }

    #[must_use]
    pub fn windows(&self) -> &WindowStack {
        &self.windows
    }

    pub fn windows_mut(&mut self) -> &mut WindowStack {
        &mut self.windows
    }
}
