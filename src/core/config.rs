//! Browser configuration.
//!
//! Hosts configure the engine at startup:
//! - `BrowserConfig`: page size and default game format
//! - `StackConfig`: z-order stepping for floating panels
//! - `PanelLayout`: initial position of each panel
//!
//! Every field has a default, so a config file only needs the keys it changes.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::error::Result;
use crate::cards::Format;
use crate::windows::PanelId;

/// Cards per page in the catalog browser.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Initial placement of a floating panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelLayout {
    /// Panel this layout applies to.
    pub id: PanelId,
    /// Left edge in pixels.
    pub x: i32,
    /// Top edge in pixels.
    pub y: i32,
    /// Added to the z cursor when the panel is seeded.
    pub z_offset: i32,
}

impl PanelLayout {
    /// Create a layout.
    #[must_use]
    pub const fn new(id: PanelId, x: i32, y: i32, z_offset: i32) -> Self {
        Self { id, x, y, z_offset }
    }
}

/// Z-order parameters for the window stack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Starting value of the z cursor.
    pub base_z: i32,

    /// Amount the cursor advances on every raise.
    pub step: i32,

    /// Renormalize once the cursor goes above this value.
    pub threshold: i32,

    /// Subtracted from every panel's z on renormalization.
    pub renormalize_by: i32,

    /// Cursor value after renormalization.
    pub reset_to: i32,

    /// Panels seeded by `WindowStack::initialize`.
    pub panels: SmallVec<[PanelLayout; 4]>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            base_z: 100,
            step: 15,
            threshold: 1000,
            renormalize_by: 800,
            reset_to: 100,
            panels: smallvec![
                PanelLayout::new(PanelId::Detail, 780, 340, 10),
                PanelLayout::new(PanelId::Keep, 1100, 43, 20),
            ],
        }
    }
}

/// Top-level configuration for a browsing session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Cards per page. Must be non-zero.
    pub page_size: usize,

    /// Format requested when the catalog is loaded.
    pub default_format: Format,

    /// Window stacking parameters.
    pub stack: StackConfig,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_format: Format::DivaSelection,
            stack: StackConfig::default(),
        }
    }
}

impl BrowserConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    ///
    /// ```
    /// use deck_keeper::core::BrowserConfig;
    ///
    /// let config = BrowserConfig::from_toml_str("page_size = 50").unwrap();
    /// assert_eq!(config.page_size, 50);
    /// assert_eq!(config.stack.step, 15);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: BrowserConfig = toml::from_str(source)?;
        Ok(config.sanitized())
    }

    /// Create a new config with a custom page size.
    ///
    /// Zero is replaced by the default page size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self.sanitized()
    }

    /// Create a new config with a custom default format.
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.default_format = format;
        self
    }

    /// Create a new config with custom stack parameters.
    #[must_use]
    pub fn with_stack(mut self, stack: StackConfig) -> Self {
        self.stack = stack;
        self
    }

    fn sanitized(mut self) -> Self {
        if self.page_size == 0 {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BrowserConfig::default();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.default_format, Format::DivaSelection);
        assert_eq!(config.stack.base_z, 100);
        assert_eq!(config.stack.step, 15);
        assert_eq!(config.stack.threshold, 1000);
        assert_eq!(config.stack.renormalize_by, 800);
        assert_eq!(config.stack.panels.len(), 2);
    }

    #[test]
    fn test_builder_pattern() {
        let config = BrowserConfig::default()
            .with_page_size(10)
            .with_format(Format::KeySelection);

        assert_eq!(config.page_size, 10);
        assert_eq!(config.default_format, Format::KeySelection);
    }

    #[test]
    fn test_zero_page_size_falls_back() {
        let config = BrowserConfig::default().with_page_size(0);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_from_toml_partial() {
        let source = r#"
            default_format = 1

            [stack]
            step = 20
        "#;
        let config = BrowserConfig::from_toml_str(source).unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.default_format, Format::AllStar);
        assert_eq!(config.stack.step, 20);
        assert_eq!(config.stack.threshold, 1000);
    }

    #[test]
    fn test_from_toml_panels() {
        let source = r#"
            [[stack.panels]]
            id = "keep"
            x = 10
            y = 20
            z_offset = 5
        "#;
        let config = BrowserConfig::from_toml_str(source).unwrap();
        assert_eq!(config.stack.panels.len(), 1);
        assert_eq!(config.stack.panels[0], PanelLayout::new(PanelId::Keep, 10, 20, 5));
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(BrowserConfig::from_toml_str("page_size = \"many\"").is_err());
        assert!(BrowserConfig::from_toml_str("default_format = 9").is_err());
    }

    #[test]
    fn test_serialization() {
        let config = BrowserConfig::default().with_page_size(40);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BrowserConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
