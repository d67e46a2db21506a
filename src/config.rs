//! # Window Configuration
//!
//! Everything needed to bring up a drawing window in one value. The demo
//! binary fills this from its command line; library users can build it
//! directly and hand it to `Context::from_config`.

use crate::error::{D2dlError, Result};
use crate::text::FontSpec;

/// Initial window and font settings
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    /// Outer window width in pixels
    pub width: i32,
    /// Outer window height in pixels
    pub height: i32,
    /// Window title, also used as the window class name
    pub title: String,
    /// Font loaded right after the render target exists
    pub font: Option<FontSpec>,
    /// Show the window once it is created
    pub visible: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            title: "d2dl".to_string(),
            font: Some(FontSpec::default()),
            visible: true,
        }
    }
}

impl WindowConfig {
    pub fn new(width: i32, height: i32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_font(mut self, font: Option<FontSpec>) -> Self {
        self.font = font;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Reject settings the native calls would fail on or silently clamp
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(D2dlError::InvalidConfig(format!(
                "window size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.title.trim().is_empty() {
            return Err(D2dlError::InvalidConfig("window title is empty".to_string()));
        }
        if self.title.contains('\0') {
            return Err(D2dlError::InvalidConfig("window title contains NUL".to_string()));
        }
        if let Some(font) = &self.font {
            if font.family.trim().is_empty() {
                return Err(D2dlError::InvalidConfig("font family is empty".to_string()));
            }
            if !font.size.is_finite() || font.size <= 0.0 {
                return Err(D2dlError::InvalidConfig(format!(
                    "font size must be positive, got {}",
                    font.size
                )));
            }
        }
        Ok(())
    }
}
