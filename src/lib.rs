//! # d2dl
//!
//! A minimal procedural drawing layer over Direct2D and a Win32 window.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                         Context                           │
//! │  HWND ──► ID2D1Factory ──► ID2D1HwndRenderTarget          │
//! │                 │                   │                     │
//! │      IDWriteFactory ──► IDWriteTextFormat   per-call brush│
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Every drawing call maps one of the plain structs in this crate
//! ([`Color`], [`Rect`], [`Point`]) onto its Direct2D counterpart and issues a
//! single native call. Brushes are created for each call and dropped right
//! after it. Nothing is batched or retained.
//!
//! Only the value types, configuration and errors are available off Windows;
//! [`Context`] and the window loop require the `windows` target.

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod text;

#[cfg(windows)]
pub mod context;
#[cfg(windows)]
pub mod window;

pub use color::Color;
pub use config::WindowConfig;
pub use error::{D2dlError, Result};
pub use geometry::{Point, Rect, Size};
pub use text::{FontSpec, ParagraphAlignment, TextAlignment};

#[cfg(windows)]
pub use context::Context;
#[cfg(windows)]
pub use window::{register_window_class, run, WindowHandler};
