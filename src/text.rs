//! # Text
//!
//! Font description and alignment for the single text format a context
//! holds, plus UTF-16 conversion for Win32 / DirectWrite string parameters.

/// Font family and point size used by `Context::load_font`
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self { family: family.into(), size }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Verdana", 32.0)
    }
}

/// Horizontal placement of text inside its layout rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    Leading,
    #[default]
    Center,
    Trailing,
}

/// Vertical placement of text inside its layout rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphAlignment {
    Near,
    #[default]
    Center,
    Far,
}

/// NUL-terminated UTF-16, for `PCWSTR` parameters
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// UTF-16 without a terminator; `DrawText` takes an explicit length.
pub fn to_wide_text(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

#[cfg(windows)]
mod native {
    use super::{ParagraphAlignment, TextAlignment};
    use windows::Win32::Graphics::DirectWrite::{
        DWRITE_PARAGRAPH_ALIGNMENT, DWRITE_PARAGRAPH_ALIGNMENT_CENTER,
        DWRITE_PARAGRAPH_ALIGNMENT_FAR, DWRITE_PARAGRAPH_ALIGNMENT_NEAR, DWRITE_TEXT_ALIGNMENT,
        DWRITE_TEXT_ALIGNMENT_CENTER, DWRITE_TEXT_ALIGNMENT_LEADING,
        DWRITE_TEXT_ALIGNMENT_TRAILING,
    };

    impl From<TextAlignment> for DWRITE_TEXT_ALIGNMENT {
        fn from(a: TextAlignment) -> Self {
            match a {
                TextAlignment::Leading => DWRITE_TEXT_ALIGNMENT_LEADING,
                TextAlignment::Center => DWRITE_TEXT_ALIGNMENT_CENTER,
                TextAlignment::Trailing => DWRITE_TEXT_ALIGNMENT_TRAILING,
            }
        }
    }

    impl From<ParagraphAlignment> for DWRITE_PARAGRAPH_ALIGNMENT {
        fn from(a: ParagraphAlignment) -> Self {
            match a {
                ParagraphAlignment::Near => DWRITE_PARAGRAPH_ALIGNMENT_NEAR,
                ParagraphAlignment::Center => DWRITE_PARAGRAPH_ALIGNMENT_CENTER,
                ParagraphAlignment::Far => DWRITE_PARAGRAPH_ALIGNMENT_FAR,
            }
        }
    }
}
