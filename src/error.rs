//! # Errors
//!
//! One variant per native step that can fail. Native failures keep the
//! `HRESULT` so callers can tell e.g. `D2DERR_RECREATE_TARGET` apart.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum D2dlError {
    #[error("ID2D1Factory creation failed (hr={0:#010x})")]
    Factory(i32),
    #[error("DWriteFactory creation failed (hr={0:#010x})")]
    DirectWriteFactory(i32),
    #[error("CreateHwndRenderTarget failed (hr={0:#010x})")]
    RenderTarget(i32),
    #[error("Brush create failed (hr={0:#010x})")]
    Brush(i32),
    #[error("EndDraw failed (hr={0:#010x})")]
    EndDraw(i32),
    #[error("Resize failed (hr={0:#010x})")]
    Resize(i32),
    #[error("CreateTextFormat failed for '{family}' (hr={code:#010x})")]
    Font { family: String, code: i32 },
    #[error("setting text alignment failed (hr={0:#010x})")]
    TextAlignment(i32),
    #[error("no font loaded")]
    NoFont,
    #[error("CreateWindow failed (hr={0:#010x})")]
    Window(i32),
    #[error("RegisterClass failed for '{0}'")]
    ClassRegistration(String),
    #[error("a window loop is already running on this thread")]
    AlreadyRunning,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Direct2D rendering requires Windows")]
    Unsupported,
}

impl D2dlError {
    /// The native `HRESULT`, if this error came from a failed native call
    pub fn hresult(&self) -> Option<i32> {
        match self {
            D2dlError::Factory(hr)
            | D2dlError::DirectWriteFactory(hr)
            | D2dlError::RenderTarget(hr)
            | D2dlError::Brush(hr)
            | D2dlError::EndDraw(hr)
            | D2dlError::Resize(hr)
            | D2dlError::TextAlignment(hr)
            | D2dlError::Window(hr) => Some(*hr),
            D2dlError::Font { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, D2dlError>;

/// Log a failed native call the way every operation reports it.
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) fn report(err: D2dlError) -> D2dlError {
    log::error!("D2DL error: {}", err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_hresult() {
        // D2DERR_RECREATE_TARGET
        let err = D2dlError::EndDraw(0x8899000Cu32 as i32);
        assert_eq!(err.to_string(), "EndDraw failed (hr=0x8899000c)");
        assert_eq!(err.hresult(), Some(0x8899000Cu32 as i32));
    }

    #[test]
    fn test_text_alignment_error_keeps_hresult() {
        // E_INVALIDARG
        let err = D2dlError::TextAlignment(0x80070057u32 as i32);
        assert_eq!(err.to_string(), "setting text alignment failed (hr=0x80070057)");
        assert_eq!(err.hresult(), Some(0x80070057u32 as i32));
    }

    #[test]
    fn test_non_native_errors_have_no_hresult() {
        assert_eq!(D2dlError::NoFont.hresult(), None);
        assert_eq!(D2dlError::Unsupported.hresult(), None);
        assert_eq!(D2dlError::InvalidConfig("width".into()).hresult(), None);
    }

    #[test]
    fn test_font_error_message() {
        let err = D2dlError::Font { family: "Verdana".into(), code: -1 };
        assert_eq!(err.to_string(), "CreateTextFormat failed for 'Verdana' (hr=0xffffffff)");
    }
}
