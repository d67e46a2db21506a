//! # Direct2D Context
//!
//! Owns one window and the Direct2D / DirectWrite objects bound to it:
//! - single-threaded `ID2D1Factory` and the HWND render target
//! - shared `IDWriteFactory` and at most one text format
//!
//! Drawing calls create a solid color brush, issue one native call and drop
//! the brush. A failed native call is logged and the call returns early.

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::{HWND, RECT},
        Graphics::{
            Direct2D::{
                Common::{D2D1_COLOR_F, D2D_RECT_F, D2D_SIZE_U},
                D2D1CreateFactory, ID2D1Factory, ID2D1HwndRenderTarget, ID2D1SolidColorBrush,
                D2D1_DRAW_TEXT_OPTIONS_NONE, D2D1_ELLIPSE, D2D1_FACTORY_TYPE_SINGLE_THREADED,
                D2D1_HWND_RENDER_TARGET_PROPERTIES, D2D1_PRESENT_OPTIONS_NONE,
                D2D1_RENDER_TARGET_PROPERTIES, D2D1_ROUNDED_RECT,
            },
            DirectWrite::{
                DWriteCreateFactory, IDWriteFactory, IDWriteTextFormat,
                DWRITE_FACTORY_TYPE_SHARED, DWRITE_FONT_STRETCH_NORMAL, DWRITE_FONT_STYLE_NORMAL,
                DWRITE_FONT_WEIGHT_NORMAL, DWRITE_MEASURING_MODE_NATURAL,
            },
        },
        System::LibraryLoader::GetModuleHandleW,
        UI::WindowsAndMessaging::{
            CreateWindowExW, DestroyWindow, GetClientRect, IsWindow, SetParent, ShowWindow,
            CW_USEDEFAULT, SW_HIDE, SW_SHOW, WINDOW_EX_STYLE, WINDOW_STYLE, WS_CHILD,
            WS_OVERLAPPEDWINDOW,
        },
    },
};

use crate::color::Color;
use crate::config::WindowConfig;
use crate::error::{report, D2dlError, Result};
use crate::geometry::{Point, Rect, Size};
use crate::text::{to_wide, to_wide_text, ParagraphAlignment, TextAlignment};
use crate::window::register_window_class;

/// A window plus the render target drawing into it
pub struct Context {
    hwnd: HWND,
    // Field order is drop order: the render target goes before its factory.
    render_target: ID2D1HwndRenderTarget,
    _factory: ID2D1Factory,
    text_format: Option<IDWriteTextFormat>,
    dwrite_factory: IDWriteFactory,
    text_alignment: TextAlignment,
    paragraph_alignment: ParagraphAlignment,
}

impl Context {
    /// Create and show a top-level window with a render target bound to it.
    ///
    /// `title` doubles as the window class name.
    pub fn init_desktop_window(width: i32, height: i32, title: &str) -> Result<Self> {
        let origin = (CW_USEDEFAULT, CW_USEDEFAULT);
        let hwnd = create_window(title, WS_OVERLAPPEDWINDOW, None, origin, (width, height))?;
        let context = Self::bind(hwnd)?;
        context.set_visible(true);
        Ok(context)
    }

    /// Create a child window inside `parent`, positioned at its client origin.
    pub fn init_child_window(parent: HWND, width: i32, height: i32, title: &str) -> Result<Self> {
        let hwnd = create_window(title, WS_CHILD, Some(parent), (0, 0), (width, height))?;
        let context = Self::bind(hwnd)?;
        context.set_visible(true);
        Ok(context)
    }

    /// Create a desktop window from a validated config and load its font.
    pub fn from_config(config: &WindowConfig) -> Result<Self> {
        config.validate()?;
        let hwnd = create_window(
            &config.title,
            WS_OVERLAPPEDWINDOW,
            None,
            (CW_USEDEFAULT, CW_USEDEFAULT),
            (config.width, config.height),
        )?;
        let mut context = Self::bind(hwnd)?;
        if let Some(font) = &config.font {
            context.load_font(&font.family, font.size)?;
        }
        context.set_visible(config.visible);
        Ok(context)
    }

    /// Build the factory, render target and DirectWrite factory for `hwnd`.
    ///
    /// Takes ownership of the window: it is destroyed if any step fails.
    fn bind(hwnd: HWND) -> Result<Self> {
        let created = Self::create_resources(hwnd);
        if created.is_err() {
            unsafe { let _ = DestroyWindow(hwnd); }
        }
        created
    }

    fn create_resources(hwnd: HWND) -> Result<Self> {
        let factory: ID2D1Factory = unsafe {
            D2D1CreateFactory(D2D1_FACTORY_TYPE_SINGLE_THREADED, None)
        }
        .map_err(|e| report(D2dlError::Factory(e.code().0)))?;

        let (width, height) = client_size(hwnd);
        let render_target_properties = D2D1_RENDER_TARGET_PROPERTIES::default();
        let hwnd_render_target_properties = D2D1_HWND_RENDER_TARGET_PROPERTIES {
            hwnd,
            pixelSize: D2D_SIZE_U { width, height },
            presentOptions: D2D1_PRESENT_OPTIONS_NONE,
        };
        let render_target = unsafe {
            factory.CreateHwndRenderTarget(&render_target_properties, &hwnd_render_target_properties)
        }
        .map_err(|e| report(D2dlError::RenderTarget(e.code().0)))?;

        let dwrite_factory: IDWriteFactory = unsafe { DWriteCreateFactory(DWRITE_FACTORY_TYPE_SHARED) }
            .map_err(|e| report(D2dlError::DirectWriteFactory(e.code().0)))?;

        log::debug!("render target bound to window {:?} ({}x{})", hwnd, width, height);

        Ok(Self {
            hwnd,
            render_target,
            _factory: factory,
            text_format: None,
            dwrite_factory,
            text_alignment: TextAlignment::default(),
            paragraph_alignment: ParagraphAlignment::default(),
        })
    }

    /// The window this context draws into
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Begin a drawing session
    pub fn begin_drawing(&self) {
        unsafe { self.render_target.BeginDraw() };
    }

    /// Present the frame.
    ///
    /// `D2DERR_RECREATE_TARGET` surfaces here as [`D2dlError::EndDraw`].
    pub fn end_drawing(&self) -> Result<()> {
        unsafe { self.render_target.EndDraw(None, None) }
            .map_err(|e| report(D2dlError::EndDraw(e.code().0)))
    }

    /// Fill the whole render target with a color
    pub fn clear(&self, color: Color) {
        let color: D2D1_COLOR_F = color.into();
        unsafe { self.render_target.Clear(Some(&color as *const _)) };
    }

    /// Transient brush for a single draw call
    fn brush(&self, color: Color) -> Option<ID2D1SolidColorBrush> {
        let color: D2D1_COLOR_F = color.into();
        match unsafe { self.render_target.CreateSolidColorBrush(&color, None) } {
            Ok(brush) => Some(brush),
            Err(e) => {
                report(D2dlError::Brush(e.code().0));
                None
            }
        }
    }

    /// Draw a rectangle outline
    pub fn draw_rect(&self, rect: Rect, stroke_width: f32, color: Color) {
        let Some(brush) = self.brush(color) else { return };
        let rect: D2D_RECT_F = rect.into();
        unsafe { self.render_target.DrawRectangle(&rect, &brush, stroke_width, None) };
    }

    /// Fill a rectangle with a color
    pub fn fill_rect(&self, rect: Rect, color: Color) {
        let Some(brush) = self.brush(color) else { return };
        let rect: D2D_RECT_F = rect.into();
        unsafe { self.render_target.FillRectangle(&rect, &brush) };
    }

    /// Draw a rounded rectangle outline with equal corner radii
    pub fn draw_rounded_rect(&self, rect: Rect, radius: f32, stroke_width: f32, color: Color) {
        let Some(brush) = self.brush(color) else { return };
        let rounded_rect = rounded(rect, radius);
        unsafe { self.render_target.DrawRoundedRectangle(&rounded_rect, &brush, stroke_width, None) };
    }

    /// Fill a rounded rectangle
    pub fn fill_rounded_rect(&self, rect: Rect, radius: f32, color: Color) {
        let Some(brush) = self.brush(color) else { return };
        let rounded_rect = rounded(rect, radius);
        unsafe { self.render_target.FillRoundedRectangle(&rounded_rect, &brush) };
    }

    /// Draw an ellipse outline
    pub fn draw_ellipse(&self, center: Point, radius_x: f32, radius_y: f32, stroke_width: f32, color: Color) {
        let Some(brush) = self.brush(color) else { return };
        let ellipse = ellipse(center, radius_x, radius_y);
        unsafe { self.render_target.DrawEllipse(&ellipse, &brush, stroke_width, None) };
    }

    /// Fill an ellipse
    pub fn fill_ellipse(&self, center: Point, radius_x: f32, radius_y: f32, color: Color) {
        let Some(brush) = self.brush(color) else { return };
        let ellipse = ellipse(center, radius_x, radius_y);
        unsafe { self.render_target.FillEllipse(&ellipse, &brush) };
    }

    /// Draw `text` inside `rect` with the loaded font and current alignment.
    ///
    /// Logs and skips when no font has been loaded.
    pub fn draw_text(&self, text: &str, rect: Rect, color: Color) {
        let Some(format) = &self.text_format else {
            report(D2dlError::NoFont);
            return;
        };
        let Some(brush) = self.brush(color) else { return };

        let aligned = unsafe {
            format
                .SetTextAlignment(self.text_alignment.into())
                .and_then(|_| format.SetParagraphAlignment(self.paragraph_alignment.into()))
        };
        if let Err(e) = aligned {
            // The format keeps its previous alignment; the text is still drawn.
            report(D2dlError::TextAlignment(e.code().0));
        }

        let text_wide = to_wide_text(text);
        let rect: D2D_RECT_F = rect.into();
        unsafe {
            self.render_target.DrawText(
                &text_wide,
                format,
                &rect,
                &brush,
                D2D1_DRAW_TEXT_OPTIONS_NONE,
                DWRITE_MEASURING_MODE_NATURAL,
            );
        }
    }

    /// Alignment applied by subsequent [`Context::draw_text`] calls
    pub fn set_text_alignment(&mut self, text: TextAlignment, paragraph: ParagraphAlignment) {
        self.text_alignment = text;
        self.paragraph_alignment = paragraph;
    }

    /// Size of the render target in device-independent pixels
    pub fn render_size(&self) -> Size {
        unsafe { self.render_target.GetSize() }.into()
    }

    /// Size of the render target in device pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        let size = unsafe { self.render_target.GetPixelSize() };
        (size.width, size.height)
    }

    /// Resize the render target; fractional pixels are truncated.
    pub fn set_render_size(&self, size: Size) -> Result<()> {
        let pixel_size: D2D_SIZE_U = size.into();
        log::trace!("resize render target to {}x{}", pixel_size.width, pixel_size.height);
        unsafe { self.render_target.Resize(&pixel_size) }
            .map_err(|e| report(D2dlError::Resize(e.code().0)))
    }

    /// Replace the text format with `family` at `size` points.
    ///
    /// Only normal weight, style and stretch are supported.
    pub fn load_font(&mut self, family: &str, size: f32) -> Result<()> {
        let family_wide = to_wide(family);
        let locale = to_wide("");
        let format = unsafe {
            self.dwrite_factory.CreateTextFormat(
                PCWSTR(family_wide.as_ptr()),
                None,
                DWRITE_FONT_WEIGHT_NORMAL,
                DWRITE_FONT_STYLE_NORMAL,
                DWRITE_FONT_STRETCH_NORMAL,
                size,
                PCWSTR(locale.as_ptr()),
            )
        }
        .map_err(|e| report(D2dlError::Font { family: family.to_string(), code: e.code().0 }))?;

        log::debug!("loaded font '{}' at {}pt", family, size);
        self.text_format = Some(format);
        Ok(())
    }

    /// Whether a text format has been loaded
    pub fn has_font(&self) -> bool {
        self.text_format.is_some()
    }

    /// Reparent the window under `parent`
    pub fn set_parent(&self, parent: HWND) {
        if let Err(e) = unsafe { SetParent(self.hwnd, Some(parent)) } {
            log::error!("D2DL error: SetParent failed ({})", e);
        }
    }

    /// Show or hide the window
    pub fn set_visible(&self, visible: bool) {
        unsafe {
            let _ = ShowWindow(self.hwnd, if visible { SW_SHOW } else { SW_HIDE });
        }
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        unsafe {
            if IsWindow(Some(self.hwnd)).as_bool() {
                let _ = DestroyWindow(self.hwnd);
            }
        }
    }
}

fn rounded(rect: Rect, radius: f32) -> D2D1_ROUNDED_RECT {
    D2D1_ROUNDED_RECT {
        rect: rect.into(),
        radiusX: radius,
        radiusY: radius,
    }
}

fn ellipse(center: Point, radius_x: f32, radius_y: f32) -> D2D1_ELLIPSE {
    D2D1_ELLIPSE {
        point: center.into(),
        radiusX: radius_x,
        radiusY: radius_y,
    }
}

fn client_size(hwnd: HWND) -> (u32, u32) {
    let mut rect = RECT::default();
    unsafe { let _ = GetClientRect(hwnd, &mut rect); }
    ((rect.right - rect.left).max(0) as u32, (rect.bottom - rect.top).max(0) as u32)
}

fn create_window(
    title: &str,
    style: WINDOW_STYLE,
    parent: Option<HWND>,
    origin: (i32, i32),
    size: (i32, i32),
) -> Result<HWND> {
    register_window_class(title)?;

    let class_name = to_wide(title);
    let instance = unsafe { GetModuleHandleW(None) }
        .map_err(|e| report(D2dlError::Window(e.code().0)))?;

    let hwnd = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            PCWSTR(class_name.as_ptr()),
            PCWSTR(class_name.as_ptr()),
            style,
            origin.0,
            origin.1,
            size.0,
            size.1,
            parent,
            None,
            Some(instance.into()),
            None,
        )
    }
    .map_err(|e| report(D2dlError::Window(e.code().0)))?;

    log::debug!("created window '{}' {:?}", title, hwnd);
    Ok(hwnd)
}
