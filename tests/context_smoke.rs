#![cfg(windows)]

use std::cell::RefCell;
use std::rc::Rc;

use d2dl::{
    register_window_class, run, Color, Context, D2dlError, FontSpec, ParagraphAlignment, Point,
    Rect, Size, TextAlignment, WindowConfig, WindowHandler,
};
use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::{HWND, LPARAM, LRESULT, WPARAM},
        System::LibraryLoader::GetModuleHandleW,
        UI::WindowsAndMessaging::{
            DefWindowProcW, DestroyWindow, IsWindow, IsWindowVisible, PostMessageW, RegisterClassW,
            WM_CLOSE, WNDCLASSW,
        },
    },
};

fn hidden_context(title: &str, font: Option<FontSpec>) -> Context {
    let config = WindowConfig::new(400, 300, title)
        .with_font(font)
        .with_visible(false);
    Context::from_config(&config).expect("Failed to create hidden context")
}

#[test]
fn test_every_draw_op_presents() {
    let mut ctx = hidden_context("d2dl-smoke-draw", Some(FontSpec::new("Verdana", 16.0)));
    assert!(ctx.has_font());

    let rect = Rect::new(10.0, 10.0, 110.0, 60.0);
    let center = Point::new(50.0, 50.0);

    ctx.begin_drawing();
    ctx.clear(Color::rgb(0.5, 0.5, 0.5));
    ctx.draw_rect(rect, 2.0, Color::GREEN);
    ctx.fill_rect(rect.inset(4.0), Color::RED);
    ctx.draw_rounded_rect(rect, 6.0, 1.5, Color::BLACK);
    ctx.fill_rounded_rect(rect.inset(8.0), 3.0, Color::WHITE);
    ctx.draw_ellipse(center, 20.0, 10.0, 1.0, Color::BLUE);
    ctx.fill_ellipse(center, 10.0, 10.0, Color::BLUE.with_alpha(0.5));
    ctx.draw_text("centered", rect, Color::BLACK);
    ctx.set_text_alignment(TextAlignment::Leading, ParagraphAlignment::Near);
    ctx.draw_text("top left", rect, Color::BLACK);
    assert!(ctx.end_drawing().is_ok());
}

#[test]
fn test_draw_text_without_font_is_skipped() {
    let ctx = hidden_context("d2dl-smoke-nofont", None);
    assert!(!ctx.has_font());

    ctx.begin_drawing();
    ctx.draw_text("no format", Rect::new(0.0, 0.0, 100.0, 40.0), Color::BLACK);
    assert!(ctx.end_drawing().is_ok());
}

#[test]
fn test_set_render_size_truncates() {
    let ctx = hidden_context("d2dl-smoke-resize", None);
    ctx.set_render_size(Size::new(320.7, 200.2)).expect("Resize failed");
    assert_eq!(ctx.pixel_size(), (320, 200));

    // DIPs follow the pixel size scaled by the target's DPI
    let size = ctx.render_size();
    assert!(size.width > 0.0 && size.height > 0.0);
    assert!((size.width / size.height - 1.6).abs() < 0.01);
}

#[test]
fn test_set_visible_toggles_window() {
    let ctx = hidden_context("d2dl-smoke-visible", None);
    assert!(!unsafe { IsWindowVisible(ctx.hwnd()) }.as_bool());
    ctx.set_visible(true);
    assert!(unsafe { IsWindowVisible(ctx.hwnd()) }.as_bool());
    ctx.set_visible(false);
    assert!(!unsafe { IsWindowVisible(ctx.hwnd()) }.as_bool());
}

#[test]
fn test_drop_after_window_destroyed() {
    let ctx = hidden_context("d2dl-smoke-destroyed", None);
    let hwnd = ctx.hwnd();
    unsafe { DestroyWindow(hwnd).expect("DestroyWindow failed") };
    drop(ctx);
    assert!(!unsafe { IsWindow(Some(hwnd)) }.as_bool());
}

#[test]
fn test_drop_destroys_window() {
    let ctx = hidden_context("d2dl-smoke-drop", None);
    let hwnd = ctx.hwnd();
    drop(ctx);
    assert!(!unsafe { IsWindow(Some(hwnd)) }.as_bool());
}

#[test]
fn test_register_same_class_twice() {
    assert!(register_window_class("d2dl-smoke-class").is_ok());
    assert!(register_window_class("d2dl-smoke-class").is_ok());
}

unsafe extern "system" fn host_window_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
}

#[test]
fn test_class_registered_by_host_is_accepted() {
    let name = "d2dl-smoke-host-class";
    let class_name: Vec<u16> = name.encode_utf16().chain(std::iter::once(0)).collect();
    let instance = unsafe { GetModuleHandleW(None) }.expect("GetModuleHandleW failed");
    let wc = WNDCLASSW {
        lpfnWndProc: Some(host_window_proc),
        hInstance: instance.into(),
        lpszClassName: PCWSTR(class_name.as_ptr()),
        ..Default::default()
    };
    assert_ne!(unsafe { RegisterClassW(&wc) }, 0);

    assert!(register_window_class(name).is_ok());
    let ctx = Context::init_desktop_window(200, 100, name).expect("host class rejected");
    ctx.set_visible(false);
}

struct NestedRun {
    second: Option<Context>,
    closed: Rc<RefCell<Option<Result<(), D2dlError>>>>,
}

impl WindowHandler for NestedRun {
    fn paint(&mut self, _ctx: &mut Context) {}

    fn closed(&mut self) {
        if let Some(second) = self.second.take() {
            *self.closed.borrow_mut() = Some(run(second, NestedRun { second: None, closed: Rc::default() }));
        }
    }
}

#[test]
fn test_run_exits_on_close_and_rejects_nested_loop() {
    let ctx = hidden_context("d2dl-smoke-run", None);
    let second = hidden_context("d2dl-smoke-run-second", None);
    let closed = Rc::new(RefCell::new(None));

    unsafe { PostMessageW(Some(ctx.hwnd()), WM_CLOSE, WPARAM(0), LPARAM(0)) }
        .expect("PostMessageW failed");
    run(ctx, NestedRun { second: Some(second), closed: closed.clone() }).expect("run failed");

    let nested = closed.borrow_mut().take().expect("closed() was not called");
    assert!(matches!(nested, Err(D2dlError::AlreadyRunning)));
}
