//! # Window Management
//!
//! Window class registration, the message loop and the window procedure.
//! The running context and its handler live in a thread-local so the
//! window procedure can reach them.

use std::cell::RefCell;
use std::collections::HashSet;

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::{GetLastError, ERROR_CLASS_ALREADY_EXISTS, HWND, LPARAM, LRESULT, WPARAM},
        Graphics::Gdi::{BeginPaint, EndPaint, InvalidateRect, PAINTSTRUCT},
        System::LibraryLoader::GetModuleHandleW,
        UI::WindowsAndMessaging::{
            DefWindowProcW, DispatchMessageW, GetMessageW, LoadCursorW, PostQuitMessage,
            RegisterClassW, TranslateMessage, CS_HREDRAW, CS_VREDRAW, IDC_ARROW, MSG,
            WM_DESTROY, WM_DISPLAYCHANGE, WM_PAINT, WM_SIZE, WNDCLASSW,
        },
    },
};

use crate::context::Context;
use crate::error::{report, D2dlError, Result};
use crate::geometry::Size;
use crate::text::to_wide;

/// Callbacks driven by the window procedure
pub trait WindowHandler {
    /// Draw a frame. Called between `BeginPaint` and `EndPaint`.
    fn paint(&mut self, ctx: &mut Context);

    /// The client area changed size
    fn resized(&mut self, ctx: &mut Context, size: Size) {
        let _ = ctx.set_render_size(size);
    }

    /// The window was destroyed; the message loop stops after this.
    fn closed(&mut self) {}
}

struct WindowState {
    context: Context,
    handler: Box<dyn WindowHandler>,
}

thread_local! {
    static WINDOW_STATE: RefCell<Option<WindowState>> = const { RefCell::new(None) };
    static REGISTERED_CLASSES: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

/// Register a window class routed through this module's window procedure.
///
/// A name that is already registered, by this crate or by the host, is
/// accepted as is.
pub fn register_window_class(name: &str) -> Result<()> {
    if REGISTERED_CLASSES.with(|classes| classes.borrow().contains(name)) {
        return Ok(());
    }

    let instance = unsafe { GetModuleHandleW(None) }
        .map_err(|e| report(D2dlError::Window(e.code().0)))?;
    let class_name = to_wide(name);

    let wc = WNDCLASSW {
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(window_proc),
        hInstance: instance.into(),
        lpszClassName: PCWSTR(class_name.as_ptr()),
        hCursor: unsafe { LoadCursorW(None, IDC_ARROW) }.unwrap_or_default(),
        ..Default::default()
    };

    if unsafe { RegisterClassW(&wc) } == 0 {
        if unsafe { GetLastError() } != ERROR_CLASS_ALREADY_EXISTS {
            return Err(report(D2dlError::ClassRegistration(name.to_string())));
        }
        log::debug!("window class '{}' already registered", name);
    }

    REGISTERED_CLASSES.with(|classes| classes.borrow_mut().insert(name.to_string()));
    Ok(())
}

/// Pump messages for `context`'s window until it is destroyed.
///
/// The context is dropped when the loop ends.
pub fn run<H: WindowHandler + 'static>(context: Context, handler: H) -> Result<()> {
    // Called from inside a handler the state is borrowed, which also means a
    // loop is running.
    let installed = WINDOW_STATE.with(|state| {
        let Ok(mut state) = state.try_borrow_mut() else {
            return false;
        };
        if state.is_some() {
            return false;
        }
        *state = Some(WindowState {
            context,
            handler: Box::new(handler),
        });
        true
    });
    if !installed {
        return Err(report(D2dlError::AlreadyRunning));
    }

    let mut msg = MSG::default();
    loop {
        let result = unsafe { GetMessageW(&mut msg, None, 0, 0) };
        if result.0 == 0 || result.0 == -1 {
            break;
        }
        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    let state = WINDOW_STATE.with(|state| state.borrow_mut().take());
    drop(state);
    log::debug!("message loop finished");
    Ok(())
}

/// Window procedure for handling messages
unsafe extern "system" fn window_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    // A message sent while the handler is running (e.g. from ShowWindow inside
    // paint) finds the state borrowed and takes the default path.
    let handled = WINDOW_STATE.with(|state| {
        let mut guard = state.try_borrow_mut().ok()?;
        let state = guard.as_mut()?;
        if state.context.hwnd() != hwnd {
            return None;
        }
        dispatch(state, hwnd, msg, lparam)
    });

    match handled {
        Some(result) => result,
        None => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}

fn dispatch(state: &mut WindowState, hwnd: HWND, msg: u32, lparam: LPARAM) -> Option<LRESULT> {
    match msg {
        WM_PAINT => {
            let mut ps = PAINTSTRUCT::default();
            unsafe { let _ = BeginPaint(hwnd, &mut ps); }
            state.handler.paint(&mut state.context);
            unsafe { let _ = EndPaint(hwnd, &ps); }
            Some(LRESULT(0))
        }

        WM_SIZE => {
            let size = Size::from_packed(lparam.0);
            state.handler.resized(&mut state.context, size);
            unsafe { let _ = InvalidateRect(Some(hwnd), None, false); }
            Some(LRESULT(0))
        }

        WM_DISPLAYCHANGE => {
            unsafe { let _ = InvalidateRect(Some(hwnd), None, false); }
            Some(LRESULT(0))
        }

        WM_DESTROY => {
            state.handler.closed();
            unsafe { PostQuitMessage(0) };
            Some(LRESULT(0))
        }

        _ => None,
    }
}
