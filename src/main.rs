//! # d2dl demo
//!
//! Opens a window and draws a border, a filled circle and a line of text
//! that follow the window size.
//!
//! ## Usage
//! `cargo run --release -- --width 900 --height 600 --text "Hello"`
//!
//! Set `RUST_LOG=debug` to see window and render target lifecycle events.

// The drawing half of the demo only exists on Windows.
#![cfg_attr(not(windows), allow(dead_code))]

use clap::Parser;
use colored::*;
use d2dl::{Color, D2dlError, FontSpec, Point, Rect, Size, WindowConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Draw a few shapes with d2dl", long_about = None)]
struct Args {
    /// Window width in pixels
    #[arg(long, default_value_t = 900)]
    width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    height: i32,

    /// Window title
    #[arg(long, default_value = "d2dl")]
    title: String,

    /// Font family for the caption
    #[arg(long, default_value = "Verdana")]
    font: String,

    /// Font size in points
    #[arg(long, default_value_t = 32.0)]
    font_size: f32,

    /// Caption drawn inside the circle
    #[arg(long, default_value = "Hello from Direct2D!")]
    text: String,

    /// Create the window hidden
    #[arg(long)]
    hidden: bool,
}

impl Args {
    fn window_config(&self) -> WindowConfig {
        WindowConfig::new(self.width, self.height, self.title.clone())
            .with_font(Some(FontSpec::new(self.font.clone(), self.font_size)))
            .with_visible(!self.hidden)
    }
}

const BACKGROUND: Color = Color::rgb(0.5, 0.5, 0.5);
const BORDER_INSET: f32 = 5.0;
const BORDER_WIDTH: f32 = 5.0;

/// Where the demo shapes go for a given render size
#[derive(Debug, Clone, Copy, PartialEq)]
struct Scene {
    border: Rect,
    center: Point,
    radius: f32,
}

impl Scene {
    fn layout(size: Size) -> Self {
        let bounds = Rect::new(0.0, 0.0, size.width, size.height);
        Scene {
            border: bounds.inset(BORDER_INSET),
            center: bounds.center(),
            radius: (size.width / 2.0).min(size.height / 2.0),
        }
    }

    /// Layout rectangle for the caption: the circle's bounding box
    fn text_rect(&self) -> Rect {
        Rect::centered(self.center, self.radius, self.radius)
    }
}

#[cfg(windows)]
struct Demo {
    caption: String,
}

#[cfg(windows)]
impl d2dl::WindowHandler for Demo {
    fn paint(&mut self, ctx: &mut d2dl::Context) {
        let scene = Scene::layout(ctx.render_size());

        ctx.begin_drawing();
        ctx.clear(BACKGROUND);
        ctx.draw_rect(scene.border, BORDER_WIDTH, Color::GREEN);
        ctx.fill_ellipse(scene.center, scene.radius, scene.radius, Color::BLUE);
        ctx.draw_text(&self.caption, scene.text_rect(), Color::BLACK);
        // Failures are already logged; the next WM_PAINT retries.
        let _ = ctx.end_drawing();
    }

    fn closed(&mut self) {
        log::info!("window closed");
    }
}

#[cfg(windows)]
fn run(args: Args) -> Result<(), D2dlError> {
    let config = args.window_config();
    let context = d2dl::Context::from_config(&config)?;
    log::info!(
        "window '{}' ready ({}x{}, font {})",
        config.title,
        config.width,
        config.height,
        context.has_font()
    );
    d2dl::run(context, Demo { caption: args.text })
}

#[cfg(not(windows))]
fn run(args: Args) -> Result<(), D2dlError> {
    args.window_config().validate()?;
    Err(D2dlError::Unsupported)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_landscape() {
        let scene = Scene::layout(Size::new(900.0, 600.0));
        assert_eq!(scene.border, Rect::new(5.0, 5.0, 895.0, 595.0));
        assert_eq!(scene.center, Point::new(450.0, 300.0));
        assert_eq!(scene.radius, 300.0);
        assert_eq!(scene.text_rect(), Rect::new(150.0, 0.0, 750.0, 600.0));
    }

    #[test]
    fn test_layout_portrait_uses_width() {
        let scene = Scene::layout(Size::new(200.0, 500.0));
        assert_eq!(scene.radius, 100.0);
    }

    #[test]
    fn test_layout_empty_window() {
        let scene = Scene::layout(Size::default());
        assert_eq!(scene.radius, 0.0);
        assert_eq!(scene.border.width(), 0.0);
    }

    #[test]
    fn test_args_to_config() {
        let args = Args::parse_from(["d2dl-demo", "--width", "640", "--font", "Arial", "--hidden"]);
        let config = args.window_config();
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 600);
        assert_eq!(config.font, Some(FontSpec::new("Arial", 32.0)));
        assert!(!config.visible);
        assert!(config.validate().is_ok());
    }
}
