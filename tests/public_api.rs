use d2dl::{Color, D2dlError, FontSpec, Point, Rect, Size, WindowConfig};

#[test]
fn test_border_and_circle_layout() {
    let size = Size::new(900.0, 600.0);
    let bounds = Rect::from_xywh(0.0, 0.0, size.width, size.height);

    let border = bounds.inset(5.0);
    assert_eq!(border, Rect::new(5.0, 5.0, size.width - 5.0, size.height - 5.0));

    let center = bounds.center();
    let r = (size.width / 2.0).min(size.height / 2.0);
    let text_box = Rect::centered(center, r, r);
    assert_eq!(text_box.size(), Size::new(600.0, 600.0));
    assert!(text_box.contains(center));
    assert!(!text_box.contains(Point::new(10.0, 10.0)));
}

#[test]
fn test_resize_message_round_trip_to_pixels() {
    let size = Size::from_packed((480 << 16) | 640);
    assert_eq!(size.to_pixels(), (640, 480));
}

#[test]
fn test_config_validation_reports_invalid_config() {
    let config = WindowConfig::new(900, 600, "demo").with_font(Some(FontSpec::new("Verdana", -1.0)));
    match config.validate() {
        Err(D2dlError::InvalidConfig(msg)) => assert!(msg.contains("font size")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_colors_from_bytes_match_constants() {
    assert_eq!(Color::from_rgba8(0, 0, 255, 255), Color::BLUE);
    assert_eq!(Color::from_rgba8(255, 255, 255, 255), Color::WHITE);
}
