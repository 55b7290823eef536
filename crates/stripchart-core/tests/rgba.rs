// File: crates/stripchart-core/tests/rgba.rs
// Purpose: Validate RGBA frame buffer shape and a few pixels.

use stripchart_core::{ChartEngine, Rgb, Sample};

#[test]
fn render_rgba8_buffer() {
    let mut chart: ChartEngine<1> = ChartEngine::new().expect("engine");
    chart.set_window_size(200, 100).expect("resize");
    chart.set_line_color(0, Rgb::new(0, 0, 0));
    chart.push(Sample::new(0.0, [1.0]));
    chart.push(Sample::new(2.0, [1.0]));

    let background = chart.theme().background;
    let frame = chart.draw().expect("draw");
    let (px, w, h, stride) = frame.to_rgba8();
    assert_eq!((w, h), (200, 100));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Opaque background in the top-left pixel (RGBA)
    assert_eq!(px[3], 255);
    assert_eq!(frame.pixel(100, 50 + 20), Some(background));
    assert_eq!(frame.pixel(-1, 0), None);
    assert_eq!(frame.pixel(200, 0), None);
}
