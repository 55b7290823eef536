// File: crates/stripchart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic scrolling chart (no legend, so no font variance) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else the golden compare is opt-in: no checked-in snapshot yet, so it only
//   asserts that two renders are pixel-identical, then notes how to bless.

use stripchart_core::{ChartEngine, Rgb, Sample};

fn render_bytes() -> Vec<u8> {
    let mut chart: ChartEngine<3> = ChartEngine::new().expect("engine");
    chart.set_window_size(256, 160).expect("resize");
    chart.set_line_color(0, Rgb::new(255, 0, 0));
    chart.set_line_color(1, Rgb::new(0, 160, 0));
    chart.set_line_color(2, Rgb::new(0, 0, 255));
    // 2.5 windows of data: exercises eviction and the left-edge cut.
    for i in 0..=250 {
        let t = i as f64 * 0.02;
        chart.push(Sample::new(t, [(2.0 * t).sin(), 0.5 * (1.5 * t).sin(), 1.4 * (0.8 * t).cos()]));
    }
    chart.draw().expect("draw").encode_png().expect("encode png")
}

#[test]
fn golden_scrolling_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("scrolling_chart.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        assert_eq!(bytes, render_bytes(), "rendering is not deterministic");
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn encoded_png_decodes_to_frame_pixels() {
    let bytes = render_bytes();
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (256, 160));
    let corner = img.get_pixel(0, 0);
    assert_eq!(corner.0[3], 255);
}
