// File: crates/stripchart-core/tests/legend.rs
// Purpose: Legend layout (global font scale, width formula, row packing) and overlay lifecycle.

use stripchart_core::geometry::RectI32;
use stripchart_core::{
    AxisStyle, ChartEngine, ChartError, DrawOp, LegendBuilder, LegendOptions, RecordingSurface, Rgb, Surface,
};

fn titled_chart() -> ChartEngine<3, RecordingSurface> {
    let mut chart: ChartEngine<3, RecordingSurface> = ChartEngine::new().expect("engine");
    chart.set_axis_title(0, "position");
    chart.set_axis_title(1, "force");
    chart.set_axis_title(2, "velocity");
    chart
}

#[test]
fn three_channel_layout_packs_rows_into_the_budget() {
    let mut chart = titled_chart();
    chart.set_enable_legend(true).expect("legend");
    let layout = chart.legend_layout().expect("layout").clone();
    let o = LegendOptions::default();

    // ceil(512 * 0.1) = 52; usable = 52 - 3 * 4 = 40; reference rows 3 * (20 + 6) = 78.
    assert_eq!(layout.height, 52);
    assert!((layout.scale - 40.0 / 78.0).abs() < 1e-6);
    assert_eq!(layout.icon_size, 9);

    let max_title = layout.rows.iter().map(|r| r.extent.width).max().expect("rows");
    assert_eq!(max_title, 41);
    assert_eq!(layout.width, layout.icon_size + 2 * o.icon_padding + 2 * o.margin_x + max_title);
    assert_eq!(layout.width, 60);

    assert!(layout.content_height <= layout.height, "rows overflow: {} > {}", layout.content_height, layout.height);
    assert_eq!(layout.content_height, 51);
}

#[test]
fn rows_stack_top_to_bottom_with_swatch_then_title() {
    let mut chart = titled_chart();
    chart.set_enable_legend(true).expect("legend");
    let layout = chart.legend_layout().expect("layout");

    let tops: Vec<i32> = layout.rows.iter().map(|r| r.swatch.top).collect();
    assert_eq!(tops, vec![5, 21, 37]);
    assert_eq!(layout.rows[0].swatch, RectI32::from_ltwh(2, 5, 9, 9));
    assert_eq!(layout.rows[0].text_origin, (16, 13));
    assert_eq!(layout.rows[1].text_origin, (16, 29));

    let overlay = chart.legend().expect("overlay");
    let ops = overlay.ops();
    assert_eq!(ops[0], DrawOp::Clear(chart.theme().legend_background));
    let texts: Vec<&str> = ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["position", "force", "velocity"]);
    let swatches = ops.iter().filter(|op| matches!(op, DrawOp::FillRect { .. })).count();
    assert_eq!(swatches, 3);
}

#[test]
fn legend_is_composited_at_the_inset_and_cleared_when_disabled() {
    let mut chart = titled_chart();
    chart.set_enable_legend(true).expect("legend");
    let canvas = chart.draw().expect("draw");
    assert_eq!(canvas.ops().last(), Some(&DrawOp::Blit { left: 5, top: 5, width: 60, height: 52 }));

    chart.set_enable_legend(false).expect("disable");
    assert!(chart.legend().is_none());
    let canvas = chart.draw().expect("draw");
    assert!(!canvas.ops().iter().any(|op| matches!(op, DrawOp::Blit { .. })));
}

#[test]
fn style_changes_rebuild_the_overlay_on_next_draw() {
    let mut chart = titled_chart();
    chart.set_enable_legend(true).expect("legend");
    let before = chart.legend_layout().expect("layout").width;

    chart.set_axis_title(1, "a considerably longer title");
    chart.set_line_color(2, Rgb::new(1, 2, 3));
    chart.draw().expect("draw");

    let layout = chart.legend_layout().expect("layout");
    assert!(layout.width > before);
    let overlay = chart.legend().expect("overlay");
    assert!(overlay.ops().contains(&DrawOp::FillRect { rect: layout.rows[2].swatch, color: Rgb::new(1, 2, 3) }));
}

#[test]
fn resizing_relays_out_the_legend() {
    let mut chart = titled_chart();
    chart.set_enable_legend(true).expect("legend");
    chart.set_window_size(800, 1000).expect("resize");
    assert_eq!(chart.legend_layout().map(|l| l.height), Some(100));
}

#[test]
fn too_short_canvas_is_rejected_and_leaves_legend_off() {
    let mut chart = titled_chart();
    chart.set_window_size(300, 40).expect("resize");
    let err = chart.set_enable_legend(true).expect_err("4px legend cannot hold 3 rows");
    assert!(matches!(err, ChartError::LegendTooSmall { canvas_height: 40 }));
    assert!(chart.legend().is_none());
}

#[test]
fn shrinking_below_the_legend_budget_still_resizes() {
    let mut chart = titled_chart();
    chart.set_enable_legend(true).expect("legend");
    chart.set_window_size(300, 40).expect("resize");
    assert_eq!((chart.canvas().width(), chart.canvas().height()), (300, 40));
    assert!(chart.legend().is_none());
    assert!(chart.is_dirty());

    let canvas = chart.draw().expect("draw");
    assert!(!canvas.ops().iter().any(|op| matches!(op, DrawOp::Blit { .. })));
}

#[test]
fn sub_pixel_font_scale_is_rejected() {
    let measure = RecordingSurface::allocate(512, 512).expect("surface");
    // 12 rows: usable = 52 - 3 * 13 = 13, scale = 13 / 312, below one pixel at 22px base.
    let styles: Vec<AxisStyle> = (0..12).map(|i| AxisStyle::new(Rgb::BLACK, format!("axis: {i}"))).collect();
    let err = LegendBuilder::default().layout(&styles, 512, &measure).expect_err("font under 1px");
    assert!(matches!(err, ChartError::LegendTooSmall { canvas_height: 512 }));

    // 10 rows still fit: scale = 19 / 260.
    let layout = LegendBuilder::default().layout(&styles[..10], 512, &measure).expect("ten rows");
    assert!(layout.content_height <= layout.height);
}

#[test]
fn zero_channels_have_no_legend() {
    let measure = RecordingSurface::allocate(100, 100).expect("surface");
    let styles: Vec<AxisStyle> = Vec::new();
    let err = LegendBuilder::default().layout(&styles, 100, &measure).expect_err("no channels");
    assert!(matches!(err, ChartError::NoChannels));
}
