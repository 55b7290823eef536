// File: crates/stripchart-examples/src/bin/scrolling.rs
// Summary: Live-feed style example: pushes a 3-channel sine sweep and writes every Nth frame to PNG.
// Usage: example-scrolling [frames] [every] [theme]

use std::time::Instant;

use anyhow::{Context, Result};
use stripchart_core::{theme, ChartEngine, ChartOptions, Rgb, Sample};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let frames: usize = args.next().map(|s| s.parse()).transpose().context("frames must be a number")?.unwrap_or(3000);
    let every: usize = args.next().map(|s| s.parse()).transpose().context("every must be a number")?.unwrap_or(500);
    let theme = theme::find(&args.next().unwrap_or_else(|| "light".to_string()));

    let opts = ChartOptions { width: 1920, height: 1080, theme, ..ChartOptions::default() };
    let mut chart: ChartEngine<3> = ChartEngine::with_options(opts)?;
    chart.set_line_color(0, Rgb::new(255, 0, 0));
    chart.set_line_color(1, Rgb::new(0, 255, 0));
    chart.set_line_color(2, Rgb::new(0, 0, 255));
    chart.set_x_range(0.0, 2.0)?;
    chart.set_axis_title(0, "position");
    chart.set_axis_title(1, "force");
    chart.set_axis_title(2, "velocity");
    chart.set_enable_legend(true).context("legend does not fit the canvas")?;

    let out_dir = std::path::PathBuf::from("target/out/scrolling");
    std::fs::create_dir_all(&out_dir)?;

    for index in 0..frames {
        let t = index as f64 * 0.002;
        let tau = std::f64::consts::TAU;
        let position = (2.0 * tau * t).sin();
        let force = 0.5 * (1.5 * tau * t).sin();
        let velocity = 0.8 * (0.8 * tau * t).sin();
        chart.push(Sample::at(t).with_values([position, force, velocity]));

        let start = Instant::now();
        let frame = chart.draw()?;
        log::info!("frame {index}: draw {} us", start.elapsed().as_micros());

        if index % every.max(1) == 0 {
            let out = out_dir.join(format!("frame_{index:05}.png"));
            frame.write_png(&out).with_context(|| format!("writing {}", out.display()))?;
            println!("Wrote {}", out.display());
        }
    }
    Ok(())
}
