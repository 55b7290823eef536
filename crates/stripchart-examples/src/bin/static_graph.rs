// File: crates/stripchart-examples/src/bin/static_graph.rs
// Summary: Minimal example that renders a static line graph of a linear ramp to PNG.

use anyhow::Result;
use stripchart_core::{LineGraph, SampleSource, Surface};

/// One channel of 100 samples rising linearly from -1 to just under 1.
struct Ramp;

impl SampleSource for Ramp {
    fn channel_count(&self) -> usize { 1 }
    fn len(&self, _channel: usize) -> usize { 100 }
    fn value_at(&self, _channel: usize, index: usize) -> f64 {
        (index as f64 - 50.0) / 50.0
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut graph: LineGraph = LineGraph::new()?;
    graph.set_source(Box::new(Ramp));
    let frame = graph.draw()?;

    let out = std::path::PathBuf::from("target/out/example_static_graph.png");
    log::info!("static graph frame {}x{}", frame.width(), frame.height());
    frame.write_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
