// File: crates/stripchart-core/src/theme.rs
// Summary: Light/Dark color presets for the chart canvas, reference line, legend and channel palette.

use crate::types::Rgb;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgb,
    pub reference_line: Rgb,
    pub legend_background: Rgb,
    pub legend_text: Rgb,
    /// Default per-channel line colors, cycled when there are more channels.
    pub palette: [Rgb; 6],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgb::new(250, 250, 255),
            reference_line: Rgb::new(128, 128, 255),
            legend_background: Rgb::new(250, 250, 128),
            legend_text: Rgb::BLACK,
            palette: [
                Rgb::new(255, 0, 0),
                Rgb::new(0, 255, 0),
                Rgb::new(0, 0, 255),
                Rgb::new(255, 255, 0),
                Rgb::new(0, 255, 255),
                Rgb::new(255, 0, 255),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgb::new(18, 18, 20),
            reference_line: Rgb::new(180, 180, 190),
            legend_background: Rgb::new(40, 40, 45),
            legend_text: Rgb::new(235, 235, 245),
            palette: [
                Rgb::new(64, 160, 255),
                Rgb::new(40, 200, 120),
                Rgb::new(220, 80, 80),
                Rgb::new(255, 230, 70),
                Rgb::new(96, 220, 230),
                Rgb::new(220, 120, 255),
            ],
        }
    }

    /// Static-graph look: black frame, white center lines.
    pub fn graph() -> Self {
        Self {
            name: "graph",
            background: Rgb::BLACK,
            reference_line: Rgb::WHITE,
            legend_background: Rgb::new(40, 40, 45),
            legend_text: Rgb::WHITE,
            palette: Self::light().palette,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::graph()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
