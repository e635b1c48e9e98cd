// File: crates/skycast-core/src/path.rs
// Summary: Chart path builder; maps a sample series into a smooth fillable SVG curve.

use crate::sample::Series;
use crate::types::{Extent, Y_PADDING};

/// Screen position of one sample, kept for marker and label rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub label: String,
}

/// A fillable curve (SVG path `d` string) plus the per-sample marker points.
/// Recomputed from scratch on every build; carries no identity or lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathDescriptor {
    pub d: String,
    pub markers: Vec<MarkerPoint>,
}

impl PathDescriptor {
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Builds chart geometry from a series and an extent. Pure: identical inputs
/// always produce identical output, so rebuilding on every refresh or resize
/// is safe and cheap.
#[derive(Clone, Copy, Debug)]
pub struct ChartPathBuilder {
    /// Vertical padding reserved at the top and bottom of the extent.
    pub padding: f64,
}

impl Default for ChartPathBuilder {
    fn default() -> Self {
        Self { padding: Y_PADDING }
    }
}

impl ChartPathBuilder {
    pub fn new(padding: f64) -> Self {
        Self { padding }
    }

    /// Map each sample into the padded band:
    /// x spans [0, width] by index, y is inverted so higher values sit higher
    /// on screen. A zero value range flattens the curve to the band's vertical
    /// center instead of dividing by zero.
    pub fn project(&self, series: &Series, extent: Extent) -> Vec<MarkerPoint> {
        let n = series.len();
        let Some((min_v, max_v)) = series.value_range() else {
            return Vec::new();
        };
        let range = max_v - min_v;
        let band = extent.height - 2.0 * self.padding;

        series
            .samples
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let x = if n == 1 {
                    0.0
                } else {
                    i as f64 / (n - 1) as f64 * extent.width
                };
                let t = if range == 0.0 { 0.5 } else { (s.value - min_v) / range };
                let y = extent.height - self.padding - t * band;
                MarkerPoint { x, y, value: s.value, label: s.label.clone() }
            })
            .collect()
    }

    /// Build the full descriptor: a smooth curve through every sample, closed
    /// down to the bottom edge so it can be filled, plus the marker list.
    /// Empty series yields an empty descriptor.
    pub fn build(&self, series: &Series, extent: Extent) -> PathDescriptor {
        let markers = self.project(series, extent);
        if markers.is_empty() {
            return PathDescriptor::default();
        }

        let mut d = format!("M{},{}", fmt(markers[0].x), fmt(markers[0].y));
        for pair in markers.windows(2) {
            let (p1, p2) = (&pair[0], &pair[1]);
            // Horizontal-tangent smoothing: both control points at the
            // horizontal midpoint, carrying the left and right y respectively.
            let cx = p1.x + (p2.x - p1.x) / 2.0;
            d.push_str(&format!(
                " C{},{} {},{} {},{}",
                fmt(cx),
                fmt(p1.y),
                fmt(cx),
                fmt(p2.y),
                fmt(p2.x),
                fmt(p2.y)
            ));
        }

        // Close down to the bottom edge and back so the area can be filled.
        let last = &markers[markers.len() - 1];
        d.push_str(&format!(
            " L{},{} L{},{} Z",
            fmt(last.x),
            fmt(extent.height),
            fmt(markers[0].x),
            fmt(extent.height)
        ));

        PathDescriptor { d, markers }
    }
}

/// Convenience wrapper using the default padding.
pub fn graph_path(series: &Series, extent: Extent) -> PathDescriptor {
    ChartPathBuilder::default().build(series, extent)
}

/// Format a coordinate with up to two decimals, dropping trailing zeros.
fn fmt(v: f64) -> String {
    let s = format!("{v:.2}");
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}
