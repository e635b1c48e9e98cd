// File: crates/skycast-render-svg/src/lib.rs
// Summary: SVG surface; assembles a standalone dashboard document from render output.

use skycast_core::path::PathDescriptor;
use skycast_core::surface::{DashboardSurface, TextRegion};
use skycast_core::types::Extent;
use skycast_core::view::{DailyCard, HourlyDetail, SuggestionRow};
use skycast_core::RenderError;

const MARGIN: f64 = 16.0;
const LINE_HEIGHT: f64 = 18.0;
const MARKER_RADIUS: f64 = 4.0;

/// Collects one render pass worth of writes and serializes them as a single
/// SVG document. Each render starts from a fresh document (or a `clear`),
/// mirroring the clear-and-rebuild contract of the surface trait.
#[derive(Clone, Debug, Default)]
pub struct SvgDocument {
    texts: Vec<(&'static str, String)>,
    icon_class: Option<String>,
    daily: Vec<DailyCard>,
    hourly_labels: Vec<String>,
    hourly_details: Vec<HourlyDetail>,
    suggestions: Vec<SuggestionRow>,
    chart: Option<(PathDescriptor, Extent)>,
}

impl SvgDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all collected content, keeping the document reusable across
    /// renders without reallocation of the struct itself.
    pub fn clear(&mut self) {
        self.texts.clear();
        self.icon_class = None;
        self.daily.clear();
        self.hourly_labels.clear();
        self.hourly_details.clear();
        self.suggestions.clear();
        self.chart = None;
    }

    pub fn chart(&self) -> Option<&PathDescriptor> {
        self.chart.as_ref().map(|(p, _)| p)
    }

    pub fn text(&self, region: TextRegion) -> Option<&str> {
        let id = region.id();
        self.texts
            .iter()
            .find(|(k, _)| *k == id)
            .map(|(_, v)| v.as_str())
    }

    /// Serialize everything collected so far into a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let chart_extent = self
            .chart
            .as_ref()
            .map(|(_, e)| *e)
            .unwrap_or_default();

        // Text column on the left, chart underneath.
        let text_rows = self.texts.len()
            + self.daily.len()
            + self.hourly_details.len()
            + self.suggestions.len()
            + 1; // icon line
        let text_height = MARGIN + text_rows as f64 * LINE_HEIGHT + MARGIN;
        let doc_width = chart_extent.width.max(480.0) + 2.0 * MARGIN;
        let doc_height = text_height + chart_extent.height + LINE_HEIGHT + MARGIN;

        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {doc_width} {doc_height}\" \
             font-family=\"sans-serif\" font-size=\"12\">\n"
        ));

        let mut y = MARGIN + LINE_HEIGHT;
        out.push_str("  <g class=\"regions\">\n");
        for (id, value) in &self.texts {
            out.push_str(&format!(
                "    <text id=\"{id}\" x=\"{MARGIN}\" y=\"{y}\">{}</text>\n",
                escape(value)
            ));
            y += LINE_HEIGHT;
        }
        if let Some(class) = &self.icon_class {
            out.push_str(&format!(
                "    <text id=\"current-weather-icon\" class=\"{}\" x=\"{MARGIN}\" y=\"{y}\"/>\n",
                escape(class)
            ));
            y += LINE_HEIGHT;
        }
        out.push_str("  </g>\n");

        out.push_str("  <g class=\"daily-forecast\">\n");
        for card in &self.daily {
            out.push_str(&format!(
                "    <text class=\"{}\" x=\"{MARGIN}\" y=\"{y}\">{} {} / {}</text>\n",
                escape(&card.icon_class),
                escape(&card.day),
                escape(&card.high),
                escape(&card.low)
            ));
            y += LINE_HEIGHT;
        }
        out.push_str("  </g>\n");

        out.push_str("  <g class=\"hourly-details\">\n");
        for (i, detail) in self.hourly_details.iter().enumerate() {
            let label = self.hourly_labels.get(i).map(String::as_str).unwrap_or("");
            out.push_str(&format!(
                "    <text x=\"{MARGIN}\" y=\"{y}\">{} {} {}</text>\n",
                escape(label),
                escape(&detail.temp),
                escape(&detail.precip)
            ));
            y += LINE_HEIGHT;
        }
        out.push_str("  </g>\n");

        out.push_str("  <g class=\"suggestions\">\n");
        for row in &self.suggestions {
            out.push_str(&format!(
                "    <text class=\"{}\" x=\"{MARGIN}\" y=\"{y}\">{}: {}</text>\n",
                escape(&row.icon_class),
                escape(&row.title),
                escape(&row.description)
            ));
            y += LINE_HEIGHT;
        }
        out.push_str("  </g>\n");

        if let Some((path, extent)) = &self.chart {
            if !path.is_empty() {
                out.push_str(&format!(
                    "  <g class=\"hourly-graph\" transform=\"translate({MARGIN},{text_height})\">\n"
                ));
                out.push_str(&format!(
                    "    <path class=\"graph-area\" d=\"{}\" fill=\"#bee3f8\" stroke=\"#3182ce\" \
                     stroke-width=\"2\"/>\n",
                    path.d
                ));
                for m in &path.markers {
                    out.push_str(&format!(
                        "    <circle class=\"graph-point\" cx=\"{}\" cy=\"{}\" r=\"{MARKER_RADIUS}\"/>\n",
                        m.x, m.y
                    ));
                    // Value label above the marker.
                    out.push_str(&format!(
                        "    <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"#2d3748\" \
                         font-size=\"10\" font-weight=\"bold\">{}°</text>\n",
                        m.x,
                        m.y - 10.0,
                        m.value
                    ));
                    // Hour label along the bottom edge.
                    out.push_str(&format!(
                        "    <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"#718096\">{}</text>\n",
                        m.x,
                        extent.height + LINE_HEIGHT - 4.0,
                        escape(&m.label)
                    ));
                }
                out.push_str("  </g>\n");
            }
        }

        out.push_str("</svg>\n");
        out
    }

    /// Write the document to disk, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_svg())?;
        Ok(())
    }
}

impl DashboardSurface for SvgDocument {
    fn write_text(&mut self, region: TextRegion, text: &str) -> Result<(), RenderError> {
        let id = region.id();
        self.texts.retain(|(k, _)| *k != id);
        self.texts.push((id, text.to_string()));
        Ok(())
    }

    fn write_current_icon(&mut self, class: &str) -> Result<(), RenderError> {
        self.icon_class = Some(class.to_string());
        Ok(())
    }

    fn write_daily(&mut self, cards: &[DailyCard]) -> Result<(), RenderError> {
        self.daily = cards.to_vec();
        Ok(())
    }

    fn write_hourly_labels(&mut self, labels: &[String]) -> Result<(), RenderError> {
        self.hourly_labels = labels.to_vec();
        Ok(())
    }

    fn write_hourly_details(&mut self, details: &[HourlyDetail]) -> Result<(), RenderError> {
        self.hourly_details = details.to_vec();
        Ok(())
    }

    fn write_suggestions(&mut self, rows: &[SuggestionRow]) -> Result<(), RenderError> {
        self.suggestions = rows.to_vec();
        Ok(())
    }

    fn set_chart(&mut self, path: &PathDescriptor, extent: Extent) -> Result<(), RenderError> {
        self.chart = Some((path.clone(), extent));
        Ok(())
    }
}

/// Minimal XML text escaping for element content and attribute values.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
