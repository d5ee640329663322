//! Learning-curve chart export
//!
//! Renders the session trend as a standalone SVG line chart: session number
//! on x, success rate on a fixed 0-100% y axis.

use crate::error::{ReportError, Result};
use mathlog_stats::SessionTrend;
use std::path::Path;

/// Chart geometry and labels
#[derive(Clone, Debug, PartialEq)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub line_color: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 480,
            title: "Learning Curve: Success Rate Evolution Over Sessions".to_string(),
            x_label: "Session Number".to_string(),
            y_label: "Success Rate (%)".to_string(),
            line_color: "#2ecc71".to_string(),
        }
    }
}

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// Maps data coordinates into the plot area
struct Frame {
    x_min: f64,
    x_max: f64,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Frame {
    fn new(trend: &SessionTrend, style: &ChartStyle) -> Self {
        let sessions = trend.sessions();
        let (x_min, x_max) = match (sessions.first(), sessions.last()) {
            (Some(&first), Some(&last)) if first != last => (first as f64, last as f64),
            (Some(&only), _) => (only as f64 - 1.0, only as f64 + 1.0),
            _ => (0.0, 1.0),
        };

        Self {
            x_min,
            x_max,
            left: MARGIN_LEFT,
            right: style.width as f64 - MARGIN_RIGHT,
            top: MARGIN_TOP,
            bottom: style.height as f64 - MARGIN_BOTTOM,
        }
    }

    fn x(&self, session: f64) -> f64 {
        self.left + (session - self.x_min) / (self.x_max - self.x_min) * (self.right - self.left)
    }

    /// y axis is pinned to 0-100
    fn y(&self, rate: f64) -> f64 {
        self.bottom - rate.clamp(0.0, 100.0) / 100.0 * (self.bottom - self.top)
    }
}

/// Render the trend as an SVG document
pub fn learning_curve_svg(trend: &SessionTrend, style: &ChartStyle) -> String {
    let frame = Frame::new(trend, style);
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n\
         <rect width=\"{w}\" height=\"{h}\" fill=\"white\"/>\n",
        w = style.width,
        h = style.height,
    );

    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"28\" text-anchor=\"middle\" font-size=\"16\" font-weight=\"bold\">{}</text>\n",
        style.width as f64 / 2.0,
        escape(&style.title)
    ));

    // Horizontal grid with y tick labels
    for tick in (0..=100).step_by(20) {
        let y = frame.y(tick as f64);
        svg.push_str(&format!(
            "<line x1=\"{:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"#e5e5e5\"/>\n\
             <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"11\">{}</text>\n",
            frame.left,
            frame.right,
            frame.left - 8.0,
            y + 4.0,
            tick,
        ));
    }

    // x tick per session present
    for session in trend.sessions() {
        let x = frame.x(session as f64);
        svg.push_str(&format!(
            "<text x=\"{x:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"11\">{}</text>\n",
            frame.bottom + 18.0,
            session
        ));
    }

    svg.push_str(&format!(
        "<line x1=\"{l:.1}\" y1=\"{b:.1}\" x2=\"{r:.1}\" y2=\"{b:.1}\" stroke=\"black\"/>\n\
         <line x1=\"{l:.1}\" y1=\"{t:.1}\" x2=\"{l:.1}\" y2=\"{b:.1}\" stroke=\"black\"/>\n",
        l = frame.left,
        r = frame.right,
        t = frame.top,
        b = frame.bottom,
    ));

    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"13\">{}</text>\n",
        (frame.left + frame.right) / 2.0,
        style.height as f64 - 15.0,
        escape(&style.x_label)
    ));
    svg.push_str(&format!(
        "<text transform=\"translate(20 {:.1}) rotate(-90)\" text-anchor=\"middle\" font-size=\"13\">{}</text>\n",
        (frame.top + frame.bottom) / 2.0,
        escape(&style.y_label)
    ));

    let coords: Vec<(f64, f64)> = trend
        .points
        .iter()
        .map(|p| (frame.x(p.session as f64), frame.y(p.success_rate)))
        .collect();

    if !coords.is_empty() {
        let path: Vec<String> = coords
            .iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
            .collect();
        svg.push_str(&format!(
            "<polyline fill=\"none\" stroke=\"{}\" stroke-width=\"2.5\" points=\"{}\"/>\n",
            style.line_color,
            path.join(" ")
        ));
        for (x, y) in &coords {
            svg.push_str(&format!(
                "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"4\" fill=\"{}\"/>\n",
                x, y, style.line_color
            ));
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Write the learning-curve SVG to `path`
pub fn write_learning_curve(trend: &SessionTrend, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let svg = learning_curve_svg(trend, &ChartStyle::default());
    std::fs::write(path, svg).map_err(|source| ReportError::Chart {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), points = trend.len(), "Wrote learning curve");
    Ok(())
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
