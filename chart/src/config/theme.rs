// Theme specific configurations (colors, fonts)
use serde::{Deserialize, Serialize};

/// Chart.js global font defaults the frontend applies before any chart is
/// configured.
pub const DEFAULT_FONT_FAMILY: &str = "Nunito";
pub const DEFAULT_FONT_FALLBACK: &str =
    "-apple-system,system-ui,BlinkMacSystemFont,\"Segoe UI\",Roboto,\"Helvetica Neue\",Arial,sans-serif";
pub const DEFAULT_FONT_COLOR: &str = "#858796";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPalette {
    /// Translucent area fill inside the radar outline.
    pub fill: String,
    /// Radar outline color.
    pub line: String,
    /// Data point fill and border color.
    pub point: String,
    pub tooltip_background: String,
    pub tooltip_body: String,
    pub tooltip_title: String,
    pub tooltip_border: String,
}

impl ChartPalette {
    /// The frontend's primary blue, as shipped in its stylesheet.
    pub fn default_primary() -> Self {
        Self {
            fill: "rgba(78, 115, 223, 0.05)".to_string(),
            line: "rgba(78, 115, 223, 1)".to_string(),
            point: "rgba(78, 115, 223, 1)".to_string(),
            tooltip_background: "rgb(255,255,255)".to_string(),
            tooltip_body: "#858796".to_string(),
            tooltip_title: "#6e707e".to_string(),
            tooltip_border: "#dddfeb".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_palette_matches_frontend_stylesheet() {
        let palette = ChartPalette::default_primary();
        assert_eq!(palette.fill, "rgba(78, 115, 223, 0.05)");
        assert_eq!(palette.line, palette.point);
        assert_eq!(palette.tooltip_body, DEFAULT_FONT_COLOR);
    }
}
