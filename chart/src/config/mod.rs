// Chart configuration module
pub mod theme; // Palette and font defaults mirroring the frontend stylesheet

// Structures below serialize to a Chart.js v2 radar configuration object.
// Field names follow the library's camelCase JSON, hence the serde renames.
use serde::Serialize;

use self::theme::ChartPalette;

#[derive(Debug, Clone, Serialize)]
pub struct RadarChartSpec {
    #[serde(rename = "type")]
    pub chart_type: String, // always "radar"
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<RadarDataset>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarDataset {
    pub label: String,
    pub line_tension: f64,
    pub background_color: String,
    pub border_color: String,
    pub point_radius: u32,
    pub point_background_color: String,
    pub point_border_color: String,
    pub point_hover_radius: u32,
    pub point_hover_background_color: String,
    pub point_hover_border_color: String,
    pub point_hit_radius: u32,
    pub point_border_width: u32,
    pub data: Vec<f64>,
}

impl RadarDataset {
    /// An unlabeled dataset carrying `data`, styled from `palette` with the
    /// frontend's stock point styling.
    pub fn styled(palette: &ChartPalette, data: Vec<f64>) -> Self {
        RadarDataset {
            label: String::new(),
            line_tension: 0.1,
            background_color: palette.fill.clone(),
            border_color: palette.line.clone(),
            point_radius: 3,
            point_background_color: palette.point.clone(),
            point_border_color: palette.point.clone(),
            point_hover_radius: 3,
            point_hover_background_color: palette.point.clone(),
            point_hover_border_color: palette.point.clone(),
            point_hit_radius: 10,
            point_border_width: 2,
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub legend: LegendOptions,
    pub maintain_aspect_ratio: bool,
    pub layout: LayoutOptions,
    pub tooltips: TooltipOptions,
}

impl ChartOptions {
    pub fn for_palette(palette: &ChartPalette) -> Self {
        ChartOptions {
            legend: LegendOptions { display: false },
            maintain_aspect_ratio: true,
            layout: LayoutOptions {
                padding: Padding {
                    left: 5,
                    right: 5,
                    top: 5,
                    bottom: 0,
                },
            },
            tooltips: TooltipOptions {
                background_color: palette.tooltip_background.clone(),
                body_font_color: palette.tooltip_body.clone(),
                title_font_color: palette.tooltip_title.clone(),
                title_font_size: 14,
                border_color: palette.tooltip_border.clone(),
                border_width: 1,
                x_padding: 5,
                y_padding: 5,
                display_colors: false,
                intersect: false,
                mode: "index".to_string(),
                caret_padding: 5,
            },
        }
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self::for_palette(&ChartPalette::default_primary())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendOptions {
    pub display: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutOptions {
    pub padding: Padding,
}

#[derive(Debug, Clone, Serialize)]
pub struct Padding {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    pub background_color: String,
    pub body_font_color: String,
    pub title_font_color: String,
    pub title_font_size: u32,
    pub border_color: String,
    pub border_width: u32,
    pub x_padding: u32,
    pub y_padding: u32,
    pub display_colors: bool,
    pub intersect: bool,
    pub mode: String,
    pub caret_padding: u32,
}
