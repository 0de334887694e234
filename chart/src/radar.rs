// Builds the radar-chart spec for a beer's aroma profile.
use crate::config::theme::ChartPalette;
use crate::config::{ChartData, ChartOptions, RadarChartSpec, RadarDataset};
use shared::models::{AromaScores, AROMA_LABELS};
use shared::utils::locale_format;

impl RadarChartSpec {
    /// One radar chart for one aroma profile: eleven labeled axes, one
    /// unlabeled dataset. Each point is rounded to a whole number before the
    /// chart sees it, matching the server template that rounds every
    /// substituted value.
    pub fn for_profile(profile: &AromaScores, palette: &ChartPalette) -> Self {
        let points: Vec<f64> = profile
            .as_points()
            .iter()
            .map(|&v| locale_format::round_to(v, 0))
            .collect();

        RadarChartSpec {
            chart_type: "radar".to_string(),
            data: ChartData {
                labels: AROMA_LABELS.iter().map(|s| s.to_string()).collect(),
                datasets: vec![RadarDataset::styled(palette, points)],
            },
            options: ChartOptions::for_palette(palette),
        }
    }

    /// Tooltip label for a hovered point: the owning dataset's label, or ""
    /// when the dataset is unlabeled or the index is out of range.
    pub fn tooltip_label(&self, dataset_index: usize) -> &str {
        self.data
            .datasets
            .get(dataset_index)
            .map(|dataset| dataset.label.as_str())
            .unwrap_or("")
    }
}

/// Human-readable rendering of one chart value, with the conventional
/// separators.
pub fn format_point(value: f64, decimals: usize) -> String {
    locale_format::number_format_default(value, decimals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> AromaScores {
        AromaScores {
            alcoolique: 7.4,
            ethere: 2.5,
            fruite: 4.0,
            floral: 0.0,
            houblonne: 9.6,
            resineux: 1.0,
            noix: 0.0,
            herbeux: 3.0,
            cereales: 5.0,
            caramel: 6.0,
            brule: 2.0,
        }
    }

    #[test]
    fn test_spec_has_eleven_labeled_points() {
        let spec = RadarChartSpec::for_profile(&sample_profile(), &ChartPalette::default_primary());
        assert_eq!(spec.chart_type, "radar");
        assert_eq!(spec.data.labels.len(), 11);
        assert_eq!(spec.data.labels[0], "Alcoolique");
        assert_eq!(spec.data.labels[10], "Brulé");
        assert_eq!(spec.data.datasets.len(), 1);
        assert_eq!(spec.data.datasets[0].data.len(), 11);
    }

    #[test]
    fn test_points_are_rounded_to_whole_numbers() {
        let spec = RadarChartSpec::for_profile(&sample_profile(), &ChartPalette::default_primary());
        let data = &spec.data.datasets[0].data;
        assert_eq!(data[0], 7.0); // 7.4 down
        assert_eq!(data[1], 3.0); // 2.5 up, half away from zero
        assert_eq!(data[4], 10.0); // 9.6 up
        assert_eq!(data[3], 0.0);
    }

    #[test]
    fn test_serialized_spec_is_chartjs_shaped() {
        let spec = RadarChartSpec::for_profile(&sample_profile(), &ChartPalette::default_primary());
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["type"], "radar");
        assert_eq!(value["data"]["labels"][2], "Fruité");
        assert_eq!(value["data"]["datasets"][0]["pointRadius"], 3);
        assert_eq!(value["options"]["maintainAspectRatio"], true);
    }

    #[test]
    fn test_tooltip_label_of_unlabeled_dataset() {
        let spec = RadarChartSpec::for_profile(&sample_profile(), &ChartPalette::default_primary());
        assert_eq!(spec.tooltip_label(0), "");
        assert_eq!(spec.tooltip_label(99), "");

        let mut labeled = spec;
        labeled.data.datasets[0].label = "Chouffe".to_string();
        assert_eq!(labeled.tooltip_label(0), "Chouffe");
    }

    #[test]
    fn test_format_point() {
        assert_eq!(format_point(1234.5, 0), "1,235");
        assert_eq!(format_point(7.0, 2), "7.00");
    }
}
