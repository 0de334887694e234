// Engine settings: CSV dialect and display-formatting conventions,
// potentially loaded from a config file.
use serde::Deserialize;
use shared::utils::locale_format;

#[derive(Debug, Deserialize, Clone)]
pub struct EngineSettings {
    /// Field delimiter of review CSV exports.
    pub csv_delimiter: char,
    /// Decimal marker for displayed numbers.
    pub decimal_separator: String,
    /// Grouping separator for displayed numbers. Empty disables grouping.
    pub thousand_separator: String,
    /// Fractional digits shown for scores.
    pub display_precision: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        // French display conventions: "1 234,56".
        EngineSettings {
            csv_delimiter: ';',
            decimal_separator: ",".to_string(),
            thousand_separator: " ".to_string(),
            display_precision: 2,
        }
    }
}

impl EngineSettings {
    /// Render a score with the configured separators and precision.
    pub fn format_score(&self, value: f64) -> String {
        locale_format::number_format(
            value,
            self.display_precision,
            &self.decimal_separator,
            &self.thousand_separator,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_format_french_style() {
        let settings = EngineSettings::default();
        assert_eq!(settings.format_score(7.5), "7,50");
        assert_eq!(settings.format_score(1234.56), "1 234,56");
    }

    #[test]
    fn test_custom_precision_and_separators() {
        let settings = EngineSettings {
            decimal_separator: ".".to_string(),
            thousand_separator: ",".to_string(),
            display_precision: 0,
            ..EngineSettings::default()
        };
        assert_eq!(settings.format_score(1234.5), "1,235");
    }
}
