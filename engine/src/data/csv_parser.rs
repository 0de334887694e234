use anyhow::{anyhow, Result};
use csv::{ReaderBuilder, StringRecord};
use shared::models::{AromaScores, TasteScores, TastingReview};
use shared::utils::locale_format;
use std::fs::File;
use std::io::BufReader;
use tracing::warn;

// French date/time handling for review exports.
pub mod french_format {
    use anyhow::{anyhow, Result};
    use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

    // Parses date "dd/mm/yyyy" and time "HH:MM:SS" into DateTime<Utc>
    pub fn parse_datetime(date_str: &str, time_str: &str) -> Result<DateTime<Utc>> {
        let date = NaiveDate::parse_from_str(date_str, "%d/%m/%Y")
            .map_err(|e| anyhow!("Failed to parse date '{}': {}", date_str, e))?;
        let time = NaiveTime::parse_from_str(time_str, "%H:%M:%S")
            .map_err(|e| anyhow!("Failed to parse time '{}': {}", time_str, e))?;

        // Combine date and time; export timestamps are taken as UTC.
        Ok(DateTime::from_naive_utc_and_offset(date.and_time(time), Utc))
    }

}

pub struct ReviewCsvParser;

impl ReviewCsvParser {
    // CSV header: Bière;Date;Heure;Mousse;Couleur;Transparence;Douceur;Amertume;
    //             Acidité;Rondeur;Surmoussage;Alcoolique;Etheré;Fruité;Floral;
    //             Houblonné;Résineux;Noix;Herbeux;Céréales;Caramel;Brulé;Note
    // Example row: Chouffe;30/12/2024;18:20:00;7;5;3;6;4;2;5;1;7;3;4;2;6;1;0;2;3;4;1;8
    pub fn load_reviews_from_csv(
        file_path: &str,
        default_beer: &str,
        delimiter: char,
    ) -> Result<Vec<TastingReview>> {
        let file = File::open(file_path)
            .map_err(|e| anyhow!("Failed to open CSV file '{}': {}", file_path, e))?;
        let mut rdr = ReaderBuilder::new()
            .delimiter(delimiter as u8)
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let headers = rdr.headers()?.clone();
        let mut reviews = Vec::new();

        for (idx, result) in rdr.records().enumerate() {
            let line = idx + 2; // 1-based, after the header row
            let record =
                result.map_err(|e| anyhow!("Error reading CSV record at line {}: {}", line, e))?;

            let beer = Self::get_field(&record, &headers, "Bière")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(default_beer);
            let date_str = Self::get_field(&record, &headers, "Date")
                .ok_or_else(|| anyhow!("Missing 'Date' field in CSV record at line {}", line))?;
            let time_str = Self::get_field(&record, &headers, "Heure")
                .ok_or_else(|| anyhow!("Missing 'Heure' field in CSV record at line {}", line))?;

            let tasted_at = french_format::parse_datetime(date_str, time_str)
                .map_err(|e| anyhow!("Error parsing datetime at line {}: {}", line, e))?;

            let taste = TasteScores {
                mousse: Self::score_field(&record, &headers, "Mousse", line),
                couleur: Self::score_field(&record, &headers, "Couleur", line),
                transparence: Self::score_field(&record, &headers, "Transparence", line),
                douceur: Self::score_field(&record, &headers, "Douceur", line),
                amertume: Self::score_field(&record, &headers, "Amertume", line),
                acidite: Self::score_field(&record, &headers, "Acidité", line),
                rondeur: Self::score_field(&record, &headers, "Rondeur", line),
                gushing: Self::score_field(&record, &headers, "Surmoussage", line),
            };

            let aroma = AromaScores {
                alcoolique: Self::score_field(&record, &headers, "Alcoolique", line),
                ethere: Self::score_field(&record, &headers, "Etheré", line),
                fruite: Self::score_field(&record, &headers, "Fruité", line),
                floral: Self::score_field(&record, &headers, "Floral", line),
                houblonne: Self::score_field(&record, &headers, "Houblonné", line),
                resineux: Self::score_field(&record, &headers, "Résineux", line),
                noix: Self::score_field(&record, &headers, "Noix", line),
                herbeux: Self::score_field(&record, &headers, "Herbeux", line),
                cereales: Self::score_field(&record, &headers, "Céréales", line),
                caramel: Self::score_field(&record, &headers, "Caramel", line),
                brule: Self::score_field(&record, &headers, "Brulé", line),
            };

            let score = Self::score_field(&record, &headers, "Note", line);

            let review = TastingReview {
                beer: beer.to_string(),
                tasted_at,
                taste,
                aroma,
                score,
            };
            review
                .validate()
                .map_err(|e| anyhow!("Invalid review at line {}: {}", line, e))?;
            reviews.push(review);
        }
        Ok(reviews)
    }

    // Score cells are display values: a blank or unparsable cell degrades to
    // zero (every score on the review form is optional). Structural fields
    // (dates, headers) stay strict and fail loudly above.
    fn score_field(record: &StringRecord, headers: &StringRecord, name: &str, line: usize) -> f64 {
        match Self::get_field(record, headers, name) {
            Some(text) => {
                let parsed = locale_format::parse_lenient(text);
                if parsed.is_fallback() && !text.trim().is_empty() {
                    warn!(
                        field = name,
                        value = text,
                        line,
                        "Unparsable score cell, defaulting to 0"
                    );
                }
                parsed.as_f64()
            }
            None => 0.0,
        }
    }

    // Helper to get a field by header name; robust to column reordering.
    fn get_field<'a>(
        record: &'a StringRecord,
        headers: &StringRecord,
        name: &str,
    ) -> Option<&'a str> {
        headers
            .iter()
            .position(|header| header == name)
            .and_then(|pos| record.get(pos))
    }
}
