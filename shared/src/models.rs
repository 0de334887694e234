use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Axis labels of the aroma radar chart, in dataset order.
/// These are the exact strings the frontend displays, accents included.
pub const AROMA_LABELS: [&str; 11] = [
    "Alcoolique",
    "Etheré",
    "Fruité",
    "Floral",
    "Houblonné",
    "Résineux",
    "Noix",
    "Herbeux",
    "Céréales",
    "Caramel",
    "Brulé",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beer {
    pub name: String,
    pub version: String,
    pub style: String,
    pub description: String,
}

/// Appearance and taste attributes of a tasting review, each 0–10.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TasteScores {
    pub mousse: f64,
    pub couleur: f64,
    pub transparence: f64,
    pub douceur: f64,
    pub amertume: f64,
    pub acidite: f64,
    pub rondeur: f64,
    pub gushing: f64,
}

/// The eleven aroma attributes plotted on the radar chart, each 0–10.
/// Field order matches [`AROMA_LABELS`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AromaScores {
    pub alcoolique: f64,
    pub ethere: f64,
    pub fruite: f64,
    pub floral: f64,
    pub houblonne: f64,
    pub resineux: f64,
    pub noix: f64,
    pub herbeux: f64,
    pub cereales: f64,
    pub caramel: f64,
    pub brule: f64,
}

impl AromaScores {
    /// Values in chart order, one per label in [`AROMA_LABELS`].
    pub fn as_points(&self) -> [f64; 11] {
        [
            self.alcoolique,
            self.ethere,
            self.fruite,
            self.floral,
            self.houblonne,
            self.resineux,
            self.noix,
            self.herbeux,
            self.cereales,
            self.caramel,
            self.brule,
        ]
    }

    /// Rebuild scores from a chart-ordered array, inverse of `as_points`.
    pub fn from_points(points: &[f64; 11]) -> Self {
        AromaScores {
            alcoolique: points[0],
            ethere: points[1],
            fruite: points[2],
            floral: points[3],
            houblonne: points[4],
            resineux: points[5],
            noix: points[6],
            herbeux: points[7],
            cereales: points[8],
            caramel: points[9],
            brule: points[10],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TastingReview {
    pub beer: String,
    pub tasted_at: DateTime<Utc>,
    pub taste: TasteScores,
    pub aroma: AromaScores,
    /// Overall score ("Note globale"), 0–10.
    pub score: f64,
}

impl TastingReview {
    /// Enforce the 0–10 range the review form imposes on every attribute.
    pub fn validate(&self) -> Result<()> {
        let taste = [
            ("mousse", self.taste.mousse),
            ("couleur", self.taste.couleur),
            ("transparence", self.taste.transparence),
            ("douceur", self.taste.douceur),
            ("amertume", self.taste.amertume),
            ("acidite", self.taste.acidite),
            ("rondeur", self.taste.rondeur),
            ("gushing", self.taste.gushing),
        ];
        for (name, value) in taste {
            check_range(name, value)?;
        }
        for (label, value) in AROMA_LABELS.iter().zip(self.aroma.as_points()) {
            check_range(label, value)?;
        }
        check_range("score", self.score)
    }
}

fn check_range(name: &str, value: f64) -> Result<()> {
    if (0.0..=10.0).contains(&value) {
        Ok(())
    } else {
        Err(anyhow!("Score '{}' out of range 0-10: {}", name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_review() -> TastingReview {
        TastingReview {
            beer: "Chouffe".to_string(),
            tasted_at: Utc::now(),
            taste: TasteScores::default(),
            aroma: AromaScores {
                alcoolique: 7.0,
                fruite: 4.0,
                ..AromaScores::default()
            },
            score: 8.0,
        }
    }

    #[test]
    fn test_points_follow_label_order() {
        let aroma = AromaScores {
            alcoolique: 1.0,
            ethere: 2.0,
            fruite: 3.0,
            floral: 4.0,
            houblonne: 5.0,
            resineux: 6.0,
            noix: 7.0,
            herbeux: 8.0,
            cereales: 9.0,
            caramel: 10.0,
            brule: 0.5,
        };
        assert_eq!(
            aroma.as_points(),
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 0.5]
        );
        assert_eq!(AROMA_LABELS.len(), aroma.as_points().len());
    }

    #[test]
    fn test_points_round_trip() {
        let aroma = sample_review().aroma;
        let rebuilt = AromaScores::from_points(&aroma.as_points());
        assert_eq!(aroma.as_points(), rebuilt.as_points());
    }

    #[test]
    fn test_validate_accepts_in_range() {
        assert!(sample_review().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut review = sample_review();
        review.aroma.caramel = 11.0;
        let err = review.validate().unwrap_err().to_string();
        assert!(err.contains("Caramel"));

        let mut review = sample_review();
        review.score = -1.0;
        assert!(review.validate().is_err());
    }
}
