// Arithmetic-mean aroma profile across a beer's reviews.
use super::ProfileAggregator;
use serde_json::Value;
use shared::models::{AromaScores, TastingReview};

pub struct MeanProfile {
    name: String,
    // Only the most recent `window` reviews contribute; None means all.
    window: Option<usize>,
}

impl MeanProfile {
    pub fn new() -> Self {
        Self {
            name: "Mean".to_string(),
            window: None,
        }
    }

    pub fn with_window(window: usize) -> Self {
        if window == 0 {
            // Or return Result<Self, Error>
            panic!("Mean window must be greater than 0");
        }
        Self {
            name: format!("Mean({})", window),
            window: Some(window),
        }
    }
}

impl Default for MeanProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileAggregator for MeanProfile {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "window": self.window })
    }

    fn aggregate(&self, reviews: &[TastingReview]) -> Option<AromaScores> {
        if reviews.is_empty() {
            return None;
        }
        let window = self.window.unwrap_or(reviews.len()).min(reviews.len());
        let recent = &reviews[reviews.len() - window..];

        let mut sums = [0.0f64; 11];
        for review in recent {
            for (sum, value) in sums.iter_mut().zip(review.aroma.as_points()) {
                *sum += value;
            }
        }
        for sum in &mut sums {
            *sum /= window as f64;
        }
        Some(AromaScores::from_points(&sums))
    }
}
