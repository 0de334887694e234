// Most-recent-review aroma profile.
use super::ProfileAggregator;
use serde_json::Value;
use shared::models::{AromaScores, TastingReview};

pub struct LatestProfile;

impl ProfileAggregator for LatestProfile {
    fn name(&self) -> &str {
        "Latest"
    }

    fn parameters(&self) -> Value {
        serde_json::json!({})
    }

    fn aggregate(&self, reviews: &[TastingReview]) -> Option<AromaScores> {
        // Reviews arrive sorted by timestamp, so the last one is the newest.
        reviews.last().map(|review| review.aroma)
    }
}
