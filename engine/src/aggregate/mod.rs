// Profile aggregation: collapse a beer's reviews into one aroma profile.
pub mod latest;
pub mod mean;

use serde_json::Value;
use shared::models::{AromaScores, TastingReview};

pub use latest::LatestProfile;
pub use mean::MeanProfile;

// Common trait for all aggregators. `reviews` is expected sorted by
// tasting timestamp, which is how the store hands them out.
pub trait ProfileAggregator: Send + Sync {
    fn name(&self) -> &str;
    fn parameters(&self) -> Value; // Parameters used for this aggregator instance
    fn aggregate(&self, reviews: &[TastingReview]) -> Option<AromaScores>; // None when no profile can be produced
}
