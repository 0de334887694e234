// Orchestrates CSV ingestion, the review store and profile aggregation.
use crate::aggregate::ProfileAggregator;
use crate::config::EngineSettings;
use crate::data::csv_parser::ReviewCsvParser;
use crate::data::review_store::ReviewStore;
use crate::error::EngineError;
use shared::models::{AromaScores, Beer, TastingReview};
use std::collections::HashMap;
use tracing::info;

pub struct ReviewService {
    settings: EngineSettings,
    store: ReviewStore,
}

impl ReviewService {
    pub fn new(settings: EngineSettings) -> Self {
        ReviewService {
            settings,
            store: ReviewStore::new(),
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Parse a review CSV and merge its rows into the store. A file may mix
    /// several beers; rows with a blank beer cell fall back to `default_beer`.
    /// Returns the number of reviews loaded.
    pub fn load_reviews_from_csv(
        &mut self,
        file_path: &str,
        default_beer: &str,
    ) -> Result<usize, EngineError> {
        let reviews = ReviewCsvParser::load_reviews_from_csv(
            file_path,
            default_beer,
            self.settings.csv_delimiter,
        )?;
        let count = reviews.len();

        let mut by_beer: HashMap<String, Vec<TastingReview>> = HashMap::new();
        for review in reviews {
            by_beer.entry(review.beer.clone()).or_default().push(review);
        }
        for (beer, beer_reviews) in by_beer {
            self.store
                .add_reviews(&beer, beer_reviews)
                .map_err(|e| EngineError::ReviewStoreError(e.to_string()))?;
        }

        info!(path = file_path, count, "Loaded tasting reviews");
        Ok(count)
    }

    pub fn register_beer(&mut self, beer: Beer) {
        self.store.register_beer(beer);
    }

    pub fn reviews(&self, beer: &str) -> Option<Vec<TastingReview>> {
        self.store.get_reviews(beer, None, None)
    }

    pub fn review_count(&self, beer: &str) -> usize {
        self.store.review_count(beer)
    }

    /// Aggregate a beer's reviews into one aroma profile.
    pub fn aroma_profile(
        &self,
        beer: &str,
        aggregator: &dyn ProfileAggregator,
    ) -> Result<AromaScores, EngineError> {
        let reviews = self
            .store
            .get_reviews(beer, None, None)
            .ok_or_else(|| EngineError::ReviewStoreError(format!("No reviews for beer '{}'", beer)))?;
        aggregator.aggregate(&reviews).ok_or_else(|| {
            EngineError::AggregationError(format!(
                "{} produced no profile for beer '{}'",
                aggregator.name(),
                beer
            ))
        })
    }

    /// Mean of the overall scores ("Note globale") across a beer's reviews.
    pub fn mean_overall_score(&self, beer: &str) -> Option<f64> {
        let reviews = self.store.get_reviews(beer, None, None)?;
        if reviews.is_empty() {
            return None;
        }
        let sum: f64 = reviews.iter().map(|r| r.score).sum();
        Some(sum / reviews.len() as f64)
    }
}

impl Default for ReviewService {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}
