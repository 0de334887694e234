// Manages tasting reviews per beer, plus the beer metadata registry.
use anyhow::Result;
use chrono::{DateTime, Utc};
use shared::models::{Beer, TastingReview};
use std::collections::HashMap;

pub struct ReviewStore {
    // Reviews per beer name, kept sorted by tasting timestamp.
    reviews: HashMap<String, Vec<TastingReview>>,
    beers: HashMap<String, Beer>,
}

impl ReviewStore {
    pub fn new() -> Self {
        ReviewStore {
            reviews: HashMap::new(),
            beers: HashMap::new(),
        }
    }

    pub fn register_beer(&mut self, beer: Beer) {
        self.beers.insert(beer.name.clone(), beer);
    }

    pub fn get_beer(&self, name: &str) -> Option<&Beer> {
        self.beers.get(name)
    }

    pub fn add_reviews(&mut self, beer: &str, new_reviews: Vec<TastingReview>) -> Result<()> {
        let beer_reviews = self.reviews.entry(beer.to_string()).or_default();
        beer_reviews.extend(new_reviews);
        beer_reviews.sort_by_key(|r| r.tasted_at);
        beer_reviews.dedup_by_key(|r| r.tasted_at);
        Ok(())
    }

    pub fn get_reviews(
        &self,
        beer: &str,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Option<Vec<TastingReview>> {
        self.reviews.get(beer).map(|reviews| {
            reviews
                .iter()
                .filter(|r| from.map_or(true, |start| r.tasted_at >= start))
                .filter(|r| to.map_or(true, |end| r.tasted_at <= end))
                .cloned()
                .collect()
        })
    }

    pub fn review_count(&self, beer: &str) -> usize {
        self.reviews.get(beer).map_or(0, Vec::len)
    }

    /// Names of all beers with at least one review.
    pub fn reviewed_beers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.reviews.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ReviewStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::models::{AromaScores, TasteScores};

    fn review_at(day: u32, score: f64) -> TastingReview {
        TastingReview {
            beer: "Chouffe".to_string(),
            tasted_at: Utc.with_ymd_and_hms(2024, 12, day, 18, 0, 0).unwrap(),
            taste: TasteScores::default(),
            aroma: AromaScores::default(),
            score,
        }
    }

    #[test]
    fn test_add_reviews_sorts_and_dedups() {
        let mut store = ReviewStore::new();
        store
            .add_reviews("Chouffe", vec![review_at(3, 8.0), review_at(1, 6.0)])
            .unwrap();
        store
            .add_reviews("Chouffe", vec![review_at(2, 7.0), review_at(1, 6.0)])
            .unwrap();

        let reviews = store.get_reviews("Chouffe", None, None).unwrap();
        assert_eq!(reviews.len(), 3);
        let scores: Vec<f64> = reviews.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_get_reviews_unknown_beer() {
        let store = ReviewStore::new();
        assert!(store.get_reviews("Inconnue", None, None).is_none());
        assert_eq!(store.review_count("Inconnue"), 0);
    }

    #[test]
    fn test_get_reviews_time_window() {
        let mut store = ReviewStore::new();
        store
            .add_reviews(
                "Chouffe",
                vec![review_at(1, 6.0), review_at(2, 7.0), review_at(3, 8.0)],
            )
            .unwrap();

        let from = Utc.with_ymd_and_hms(2024, 12, 2, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 12, 2, 23, 59, 59).unwrap();
        let reviews = store.get_reviews("Chouffe", Some(from), Some(to)).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].score, 7.0);
    }

    #[test]
    fn test_beer_registry() {
        let mut store = ReviewStore::new();
        store.register_beer(Beer {
            name: "Chouffe".to_string(),
            version: "2024".to_string(),
            style: "Blonde forte".to_string(),
            description: String::new(),
        });
        assert_eq!(store.get_beer("Chouffe").unwrap().style, "Blonde forte");
        assert!(store.get_beer("Autre").is_none());
    }
}
