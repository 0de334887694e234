// Chart binary entry point: turn a CSV of tasting reviews into the radar
// chart configuration the frontend consumes.
use anyhow::{anyhow, Result};
use chart::config::theme::ChartPalette;
use chart::config::RadarChartSpec;
use engine::aggregate::MeanProfile;
use engine::config::EngineSettings;
use engine::services::ReviewService;
use tracing::info;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let usage = "Usage: chart <reviews.csv> <beer-name>";
    let csv_path = args.next().ok_or_else(|| anyhow!(usage))?;
    let beer = args.next().ok_or_else(|| anyhow!(usage))?;

    let mut service = ReviewService::new(EngineSettings::default());
    let count = service.load_reviews_from_csv(&csv_path, &beer)?;
    info!(beer = %beer, count, "Reviews loaded");

    let profile = service.aroma_profile(&beer, &MeanProfile::new())?;
    let spec = RadarChartSpec::for_profile(&profile, &ChartPalette::default_primary());
    println!("{}", serde_json::to_string_pretty(&spec)?);

    if let Some(score) = service.mean_overall_score(&beer) {
        info!(
            beer = %beer,
            "Note globale moyenne : {}",
            service.settings().format_score(score)
        );
    }

    Ok(())
}
