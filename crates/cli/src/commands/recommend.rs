use clap::Args;
use outfitter_core::config::{AppConfig, LoadOptions};
use outfitter_core::{
    assess, AdviceCategory, Advisory, ApplicationError, Observation, Recommendation, Selection,
    TemperatureBand,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::commands::CommandResult;
use crate::input;
use crate::logging;
use crate::render::{self, Palette};

#[derive(Debug, Clone, Args)]
pub struct RecommendArgs {
    #[arg(long, help = "City the observation is for (blank uses the configured default)")]
    pub city: String,
    #[arg(long, allow_negative_numbers = true, help = "Temperature in °C, -50.0 to 50.0")]
    pub temperature: f64,
    #[arg(long, default_value = "", help = "Free-text condition, e.g. \"light rain\"")]
    pub condition: String,
    #[arg(long, default_value_t = 1, help = "Outfit pick, 1-3")]
    pub outfit: usize,
    #[arg(long, default_value_t = 1, help = "Accessory pick, 1-5")]
    pub accessory: usize,
    #[arg(long, default_value_t = 1, help = "Footwear pick, 1-5")]
    pub shoe: usize,
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RecommendReport<'a> {
    observation: &'a Observation,
    band: TemperatureBand,
    tips: &'static [&'static str; 3],
    advice: AdviceCategory,
    advisory: &'static Advisory,
    recommendation: &'a Recommendation,
}

/// One non-interactive cycle: validate, classify, pick, report.
pub fn run(options: LoadOptions, args: RecommendArgs) -> CommandResult {
    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => return failure(error.into()),
    };
    if let Err(error) = logging::init(&config) {
        eprintln!("{error:#}");
    }

    let temperature_c = match input::check_temperature(args.temperature) {
        Ok(value) => value,
        Err(error) => {
            warn!(
                event_name = "outfitter.command.recommend_rejected",
                temperature_c = args.temperature,
                "temperature outside accepted range"
            );
            return failure(error.into());
        }
    };
    let city = input::resolve_city(&args.city, None, &config.session.default_city).into_value();
    let condition =
        input::resolve_condition(&args.condition, &config.session.default_condition).into_value();
    let observation = Observation::new(city, temperature_c, condition);

    let assessment = assess(&observation);
    let selection = Selection::new(args.outfit, args.accessory, args.shoe);
    let recommendation = match assessment.catalogs().recommend(selection) {
        Ok(recommendation) => recommendation,
        Err(error) => return failure(error.into()),
    };
    info!(
        event_name = "outfitter.command.recommended",
        band = %assessment.band,
        advice = %assessment.advice,
        title = recommendation.title.as_str(),
        "recommendation built"
    );

    if args.json {
        let report = RecommendReport {
            observation: &observation,
            band: assessment.band,
            tips: assessment.band.tips(),
            advice: assessment.advice,
            advisory: assessment.advice.advisory(),
            recommendation: &recommendation,
        };
        return match serde_json::to_value(&report) {
            Ok(data) => CommandResult::success_with_data(
                "recommend",
                format!("{} for {}", recommendation.title, observation.city()),
                data,
            ),
            Err(error) => CommandResult::failure("recommend", "serialization", error.to_string(), 3),
        };
    }

    let palette = Palette::new(config.session.color);
    let rendered = render::to_string(|out| {
        render::weather_summary(out, &palette, &observation, assessment.band)?;
        render::band_tips(out, &palette, assessment.band)?;
        render::advisory(out, &palette, assessment.advice)?;
        render::recommendation(out, &palette, &recommendation)
    });

    match rendered {
        Ok(text) => CommandResult::text(0, text.trim_end()),
        Err(error) => CommandResult::failure("recommend", "render", error.to_string(), 3),
    }
}

fn failure(error: ApplicationError) -> CommandResult {
    CommandResult::failure("recommend", error.error_class(), error.to_string(), error.exit_code())
}
