use std::io::{self, BufRead, Write};
use std::time::Duration;

use outfitter_core::config::AppConfig;
use outfitter_core::{
    assess, ApplicationError, DomainError, Observation, Recommendation, Selection, SessionMemory,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::input::{self, Resolved};
use crate::render::{self, Palette, Tone};

const LOADING_MESSAGE: &str = "Analyzing weather and finding perfect outfits";
const LOADING_TICKS: usize = 4;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("input closed while waiting for {0}")]
    InputClosed(&'static str),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<ShellError> for ApplicationError {
    fn from(value: ShellError) -> Self {
        match value {
            ShellError::Domain(error) => Self::Domain(error),
            other => Self::Input(other.to_string()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ShellSettings {
    pub default_city: String,
    pub default_condition: String,
    pub loading_delay: Duration,
    pub palette: Palette,
}

impl ShellSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            default_city: config.session.default_city.clone(),
            default_condition: config.session.default_condition.clone(),
            loading_delay: Duration::from_millis(config.session.loading_delay_ms),
            palette: Palette::new(config.session.color),
        }
    }
}

/// The interactive read-classify-pick loop. Owns the session memory for its
/// whole lifetime.
pub struct Shell<R, W> {
    input: R,
    output: W,
    settings: ShellSettings,
    memory: SessionMemory,
    cycles: u64,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, settings: ShellSettings) -> Self {
        Self { input, output, settings, memory: SessionMemory::new(), cycles: 0 }
    }

    pub fn memory(&self) -> &SessionMemory {
        &self.memory
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs cycles until the user picks "exit"; returns how many completed.
    pub fn run(&mut self) -> Result<u64, ShellError> {
        let palette = self.settings.palette;
        loop {
            self.cycle()?;

            render::divider(&mut self.output, &palette)?;
            render::repeat_menu(&mut self.output, &palette)?;
            if self.choose(2, "the repeat menu")? == 2 {
                break;
            }
            writeln!(self.output, "\n")?;
        }

        render::farewell(&mut self.output, &palette)?;
        self.output.flush()?;
        Ok(self.cycles)
    }

    /// One full recommendation cycle.
    pub fn cycle(&mut self) -> Result<Recommendation, ShellError> {
        let palette = self.settings.palette;
        render::banner(&mut self.output, &palette)?;

        let observation = self.collect_observation()?;
        self.memory.remember(observation.clone());
        self.cycles += 1;
        info!(
            event_name = "outfitter.session.observation_recorded",
            cycle = self.cycles,
            city = observation.city(),
            temperature_c = observation.temperature_c(),
            condition = observation.condition(),
            "observation recorded"
        );

        render::loading(
            &mut self.output,
            &palette,
            LOADING_MESSAGE,
            LOADING_TICKS,
            self.settings.loading_delay,
        )?;

        let assessment = assess(&observation);
        debug!(
            event_name = "outfitter.session.assessed",
            cycle = self.cycles,
            band = %assessment.band,
            advice = %assessment.advice,
            "observation classified"
        );
        render::weather_summary(&mut self.output, &palette, &observation, assessment.band)?;
        render::band_tips(&mut self.output, &palette, assessment.band)?;
        render::advisory(&mut self.output, &palette, assessment.advice)?;

        let catalogs = assessment.catalogs();

        writeln!(self.output, "\n👔 Choose your outfit style:")?;
        render::outfits(&mut self.output, &palette, &catalogs.outfits)?;
        let outfit = self.choose(catalogs.outfits.len(), "an outfit choice")?;

        writeln!(self.output, "\n🎒 Choose your accessory:")?;
        render::options(&mut self.output, &catalogs.accessories)?;
        let accessory = self.choose(catalogs.accessories.len(), "an accessory choice")?;

        writeln!(self.output, "\n👟 Choose your footwear:")?;
        render::options(&mut self.output, &catalogs.shoes)?;
        let shoe = self.choose(catalogs.shoes.len(), "a footwear choice")?;

        let recommendation = catalogs.recommend(Selection::new(outfit, accessory, shoe))?;
        info!(
            event_name = "outfitter.session.recommended",
            cycle = self.cycles,
            band = %assessment.band,
            title = recommendation.title.as_str(),
            "recommendation built"
        );
        render::recommendation(&mut self.output, &palette, &recommendation)?;

        Ok(recommendation)
    }

    fn collect_observation(&mut self) -> Result<Observation, ShellError> {
        let palette = self.settings.palette;
        let last = self.memory.recall().cloned();

        write!(self.output, "\n📍 Enter your city: ")?;
        if let Some(previous) = &last {
            write!(self.output, "(or press Enter for '{}') ", previous.city())?;
        }
        let raw = self.read_line("a city")?;
        let city = match input::resolve_city(&raw, last.as_ref(), &self.settings.default_city) {
            Resolved::Entered(city) => city,
            Resolved::Remembered(city) => {
                writeln!(self.output, "✅ Using previous city: {}", palette.paint(Tone::Bold, &city))?;
                city
            }
            Resolved::Defaulted(city) => {
                writeln!(self.output, "🏙️  Using default: {city}")?;
                city
            }
        };

        let temperature_c = loop {
            write!(self.output, "🌡️  Enter temperature (°C): ")?;
            if let Some(previous) = &last {
                write!(self.output, "(or press Enter for {:.1}°C) ", previous.temperature_c())?;
            }
            let raw = self.read_line("a temperature")?;
            match input::resolve_temperature(&raw, last.as_ref()) {
                Ok(resolved) => {
                    if let Resolved::Remembered(value) = &resolved {
                        writeln!(
                            self.output,
                            "✅ Using previous temperature: {}",
                            palette.paint(Tone::Bold, format!("{value:.1}°C"))
                        )?;
                    }
                    break resolved.into_value();
                }
                Err(error) => {
                    debug!(
                        event_name = "outfitter.session.temperature_rejected",
                        input = raw.as_str(),
                        reason = %error,
                        "temperature input rejected"
                    );
                    writeln!(self.output, "{}", palette.paint(Tone::Red, format!("❌ {error}")))?;
                }
            }
        };

        write!(self.output, "🌦️  Enter weather condition (e.g., Sunny, Rainy, Cloudy): ")?;
        let raw = self.read_line("a weather condition")?;
        let condition = input::resolve_condition(&raw, &self.settings.default_condition);
        if let Resolved::Defaulted(value) = &condition {
            writeln!(self.output, "☀️  Using default condition: {value}")?;
        }

        Ok(Observation::new(city, temperature_c, condition.into_value()))
    }

    fn choose(&mut self, max: usize, what: &'static str) -> Result<usize, ShellError> {
        let palette = self.settings.palette;
        loop {
            write!(
                self.output,
                "{}",
                palette.paint(Tone::Yellow, format!("Enter your choice (1-{max}): "))
            )?;
            let raw = self.read_line(what)?;
            if let Some(choice) = input::parse_choice(&raw, max) {
                return Ok(choice);
            }
            writeln!(
                self.output,
                "{}",
                palette.paint(
                    Tone::Red,
                    format!("❌ Invalid input. Please enter a number between 1 and {max}.")
                )
            )?;
        }
    }

    fn read_line(&mut self, what: &'static str) -> Result<String, ShellError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::InputClosed(what));
        }
        Ok(line.trim_end_matches(|ch: char| ch == '\n' || ch == '\r').to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::time::Duration;

    use super::{Shell, ShellError, ShellSettings};
    use crate::render::Palette;

    fn settings() -> ShellSettings {
        ShellSettings {
            default_city: "Unknown City".to_string(),
            default_condition: "Clear".to_string(),
            loading_delay: Duration::ZERO,
            palette: Palette::plain(),
        }
    }

    fn shell(script: &str) -> Shell<Cursor<Vec<u8>>, Vec<u8>> {
        Shell::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), settings())
    }

    #[test]
    fn single_cycle_builds_recommendation_from_picks() {
        let mut shell = shell("Oslo\n-3\nLight snow\n2\n3\n4\n");

        let recommendation = shell.cycle().expect("cycle completes");

        assert_eq!(recommendation.title, "Arctic Explorer");
        assert_eq!(recommendation.accessory, "Warm Beanie");
        assert_eq!(recommendation.shoe, "Snow Boots");
        let remembered = shell.memory().recall().expect("observation remembered");
        assert_eq!(remembered.city(), "Oslo");
        assert_eq!(remembered.temperature_c(), -3.0);
        assert_eq!(remembered.condition(), "Light snow");
    }

    #[test]
    fn invalid_temperature_and_choice_are_reprompted() {
        let mut shell = shell("Dubai\nhot\n75\n41\nSunny\n0\n4\n1\nx\n5\n2\n");

        let recommendation = shell.cycle().expect("cycle completes after retries");
        let transcript = String::from_utf8(shell.into_output()).expect("utf-8 transcript");

        assert_eq!(recommendation.title, "Summer Cool");
        assert_eq!(recommendation.accessory, "Sweat Towel");
        assert_eq!(recommendation.shoe, "Flip-Flops");
        assert!(transcript.contains("❌ Please enter a valid number."));
        assert!(transcript.contains("❌ Temperature must be between -50.0 and 50.0°C."));
        assert_eq!(
            transcript.matches("❌ Invalid input. Please enter a number between 1 and 3.").count(),
            2
        );
        assert!(transcript.contains("❌ Invalid input. Please enter a number between 1 and 5."));
    }

    #[test]
    fn blank_answers_without_memory_use_defaults() {
        let mut shell = shell("\n12\n\n1\n1\n1\n");

        shell.cycle().expect("cycle completes");
        let remembered = shell.memory().recall().cloned().expect("observation remembered");
        let transcript = String::from_utf8(shell.into_output()).expect("utf-8 transcript");

        assert_eq!(remembered.city(), "Unknown City");
        assert_eq!(remembered.condition(), "Clear");
        assert!(transcript.contains("🏙️  Using default: Unknown City"));
        assert!(transcript.contains("☀️  Using default condition: Clear"));
        assert!(transcript.contains("Sunny conditions!"));
    }

    #[test]
    fn closed_input_aborts_the_cycle() {
        let mut shell = shell("Paris\n");

        let error = shell.cycle().expect_err("input ends before temperature");

        assert!(matches!(error, ShellError::InputClosed("a temperature")));
    }
}
