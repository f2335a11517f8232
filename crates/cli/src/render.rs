//! Console presentation for the interactive session and text command output.

use std::fmt::Display;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use outfitter_core::{AdviceCategory, Observation, Outfit, Recommendation, TemperatureBand};

const RESET: &str = "\x1b[0m";
const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const DIVIDER: &str = "═════════════════════════════════════════";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Green,
    Blue,
    Cyan,
    Red,
    Yellow,
    Magenta,
    Bold,
}

impl Tone {
    fn code(self) -> &'static str {
        match self {
            Tone::Green => "\x1b[1;32m",
            Tone::Blue => "\x1b[1;34m",
            Tone::Cyan => "\x1b[1;36m",
            Tone::Red => "\x1b[1;31m",
            Tone::Yellow => "\x1b[1;33m",
            Tone::Magenta => "\x1b[1;35m",
            Tone::Bold => "\x1b[1m",
        }
    }
}

/// ANSI styling that can be switched off for plain terminals and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, tone: Tone, text: impl Display) -> String {
        if self.enabled {
            format!("{}{text}{RESET}", tone.code())
        } else {
            text.to_string()
        }
    }
}

fn band_tone(band: TemperatureBand) -> Tone {
    match band {
        TemperatureBand::Cold => Tone::Cyan,
        TemperatureBand::Moderate => Tone::Yellow,
        TemperatureBand::Hot => Tone::Red,
    }
}

fn advice_tone(advice: AdviceCategory) -> Option<Tone> {
    match advice {
        AdviceCategory::Rain => Some(Tone::Blue),
        AdviceCategory::Snow => Some(Tone::Cyan),
        AdviceCategory::Wind | AdviceCategory::SunClear => Some(Tone::Yellow),
        AdviceCategory::General => None,
    }
}

pub fn banner(out: &mut impl Write, palette: &Palette) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", palette.paint(Tone::Green, "=========================================="))?;
    writeln!(out, "{}", palette.paint(Tone::Green, "   🌤️  Weather-Based Outfit Recommender  👕"))?;
    writeln!(out, "{}", palette.paint(Tone::Green, "=========================================="))?;
    writeln!(out, "{}", palette.paint(Tone::Cyan, "Your personal stylist for any weather!"))?;
    writeln!(
        out,
        "{}",
        palette.paint(Tone::Yellow, "✨ Get personalized outfit suggestions based on current conditions")
    )
}

/// Prints `message` followed by `ticks` dots, pausing `delay` after each.
pub fn loading(
    out: &mut impl Write,
    palette: &Palette,
    message: &str,
    ticks: usize,
    delay: Duration,
) -> io::Result<()> {
    write!(out, "{}", palette.paint(Tone::Cyan, format!("🔄 {message}")))?;
    out.flush()?;
    for _ in 0..ticks {
        write!(out, ".")?;
        out.flush()?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    writeln!(out, " {}", palette.paint(Tone::Cyan, "Done!"))
}

pub fn weather_summary(
    out: &mut impl Write,
    palette: &Palette,
    observation: &Observation,
    band: TemperatureBand,
) -> io::Result<()> {
    writeln!(
        out,
        "\n{} {}:",
        palette.paint(Tone::Magenta, "🌡️  Weather Summary for"),
        palette.paint(Tone::Bold, observation.city())
    )?;
    writeln!(
        out,
        "Temperature: {}",
        palette.paint(Tone::Bold, format!("{:.1}°C", observation.temperature_c()))
    )?;
    writeln!(out, "Condition: {}", palette.paint(Tone::Bold, observation.condition()))?;
    writeln!(out, "Category: {}  {}", band.emoji(), palette.paint(band_tone(band), band.label()))
}

pub fn band_tips(out: &mut impl Write, palette: &Palette, band: TemperatureBand) -> io::Result<()> {
    writeln!(out, "\n{}", palette.paint(Tone::Cyan, "💡 Weather Tips:"))?;
    for tip in band.tips() {
        writeln!(out, "• {tip}")?;
    }
    Ok(())
}

pub fn advisory(out: &mut impl Write, palette: &Palette, advice: AdviceCategory) -> io::Result<()> {
    let advisory = advice.advisory();
    writeln!(out, "\n{}", palette.paint(Tone::Yellow, "🌦️  Special Weather Considerations:"))?;
    match advice_tone(advice) {
        Some(tone) => {
            writeln!(out, "{}", palette.paint(tone, advisory.headline))?;
            for point in advisory.points {
                writeln!(out, "   • {}", palette.paint(tone, point))?;
            }
        }
        None => writeln!(out, "{}", advisory.headline)?,
    }
    Ok(())
}

pub fn outfits(out: &mut impl Write, palette: &Palette, outfits: &[Outfit]) -> io::Result<()> {
    for (index, outfit) in outfits.iter().enumerate() {
        writeln!(
            out,
            "{} {}",
            palette.paint(Tone::Blue, format!("{}.", index + 1)),
            palette.paint(Tone::Bold, outfit.title)
        )?;
        for item in outfit.items {
            writeln!(out, "   • {item}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn options(out: &mut impl Write, entries: &[&str]) -> io::Result<()> {
    for (index, entry) in entries.iter().enumerate() {
        writeln!(out, "{}. {entry}", index + 1)?;
    }
    Ok(())
}

pub fn recommendation(
    out: &mut impl Write,
    palette: &Palette,
    recommendation: &Recommendation,
) -> io::Result<()> {
    writeln!(out, "\n{}", palette.paint(Tone::Green, "✨ Your Perfect Outfit Recommendation:"))?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "{} {}",
        palette.paint(Tone::Blue, "Style:"),
        palette.paint(Tone::Bold, &recommendation.title)
    )?;
    writeln!(out, "Clothing Items:")?;
    for item in &recommendation.items {
        writeln!(out, "  • {}", palette.paint(Tone::Bold, item))?;
    }
    writeln!(out, "Accessory: {}", palette.paint(Tone::Bold, &recommendation.accessory))?;
    writeln!(out, "Footwear: {}", palette.paint(Tone::Bold, &recommendation.shoe))?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{}", palette.paint(Tone::Green, "Have a stylish and comfortable day! 😎✨"))
}

pub fn divider(out: &mut impl Write, palette: &Palette) -> io::Result<()> {
    writeln!(out, "\n{}", palette.paint(Tone::Cyan, DIVIDER))
}

pub fn repeat_menu(out: &mut impl Write, palette: &Palette) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        palette.paint(Tone::Yellow, "🔄 Would you like to get another outfit recommendation?")
    )?;
    writeln!(out, "1. {}", palette.paint(Tone::Green, "Yes, try another city/weather"))?;
    writeln!(out, "2. {}", palette.paint(Tone::Red, "No, exit program"))
}

pub fn farewell(out: &mut impl Write, palette: &Palette) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        palette.paint(Tone::Green, "🎉 Thank you for using the Weather-Based Outfit Recommender!")
    )?;
    writeln!(out, "{}", palette.paint(Tone::Green, "Stay stylish and weather-ready! ✨👗👔🌟"))?;
    writeln!(out, "{}", palette.paint(Tone::Green, "Remember: Confidence is the best accessory! 💫"))
}

/// Runs a rendering closure against an in-memory buffer.
pub fn to_string(
    render: impl FnOnce(&mut Vec<u8>) -> io::Result<()>,
) -> io::Result<String> {
    let mut buffer = Vec::new();
    render(&mut buffer)?;
    String::from_utf8(buffer).map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))
}
