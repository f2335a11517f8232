//! Validation and defaulting of raw console input.

use outfitter_core::{
    temperature_in_range, ApplicationError, Observation, MAX_TEMPERATURE_C, MIN_TEMPERATURE_C,
};
use thiserror::Error;

/// Where a resolved value came from.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolved<T> {
    Entered(T),
    Remembered(T),
    Defaulted(T),
}

impl<T> Resolved<T> {
    pub fn into_value(self) -> T {
        match self {
            Resolved::Entered(value) | Resolved::Remembered(value) | Resolved::Defaulted(value) => {
                value
            }
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TemperatureInputError {
    #[error("Please enter a valid number.")]
    NotANumber(String),
    #[error("Temperature must be between {:.1} and {:.1}°C.", MIN_TEMPERATURE_C, MAX_TEMPERATURE_C)]
    OutOfRange(f64),
}

impl From<TemperatureInputError> for ApplicationError {
    fn from(value: TemperatureInputError) -> Self {
        Self::Validation(value.to_string())
    }
}

/// Blank input reuses the remembered city, then falls back to `fallback`.
pub fn resolve_city(raw: &str, last: Option<&Observation>, fallback: &str) -> Resolved<String> {
    let entered = raw.trim();
    if !entered.is_empty() {
        return Resolved::Entered(entered.to_string());
    }

    match last {
        Some(observation) => Resolved::Remembered(observation.city().to_string()),
        None => Resolved::Defaulted(fallback.to_string()),
    }
}

/// Blank input reuses the remembered temperature; anything else must start
/// with a number ("20c" reads as 20) that lies within the accepted range.
pub fn resolve_temperature(
    raw: &str,
    last: Option<&Observation>,
) -> Result<Resolved<f64>, TemperatureInputError> {
    let entered = raw.trim();
    if entered.is_empty() {
        if let Some(observation) = last {
            return Ok(Resolved::Remembered(observation.temperature_c()));
        }
    }

    let value = entered
        .parse::<f64>()
        .ok()
        .or_else(|| leading_number(entered, true).parse::<f64>().ok())
        .ok_or_else(|| TemperatureInputError::NotANumber(entered.to_string()))?;
    check_temperature(value).map(Resolved::Entered)
}

pub fn check_temperature(value: f64) -> Result<f64, TemperatureInputError> {
    if temperature_in_range(value) {
        Ok(value)
    } else {
        Err(TemperatureInputError::OutOfRange(value))
    }
}

/// Blank input always falls back to `fallback`; the previous condition is
/// not reused.
pub fn resolve_condition(raw: &str, fallback: &str) -> Resolved<String> {
    let entered = raw.trim();
    if entered.is_empty() {
        Resolved::Defaulted(fallback.to_string())
    } else {
        Resolved::Entered(entered.to_string())
    }
}

/// Parses a 1-based menu choice from the leading integer of the input, so
/// "2.0" and "2)" both pick 2. Anything outside `1..=max` is rejected.
pub fn parse_choice(raw: &str, max: usize) -> Option<usize> {
    leading_number(raw.trim(), false)
        .parse::<i64>()
        .ok()
        .and_then(|choice| usize::try_from(choice).ok())
        .filter(|choice| (1..=max).contains(choice))
}

/// Longest prefix of `input` that reads as a signed number; trailing text
/// such as a unit suffix is ignored.
fn leading_number(input: &str, allow_fraction: bool) -> &str {
    let bytes = input.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_from = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > digits_from;

    if allow_fraction && end < bytes.len() && bytes[end] == b'.' {
        let fraction_from = end + 1;
        let mut fraction_end = fraction_from;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        if has_digits || fraction_end > fraction_from {
            end = fraction_end;
            has_digits = true;
        }
    }

    if !has_digits {
        return "";
    }

    if allow_fraction && end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits_from = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits_from {
            end = exponent_end;
        }
    }

    &input[..end]
}

#[cfg(test)]
mod tests {
    use outfitter_core::{ApplicationError, Observation};

    use super::{
        parse_choice, resolve_city, resolve_condition, resolve_temperature, Resolved,
        TemperatureInputError,
    };

    fn last() -> Observation {
        Observation::new("Vienna", 14.5, "Drizzle")
    }

    #[test]
    fn city_prefers_entered_then_remembered_then_default() {
        let previous = last();

        assert_eq!(
            resolve_city("  Graz ", Some(&previous), "Unknown City"),
            Resolved::Entered("Graz".to_string())
        );
        assert_eq!(
            resolve_city("", Some(&previous), "Unknown City"),
            Resolved::Remembered("Vienna".to_string())
        );
        assert_eq!(
            resolve_city("   ", None, "Unknown City"),
            Resolved::Defaulted("Unknown City".to_string())
        );
    }

    #[test]
    fn blank_temperature_reuses_memory() {
        let previous = last();

        assert_eq!(resolve_temperature("", Some(&previous)), Ok(Resolved::Remembered(14.5)));
    }

    #[test]
    fn blank_temperature_without_memory_is_not_a_number() {
        assert_eq!(
            resolve_temperature("", None),
            Err(TemperatureInputError::NotANumber(String::new()))
        );
    }

    #[test]
    fn temperature_must_parse_and_lie_in_range() {
        assert_eq!(resolve_temperature("-50", None), Ok(Resolved::Entered(-50.0)));
        assert_eq!(resolve_temperature(" 50.0 ", None), Ok(Resolved::Entered(50.0)));
        assert_eq!(
            resolve_temperature("warm", None),
            Err(TemperatureInputError::NotANumber("warm".to_string()))
        );
        assert_eq!(resolve_temperature("50.5", None), Err(TemperatureInputError::OutOfRange(50.5)));
        assert!(matches!(
            resolve_temperature("NaN", None),
            Err(TemperatureInputError::OutOfRange(value)) if value.is_nan()
        ));
    }

    #[test]
    fn temperature_reads_leading_number_and_ignores_suffix() {
        assert_eq!(resolve_temperature("20c", None), Ok(Resolved::Entered(20.0)));
        assert_eq!(resolve_temperature("-3.5 degrees", None), Ok(Resolved::Entered(-3.5)));
        assert_eq!(resolve_temperature(".5C", None), Ok(Resolved::Entered(0.5)));
        assert_eq!(resolve_temperature("1e1x", None), Ok(Resolved::Entered(10.0)));
        assert_eq!(resolve_temperature("99F", None), Err(TemperatureInputError::OutOfRange(99.0)));
        assert_eq!(
            resolve_temperature("c20", None),
            Err(TemperatureInputError::NotANumber("c20".to_string()))
        );
        assert_eq!(
            resolve_temperature("-.", None),
            Err(TemperatureInputError::NotANumber("-.".to_string()))
        );
    }

    #[test]
    fn rejected_temperature_becomes_validation_error() {
        let error = ApplicationError::from(TemperatureInputError::OutOfRange(60.0));

        assert_eq!(error.error_class(), "input_validation");
        assert_eq!(error.exit_code(), 2);
        assert_eq!(error.to_string(), "Temperature must be between -50.0 and 50.0°C.");
    }

    #[test]
    fn out_of_range_message_names_bounds() {
        assert_eq!(
            TemperatureInputError::OutOfRange(99.0).to_string(),
            "Temperature must be between -50.0 and 50.0°C."
        );
    }

    #[test]
    fn blank_condition_uses_default_not_memory() {
        assert_eq!(resolve_condition("", "Clear"), Resolved::Defaulted("Clear".to_string()));
        assert_eq!(resolve_condition(" Fog ", "Clear"), Resolved::Entered("Fog".to_string()));
    }

    #[test]
    fn choices_are_one_based_and_bounded() {
        assert_eq!(parse_choice("1", 3), Some(1));
        assert_eq!(parse_choice(" 3\n", 3), Some(3));
        assert_eq!(parse_choice("0", 3), None);
        assert_eq!(parse_choice("4", 3), None);
        assert_eq!(parse_choice("-1", 3), None);
        assert_eq!(parse_choice("two", 3), None);
        assert_eq!(parse_choice("", 3), None);
    }

    #[test]
    fn choices_read_the_leading_integer() {
        assert_eq!(parse_choice("2.0", 3), Some(2));
        assert_eq!(parse_choice("3)", 3), Some(3));
        assert_eq!(parse_choice("+1", 5), Some(1));
        assert_eq!(parse_choice("5 please", 5), Some(5));
        assert_eq!(parse_choice("x2", 3), None);
    }
}
