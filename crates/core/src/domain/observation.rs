use serde::{Deserialize, Serialize};

/// Lowest temperature the input layer accepts, in degrees Celsius.
pub const MIN_TEMPERATURE_C: f64 = -50.0;
/// Highest temperature the input layer accepts, in degrees Celsius.
pub const MAX_TEMPERATURE_C: f64 = 50.0;

/// One user-submitted weather record.
///
/// Fields are fixed at construction; a new cycle builds a new observation,
/// possibly copying values out of the previous one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    city: String,
    temperature_c: f64,
    condition: String,
}

impl Observation {
    pub fn new(city: impl Into<String>, temperature_c: f64, condition: impl Into<String>) -> Self {
        Self { city: city.into(), temperature_c, condition: condition.into() }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }
}

pub fn temperature_in_range(temperature_c: f64) -> bool {
    (MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C).contains(&temperature_c)
}
