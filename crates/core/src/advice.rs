//! Condition keyword matching.
//!
//! Free-text conditions are lower-cased and checked against an ordered rule
//! table. The first rule with any matching keyword decides the category, so
//! "rain and wind" is [`AdviceCategory::Rain`].

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceCategory {
    Rain,
    Snow,
    Wind,
    SunClear,
    General,
}

/// Static advice text for one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub headline: &'static str,
    pub points: &'static [&'static str],
}

struct AdviceRule {
    keywords: &'static [&'static str],
    category: AdviceCategory,
}

const ADVICE_RULES: [AdviceRule; 4] = [
    AdviceRule { keywords: &["rain", "drizzle"], category: AdviceCategory::Rain },
    AdviceRule { keywords: &["snow"], category: AdviceCategory::Snow },
    AdviceRule { keywords: &["wind"], category: AdviceCategory::Wind },
    AdviceRule { keywords: &["sun", "clear"], category: AdviceCategory::SunClear },
];

const RAIN_ADVISORY: Advisory = Advisory {
    headline: "☔ Rain detected! Recommendations:",
    points: &[
        "Bring an umbrella or waterproof jacket",
        "Choose water-resistant footwear",
        "Avoid light-colored clothing",
    ],
};

const SNOW_ADVISORY: Advisory = Advisory {
    headline: "❄️ Snowy conditions! Recommendations:",
    points: &[
        "Extra layers and waterproof outer shell",
        "Non-slip, insulated footwear",
        "Hand and foot warmers",
    ],
};

const WIND_ADVISORY: Advisory = Advisory {
    headline: "💨 Windy weather! Recommendations:",
    points: &[
        "Windbreaker or fitted jacket",
        "Secure accessories (hats, scarves)",
        "Avoid loose, flowing garments",
    ],
};

const SUN_CLEAR_ADVISORY: Advisory = Advisory {
    headline: "☀️ Sunny conditions! Recommendations:",
    points: &["UV protection is essential", "Light colors reflect heat", "Stay hydrated"],
};

const GENERAL_ADVISORY: Advisory =
    Advisory { headline: "🌤️  General weather - perfect for versatile styling!", points: &[] };

impl AdviceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdviceCategory::Rain => "rain",
            AdviceCategory::Snow => "snow",
            AdviceCategory::Wind => "wind",
            AdviceCategory::SunClear => "sun_clear",
            AdviceCategory::General => "general",
        }
    }

    pub fn advisory(&self) -> &'static Advisory {
        match self {
            AdviceCategory::Rain => &RAIN_ADVISORY,
            AdviceCategory::Snow => &SNOW_ADVISORY,
            AdviceCategory::Wind => &WIND_ADVISORY,
            AdviceCategory::SunClear => &SUN_CLEAR_ADVISORY,
            AdviceCategory::General => &GENERAL_ADVISORY,
        }
    }
}

impl fmt::Display for AdviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn advise(condition: &str) -> AdviceCategory {
    let normalized = condition.to_lowercase();
    ADVICE_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| normalized.contains(keyword)))
        .map(|rule| rule.category)
        .unwrap_or(AdviceCategory::General)
}

#[cfg(test)]
mod tests {
    use super::{advise, AdviceCategory};

    #[test]
    fn keywords_map_to_categories() {
        assert_eq!(advise("Heavy Rain showers"), AdviceCategory::Rain);
        assert_eq!(advise("drizzle"), AdviceCategory::Rain);
        assert_eq!(advise("Light Snow"), AdviceCategory::Snow);
        assert_eq!(advise("Windy and cold"), AdviceCategory::Wind);
        assert_eq!(advise("Sunny and clear"), AdviceCategory::SunClear);
        assert_eq!(advise("CLEAR SKIES"), AdviceCategory::SunClear);
        assert_eq!(advise("Overcast"), AdviceCategory::General);
        assert_eq!(advise(""), AdviceCategory::General);
    }

    #[test]
    fn earlier_rules_win_when_several_keywords_match() {
        assert_eq!(advise("rain and wind"), AdviceCategory::Rain);
        assert_eq!(advise("windy with drizzle"), AdviceCategory::Rain);
        assert_eq!(advise("snow then sunshine"), AdviceCategory::Snow);
        assert_eq!(advise("sunny but windy"), AdviceCategory::Wind);
        assert_eq!(advise("sleet, rain and snow"), AdviceCategory::Rain);
    }

    #[test]
    fn matching_is_by_substring() {
        // "brainstorm" contains "rain"; substring matching is intended.
        assert_eq!(advise("brainstorm"), AdviceCategory::Rain);
        assert_eq!(advise("Snowfall"), AdviceCategory::Snow);
    }

    #[test]
    fn advise_is_repeatable() {
        for condition in ["Rain", "Snow", "Wind", "Sun", "Fog"] {
            assert_eq!(advise(condition), advise(condition));
        }
    }

    #[test]
    fn every_specific_category_carries_three_points() {
        for category in [
            AdviceCategory::Rain,
            AdviceCategory::Snow,
            AdviceCategory::Wind,
            AdviceCategory::SunClear,
        ] {
            assert_eq!(category.advisory().points.len(), 3, "{category}");
        }
        assert!(AdviceCategory::General.advisory().points.is_empty());
    }
}
