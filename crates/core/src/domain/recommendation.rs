use std::fmt;

use serde::{Deserialize, Serialize};

/// Which catalog a pick refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionSlot {
    Outfit,
    Accessory,
    Shoe,
}

impl SelectionSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionSlot::Outfit => "outfit",
            SelectionSlot::Accessory => "accessory",
            SelectionSlot::Shoe => "shoe",
        }
    }
}

impl fmt::Display for SelectionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three 1-based picks as entered by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub outfit: usize,
    pub accessory: usize,
    pub shoe: usize,
}

impl Selection {
    pub fn new(outfit: usize, accessory: usize, shoe: usize) -> Self {
        Self { outfit, accessory, shoe }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub items: [String; 3],
    pub accessory: String,
    pub shoe: String,
}
