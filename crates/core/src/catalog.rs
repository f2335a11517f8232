use std::collections::BTreeSet;

use serde::Serialize;

use crate::band::TemperatureBand;
use crate::domain::recommendation::{Recommendation, Selection, SelectionSlot};
use crate::errors::DomainError;

pub const OUTFITS_PER_BAND: usize = 3;
pub const ITEMS_PER_OUTFIT: usize = 3;
pub const ACCESSORIES_PER_BAND: usize = 5;
pub const SHOES_PER_BAND: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Outfit {
    pub title: &'static str,
    pub items: [&'static str; ITEMS_PER_OUTFIT],
}

/// Everything a user can pick from for one band. Sizes are fixed by the
/// array types so every band has the same shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BandCatalogs {
    pub band: TemperatureBand,
    pub outfits: [Outfit; OUTFITS_PER_BAND],
    pub accessories: [&'static str; ACCESSORIES_PER_BAND],
    pub shoes: [&'static str; SHOES_PER_BAND],
}

const COLD: BandCatalogs = BandCatalogs {
    band: TemperatureBand::Cold,
    outfits: [
        Outfit {
            title: "Winter Warrior",
            items: ["Thick Trench Coat", "Corduroy Pants", "Wool Turtleneck"],
        },
        Outfit {
            title: "Arctic Explorer",
            items: ["Insulated Puffer Jacket", "Thermal Leggings", "Merino Wool Sweater"],
        },
        Outfit {
            title: "Cozy Professional",
            items: ["Wool Overcoat", "Dark Jeans", "Cashmere Sweater"],
        },
    ],
    accessories: [
        "Wool Scarf",
        "Insulated Gloves",
        "Warm Beanie",
        "Fleece Headband",
        "Thermal Socks",
    ],
    shoes: [
        "Waterproof Boots",
        "Insulated Sneakers",
        "Warm Chelsea Boots",
        "Snow Boots",
        "Thermal Loafers",
    ],
};

const MODERATE: BandCatalogs = BandCatalogs {
    band: TemperatureBand::Moderate,
    outfits: [
        Outfit { title: "Smart Casual", items: ["Cotton Long Sleeve", "Chinos", "Light Cardigan"] },
        Outfit { title: "Weekend Relaxed", items: ["Henley Shirt", "Khaki Pants", "Zip-up Hoodie"] },
        Outfit { title: "Urban Explorer", items: ["Denim Jacket", "Joggers", "Graphic Tee"] },
    ],
    accessories: ["Baseball Cap", "Stylish Watch", "Leather Belt", "Sunglasses", "Light Scarf"],
    shoes: [
        "Comfortable Sneakers",
        "Canvas Shoes",
        "Casual Loafers",
        "Walking Boots",
        "Slip-on Shoes",
    ],
};

const HOT: BandCatalogs = BandCatalogs {
    band: TemperatureBand::Hot,
    outfits: [
        Outfit { title: "Summer Cool", items: ["Linen Button-up", "Cotton Shorts", "Baseball Cap"] },
        Outfit { title: "Beach Ready", items: ["Tank Top", "Board Shorts", "Sun Hat"] },
        Outfit {
            title: "City Heat",
            items: ["Moisture-wicking Tee", "Linen Pants", "Cooling Towel"],
        },
    ],
    accessories: [
        "Wide-Brim Hat",
        "Cooling Bandana",
        "UV Protection Wristband",
        "Portable Fan",
        "Sweat Towel",
    ],
    shoes: ["Breathable Sandals", "Flip-Flops", "Mesh Sneakers", "Water Shoes", "Ventilated Slip-ons"],
};

pub fn catalogs_for(band: TemperatureBand) -> &'static BandCatalogs {
    match band {
        TemperatureBand::Cold => &COLD,
        TemperatureBand::Moderate => &MODERATE,
        TemperatureBand::Hot => &HOT,
    }
}

impl BandCatalogs {
    /// Resolves three 1-based picks against this band's catalogs.
    ///
    /// Picks are checked in outfit, accessory, shoe order and the first
    /// out-of-range pick is reported.
    pub fn recommend(&self, selection: Selection) -> Result<Recommendation, DomainError> {
        let outfit = pick(&self.outfits, selection.outfit, SelectionSlot::Outfit)?;
        let accessory = pick(&self.accessories, selection.accessory, SelectionSlot::Accessory)?;
        let shoe = pick(&self.shoes, selection.shoe, SelectionSlot::Shoe)?;

        Ok(Recommendation {
            title: outfit.title.to_string(),
            items: outfit.items.map(str::to_string),
            accessory: accessory.to_string(),
            shoe: shoe.to_string(),
        })
    }
}

pub fn build_recommendation(
    selection: Selection,
    catalogs: &BandCatalogs,
) -> Result<Recommendation, DomainError> {
    catalogs.recommend(selection)
}

fn pick<T>(entries: &[T], choice: usize, slot: SelectionSlot) -> Result<&T, DomainError> {
    choice
        .checked_sub(1)
        .and_then(|index| entries.get(index))
        .ok_or(DomainError::OutOfRangeSelection { slot, choice, max: entries.len() })
}

/// Lists integrity problems across every band's catalogs. Empty when the
/// shipped data is sound.
pub fn catalog_issues() -> Vec<String> {
    TemperatureBand::ALL.iter().flat_map(|band| band_issues(catalogs_for(*band))).collect()
}

fn band_issues(catalogs: &BandCatalogs) -> Vec<String> {
    let band = catalogs.band;
    let mut issues = Vec::new();

    let mut titles = BTreeSet::new();
    for (index, outfit) in catalogs.outfits.iter().enumerate() {
        if outfit.title.trim().is_empty() {
            issues.push(format!("{band}: outfit #{} has a blank title", index + 1));
        }
        if !titles.insert(outfit.title) {
            issues.push(format!("{band}: duplicate outfit title `{}`", outfit.title));
        }
        if outfit.items.iter().any(|item| item.trim().is_empty()) {
            issues.push(format!("{band}: outfit `{}` has a blank item", outfit.title));
        }
    }

    issues.extend(list_issues(band, SelectionSlot::Accessory, &catalogs.accessories));
    issues.extend(list_issues(band, SelectionSlot::Shoe, &catalogs.shoes));
    issues
}

fn list_issues(band: TemperatureBand, slot: SelectionSlot, entries: &[&str]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut issues = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        if entry.trim().is_empty() {
            issues.push(format!("{band}: {slot} #{} is blank", index + 1));
        } else if !seen.insert(*entry) {
            issues.push(format!("{band}: duplicate {slot} `{entry}`"));
        }
    }
    issues
}
