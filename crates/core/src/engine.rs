use serde::{Deserialize, Serialize};

use crate::advice::{advise, AdviceCategory};
use crate::band::{classify, TemperatureBand};
use crate::catalog::{catalogs_for, BandCatalogs};
use crate::domain::observation::Observation;

/// Derived classification of one observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub band: TemperatureBand,
    pub advice: AdviceCategory,
}

impl Assessment {
    pub fn catalogs(&self) -> &'static BandCatalogs {
        catalogs_for(self.band)
    }
}

pub fn assess(observation: &Observation) -> Assessment {
    Assessment {
        band: classify(observation.temperature_c()),
        advice: advise(observation.condition()),
    }
}
