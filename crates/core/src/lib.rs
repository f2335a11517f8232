pub mod advice;
pub mod band;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod session;

pub use advice::{advise, AdviceCategory, Advisory};
pub use band::{classify, ParseBandError, TemperatureBand};
pub use catalog::{build_recommendation, catalog_issues, catalogs_for, BandCatalogs, Outfit};
pub use domain::observation::{
    temperature_in_range, Observation, MAX_TEMPERATURE_C, MIN_TEMPERATURE_C,
};
pub use domain::recommendation::{Recommendation, Selection, SelectionSlot};
pub use engine::{assess, Assessment};
pub use errors::{ApplicationError, DomainError};
pub use session::SessionMemory;
