pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{nominatim::NominatimGeocoder, predictions::InMemoryPredictionStore};
pub use crate::core::{
    assembler::ChartAssembler, ephemeris::VsopEphemeris, horoscope::HoroscopeEngine,
};
pub use domain::model::{
    BirthChart, BirthMoment, Category, CelestialBody, CelestialLongitude, ChartRequest,
    GeoCoordinate, Horoscope, ZodiacSign,
};
pub use domain::ports::{EphemerisProvider, Geocoder, PredictionStore};
pub use utils::error::{ChartError, Result};
