pub mod assembler;
pub mod ephemeris;
pub mod horoscope;
pub mod timezone;
pub mod zodiac;

pub use crate::domain::model::{BirthChart, BirthMoment, ChartRequest, GeoCoordinate, Horoscope};
pub use crate::domain::ports::{EphemerisProvider, Geocoder, PredictionStore};
pub use crate::utils::error::Result;
