use crate::domain::model::{BirthMoment, Category, CelestialBody, GeoCoordinate, ZodiacSign};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Resolves a free-text place name to coordinates. The live implementation
/// talks to a network service; tests substitute a fake.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve(&self, place_name: &str) -> Result<GeoCoordinate>;
}

/// Computes the ecliptic longitude of one body at one instant, in [0, 360).
/// Implementations must be stateless: the same (body, moment, observer)
/// always yields the same longitude.
pub trait EphemerisProvider: Send + Sync {
    fn ecliptic_longitude(
        &self,
        body: CelestialBody,
        moment: &BirthMoment,
        observer: &GeoCoordinate,
    ) -> Result<f64>;
}

/// Read-only lookup of prediction texts keyed by (sign, category).
/// Seeding the store happens outside this crate.
pub trait PredictionStore: Send + Sync {
    fn candidates(&self, sign: ZodiacSign, category: Category) -> Result<Vec<String>>;
}
