use astro::lunar;
use vsop87::vsop87d;

use crate::core::zodiac::normalize_degrees;
use crate::domain::model::{BirthMoment, CelestialBody, GeoCoordinate};
use crate::domain::ports::EphemerisProvider;
use crate::utils::error::{ChartError, Result};

/// Ephemeris backend combining the VSOP87D planetary theory with the
/// ELP-2000/82 lunar theory.
///
/// Frame conventions follow the classic libastro layout: the five planets
/// report heliocentric ecliptic longitude, the Sun entry carries Earth's
/// heliocentric longitude, and the Moon entry carries the geocentric
/// ecliptic longitude. Longitudes do not depend on the observer position,
/// which is accepted for interface symmetry only.
#[derive(Debug, Clone, Copy, Default)]
pub struct VsopEphemeris;

impl VsopEphemeris {
    pub fn new() -> Self {
        Self
    }
}

impl EphemerisProvider for VsopEphemeris {
    fn ecliptic_longitude(
        &self,
        body: CelestialBody,
        moment: &BirthMoment,
        _observer: &GeoCoordinate,
    ) -> Result<f64> {
        let jd = moment.julian_day();

        let radians = match body {
            CelestialBody::Sun => vsop87d::earth(jd).longitude(),
            CelestialBody::Moon => lunar::geocent_ecl_pos(jd).0.long,
            CelestialBody::Mercury => vsop87d::mercury(jd).longitude(),
            CelestialBody::Venus => vsop87d::venus(jd).longitude(),
            CelestialBody::Mars => vsop87d::mars(jd).longitude(),
            CelestialBody::Jupiter => vsop87d::jupiter(jd).longitude(),
            CelestialBody::Saturn => vsop87d::saturn(jd).longitude(),
        };

        let degrees = radians.to_degrees();
        if !degrees.is_finite() {
            return Err(ChartError::ComputationError {
                message: format!("non-finite longitude for {} at JD {}", body, jd),
            });
        }

        Ok(normalize_degrees(degrees))
    }
}
