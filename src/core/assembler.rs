use chrono::Utc;

use crate::core::{timezone, zodiac};
use crate::domain::model::{
    BirthChart, CelestialBody, CelestialLongitude, ChartRequest, ZodiacSign,
};
use crate::domain::ports::{EphemerisProvider, Geocoder};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Orchestrates one chart computation: validate the raw request, geocode the
/// city, normalize the birth time to UTC, place each body in its sign, and
/// assemble the final record. Each step short-circuits on failure.
pub struct ChartAssembler<G: Geocoder, E: EphemerisProvider> {
    geocoder: G,
    ephemeris: E,
}

impl<G: Geocoder, E: EphemerisProvider> ChartAssembler<G, E> {
    pub fn new(geocoder: G, ephemeris: E) -> Self {
        Self {
            geocoder,
            ephemeris,
        }
    }

    pub async fn assemble(&self, request: &ChartRequest) -> Result<BirthChart> {
        // Field presence and category membership are checked before any
        // network traffic.
        request.validate()?;

        tracing::debug!("geocoding '{}'", request.city());
        let coordinate = self.geocoder.resolve(request.city()).await?;
        tracing::debug!(
            "'{}' resolved to ({:.4}, {:.4})",
            request.city(),
            coordinate.latitude,
            coordinate.longitude
        );

        let moment = timezone::normalize(request.date(), request.time(), request.timezone())?;
        tracing::debug!("birth instant {} (JD {})", moment.utc, moment.julian_day());

        let mut signs = [ZodiacSign::Aries; 7];
        let mut positions = Vec::with_capacity(CelestialBody::ALL.len());
        for (slot, body) in signs.iter_mut().zip(CelestialBody::ALL) {
            let degrees = match self.ephemeris.ecliptic_longitude(body, &moment, &coordinate) {
                Ok(degrees) => degrees,
                Err(e) => {
                    // The one failure class that points at a defect rather
                    // than bad user input.
                    tracing::error!("ephemeris computation failed for {}: {}", body, e);
                    return Err(e);
                }
            };
            *slot = zodiac::classify(degrees);
            positions.push(CelestialLongitude { body, degrees });
            tracing::debug!("{} at {:.4} degrees -> {}", body, degrees, slot);
        }

        let [sun, moon, mercury, venus, mars, jupiter, saturn] = signs;
        Ok(BirthChart {
            sun_sign: sun,
            moon_sign: moon,
            mercury_sign: mercury,
            venus_sign: venus,
            mars_sign: mars,
            jupiter_sign: jupiter,
            saturn_sign: saturn,
            positions,
            birth_city: request.city().to_string(),
            birth_timezone: request.timezone().to_string(),
            computed_at: Utc::now(),
        })
    }
}
