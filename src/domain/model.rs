use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::ChartError;

/// Geographic position of the birth place, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The birth instant resolved to UTC, second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthMoment {
    pub utc: DateTime<Utc>,
}

impl BirthMoment {
    pub fn new(utc: DateTime<Utc>) -> Self {
        Self { utc }
    }

    /// Julian day number for the ephemeris backend.
    /// JD 2451545.0 == 2000-01-01T12:00:00Z.
    pub fn julian_day(&self) -> f64 {
        self.utc.timestamp() as f64 / 86_400.0 + 2_440_587.5
    }
}

/// The seven bodies placed on a natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl CelestialBody {
    pub const ALL: [CelestialBody; 7] = [
        CelestialBody::Sun,
        CelestialBody::Moon,
        CelestialBody::Mercury,
        CelestialBody::Venus,
        CelestialBody::Mars,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CelestialBody::Sun => "sun",
            CelestialBody::Moon => "moon",
            CelestialBody::Mercury => "mercury",
            CelestialBody::Venus => "venus",
            CelestialBody::Mars => "mars",
            CelestialBody::Jupiter => "jupiter",
            CelestialBody::Saturn => "saturn",
        }
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ecliptic longitude of one body at the birth instant, normalized to [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CelestialLongitude {
    pub body: CelestialBody,
    pub degrees: f64,
}

/// The twelve fixed 30-degree sectors of the ecliptic.
/// Sign at index i owns the half-open range [i*30, i*30+30).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Lowercase name, also the prediction store key.
    pub fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "aries",
            ZodiacSign::Taurus => "taurus",
            ZodiacSign::Gemini => "gemini",
            ZodiacSign::Cancer => "cancer",
            ZodiacSign::Leo => "leo",
            ZodiacSign::Virgo => "virgo",
            ZodiacSign::Libra => "libra",
            ZodiacSign::Scorpio => "scorpio",
            ZodiacSign::Sagittarius => "sagittarius",
            ZodiacSign::Capricorn => "capricorn",
            ZodiacSign::Aquarius => "aquarius",
            ZodiacSign::Pisces => "pisces",
        }
    }

    /// First degree of the sign's sector.
    pub fn start_degree(&self) -> f64 {
        let index = ZodiacSign::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or_default();
        index as f64 * 30.0
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Life category a prediction is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Love,
    Career,
    Health,
    Finance,
    General,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Love,
        Category::Career,
        Category::Health,
        Category::Finance,
        Category::General,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Love => "love",
            Category::Career => "career",
            Category::Health => "health",
            Category::Finance => "finance",
            Category::General => "general",
        }
    }
}

impl FromStr for Category {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "love" => Ok(Category::Love),
            "career" => Ok(Category::Career),
            "health" => Ok(Category::Health),
            "finance" => Ok(Category::Finance),
            "general" => Ok(Category::General),
            other => Err(ChartError::InvalidCategory {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw form input as submitted by the caller. Fields are validated by the
/// assembler before any network or ephemeris work starts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartRequest {
    pub birth_date: String,
    pub birth_time: String,
    pub birth_city: String,
    pub birth_timezone: String,
    pub category: String,
}

impl ChartRequest {
    pub fn date(&self) -> &str {
        self.birth_date.trim()
    }

    pub fn time(&self) -> &str {
        self.birth_time.trim()
    }

    pub fn city(&self) -> &str {
        self.birth_city.trim()
    }

    /// Timezone identifier, defaulting to UTC when the field was left blank.
    pub fn timezone(&self) -> &str {
        let tz = self.birth_timezone.trim();
        if tz.is_empty() {
            "UTC"
        } else {
            tz
        }
    }

    pub fn category(&self) -> crate::utils::error::Result<Category> {
        self.category.parse()
    }
}

/// Sign placements for all seven bodies plus request metadata.
/// Assembled once per request, never mutated, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthChart {
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    pub mercury_sign: ZodiacSign,
    pub venus_sign: ZodiacSign,
    pub mars_sign: ZodiacSign,
    pub jupiter_sign: ZodiacSign,
    pub saturn_sign: ZodiacSign,
    /// Raw longitudes the signs were derived from, in chart body order.
    pub positions: Vec<CelestialLongitude>,
    pub birth_city: String,
    pub birth_timezone: String,
    pub computed_at: DateTime<Utc>,
}

impl BirthChart {
    pub fn sign_for(&self, body: CelestialBody) -> ZodiacSign {
        match body {
            CelestialBody::Sun => self.sun_sign,
            CelestialBody::Moon => self.moon_sign,
            CelestialBody::Mercury => self.mercury_sign,
            CelestialBody::Venus => self.venus_sign,
            CelestialBody::Mars => self.mars_sign,
            CelestialBody::Jupiter => self.jupiter_sign,
            CelestialBody::Saturn => self.saturn_sign,
        }
    }
}

/// Final response value: the chart plus the selected prediction text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Horoscope {
    pub chart: BirthChart,
    pub prediction: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn julian_day_of_j2000_epoch() {
        let moment = BirthMoment::new(Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap());
        assert_eq!(moment.julian_day(), 2_451_545.0);
    }

    #[test]
    fn sign_ranges_partition_the_ecliptic() {
        for (i, sign) in ZodiacSign::ALL.iter().enumerate() {
            assert_eq!(sign.start_degree(), i as f64 * 30.0);
        }
        assert_eq!(ZodiacSign::ALL.len(), 12);
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("love".parse::<Category>().unwrap(), Category::Love);
        assert_eq!(" Career ".parse::<Category>().unwrap(), Category::Career);
        assert!("fortune".parse::<Category>().is_err());
    }

    #[test]
    fn blank_timezone_defaults_to_utc() {
        let request = ChartRequest {
            birth_timezone: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(request.timezone(), "UTC");

        let request = ChartRequest {
            birth_timezone: "Asia/Kathmandu".to_string(),
            ..Default::default()
        };
        assert_eq!(request.timezone(), "Asia/Kathmandu");
    }

    #[test]
    fn body_order_matches_chart_layout() {
        let names: Vec<&str> = CelestialBody::ALL.iter().map(|b| b.name()).collect();
        assert_eq!(
            names,
            vec!["sun", "moon", "mercury", "venus", "mars", "jupiter", "saturn"]
        );
    }
}
