use rand::seq::SliceRandom;

use crate::core::assembler::ChartAssembler;
use crate::domain::model::{ChartRequest, Horoscope};
use crate::domain::ports::{EphemerisProvider, Geocoder, PredictionStore};
use crate::utils::error::{ChartError, Result};

/// Front door of the crate: assembles the birth chart, then picks one
/// prediction for (sun sign, category) uniformly at random from the store's
/// candidates.
pub struct HoroscopeEngine<G: Geocoder, E: EphemerisProvider, P: PredictionStore> {
    assembler: ChartAssembler<G, E>,
    predictions: P,
}

impl<G: Geocoder, E: EphemerisProvider, P: PredictionStore> HoroscopeEngine<G, E, P> {
    pub fn new(assembler: ChartAssembler<G, E>, predictions: P) -> Self {
        Self {
            assembler,
            predictions,
        }
    }

    pub async fn run(&self, request: &ChartRequest) -> Result<Horoscope> {
        let chart = self.assembler.assemble(request).await?;
        let category = request.category()?;

        let candidates = self.predictions.candidates(chart.sun_sign, category)?;
        let prediction = candidates
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(ChartError::NoPredictionFound)?;

        tracing::info!(
            "{} / {} prediction served for {}",
            chart.sun_sign,
            category,
            chart.birth_city
        );

        Ok(Horoscope { chart, prediction })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{BirthMoment, Category, CelestialBody, GeoCoordinate, ZodiacSign};
    use async_trait::async_trait;

    struct FixedGeocoder;

    #[async_trait]
    impl Geocoder for FixedGeocoder {
        async fn resolve(&self, _place_name: &str) -> Result<GeoCoordinate> {
            Ok(GeoCoordinate::new(27.7, 85.3))
        }
    }

    struct FixedEphemeris {
        degrees: f64,
    }

    impl EphemerisProvider for FixedEphemeris {
        fn ecliptic_longitude(
            &self,
            _body: CelestialBody,
            _moment: &BirthMoment,
            _observer: &GeoCoordinate,
        ) -> Result<f64> {
            Ok(self.degrees)
        }
    }

    struct SingleEntryStore {
        sign: ZodiacSign,
        category: Category,
        texts: Vec<String>,
    }

    impl PredictionStore for SingleEntryStore {
        fn candidates(&self, sign: ZodiacSign, category: Category) -> Result<Vec<String>> {
            if sign == self.sign && category == self.category {
                Ok(self.texts.clone())
            } else {
                Ok(Vec::new())
            }
        }
    }

    fn request(category: &str) -> ChartRequest {
        ChartRequest {
            birth_date: "1995-04-20".to_string(),
            birth_time: "06:45".to_string(),
            birth_city: "Kathmandu".to_string(),
            birth_timezone: "Asia/Kathmandu".to_string(),
            category: category.to_string(),
        }
    }

    #[tokio::test]
    async fn serves_a_prediction_keyed_by_sun_sign() {
        // 45 degrees puts every body, including the Sun, in taurus.
        let assembler = ChartAssembler::new(FixedGeocoder, FixedEphemeris { degrees: 45.0 });
        let engine = HoroscopeEngine::new(
            assembler,
            SingleEntryStore {
                sign: ZodiacSign::Taurus,
                category: Category::Career,
                texts: vec!["Hard work will be recognized.".to_string()],
            },
        );

        let horoscope = engine.run(&request("career")).await.unwrap();

        assert_eq!(horoscope.chart.sun_sign, ZodiacSign::Taurus);
        assert_eq!(horoscope.prediction, "Hard work will be recognized.");
    }

    #[tokio::test]
    async fn selection_is_among_the_candidate_set() {
        let texts = vec![
            "First candidate.".to_string(),
            "Second candidate.".to_string(),
            "Third candidate.".to_string(),
        ];
        let assembler = ChartAssembler::new(FixedGeocoder, FixedEphemeris { degrees: 45.0 });
        let engine = HoroscopeEngine::new(
            assembler,
            SingleEntryStore {
                sign: ZodiacSign::Taurus,
                category: Category::Love,
                texts: texts.clone(),
            },
        );

        for _ in 0..10 {
            let horoscope = engine.run(&request("love")).await.unwrap();
            assert!(texts.contains(&horoscope.prediction));
        }
    }

    #[tokio::test]
    async fn empty_candidate_set_is_no_prediction_found() {
        let assembler = ChartAssembler::new(FixedGeocoder, FixedEphemeris { degrees: 45.0 });
        let engine = HoroscopeEngine::new(
            assembler,
            SingleEntryStore {
                sign: ZodiacSign::Taurus,
                category: Category::Career,
                texts: Vec::new(),
            },
        );

        let result = engine.run(&request("career")).await;
        assert!(matches!(result, Err(ChartError::NoPredictionFound)));
    }
}
