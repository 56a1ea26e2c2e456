use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::adapters::nominatim;
use crate::domain::model::ChartRequest;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};

/// Birth data and adapter settings for one chart computation. The form
/// fields default to empty so that presence checking stays in the core,
/// mirroring the web form this tool grew out of.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "natal-chart")]
#[command(about = "Compute a natal chart and fetch a horoscope prediction")]
pub struct CliConfig {
    #[arg(long, default_value = "", help = "Birth date, YYYY-MM-DD")]
    pub birth_date: String,

    #[arg(long, default_value = "", help = "Birth time, HH:MM (24-hour)")]
    pub birth_time: String,

    #[arg(long, default_value = "", help = "Birth city, free text")]
    pub birth_city: String,

    #[arg(long, default_value = "UTC", help = "IANA timezone identifier")]
    pub birth_timezone: String,

    #[arg(
        long,
        default_value = "",
        help = "Prediction category: love, career, health, finance, general"
    )]
    pub category: String,

    #[arg(long, default_value = nominatim::DEFAULT_ENDPOINT)]
    pub geocoder_endpoint: String,

    #[arg(long, default_value = "10")]
    pub geocoder_timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn chart_request(&self) -> ChartRequest {
        ChartRequest {
            birth_date: self.birth_date.clone(),
            birth_time: self.birth_time.clone(),
            birth_city: self.birth_city.clone(),
            birth_timezone: self.birth_timezone.clone(),
            category: self.category.clone(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("geocoder_endpoint", &self.geocoder_endpoint)?;
        validate_positive_number("geocoder_timeout_secs", self.geocoder_timeout_secs, 1)?;
        Ok(())
    }
}
