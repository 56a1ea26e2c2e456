use clap::Parser;
use natal_chart::utils::{logger, validation::Validate};
use natal_chart::{
    ChartAssembler, CliConfig, HoroscopeEngine, InMemoryPredictionStore, NominatimGeocoder,
    VsopEphemeris,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting natal-chart CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let geocoder = NominatimGeocoder::with_endpoint(
        config.geocoder_endpoint.clone(),
        Duration::from_secs(config.geocoder_timeout_secs),
    )?;
    let assembler = ChartAssembler::new(geocoder, VsopEphemeris::new());
    let engine = HoroscopeEngine::new(assembler, InMemoryPredictionStore::with_sample_data());

    let request = config.chart_request();
    match engine.run(&request).await {
        Ok(horoscope) => {
            if config.verbose {
                tracing::debug!("horoscope: {}", serde_json::to_string(&horoscope)?);
            }
            let chart = &horoscope.chart;
            println!(
                "Birth chart for {} ({}), computed {}:",
                chart.birth_city, chart.birth_timezone, chart.computed_at
            );
            for position in &chart.positions {
                println!(
                    "  {:<8} {:>8.3}°  {}",
                    position.body.name(),
                    position.degrees,
                    chart.sign_for(position.body)
                );
            }
            println!();
            println!("{}", horoscope.prediction);
        }
        Err(e) => {
            if e.is_user_error() {
                tracing::warn!("chart request rejected: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(2);
            } else {
                tracing::error!("chart computation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
