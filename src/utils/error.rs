use thiserror::Error;

/// All failure modes of a chart request. Every variant is recoverable and
/// rendered to the caller via `Display`; none abort the process.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Please provide your birth date, time, city, and select a category.")]
    MissingRequiredFields,

    #[error("Invalid category '{value}'. Please choose from the available options.")]
    InvalidCategory { value: String },

    #[error("Could not find coordinates for {place}. Please enter a valid city.")]
    LocationNotFound { place: String },

    #[error("Invalid date or time format. Please use YYYY-MM-DD and HH:MM.")]
    InvalidDateTimeFormat,

    #[error("Unknown timezone: '{value}'. Please enter a valid timezone identifier (e.g., 'Asia/Kathmandu', 'America/New_York').")]
    UnknownTimezone { value: String },

    #[error("Error computing the birth chart: {message}")]
    ComputationError { message: String },

    #[error("No prediction found for that sign and category.")]
    NoPredictionFound,

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Configuration error: {field}: {reason}")]
    ConfigError { field: String, reason: String },
}

impl ChartError {
    /// User-input errors are logged at warn at most; anything else indicates
    /// a defect or environment fault and gets error-level diagnostics.
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            ChartError::ComputationError { .. }
                | ChartError::HttpError(_)
                | ChartError::ConfigError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
