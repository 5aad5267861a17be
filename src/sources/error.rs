use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemperatureSourceError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse archive response")]
    JsonParse(#[from] serde_json::Error),

    #[error("Year {0} cannot be expressed as a calendar date range")]
    InvalidYear(i32),
}
