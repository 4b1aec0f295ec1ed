//! Server configuration from environment variables.

use std::env;

/// Configuration for the dashboard server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Path to the launch-records CSV
    pub dataset_path: String,
}

impl AppConfig {
    /// Create a configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0): Server host
    /// - `PORT` (optional, default: 8080): Server port
    /// - `DATASET_PATH` (optional, default: data/launches.csv): Launch
    ///   records CSV file
    ///
    /// # Errors
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| "PORT must be a valid port number".to_string())?;
        let dataset_path =
            env::var("DATASET_PATH").unwrap_or_else(|_| "data/launches.csv".to_string());

        Ok(Self {
            host,
            port,
            dataset_path,
        })
    }
}
