use std::env;
use std::path::PathBuf;
use std::time::Duration;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const DATA_DIR: &str = "data";
const PAYMENT_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    /// How long the simulated gateway takes to approve a payment
    pub payment_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            data_dir: PathBuf::from(DATA_DIR),
            payment_delay: Duration::from_millis(PAYMENT_DELAY_MS),
        }
    }
}

impl AppConfig {
    /// Reads `HOST`, `PORT`, `DATA_DIR` and `PAYMENT_DELAY_MS`. Missing or
    /// unparsable values keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = env::var("HOST").unwrap_or(defaults.host);
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let payment_delay = env::var("PAYMENT_DELAY_MS")
            .ok()
            .and_then(|ms| ms.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.payment_delay);

        Self {
            host,
            port,
            data_dir,
            payment_delay,
        }
    }
}
