use std::net::IpAddr;
use std::time::Duration;

pub const DEFAULT_FORMS_API_BASE_URL: &str = "https://api.fillout.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub forms_api_base_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub upstream_timeout: Duration,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let api_key = env_required("API_KEY")?;

        let forms_api_base_url = env_or("FORMS_API_BASE_URL", DEFAULT_FORMS_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let host: IpAddr = env_or("FORMFILTER_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FORMFILTER_HOST: {e}"))?;

        let port: u16 = env_or("PORT", "3001")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let timeout_secs: u64 = env_or("FORMFILTER_UPSTREAM_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|e| format!("Invalid FORMFILTER_UPSTREAM_TIMEOUT_SECS: {e}"))?;

        let log_level = env_or("FORMFILTER_LOG_LEVEL", "info");

        Ok(Config {
            api_key,
            forms_api_base_url,
            host,
            port,
            upstream_timeout: Duration::from_secs(timeout_secs),
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
