// config.rs - Client configuration
//
// Everything comes from environment variables with defaults that match a
// step server running locally on port 8080.

use std::str::FromStr;
use std::time::Duration;

use life_grid::DEFAULT_GRID_SIZE;
use reqwest::Url;

use crate::error::ConfigError;

/// Path of the step endpoint on the server.
pub const STEP_PATH: &str = "/game";

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 100;
pub const DEFAULT_WINDOW_SIZE: f32 = 800.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Full URL of the step endpoint.
    pub step_url: Url,
    /// Grid dimension N.
    pub grid_size: usize,
    /// Time between step requests while running.
    pub step_interval: Duration,
    /// Initial window width in points; the drawing surface follows it.
    pub window_size: f32,
    /// Per-request timeout. `None` waits for as long as the server takes.
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// - `LIFE_SERVER_URL` -- base URL of the step server (default `http://127.0.0.1:8080`)
    /// - `LIFE_GRID_SIZE` -- grid dimension (default `50`)
    /// - `LIFE_STEP_INTERVAL_MS` -- step period in milliseconds (default `100`)
    /// - `LIFE_WINDOW_SIZE` -- initial window width in points (default `800`)
    /// - `LIFE_REQUEST_TIMEOUT_MS` -- per-request timeout (default: none)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let server_url =
            lookup("LIFE_SERVER_URL").unwrap_or_else(|| DEFAULT_SERVER_URL.to_owned());
        let step_url = step_url(&server_url).map_err(|reason| ConfigError {
            name: "LIFE_SERVER_URL",
            value: server_url,
            reason,
        })?;

        let grid_size: usize = parse_or(&lookup, "LIFE_GRID_SIZE", DEFAULT_GRID_SIZE)?;
        if grid_size == 0 {
            return Err(at_least_one("LIFE_GRID_SIZE"));
        }

        let interval_ms: u64 =
            parse_or(&lookup, "LIFE_STEP_INTERVAL_MS", DEFAULT_STEP_INTERVAL_MS)?;
        if interval_ms == 0 {
            return Err(at_least_one("LIFE_STEP_INTERVAL_MS"));
        }

        let window_size: f32 = parse_or(&lookup, "LIFE_WINDOW_SIZE", DEFAULT_WINDOW_SIZE)?;
        if !(window_size.is_finite() && window_size > 0.0) {
            return Err(ConfigError {
                name: "LIFE_WINDOW_SIZE",
                value: window_size.to_string(),
                reason: String::from("must be a positive number"),
            });
        }

        let request_timeout = match lookup("LIFE_REQUEST_TIMEOUT_MS") {
            None => None,
            Some(_) => {
                let ms: u64 = parse_or(&lookup, "LIFE_REQUEST_TIMEOUT_MS", 0)?;
                Some(Duration::from_millis(ms))
            }
        };

        Ok(Self {
            step_url,
            grid_size,
            step_interval: Duration::from_millis(interval_ms),
            window_size,
            request_timeout,
        })
    }
}

/// Resolve the step endpoint against a server base URL.
fn step_url(base: &str) -> Result<Url, String> {
    let base = Url::parse(base.trim()).map_err(|e| e.to_string())?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme {:?}", base.scheme()));
    }
    base.join(STEP_PATH).map_err(|e| e.to_string())
}

fn at_least_one(name: &'static str) -> ConfigError {
    ConfigError { name, value: String::from("0"), reason: String::from("must be at least 1") }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError {
            name,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_match_the_browser_client() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.step_url.as_str(), "http://127.0.0.1:8080/game");
        assert_eq!(config.grid_size, 50);
        assert_eq!(config.step_interval, Duration::from_millis(100));
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn step_path_replaces_any_base_path() {
        let vars = [("LIFE_SERVER_URL", "https://life.example.com/app/")];
        let config = ClientConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.step_url.as_str(), "https://life.example.com/game");
    }

    #[test]
    fn reads_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("LIFE_GRID_SIZE", "20"),
            ("LIFE_STEP_INTERVAL_MS", "250"),
            ("LIFE_WINDOW_SIZE", "600"),
            ("LIFE_REQUEST_TIMEOUT_MS", "2000"),
        ]))
        .unwrap();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.step_interval, Duration::from_millis(250));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(2)));
    }

    #[test]
    fn rejects_unusable_values() {
        for vars in [
            [("LIFE_GRID_SIZE", "0")],
            [("LIFE_GRID_SIZE", "-3")],
            [("LIFE_STEP_INTERVAL_MS", "0")],
            [("LIFE_WINDOW_SIZE", "NaN")],
            [("LIFE_SERVER_URL", "not a url")],
            [("LIFE_SERVER_URL", "ftp://example.com")],
            [("LIFE_REQUEST_TIMEOUT_MS", "soon")],
        ] {
            let result = ClientConfig::from_lookup(lookup(&vars));
            assert!(result.is_err(), "{vars:?} should be rejected");
        }
    }
}
