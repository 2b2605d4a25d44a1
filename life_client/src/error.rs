// error.rs - Error types for the client

use life_grid::GridError;
use reqwest::StatusCode;

/// A single step cycle failed. The grid and run state are left as they
/// were; the next tick tries again.
#[derive(Debug, thiserror::Error)]
pub enum StepError {
    /// The request never got a response (connect, timeout, reset).
    #[error("step request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with something other than 2xx.
    #[error("step server returned {status}: {body}")]
    Status {
        status: StatusCode,
        body: String,
    },

    /// The response body was not a JSON grid.
    #[error("step response is not a grid: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response was a grid, just not one this client can use.
    #[error("step response has the wrong shape: {0}")]
    Shape(#[from] GridError),
}

/// A configuration variable held a value that could not be used.
#[derive(Debug, thiserror::Error)]
#[error("invalid {name}={value:?}: {reason}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
    pub reason: String,
}
