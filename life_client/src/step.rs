// step.rs - Step endpoint client
//
// One step is one stateless exchange: the whole grid goes out as a JSON
// matrix and the next generation comes back in the same shape.

use std::time::Duration;

use life_grid::{Grid, GridError};
use reqwest::Url;
use tracing::debug;

use crate::error::StepError;

#[derive(Debug, Clone)]
pub struct StepClient {
    client: reqwest::Client,
    url: Url,
    timeout: Option<Duration>,
}

impl StepClient {
    pub fn new(url: Url, timeout: Option<Duration>) -> Self {
        Self { client: reqwest::Client::new(), url, timeout }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Send `grid` to the step endpoint and return the next generation.
    ///
    /// The reply must be a 2xx carrying a grid of the same dimension as the
    /// one sent; anything else is an error and nothing is returned.
    pub async fn step(&self, grid: &Grid) -> Result<Grid, StepError> {
        // `json` also sets `Content-Type: application/json`
        let mut request = self.client.post(self.url.clone()).json(grid);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(StepError::Status { status, body });
        }

        // Decoded by hand so a bad body is a Decode error, not a Transport one
        let bytes = response.bytes().await?;
        let next: Grid = serde_json::from_slice(&bytes)?;

        if next.size() != grid.size() {
            return Err(GridError::Size { expected: grid.size(), actual: next.size() }.into());
        }

        debug!(size = next.size(), live = next.live_count(), "step response accepted");
        Ok(next)
    }
}
