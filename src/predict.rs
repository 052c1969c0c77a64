//! # Prediction Client
//!
//! One GET per submission against the genderize.io API, name passed as a
//! query parameter. No retries, no timeout beyond reqwest's defaults; a
//! failed round-trip is reported once and the caller moves on.
use std::future::Future;

use reqwest::Client;
use tracing::debug;

use crate::{error::FetchError, models::Prediction};

/// Source of gender predictions. The production implementation talks to the
/// external service; tests substitute a stub.
pub trait Predict {
    fn fetch(&self, name: &str) -> impl Future<Output = Result<Prediction, FetchError>>;
}

pub struct PredictionClient {
    http: Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Predict for PredictionClient {
    async fn fetch(&self, name: &str) -> Result<Prediction, FetchError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("name", name)])
            .send()
            .await?;

        #[cfg(feature = "verbose")]
        println!("Status: {}\n", response.status());

        if !response.status().is_success() {
            debug!("Prediction request failed with status {}", response.status());
            return Err(FetchError::BadStatus);
        }

        let prediction: Prediction = response.json().await?;
        debug!(
            "Prediction for {}: {:?} ({})",
            prediction.name, prediction.gender, prediction.probability
        );

        Ok(prediction)
    }
}
