//! HTTP generation model client
//!
//! Talks to a text-generation-inference style endpoint: prompt and
//! sampling parameters in, `generated_text` out. The model itself stays
//! opaque behind the `GenerationModel` trait.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use ragkit_core::{Error, GenerationModel, Result, SamplingParams};

pub struct HttpGenerator {
    client: Client,
    endpoint: String,
    model_id: String,
}

#[derive(Serialize)]
struct GenerateParameters {
    temperature: f32,
    top_p: f32,
    repetition_penalty: f32,
    max_new_tokens: u32,
    do_sample: bool,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: GenerateParameters,
    model: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    generated_text: String,
}

impl HttpGenerator {
    pub fn new(endpoint: impl Into<String>, model_id: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            model_id: model_id.into(),
        })
    }
}

#[async_trait]
impl GenerationModel for HttpGenerator {
    async fn generate(&self, prompt: &str, params: &SamplingParams) -> Result<String> {
        let request_body = GenerateRequest {
            inputs: prompt,
            parameters: GenerateParameters {
                temperature: params.temperature,
                top_p: params.top_p,
                repetition_penalty: params.repetition_penalty,
                max_new_tokens: params.max_new_tokens,
                do_sample: true,
            },
            model: &self.model_id,
        };

        let url = format!("{}/generate", self.endpoint);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::Generation(format!(
                "Inference request failed with status {}: {}",
                status, error_text
            )));
        }

        let data: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        if data.generated_text.trim().is_empty() {
            return Err(Error::Generation(
                "Empty response from inference endpoint".to_string(),
            ));
        }

        Ok(data.generated_text)
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
