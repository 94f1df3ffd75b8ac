//! Inference configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for model loading and generation inference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the text-generation inference endpoint
    pub inference_url: String,
    /// Whether an accelerator is available for full-size models
    pub accelerator: bool,
}

impl InferenceConfig {
    /// Create configuration from environment variables, with defaults
    /// for every knob so the pipeline runs with zero configuration.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let inference_url = env::var("RAGKIT_INFERENCE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        let accelerator = env::var("RAGKIT_ACCELERATOR")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            inference_url,
            accelerator,
        }
    }

    /// Create configuration with explicit values
    pub fn new(inference_url: impl Into<String>, accelerator: bool) -> Self {
        Self {
            inference_url: inference_url.into(),
            accelerator,
        }
    }
}
