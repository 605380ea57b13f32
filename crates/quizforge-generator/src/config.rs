//! Configuration for the generator

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Maximum chunk size (characters)
    pub chunk_size: usize,

    /// Characters shared by consecutive chunks
    pub chunk_overlap: usize,

    /// Upper bound on questions per request
    pub max_questions: u32,

    /// Maximum time for a single model call (seconds)
    pub generation_timeout_secs: u64,

    /// Name recorded in result metadata
    pub model_name: String,
}

impl GeneratorConfig {
    /// Get the generation timeout as a Duration
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be greater than 0".to_string());
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(format!(
                "chunk_overlap ({}) must be less than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            ));
        }
        if self.max_questions == 0 {
            return Err("max_questions must be at least 1".to_string());
        }
        if self.generation_timeout_secs == 0 {
            return Err("generation_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 100,
            max_questions: 20,
            generation_timeout_secs: 120,
            model_name: "llm".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Compact preset: smaller windows, shorter timeout
    pub fn compact() -> Self {
        Self {
            chunk_size: 500,
            chunk_overlap: 50,
            max_questions: 10,
            generation_timeout_secs: 60,
            ..Self::default()
        }
    }

    /// Generous preset: larger windows, longer timeout for slow local models
    pub fn generous() -> Self {
        Self {
            chunk_size: 2000,
            chunk_overlap: 200,
            max_questions: 50,
            generation_timeout_secs: 300,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
