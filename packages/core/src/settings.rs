//! Configuration documents read by the worker at startup and on change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

literal_enum! {
    /// Model vendor used for job analysis.
    #[derive(Default)]
    pub enum AiProvider {
        #[default]
        Claude => "claude",
        OpenAi => "openai",
        Gemini => "gemini",
    }
}

/// Companies, keywords and domains the worker never processes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopList {
    pub excluded_companies: Vec<String>,
    pub excluded_keywords: Vec<String>,
    pub excluded_domains: Vec<String>,
    #[serde(with = "crate::date_like")]
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl Default for StopList {
    fn default() -> Self {
        Self {
            excluded_companies: Vec::new(),
            excluded_keywords: Vec::new(),
            excluded_domains: Vec::new(),
            updated_at: DateTime::UNIX_EPOCH,
            updated_by: String::new(),
        }
    }
}

/// Retry and timeout behavior of the queue worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueSettings {
    /// Default max retries for new queue items.
    pub max_retries: u32,
    /// Delay before a failed item is retried (seconds).
    pub retry_delay_seconds: u64,
    /// Processing time after which an item is considered stuck (seconds).
    pub processing_timeout: u64,
    #[serde(with = "crate::date_like")]
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay_seconds: 60,
            processing_timeout: 300,
            updated_at: DateTime::UNIX_EPOCH,
            updated_by: String::new(),
        }
    }
}

impl QueueSettings {
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_processing_timeout(mut self, seconds: u64) -> Self {
        self.processing_timeout = seconds;
        self
    }
}

/// Model selection and spend limits for job analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AISettings {
    pub provider: AiProvider,
    pub model: String,
    /// Matches scoring below this are discarded (0-100).
    pub min_match_score: f64,
    /// Daily spend ceiling in USD.
    pub cost_budget_daily: f64,
    #[serde(with = "crate::date_like")]
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl Default for AISettings {
    fn default() -> Self {
        Self {
            provider: AiProvider::default(),
            model: "claude-3-5-sonnet".to_string(),
            min_match_score: 70.0,
            cost_budget_daily: 50.0,
            updated_at: DateTime::UNIX_EPOCH,
            updated_by: String::new(),
        }
    }
}

impl AISettings {
    pub fn with_provider(mut self, provider: AiProvider, model: impl Into<String>) -> Self {
        self.provider = provider;
        self.model = model.into();
        self
    }

    pub fn with_min_match_score(mut self, score: f64) -> Self {
        self.min_match_score = score;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let settings: QueueSettings = serde_json::from_value(json!({ "max_retries": 5 })).unwrap();
        assert_eq!(settings.max_retries, 5);
        assert_eq!(settings.retry_delay_seconds, 60);
        assert_eq!(settings.processing_timeout, 300);

        let ai: AISettings = serde_json::from_value(json!({ "provider": "gemini" })).unwrap();
        assert_eq!(ai.provider, AiProvider::Gemini);
        assert_eq!(ai.min_match_score, 70.0);
    }

    #[test]
    fn test_provider_defaults_to_claude() {
        assert_eq!(AiProvider::default(), AiProvider::Claude);

        let ai: AISettings = serde_json::from_value(json!({ "model": "m" })).unwrap();
        assert_eq!(ai.provider, AiProvider::Claude);
        assert_eq!(ai.model, "m");
    }
}
