//! Request and response bodies for the submission endpoints.

use serde::{Deserialize, Serialize};

use crate::{QueueItem, ScrapeConfig};

literal_enum! {
    /// Outcome of a submission.
    pub enum SubmissionStatus {
        /// Queued for processing.
        Success => "success",
        /// Not queued because it already exists or is excluded.
        Skipped => "skipped",
        Error => "error",
    }
}

/// Body of `POST /submit-job`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitJobRequest {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_url: Option<String>,
    /// Generate tailored documents right after analysis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_now: Option<bool>,
}

impl SubmitJobRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            company_name: None,
            company_url: None,
            generate_now: None,
        }
    }

    pub fn with_company(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitJobResponse {
    pub status: SubmissionStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_item: Option<QueueItem>,
}

/// Body of `POST /submit-scrape`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmitScrapeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrape_config: Option<ScrapeConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitScrapeResponse {
    pub status: SubmissionStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_item_id: Option<String>,
}
