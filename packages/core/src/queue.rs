//! Queue item types for the processing queue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

literal_enum! {
    /// Lifecycle status of a queue item.
    pub enum QueueStatus {
        /// Waiting to be picked up by the worker.
        Pending => "pending",
        /// Currently being processed.
        Processing => "processing",
        /// Finished and produced a result.
        Success => "success",
        /// Gave up after exhausting retries.
        Failed => "failed",
        /// Deliberately not processed (duplicate, stop list hit).
        Skipped => "skipped",
        /// Rejected by the pre-analysis filter.
        Filtered => "filtered",
    }
}

impl QueueStatus {
    /// Check if the item will not be touched again by the worker.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            QueueStatus::Success | QueueStatus::Failed | QueueStatus::Skipped | QueueStatus::Filtered
        )
    }
}

literal_enum! {
    /// What a queue item points at.
    pub enum QueueItemType {
        Job => "job",
        Company => "company",
        Scrape => "scrape",
    }
}

literal_enum! {
    /// Where a queue item was submitted from.
    pub enum QueueSource {
        UserSubmission => "user_submission",
        AutomatedScan => "automated_scan",
        Scraper => "scraper",
        Webhook => "webhook",
        Email => "email",
    }
}

literal_enum! {
    /// Stage of the multi-step job pipeline a queue item is in.
    pub enum JobSubTask {
        Scrape => "scrape",
        Filter => "filter",
        Analyze => "analyze",
        Save => "save",
    }
}

impl JobSubTask {
    /// The stage that follows this one, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            JobSubTask::Scrape => Some(JobSubTask::Filter),
            JobSubTask::Filter => Some(JobSubTask::Analyze),
            JobSubTask::Analyze => Some(JobSubTask::Save),
            JobSubTask::Save => None,
        }
    }
}

/// Parameters for a `scrape` queue item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Stop once this many matches have been saved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_matches: Option<u32>,
    /// Maximum number of sources to visit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sources: Option<u32>,
    /// Restrict the scrape to these sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ids: Option<Vec<String>>,
    /// Override the configured minimum match score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_match_score: Option<f64>,
}

/// A unit of work in the processing queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueItem {
    /// Document id, absent until persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub item_type: QueueItemType,
    pub status: QueueStatus,
    pub url: String,
    pub company_name: String,
    #[serde(default)]
    pub company_id: Option<String>,
    pub source: QueueSource,
    #[serde(default)]
    pub submitted_by: Option<String>,
    pub retry_count: u32,
    pub max_retries: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
    #[serde(with = "crate::date_like")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::date_like")]
    pub updated_at: DateTime<Utc>,
    #[serde(
        default,
        with = "crate::date_like::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "crate::date_like::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrape_config: Option<ScrapeConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_task: Option<JobSubTask>,
    /// Stage-to-stage scratch data; its contents belong to the worker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_state: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_item_id: Option<String>,
}

impl QueueItem {
    /// Create a new pending item.
    pub fn new(
        item_type: QueueItemType,
        url: impl Into<String>,
        company_name: impl Into<String>,
        source: QueueSource,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            item_type,
            status: QueueStatus::Pending,
            url: url.into(),
            company_name: company_name.into(),
            company_id: None,
            source,
            submitted_by: None,
            retry_count: 0,
            max_retries: 3,
            result_message: None,
            error_details: None,
            created_at: now,
            updated_at: now,
            processed_at: None,
            completed_at: None,
            scrape_config: None,
            sub_task: None,
            pipeline_state: None,
            parent_item_id: None,
        }
    }

    /// Create a pending `scrape` item.
    pub fn scrape(config: ScrapeConfig, source: QueueSource) -> Self {
        let mut item = Self::new(QueueItemType::Scrape, "", "", source);
        item.scrape_config = Some(config);
        item
    }

    /// Set who submitted this item.
    pub fn with_submitted_by(mut self, user_id: impl Into<String>) -> Self {
        self.submitted_by = Some(user_id.into());
        self
    }

    /// Set the max retries for this item.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Place this item at a pipeline stage.
    pub fn with_sub_task(mut self, sub_task: JobSubTask) -> Self {
        self.sub_task = Some(sub_task);
        self
    }

    /// Check if another attempt is allowed.
    pub fn can_retry(&self) -> bool {
        self.status == QueueStatus::Failed && self.retry_count < self.max_retries
    }
}
