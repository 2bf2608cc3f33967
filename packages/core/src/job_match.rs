//! AI evaluation of how well a job fits the candidate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

literal_enum! {
    /// How urgently the candidate should apply.
    pub enum MatchPriority {
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
}

/// A scored job-to-candidate fit, linked to the queue item that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub url: String,
    pub company_name: String,
    pub job_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    /// Overall fit, 0-100.
    pub match_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_reasons: Vec<String>,
    pub key_strengths: Vec<String>,
    pub potential_concerns: Vec<String>,
    pub customization_recommendations: Vec<String>,
    /// Experience-level fit, 0-100.
    pub experience_match: f64,
    pub application_priority: MatchPriority,
    /// Resume tailoring hints; shape owned by the analysis prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_intake_data: Option<serde_json::Value>,
    #[serde(with = "crate::date_like")]
    pub analyzed_at: DateTime<Utc>,
    #[serde(with = "crate::date_like")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub submitted_by: Option<String>,
    pub queue_item_id: String,
}
