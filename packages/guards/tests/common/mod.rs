#![allow(dead_code)]

use serde_json::{Value, json};
use shared_types::ContentItemType;

/// Route guard logs to the test harness. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("type_guards=trace")
        .with_test_writer()
        .try_init();
}

pub fn queue_item() -> Value {
    json!({
        "type": "job",
        "status": "pending",
        "url": "https://boards.example.com/acme/jobs/42",
        "company_name": "Acme",
        "company_id": null,
        "source": "user_submission",
        "submitted_by": "user-1",
        "retry_count": 0,
        "max_retries": 3,
        "created_at": "2024-05-01T09:00:00.000Z",
        "updated_at": { "seconds": 1_714_554_000i64, "nanoseconds": 0 }
    })
}

pub fn job_match() -> Value {
    json!({
        "url": "https://boards.example.com/acme/jobs/42",
        "company_name": "Acme",
        "job_title": "Senior Rust Engineer",
        "location": "Remote",
        "match_score": 88,
        "matched_skills": ["Rust", "Tokio"],
        "missing_skills": [],
        "match_reasons": ["Strong systems background"],
        "key_strengths": ["Async Rust"],
        "potential_concerns": [],
        "customization_recommendations": ["Lead with the queue rewrite"],
        "experience_match": 75.5,
        "application_priority": "High",
        "resume_intake_data": { "target_summary": "anything goes here" },
        "analyzed_at": "2024-05-01T09:05:00Z",
        "created_at": "2024-05-01T09:05:00Z",
        "submitted_by": null,
        "queue_item_id": "q-42"
    })
}

/// A valid content item of the given variant.
pub fn content_item(kind: ContentItemType) -> Value {
    let mut item = json!({
        "id": format!("{}-1", kind.as_str()),
        "type": kind.as_str(),
        "user_id": "user-1",
        "parent_id": null,
        "order": 0,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z",
        "created_by": "user-1",
        "updated_by": "user-1",
        "visibility": "published"
    });
    let fields = variant_fields(kind);
    if let (Some(target), Value::Object(extra)) = (item.as_object_mut(), fields) {
        target.extend(extra);
    }
    item
}

/// The required fields of one variant, without base fields.
pub fn variant_fields(kind: ContentItemType) -> Value {
    match kind {
        ContentItemType::Company => json!({
            "company": "Acme",
            "role": "Staff Engineer",
            "end_date": null,
            "technologies": ["Rust"]
        }),
        ContentItemType::Project => json!({
            "name": "Queue rewrite",
            "links": [{ "label": "repo", "url": "https://git.example.com/q" }]
        }),
        ContentItemType::SkillGroup => json!({
            "category": "Languages",
            "skills": ["Rust", "TypeScript", "Python"]
        }),
        ContentItemType::Education => json!({
            "institution": "State University",
            "degree": "BSc"
        }),
        ContentItemType::ProfileSection => json!({
            "heading": "Summary",
            "content": "Backend engineer."
        }),
        ContentItemType::Accomplishment => json!({
            "description": "Cut p99 latency by 40%"
        }),
    }
}

pub fn stop_list() -> Value {
    json!({
        "excluded_companies": ["Initech"],
        "excluded_keywords": [],
        "excluded_domains": ["spam.example"],
        "updated_at": "2024-01-01T00:00:00Z",
        "updated_by": "admin"
    })
}

pub fn queue_settings() -> Value {
    json!({
        "max_retries": 3,
        "retry_delay_seconds": 60,
        "processing_timeout": 300,
        "updated_at": "2024-01-01T00:00:00Z",
        "updated_by": "admin"
    })
}

pub fn ai_settings() -> Value {
    json!({
        "provider": "claude",
        "model": "claude-3-5-sonnet",
        "min_match_score": 70,
        "cost_budget_daily": 50.0,
        "updated_at": "2024-01-01T00:00:00Z",
        "updated_by": "admin"
    })
}

/// `base` with `key` replaced by `value`.
pub fn with(base: &Value, key: &str, value: Value) -> Value {
    let mut out = base.clone();
    if let Some(map) = out.as_object_mut() {
        map.insert(key.to_string(), value);
    }
    out
}

/// `base` with `key` removed.
pub fn without(base: &Value, key: &str) -> Value {
    let mut out = base.clone();
    if let Some(map) = out.as_object_mut() {
        map.remove(key);
    }
    out
}
