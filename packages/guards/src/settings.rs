//! Guards for the configuration documents.

use serde_json::Value;

use crate::enums::is_ai_provider;
use crate::fields::Fields;
use crate::primitives::{is_count, is_date_like, is_number, is_string, is_string_array};

pub fn is_stop_list(value: &Value) -> bool {
    let Some(f) = Fields::of("StopList", value) else {
        return false;
    };

    f.required("excluded_companies", is_string_array)
        && f.required("excluded_keywords", is_string_array)
        && f.required("excluded_domains", is_string_array)
        && f.required("updated_at", is_date_like)
        && f.required("updated_by", is_string)
}

pub fn is_queue_settings(value: &Value) -> bool {
    let Some(f) = Fields::of("QueueSettings", value) else {
        return false;
    };

    f.required("max_retries", is_count)
        && f.required("retry_delay_seconds", |v| v.is_u64())
        && f.required("processing_timeout", |v| v.is_u64())
        && f.required("updated_at", is_date_like)
        && f.required("updated_by", is_string)
}

pub fn is_ai_settings(value: &Value) -> bool {
    let Some(f) = Fields::of("AISettings", value) else {
        return false;
    };

    f.required("provider", is_ai_provider)
        && f.required("model", is_string)
        && f.required("min_match_score", is_number)
        && f.required("cost_budget_daily", is_number)
        && f.required("updated_at", is_date_like)
        && f.required("updated_by", is_string)
}
