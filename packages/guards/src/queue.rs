//! Guards for queue items and their nested scrape configuration.

use serde_json::Value;

use crate::enums::{is_job_sub_task, is_queue_item_type, is_queue_source, is_queue_status};
use crate::fields::Fields;
use crate::primitives::{is_count, is_date_like, is_number, is_object, is_string, is_string_array};

/// Check that `value` is a queue item.
///
/// `pipeline_state` is only required to be an object; its contents belong to
/// the worker stage that wrote it.
pub fn is_queue_item(value: &Value) -> bool {
    let Some(f) = Fields::of("QueueItem", value) else {
        return false;
    };

    f.optional("id", is_string)
        && f.required("type", is_queue_item_type)
        && f.required("status", is_queue_status)
        && f.required("url", is_string)
        && f.required("company_name", is_string)
        && f.nullable("company_id", is_string)
        && f.required("source", is_queue_source)
        && f.nullable("submitted_by", is_string)
        && f.required("retry_count", is_count)
        && f.required("max_retries", is_count)
        && f.optional("result_message", is_string)
        && f.optional("error_details", is_string)
        && f.required("created_at", is_date_like)
        && f.required("updated_at", is_date_like)
        && f.nullable("processed_at", is_date_like)
        && f.nullable("completed_at", is_date_like)
        && f.nullable("scrape_config", is_scrape_config)
        && f.nullable("sub_task", is_job_sub_task)
        && f.nullable("pipeline_state", is_object)
        && f.nullable("parent_item_id", is_string)
}

/// Check that `value` is a scrape configuration. Every field is optional.
pub fn is_scrape_config(value: &Value) -> bool {
    let Some(f) = Fields::of("ScrapeConfig", value) else {
        return false;
    };

    f.nullable("target_matches", is_count)
        && f.nullable("max_sources", is_count)
        && f.nullable("source_ids", is_string_array)
        && f.nullable("min_match_score", is_number)
}
