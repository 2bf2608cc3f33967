//! Guards for the submission request and response bodies.

use serde_json::Value;

use crate::enums::is_submission_status;
use crate::fields::Fields;
use crate::primitives::{is_bool, is_string};
use crate::queue::{is_queue_item, is_scrape_config};

pub fn is_submit_job_request(value: &Value) -> bool {
    let Some(f) = Fields::of("SubmitJobRequest", value) else {
        return false;
    };

    f.required("url", is_string)
        && f.optional("company_name", is_string)
        && f.optional("company_url", is_string)
        && f.optional("generate_now", is_bool)
}

pub fn is_submit_job_response(value: &Value) -> bool {
    let Some(f) = Fields::of("SubmitJobResponse", value) else {
        return false;
    };

    f.required("status", is_submission_status)
        && f.required("message", is_string)
        && f.optional("queue_item_id", is_string)
        && f.optional("queue_item", is_queue_item)
}

pub fn is_submit_scrape_request(value: &Value) -> bool {
    let Some(f) = Fields::of("SubmitScrapeRequest", value) else {
        return false;
    };

    f.nullable("scrape_config", is_scrape_config)
}

pub fn is_submit_scrape_response(value: &Value) -> bool {
    let Some(f) = Fields::of("SubmitScrapeResponse", value) else {
        return false;
    };

    f.required("status", is_submission_status)
        && f.required("message", is_string)
        && f.optional("queue_item_id", is_string)
}
