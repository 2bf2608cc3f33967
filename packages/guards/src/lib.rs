//! Runtime guards for the shared job-finder types.
//!
//! Values read from the document store or parsed from HTTP bodies arrive as
//! untyped `serde_json::Value`s. Each guard inspects one such value and
//! reports whether it conforms to a named schema:
//!
//! - Primitives: objects, string arrays, URLs, emails, date-like values
//! - Enumerations: membership in each closed literal set
//! - Entities: queue items, job matches, content items, configuration
//! - Envelopes: the `ApiResponse` success/error union
//!
//! A guard never panics and never returns an error; non-conformance is
//! `false`. [`Schema::narrow`] combines a guard with decoding into the typed
//! value from `shared_types`.

mod api;
mod content;
mod enums;
mod fields;
mod job_match;
mod primitives;
mod queue;
mod requests;
mod schema;
mod settings;

pub use api::{
    has_error_code, is_api_error, is_api_error_body, is_api_response, is_api_response_of,
    is_api_success,
};
pub use content::{
    is_accomplishment_item, is_company_item, is_content_item, is_education_item,
    is_profile_section_item, is_project_item, is_skill_group_item, variant_guard,
};
pub use enums::{
    is_ai_provider, is_api_error_code, is_content_item_type, is_content_visibility,
    is_job_sub_task, is_match_priority, is_queue_item_type, is_queue_source, is_queue_status,
    is_submission_status,
};
pub use job_match::is_job_match;
pub use primitives::{
    is_date_like, is_iso_date_string, is_non_empty_array, is_non_empty_string, is_object,
    is_string_array, is_valid_email, is_valid_url,
};
pub use queue::{is_queue_item, is_scrape_config};
pub use requests::{
    is_submit_job_request, is_submit_job_response, is_submit_scrape_request,
    is_submit_scrape_response,
};
pub use schema::{Schema, SchemaError, narrow_api_response};
pub use settings::{is_ai_settings, is_queue_settings, is_stop_list};

// Re-export core types for convenience
pub use shared_types::{
    ApiResponse, ContentItem, JobMatch, QueueItem, create_error_response,
    create_success_response,
};
