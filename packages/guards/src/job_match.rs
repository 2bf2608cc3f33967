//! Guard for AI match results.

use serde_json::Value;

use crate::enums::is_match_priority;
use crate::fields::Fields;
use crate::primitives::{is_date_like, is_number, is_string, is_string_array};

/// String-array fields every job match carries. Empty arrays are valid.
const STRING_ARRAY_FIELDS: [&str; 6] = [
    "matched_skills",
    "missing_skills",
    "match_reasons",
    "key_strengths",
    "potential_concerns",
    "customization_recommendations",
];

/// Check that `value` is a job match.
///
/// `resume_intake_data` is not inspected.
pub fn is_job_match(value: &Value) -> bool {
    let Some(f) = Fields::of("JobMatch", value) else {
        return false;
    };

    f.optional("id", is_string)
        && f.required("url", is_string)
        && f.required("company_name", is_string)
        && f.required("job_title", is_string)
        && f.nullable("location", is_string)
        && f.nullable("salary_range", is_string)
        && f.required("match_score", is_number)
        && STRING_ARRAY_FIELDS
            .iter()
            .all(|key| f.required(key, is_string_array))
        && f.required("experience_match", is_number)
        && f.required("application_priority", is_match_priority)
        && f.required("analyzed_at", is_date_like)
        && f.required("created_at", is_date_like)
        && f.nullable("submitted_by", is_string)
        && f.required("queue_item_id", is_string)
}
