//! Membership guards for the closed enumerations.
//!
//! Each guard delegates to the enumeration's own `is_member`, which is
//! generated from the same literal list as the Rust type and its serde names.

use serde_json::Value;
use shared_types::{
    AiProvider, ApiErrorCode, ContentItemType, ContentVisibility, JobSubTask, MatchPriority,
    QueueItemType, QueueSource, QueueStatus, SubmissionStatus,
};

macro_rules! membership_guard {
    ($(#[$attr:meta])* $fn_name:ident => $ty:ty) => {
        $(#[$attr])*
        pub fn $fn_name(value: &Value) -> bool {
            value.as_str().is_some_and(<$ty>::is_member)
        }
    };
}

membership_guard!(
    /// One of the queue status literals.
    is_queue_status => QueueStatus
);
membership_guard!(is_queue_item_type => QueueItemType);
membership_guard!(is_queue_source => QueueSource);
membership_guard!(is_job_sub_task => JobSubTask);
membership_guard!(is_ai_provider => AiProvider);
membership_guard!(
    /// `High`, `Medium` or `Low`, capitalized exactly.
    is_match_priority => MatchPriority
);
membership_guard!(is_content_item_type => ContentItemType);
membership_guard!(is_content_visibility => ContentVisibility);
membership_guard!(is_submission_status => SubmissionStatus);
membership_guard!(
    /// One of the conventional API error codes. Envelopes accept any code string.
    is_api_error_code => ApiErrorCode
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_declared_literal_is_accepted() {
        for status in QueueStatus::ALL {
            assert!(is_queue_status(&json!(status.as_str())));
        }
        for kind in ContentItemType::ALL {
            assert!(is_content_item_type(&json!(kind)));
        }
        for provider in AiProvider::ALL {
            assert!(is_ai_provider(&serde_json::to_value(provider).unwrap()));
        }
    }

    #[test]
    fn test_rejects_outside_literals() {
        assert!(!is_queue_status(&json!("archived")));
        assert!(!is_queue_status(&json!("PENDING")));
        assert!(!is_queue_status(&json!(null)));
        assert!(!is_queue_item_type(&json!("scrape_job")));
        assert!(!is_queue_source(&json!("user-submission")));
        assert!(!is_match_priority(&json!("high")));
        assert!(!is_ai_provider(&json!("anthropic")));
        assert!(!is_content_visibility(&json!(["draft"])));
        assert!(is_api_error_code(&json!("NOT_FOUND")));
        assert!(!is_api_error_code(&json!("not_found")));
    }
}
