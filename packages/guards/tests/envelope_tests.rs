#![allow(clippy::disallowed_methods)]

mod common;

use serde_json::{Value, json};
use shared_types::{ApiErrorCode, ApiResponse, JobMatch, SubmitJobResponse};
use std::error::Error;
use type_guards::{
    Schema, SchemaError, create_error_response, create_success_response, has_error_code,
    is_api_error, is_api_response, is_api_success, narrow_api_response,
};

#[test]
fn test_constructors_always_satisfy_the_guard() -> Result<(), Box<dyn Error>> {
    let payloads = [
        json!({}),
        json!(null),
        json!([1, 2, 3]),
        json!("text"),
        common::queue_item(),
    ];
    for data in payloads {
        for message in [None, Some("done".to_string())] {
            let response = create_success_response(data.clone(), message);
            assert!(is_api_response(&serde_json::to_value(&response)?));
        }
    }

    for code in ApiErrorCode::ALL {
        for details in [None, Some(json!({ "field": "url" })), Some(Value::Null)] {
            let response: ApiResponse<Value> =
                create_error_response(*code, "something went wrong", details);
            assert!(is_api_response(&serde_json::to_value(&response)?));
        }
    }

    let custom: ApiResponse<Value> = create_error_response("QUOTA_EXHAUSTED", "", None);
    assert!(is_api_response(&serde_json::to_value(&custom)?));
    Ok(())
}

#[test]
fn test_constructors_omit_absent_optionals() -> Result<(), Box<dyn Error>> {
    let success = serde_json::to_value(create_success_response(1, None))?;
    assert!(success.get("message").is_none());

    let error = serde_json::to_value(create_error_response::<()>("X", "m", None))?;
    assert!(error["error"].get("details").is_none());
    assert!(error.get("data").is_none());
    Ok(())
}

#[test]
fn test_typed_narrowing_helpers() {
    let ok = create_success_response(vec!["a".to_string()], None);
    assert!(is_api_success(&ok));
    assert!(!is_api_error(&ok));
    assert_eq!(ok.as_success().map(|s| s.data.len()), Some(1));

    let err: ApiResponse<Vec<String>> =
        create_error_response(ApiErrorCode::RateLimitExceeded, "slow down", None);
    assert!(is_api_error(&err));
    let failure = err.as_error().expect("error arm");
    assert!(has_error_code(failure, "RATE_LIMIT_EXCEEDED"));
    assert!(!has_error_code(failure, "rate_limit_exceeded"));
    assert!(!has_error_code(failure, "RATE_LIMIT"));
}

#[test]
fn test_narrow_api_response_decodes_payload() -> Result<(), Box<dyn Error>> {
    common::init_tracing();
    let wire = json!({ "success": true, "data": common::job_match(), "message": "found" });

    let response: ApiResponse<JobMatch> = narrow_api_response(&wire)?;
    let success = response.as_success().expect("success arm");
    assert_eq!(success.data.queue_item_id, "q-42");
    assert_eq!(success.message.as_deref(), Some("found"));

    let bad_payload = json!({ "success": true, "data": { "not": "a match" } });
    let err = narrow_api_response::<JobMatch>(&bad_payload).unwrap_err();
    assert!(matches!(err, SchemaError::Decode { .. }));

    // Backends that serialize an absent message as null
    let null_message = json!({ "success": true, "data": common::job_match(), "message": null });
    let response: ApiResponse<JobMatch> = narrow_api_response(&null_message)?;
    assert_eq!(response.as_success().and_then(|s| s.message.as_deref()), None);

    let not_envelope = json!({ "ok": true });
    let err = narrow_api_response::<JobMatch>(&not_envelope).unwrap_err();
    assert!(matches!(err, SchemaError::Mismatch { schema: "ApiResponse" }));
    Ok(())
}

#[test]
fn test_submission_response_round_trip() -> Result<(), Box<dyn Error>> {
    let body = json!({
        "status": "skipped",
        "message": "already queued",
        "queue_item_id": "q-7"
    });
    let response = SubmitJobResponse::narrow(&body)?;
    assert_eq!(response.queue_item_id.as_deref(), Some("q-7"));

    let envelope = serde_json::to_value(create_success_response(response, None))?;
    assert!(is_api_response(&envelope));
    assert_eq!(envelope["data"]["status"], "skipped");
    Ok(())
}
