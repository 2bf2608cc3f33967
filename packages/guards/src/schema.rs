//! Narrowing: guard an untyped value, then decode it into its typed form.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared_types::{
    AISettings, AccomplishmentItem, ApiResponse, CompanyItem, ContentItem, EducationItem,
    JobMatch, ProfileSectionItem, ProjectItem, QueueItem, QueueSettings, ScrapeConfig,
    SkillGroupItem, StopList, SubmitJobRequest, SubmitJobResponse, SubmitScrapeRequest,
    SubmitScrapeResponse,
};
use thiserror::Error;

/// Errors from [`Schema::narrow`].
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The guard rejected the value.
    #[error("value does not conform to {schema}")]
    Mismatch { schema: &'static str },

    /// The guard accepted the value but decoding it failed.
    #[error("failed to decode {schema}: {source}")]
    Decode {
        schema: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl SchemaError {
    /// Name of the schema the value was checked against.
    pub fn schema(&self) -> &'static str {
        match self {
            SchemaError::Mismatch { schema } | SchemaError::Decode { schema, .. } => schema,
        }
    }
}

/// A typed entity with a runtime guard for its untyped form.
pub trait Schema: DeserializeOwned {
    /// Schema name used in logs and errors.
    const NAME: &'static str;

    /// The guard for this schema.
    fn matches(value: &Value) -> bool;

    /// Guard `value` and decode it. Date-like fields come out as `DateTime<Utc>`.
    fn narrow(value: &Value) -> Result<Self, SchemaError> {
        if !Self::matches(value) {
            tracing::debug!(schema = Self::NAME, "value rejected by guard");
            return Err(SchemaError::Mismatch { schema: Self::NAME });
        }
        Self::deserialize(value).map_err(|source| {
            tracing::debug!(schema = Self::NAME, error = %source, "decode failed after guard");
            SchemaError::Decode {
                schema: Self::NAME,
                source,
            }
        })
    }
}

macro_rules! impl_schema {
    ($($ty:ty => $guard:path),+ $(,)?) => {
        $(
            impl Schema for $ty {
                const NAME: &'static str = stringify!($ty);

                fn matches(value: &Value) -> bool {
                    $guard(value)
                }
            }
        )+
    };
}

impl_schema! {
    QueueItem => crate::is_queue_item,
    ScrapeConfig => crate::is_scrape_config,
    JobMatch => crate::is_job_match,
    ContentItem => crate::is_content_item,
    CompanyItem => crate::is_company_item,
    ProjectItem => crate::is_project_item,
    SkillGroupItem => crate::is_skill_group_item,
    EducationItem => crate::is_education_item,
    ProfileSectionItem => crate::is_profile_section_item,
    AccomplishmentItem => crate::is_accomplishment_item,
    StopList => crate::is_stop_list,
    QueueSettings => crate::is_queue_settings,
    AISettings => crate::is_ai_settings,
    SubmitJobRequest => crate::is_submit_job_request,
    SubmitJobResponse => crate::is_submit_job_response,
    SubmitScrapeRequest => crate::is_submit_scrape_request,
    SubmitScrapeResponse => crate::is_submit_scrape_response,
}

/// Guard a response envelope and decode it, payload included.
///
/// The envelope guard does not look inside `data`, so a payload that does
/// not decode as `T` surfaces as [`SchemaError::Decode`].
pub fn narrow_api_response<T: DeserializeOwned>(
    value: &Value,
) -> Result<ApiResponse<T>, SchemaError> {
    const NAME: &str = "ApiResponse";
    if !crate::is_api_response(value) {
        tracing::debug!(schema = NAME, "value rejected by guard");
        return Err(SchemaError::Mismatch { schema: NAME });
    }
    ApiResponse::<T>::deserialize(value).map_err(|source| {
        tracing::debug!(schema = NAME, error = %source, "decode failed after guard");
        SchemaError::Decode {
            schema: NAME,
            source,
        }
    })
}
