//! Shared domain types for the job-finder system.
//!
//! This crate contains the types exchanged between the API, the frontend and
//! the queue worker:
//! - QueueItem and its enumerations for the processing queue
//! - JobMatch for AI match results
//! - ContentItem and its six variants for resume content
//! - StopList, QueueSettings and AISettings configuration documents
//! - ApiResponse, the envelope every endpoint returns
//!
//! Runtime validation of untyped values lives in the `type_guards` crate.

#[macro_use]
mod literal_enum;

mod api;
mod content;
mod job_match;
mod queue;
mod requests;
mod settings;
mod timestamp;

pub use api::{
    ApiError, ApiErrorCode, ApiFailure, ApiResponse, ApiSuccess, create_error_response,
    create_success_response,
};
pub use content::{
    AccomplishmentItem, CompanyItem, ContentItem, ContentItemBase, ContentItemType,
    ContentVisibility, EducationItem, ProfileSectionItem, ProjectItem, ProjectLink,
    SkillGroupItem, SkillSubcategory,
};
pub use job_match::{JobMatch, MatchPriority};
pub use literal_enum::UnknownLiteral;
pub use queue::{JobSubTask, QueueItem, QueueItemType, QueueSource, QueueStatus, ScrapeConfig};
pub use requests::{
    SubmissionStatus, SubmitJobRequest, SubmitJobResponse, SubmitScrapeRequest,
    SubmitScrapeResponse,
};
pub use settings::{AISettings, AiProvider, QueueSettings, StopList};
pub use timestamp::{DateLike, RawTimestamp, TimestampError, date_like, to_iso_string};

/// Document-store collection holding queue items.
pub const QUEUE_COLLECTION: &str = "job-queue";
/// Document-store collection holding job matches.
pub const JOB_MATCHES_COLLECTION: &str = "job-matches";
/// Document-store collection holding content items.
pub const CONTENT_ITEMS_COLLECTION: &str = "content-items";
/// Document-store collection holding the configuration documents.
pub const CONFIG_COLLECTION: &str = "job-finder-config";

/// Document ids inside [`CONFIG_COLLECTION`].
pub mod config_docs {
    pub const STOP_LIST: &str = "stop-list";
    pub const QUEUE_SETTINGS: &str = "queue-settings";
    pub const AI_SETTINGS: &str = "ai-settings";
}
