//! Content items: the building blocks resumes and cover letters are composed from.
//!
//! A content item is exactly one of six variants, distinguished by its `type`
//! field. All variants share [`ContentItemBase`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

literal_enum! {
    /// Discriminator of a [`ContentItem`].
    pub enum ContentItemType {
        Company => "company",
        Project => "project",
        SkillGroup => "skill-group",
        Education => "education",
        ProfileSection => "profile-section",
        Accomplishment => "accomplishment",
    }
}

literal_enum! {
    /// Who can see a content item.
    pub enum ContentVisibility {
        Published => "published",
        Draft => "draft",
        Archived => "archived",
    }
}

/// Fields every content item carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItemBase {
    pub id: String,
    pub user_id: String,
    /// Enclosing item (e.g. the company a project belongs to).
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Position among siblings.
    pub order: i64,
    #[serde(with = "crate::date_like")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::date_like")]
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<ContentVisibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Employment at a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyItem {
    #[serde(flatten)]
    pub base: ContentItemBase,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// `None` while the position is current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accomplishments: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A link attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectItem {
    #[serde(flatten)]
    pub base: ContentItemBase,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accomplishments: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<ProjectLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// A named subset of skills inside a skill group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSubcategory {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroupItem {
    #[serde(flatten)]
    pub base: ContentItemBase,
    pub category: String,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategories: Option<Vec<SkillSubcategory>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    #[serde(flatten)]
    pub base: ContentItemBase,
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevant_courses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// Free-form section such as a summary or an objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSectionItem {
    #[serde(flatten)]
    pub base: ContentItemBase,
    pub heading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccomplishmentItem {
    #[serde(flatten)]
    pub base: ContentItemBase,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
}

/// One of the six content item variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentItem {
    #[serde(rename = "company")]
    Company(CompanyItem),
    #[serde(rename = "project")]
    Project(ProjectItem),
    #[serde(rename = "skill-group")]
    SkillGroup(SkillGroupItem),
    #[serde(rename = "education")]
    Education(EducationItem),
    #[serde(rename = "profile-section")]
    ProfileSection(ProfileSectionItem),
    #[serde(rename = "accomplishment")]
    Accomplishment(AccomplishmentItem),
}

impl ContentItem {
    /// The discriminator of this item.
    pub fn item_type(&self) -> ContentItemType {
        match self {
            ContentItem::Company(_) => ContentItemType::Company,
            ContentItem::Project(_) => ContentItemType::Project,
            ContentItem::SkillGroup(_) => ContentItemType::SkillGroup,
            ContentItem::Education(_) => ContentItemType::Education,
            ContentItem::ProfileSection(_) => ContentItemType::ProfileSection,
            ContentItem::Accomplishment(_) => ContentItemType::Accomplishment,
        }
    }

    /// The shared fields of this item.
    pub fn base(&self) -> &ContentItemBase {
        match self {
            ContentItem::Company(item) => &item.base,
            ContentItem::Project(item) => &item.base,
            ContentItem::SkillGroup(item) => &item.base,
            ContentItem::Education(item) => &item.base,
            ContentItem::ProfileSection(item) => &item.base,
            ContentItem::Accomplishment(item) => &item.base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    /// Check if this item should appear in generated documents.
    pub fn is_published(&self) -> bool {
        matches!(
            self.base().visibility,
            None | Some(ContentVisibility::Published)
        )
    }
}
