//! Guards for the six content item variants and their union.
//!
//! Each variant guard checks the shared base fields, its own discriminator
//! literal, and its variant fields. Because the discriminator is part of
//! every variant check, at most one variant guard accepts any given value.
//!
//! [`is_content_item`] reads the discriminator once and runs only the
//! matching variant guard.

use serde_json::Value;
use shared_types::ContentItemType;

use crate::enums::is_content_visibility;
use crate::fields::Fields;
use crate::primitives::{
    is_array_of, is_date_like, is_integer, is_object, is_string, is_string_array, is_valid_url,
};

/// Check that `value` is any content item.
///
/// An unrecognized discriminator is rejected without trying any variant.
pub fn is_content_item(value: &Value) -> bool {
    match discriminator(value) {
        Some(kind) => variant_guard(kind)(value),
        None => {
            tracing::trace!(schema = "ContentItem", "unknown or missing discriminator");
            false
        }
    }
}

/// The guard for one content item variant.
pub fn variant_guard(kind: ContentItemType) -> fn(&Value) -> bool {
    match kind {
        ContentItemType::Company => is_company_item,
        ContentItemType::Project => is_project_item,
        ContentItemType::SkillGroup => is_skill_group_item,
        ContentItemType::Education => is_education_item,
        ContentItemType::ProfileSection => is_profile_section_item,
        ContentItemType::Accomplishment => is_accomplishment_item,
    }
}

fn discriminator(value: &Value) -> Option<ContentItemType> {
    value
        .get("type")
        .and_then(Value::as_str)
        .and_then(ContentItemType::parse)
}

/// Open a variant check: object, base fields and discriminator literal.
fn variant<'a>(
    schema: &'static str,
    kind: ContentItemType,
    value: &'a Value,
) -> Option<Fields<'a>> {
    let f = Fields::of(schema, value)?;
    (f.literal("type", kind.as_str()) && has_base_fields(&f)).then_some(f)
}

fn has_base_fields(f: &Fields<'_>) -> bool {
    f.required("id", is_string)
        && f.required("user_id", is_string)
        && f.nullable("parent_id", is_string)
        && f.required("order", is_integer)
        && f.required("created_at", is_date_like)
        && f.required("updated_at", is_date_like)
        && f.required("created_by", is_string)
        && f.required("updated_by", is_string)
        && f.nullable("visibility", is_content_visibility)
        && f.nullable("tags", is_string_array)
}

pub fn is_company_item(value: &Value) -> bool {
    let Some(f) = variant("CompanyItem", ContentItemType::Company, value) else {
        return false;
    };

    f.required("company", is_string)
        && f.nullable("role", is_string)
        && f.nullable("location", is_string)
        && f.nullable("website", is_valid_url)
        && f.nullable("start_date", is_string)
        && f.nullable("end_date", is_string)
        && f.nullable("summary", is_string)
        && f.nullable("accomplishments", is_string_array)
        && f.nullable("technologies", is_string_array)
        && f.nullable("notes", is_string)
}

pub fn is_project_item(value: &Value) -> bool {
    let Some(f) = variant("ProjectItem", ContentItemType::Project, value) else {
        return false;
    };

    f.required("name", is_string)
        && f.nullable("description", is_string)
        && f.nullable("role", is_string)
        && f.nullable("start_date", is_string)
        && f.nullable("end_date", is_string)
        && f.nullable("accomplishments", is_string_array)
        && f.nullable("technologies", is_string_array)
        && f.nullable("links", |v| is_array_of(v, is_project_link))
        && f.nullable("context", is_string)
}

fn is_project_link(value: &Value) -> bool {
    let Some(f) = Fields::of("ProjectLink", value) else {
        return false;
    };
    f.required("label", is_string) && f.required("url", is_string)
}

pub fn is_skill_group_item(value: &Value) -> bool {
    let Some(f) = variant("SkillGroupItem", ContentItemType::SkillGroup, value) else {
        return false;
    };

    f.required("category", is_string)
        && f.required("skills", is_string_array)
        && f.nullable("subcategories", |v| is_array_of(v, is_skill_subcategory))
}

fn is_skill_subcategory(value: &Value) -> bool {
    let Some(f) = Fields::of("SkillSubcategory", value) else {
        return false;
    };
    f.required("name", is_string) && f.required("skills", is_string_array)
}

pub fn is_education_item(value: &Value) -> bool {
    let Some(f) = variant("EducationItem", ContentItemType::Education, value) else {
        return false;
    };

    f.required("institution", is_string)
        && f.nullable("degree", is_string)
        && f.nullable("field", is_string)
        && f.nullable("location", is_string)
        && f.nullable("start_date", is_string)
        && f.nullable("end_date", is_string)
        && f.nullable("honors", is_string)
        && f.nullable("description", is_string)
        && f.nullable("relevant_courses", is_string_array)
        && f.nullable("credential_id", is_string)
        && f.nullable("credential_url", is_valid_url)
        && f.nullable("expires_at", is_string)
}

/// `structured_data` is only required to be an object.
pub fn is_profile_section_item(value: &Value) -> bool {
    let Some(f) = variant("ProfileSectionItem", ContentItemType::ProfileSection, value) else {
        return false;
    };

    f.required("heading", is_string)
        && f.nullable("content", is_string)
        && f.nullable("structured_data", is_object)
}

pub fn is_accomplishment_item(value: &Value) -> bool {
    let Some(f) = variant("AccomplishmentItem", ContentItemType::Accomplishment, value) else {
        return false;
    };

    f.required("description", is_string)
        && f.nullable("context", is_string)
        && f.nullable("date", is_string)
        && f.nullable("impact", is_string)
        && f.nullable("technologies", is_string_array)
}
