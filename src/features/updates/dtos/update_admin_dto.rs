use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::updates::models::{Update, UpdateType};
use crate::shared::labels::labeled_enum;
use crate::shared::types::PaginationQuery;

labeled_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum UpdateAction {
        MarkFeatured = ("mark_featured", "Mark as featured"),
        MarkPublished = ("mark_published", "Mark as published"),
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct UpdateAdminQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    /// Search in title, content and source
    pub search: Option<String>,
    pub update_type: Option<UpdateType>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
}

impl UpdateAdminQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery::new(self.page, self.page_size)
    }
}

/// Create or fully replace an update
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateInputDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[serde(default)]
    pub update_type: UpdateType,
    /// Must reference an existing outbreak
    pub related_outbreak: Option<Uuid>,
    /// Defaults to now
    pub published_at: Option<DateTime<Utc>>,
    /// Defaults to "Ministry of Agriculture" when blank
    #[validate(length(max = 200, message = "Source must be at most 200 characters"))]
    pub source: Option<String>,
    /// Stored path of an attached image
    pub image: Option<String>,
    /// Stored path of an attached document
    pub document: Option<String>,
    #[serde(default = "default_true")]
    pub is_published: bool,
    #[serde(default)]
    pub is_featured: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UpdateAdminDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub update_type: UpdateType,
    pub update_type_display: &'static str,
    pub related_outbreak: Option<Uuid>,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub source: String,
    pub image: Option<String>,
    pub document: Option<String>,
    pub is_published: bool,
    pub is_featured: bool,
}

impl From<Update> for UpdateAdminDto {
    fn from(u: Update) -> Self {
        Self {
            id: u.id,
            title: u.title,
            content: u.content,
            update_type: u.update_type,
            update_type_display: u.update_type.label(),
            related_outbreak: u.related_outbreak_id,
            published_at: u.published_at,
            updated_at: u.updated_at,
            source: u.source,
            image: u.image,
            document: u.document,
            is_published: u.is_published,
            is_featured: u.is_featured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input_defaults() {
        let dto: UpdateInputDto = serde_json::from_value(json!({
            "title": "Vaccination Campaign Launched",
            "content": "A vaccination campaign starts in Hhohho."
        }))
        .unwrap();
        assert_eq!(dto.update_type, UpdateType::News);
        assert!(dto.is_published);
        assert!(!dto.is_featured);
        assert!(dto.related_outbreak.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_title_too_long() {
        let dto: UpdateInputDto = serde_json::from_value(json!({
            "title": "t".repeat(201),
            "content": "body",
            "update_type": "alert"
        }))
        .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_admin_query_is_strict() {
        let parsed = serde_json::from_value::<UpdateAdminQuery>(json!({ "update_type": "rumour" }));
        assert!(parsed.is_err());
    }
}
