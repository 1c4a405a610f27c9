use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::updates::models::{Update, UpdateType};
use crate::shared::filters::{parse_flag, EnumFilter};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct UpdateQuery {
    /// news, announcement, guideline or alert
    #[serde(rename = "type")]
    pub update_type: Option<String>,
    /// "true" for featured updates, any other value for the rest
    pub featured: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateFilters {
    pub update_type: EnumFilter<UpdateType>,
    pub featured: Option<bool>,
}

impl UpdateFilters {
    pub fn featured() -> Self {
        Self {
            featured: Some(true),
            ..Default::default()
        }
    }

    pub fn of_type(update_type: UpdateType) -> Self {
        Self {
            update_type: EnumFilter::Only(update_type),
            ..Default::default()
        }
    }
}

impl From<&UpdateQuery> for UpdateFilters {
    fn from(query: &UpdateQuery) -> Self {
        Self {
            update_type: EnumFilter::parse(query.update_type.as_deref()),
            featured: parse_flag(query.featured.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UpdateListItemDto {
    pub id: Uuid,
    pub title: String,
    /// First 200 characters, `...` appended when truncated
    pub content_preview: String,
    pub update_type: UpdateType,
    pub update_type_display: &'static str,
    pub published_at: DateTime<Utc>,
    pub source: String,
    pub is_featured: bool,
}

impl From<Update> for UpdateListItemDto {
    fn from(u: Update) -> Self {
        Self {
            content_preview: u.content_preview(),
            id: u.id,
            title: u.title,
            update_type: u.update_type,
            update_type_display: u.update_type.label(),
            published_at: u.published_at,
            source: u.source,
            is_featured: u.is_featured,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UpdateDetailDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub update_type: UpdateType,
    pub update_type_display: &'static str,
    /// Related outbreak id, null once that outbreak is removed
    pub related_outbreak: Option<Uuid>,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub source: String,
    pub image: Option<String>,
    pub document: Option<String>,
    pub is_featured: bool,
}

impl From<Update> for UpdateDetailDto {
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
            is_featured: u.is_featured,
        }
    }
}
