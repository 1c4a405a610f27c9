use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::constants::CONTENT_PREVIEW_CHARS;
use crate::shared::labels::labeled_enum;
use crate::shared::visibility::PublicVisibility;

labeled_enum! {
    #[derive(
        Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
    )]
    #[sqlx(type_name = "update_type", rename_all = "lowercase")]
    #[serde(rename_all = "lowercase")]
    pub enum UpdateType {
        News = ("news", "News"),
        Announcement = ("announcement", "Official Announcement"),
        Guideline = ("guideline", "Control Measure / Guideline"),
        Alert = ("alert", "Alert / Warning"),
    }
}

impl Default for UpdateType {
    fn default() -> Self {
        UpdateType::News
    }
}

/// Database model for a news item, announcement, guideline or alert
#[derive(Debug, Clone, FromRow)]
pub struct Update {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub update_type: UpdateType,
    /// Set to NULL by the database when the outbreak is deleted
    pub related_outbreak_id: Option<Uuid>,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub source: String,
    pub image: Option<String>,
    pub document: Option<String>,
    pub is_published: bool,
    pub is_featured: bool,
}

impl Update {
    /// First characters of the content, with `...` appended when cut
    pub fn content_preview(&self) -> String {
        let mut chars = self.content.chars();
        let preview: String = chars.by_ref().take(CONTENT_PREVIEW_CHARS).collect();
        if chars.next().is_some() {
            format!("{}...", preview)
        } else {
            preview
        }
    }
}

impl PublicVisibility for Update {
    const TABLE: &'static str = "updates";
    const COLUMNS: &'static str = "id, title, content, update_type, related_outbreak_id, \
        published_at, updated_at, source, image, document, is_published, is_featured";
    const VISIBLE: &'static str = "is_published = TRUE";
}


#[cfg(test)]
mod tests {
    use super::fixtures::update;
    use super::*;

    #[test]
    fn test_preview_short_content_untouched() {
        let u = update(UpdateType::News, "Vaccination campaign begins Monday.");
        assert_eq!(u.content_preview(), "Vaccination campaign begins Monday.");

        let exact = "a".repeat(CONTENT_PREVIEW_CHARS);
        assert_eq!(update(UpdateType::News, &exact).content_preview(), exact);
    }

    #[test]
    fn test_preview_truncates_on_characters() {
        let long = "é".repeat(CONTENT_PREVIEW_CHARS + 5);
        let preview = update(UpdateType::Alert, &long).content_preview();
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), CONTENT_PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_update_type_labels() {
        assert_eq!(UpdateType::Guideline.label(), "Control Measure / Guideline");
        assert_eq!(UpdateType::default(), UpdateType::News);
        assert!("guidelines".parse::<UpdateType>().is_err());
    }
}
