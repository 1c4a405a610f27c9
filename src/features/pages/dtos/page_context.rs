use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::features::cordon_lines::models::CordonLine;
use crate::features::outbreaks::dtos::OutbreakStatisticsDto;
use crate::features::updates::models::{Update, UpdateType};

/// Date shown on the public pages, e.g. "March 4, 2025"
pub fn display_date(value: DateTime<Utc>) -> String {
    value.format("%B %-d, %Y").to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateCard {
    pub title: String,
    pub update_type: UpdateType,
    pub update_type_display: &'static str,
    pub content: String,
    pub content_preview: String,
    pub published_on: String,
    pub source: String,
}

impl From<Update> for UpdateCard {
    fn from(u: Update) -> Self {
        Self {
            content_preview: u.content_preview(),
            published_on: display_date(u.published_at),
            update_type_display: u.update_type.label(),
            update_type: u.update_type,
            title: u.title,
            content: u.content,
            source: u.source,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CordonLineCard {
    pub name: String,
    pub region_display: &'static str,
    pub description: String,
    pub restrictions: String,
    pub established_on: String,
    pub expires_on: Option<String>,
}

impl From<CordonLine> for CordonLineCard {
    fn from(c: CordonLine) -> Self {
        Self {
            name: c.name,
            region_display: c.region.label(),
            description: c.description,
            restrictions: c.restrictions,
            established_on: display_date(c.date_established),
            expires_on: c.date_expires.map(display_date),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeContext {
    pub active_outbreaks: i64,
    pub surveillance_zones: i64,
    pub cleared_outbreaks: i64,
    pub total_animals_affected: i64,
    pub featured_updates: Vec<UpdateCard>,
}

impl HomeContext {
    pub fn new(stats: &OutbreakStatisticsDto, featured: Vec<Update>) -> Self {
        Self {
            active_outbreaks: stats.active_outbreaks,
            surveillance_zones: stats.surveillance_zones,
            cleared_outbreaks: stats.cleared_outbreaks,
            total_animals_affected: stats.total_animals_affected,
            featured_updates: featured.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdatesContext {
    pub updates: Vec<UpdateCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ControlMeasuresContext {
    pub guidelines: Vec<UpdateCard>,
    pub cordon_lines: Vec<CordonLineCard>,
}
