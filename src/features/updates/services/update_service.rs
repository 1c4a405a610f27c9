use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::updates::dtos::{
    UpdateAction, UpdateAdminQuery, UpdateFilters, UpdateInputDto,
};
use crate::features::updates::models::Update;
use crate::shared::constants::source_or_default;
use crate::shared::filters::search_pattern;
use crate::shared::visibility::{public_select, PublicVisibility};

const ADMIN_FILTER: &str = r#"
    WHERE ($1::text IS NULL OR title ILIKE $1 OR content ILIKE $1 OR source ILIKE $1)
      AND ($2::update_type IS NULL OR update_type = $2)
      AND ($3::boolean IS NULL OR is_published = $3)
      AND ($4::boolean IS NULL OR is_featured = $4)
"#;

const ORDERING: &str = "ORDER BY published_at DESC";

/// Service for news items, announcements, guidelines and alerts
pub struct UpdateService {
    pool: PgPool,
}

impl UpdateService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Published updates matching the filters, newest first.
    ///
    /// `limit` of `None` returns every match.
    pub async fn list(&self, filters: &UpdateFilters, limit: Option<i64>) -> Result<Vec<Update>> {
        if filters.update_type.matches_nothing() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "{} AND ($1::update_type IS NULL OR update_type = $1) \
             AND ($2::boolean IS NULL OR is_featured = $2) {} LIMIT $3",
            public_select::<Update>(),
            ORDERING
        );

        let updates = sqlx::query_as::<_, Update>(&sql)
            .bind(filters.update_type.value())
            .bind(filters.featured)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list updates: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(updates)
    }

    pub async fn get(&self, id: Uuid) -> Result<Update> {
        let sql = format!("{} AND id = $1", public_select::<Update>());

        sqlx::query_as::<_, Update>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch update {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| not_found(id))
    }

    // =========================================================================
    // ADMIN
    // =========================================================================

    pub async fn admin_list(&self, query: &UpdateAdminQuery) -> Result<(Vec<Update>, i64)> {
        let pattern = search_pattern(query.search.as_deref());
        let page = query.pagination();

        let count_sql = format!("SELECT COUNT(*) FROM {} {}", Update::TABLE, ADMIN_FILTER);
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(&pattern)
            .bind(query.update_type)
            .bind(query.is_published)
            .bind(query.is_featured)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count updates: {:?}", e);
                AppError::Database(e)
            })?;

        let list_sql = format!(
            "SELECT {} FROM {} {} {} OFFSET $5 LIMIT $6",
            Update::COLUMNS,
            Update::TABLE,
            ADMIN_FILTER,
            ORDERING
        );
        let updates = sqlx::query_as::<_, Update>(&list_sql)
            .bind(&pattern)
            .bind(query.update_type)
            .bind(query.is_published)
            .bind(query.is_featured)
            .bind(page.offset())
            .bind(page.limit())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list updates for admin: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((updates, total))
    }

    pub async fn admin_get(&self, id: Uuid) -> Result<Update> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            Update::COLUMNS,
            Update::TABLE
        );

        sqlx::query_as::<_, Update>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch update {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, dto: UpdateInputDto) -> Result<Update> {
        self.ensure_outbreak_exists(dto.related_outbreak).await?;

        let sql = format!(
            r#"
            INSERT INTO updates (
                id, title, content, update_type, related_outbreak_id, published_at,
                source, image, document, is_published, is_featured
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {}
            "#,
            Update::COLUMNS
        );

        let update = sqlx::query_as::<_, Update>(&sql)
            .bind(Uuid::now_v7())
            .bind(&dto.title)
            .bind(&dto.content)
            .bind(dto.update_type)
            .bind(dto.related_outbreak)
            .bind(dto.published_at.unwrap_or_else(Utc::now))
            .bind(source_or_default(dto.source.as_deref()))
            .bind(&dto.image)
            .bind(&dto.document)
            .bind(dto.is_published)
            .bind(dto.is_featured)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert update: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Update created: id={}, type={}, title={}",
            update.id,
            update.update_type,
            update.title
        );

        Ok(update)
    }

    pub async fn update(&self, id: Uuid, dto: UpdateInputDto) -> Result<Update> {
        self.ensure_outbreak_exists(dto.related_outbreak).await?;

        let sql = format!(
            r#"
            UPDATE updates SET
                title = $2, content = $3, update_type = $4, related_outbreak_id = $5,
                published_at = COALESCE($6, published_at), source = $7, image = $8,
                document = $9, is_published = $10, is_featured = $11, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            Update::COLUMNS
        );

        let update = sqlx::query_as::<_, Update>(&sql)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.content)
            .bind(dto.update_type)
            .bind(dto.related_outbreak)
            .bind(dto.published_at)
            .bind(source_or_default(dto.source.as_deref()))
            .bind(&dto.image)
            .bind(&dto.document)
            .bind(dto.is_published)
            .bind(dto.is_featured)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update update {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| not_found(id))?;

        tracing::info!("Update updated: id={}", id);

        Ok(update)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM updates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete update {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tracing::info!("Update deleted: id={}", id);

        Ok(())
    }

    pub async fn apply_action(&self, action: UpdateAction, ids: &[Uuid]) -> Result<u64> {
        let assignment = match action {
            UpdateAction::MarkFeatured => "is_featured = TRUE",
            UpdateAction::MarkPublished => "is_published = TRUE",
        };
        let sql = format!(
            "UPDATE updates SET {}, updated_at = NOW() WHERE id = ANY($1)",
            assignment
        );

        let affected = sqlx::query(&sql)
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to apply update action {}: {:?}", action, e);
                AppError::Database(e)
            })?
            .rows_affected();

        tracing::info!(
            "Update action applied: action={}, selected={}, affected={}",
            action,
            ids.len(),
            affected
        );

        Ok(affected)
    }

    async fn ensure_outbreak_exists(&self, outbreak_id: Option<Uuid>) -> Result<()> {
        let Some(outbreak_id) = outbreak_id else {
            return Ok(());
        };

        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM outbreaks WHERE id = $1)")
            .bind(outbreak_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to look up outbreak {}: {:?}", outbreak_id, e);
                AppError::Database(e)
            })?;

        if !exists {
            return Err(AppError::Validation(format!(
                "Related outbreak '{}' does not exist",
                outbreak_id
            )));
        }

        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Update with id '{}' not found", id))
}

#[cfg(test)]
mod tests {
    // Database-backed: `DATABASE_URL=postgres://... cargo test -- --ignored`
    use super::*;
    use crate::features::outbreaks::OutbreakService;
    use crate::features::updates::dtos::{UpdateDetailDto, UpdateListItemDto, UpdateQuery};
    use crate::features::updates::models::UpdateType;

    fn input(title: &str, related_outbreak: Option<Uuid>) -> UpdateInputDto {
        UpdateInputDto {
            title: title.to_string(),
            content: "Movement of cattle is suspended".to_string(),
            update_type: UpdateType::Announcement,
            related_outbreak,
            published_at: None,
            source: None,
            image: None,
            document: None,
            is_published: true,
            is_featured: false,
        }
    }

    async fn insert_outbreak(pool: &PgPool) -> Uuid {
        let id = Uuid::now_v7();
        sqlx::query(
            "INSERT INTO outbreaks (id, title, description, region, latitude, longitude, \
             location_name, is_verified) \
             VALUES ($1, 'Manzini outbreak', '', 'manzini', -26.5, 31.4, 'Farm', TRUE)",
        )
        .bind(id)
        .execute(pool)
        .await
        .unwrap();
        id
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_deleted_outbreak_leaves_null_reference(pool: PgPool) {
        let outbreak_id = insert_outbreak(&pool).await;
        let outbreaks = OutbreakService::new(pool.clone());
        let service = UpdateService::new(pool);

        let created = service
            .create(input("Quarantine declared", Some(outbreak_id)))
            .await
            .unwrap();
        assert_eq!(created.related_outbreak_id, Some(outbreak_id));

        outbreaks.delete(outbreak_id).await.unwrap();

        let detail = UpdateDetailDto::from(service.get(created.id).await.unwrap());
        let json = serde_json::to_value(&detail).unwrap();
        assert!(json["related_outbreak"].is_null());
        assert_eq!(detail.source, "Ministry of Agriculture");

        let listed = service.list(&UpdateFilters::default(), None).await.unwrap();
        let items: Vec<UpdateListItemDto> = listed.into_iter().map(Into::into).collect();
        assert_eq!(items.len(), 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_unknown_related_outbreak_rejected(pool: PgPool) {
        let service = UpdateService::new(pool);

        let result = service.create(input("Orphan", Some(Uuid::now_v7()))).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_featured_filter_and_unpublished_hidden(pool: PgPool) {
        let service = UpdateService::new(pool);
        let mut featured = input("Featured", None);
        featured.is_featured = true;
        service.create(featured).await.unwrap();
        service.create(input("Regular", None)).await.unwrap();
        let mut draft = input("Draft", None);
        draft.is_published = false;
        draft.is_featured = true;
        service.create(draft).await.unwrap();

        let only_featured = UpdateFilters::from(&UpdateQuery {
            update_type: None,
            featured: Some("true".to_string()),
        });
        let updates = service.list(&only_featured, None).await.unwrap();
        let titles: Vec<&str> = updates.iter().map(|u| u.title.as_str()).collect();
        assert_eq!(titles, vec!["Featured"]);

        let not_featured = UpdateFilters::from(&UpdateQuery {
            update_type: None,
            featured: Some("false".to_string()),
        });
        let updates = service.list(&not_featured, None).await.unwrap();
        let titles: Vec<&str> = updates.iter().map(|u| u.title.as_str()).collect();
        assert_eq!(titles, vec!["Regular"]);
    }
}
