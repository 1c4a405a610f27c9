use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::outbreaks::dtos::{
    OutbreakAction, OutbreakAdminQuery, OutbreakFilters, OutbreakInputDto, OutbreakStatisticsDto,
};
use crate::features::outbreaks::models::Outbreak;
use crate::shared::constants::source_or_default;
use crate::shared::filters::search_pattern;
use crate::shared::geo::to_decimal;
use crate::shared::visibility::{public_select, PublicVisibility};

const ADMIN_FILTER: &str = r#"
    WHERE ($1::text IS NULL OR title ILIKE $1 OR description ILIKE $1 OR location_name ILIKE $1)
      AND ($2::region IS NULL OR region = $2)
      AND ($3::outbreak_status IS NULL OR status = $3)
      AND ($4::boolean IS NULL OR is_verified = $4)
      AND ($5::boolean IS NULL OR is_active = $5)
"#;

/// Service for outbreak records
pub struct OutbreakService {
    pool: PgPool,
}

impl OutbreakService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // PUBLIC
    // =========================================================================

    /// Visible outbreaks matching the filters, most recently reported first
    pub async fn list(&self, filters: &OutbreakFilters) -> Result<Vec<Outbreak>> {
        if filters.matches_nothing() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "{} AND ($1::outbreak_status IS NULL OR status = $1) \
             AND ($2::region IS NULL OR region = $2) \
             ORDER BY date_reported DESC",
            public_select::<Outbreak>()
        );

        let outbreaks = sqlx::query_as::<_, Outbreak>(&sql)
            .bind(filters.status.value())
            .bind(filters.region.value())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list outbreaks: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(outbreaks)
    }

    /// A single visible outbreak
    pub async fn get(&self, id: Uuid) -> Result<Outbreak> {
        let sql = format!("{} AND id = $1", public_select::<Outbreak>());

        sqlx::query_as::<_, Outbreak>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch outbreak {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Outbreak with id '{}' not found", id)))
    }

    /// Statistics over exactly the rows `list` returns for the same filters
    pub async fn statistics(&self, filters: &OutbreakFilters) -> Result<OutbreakStatisticsDto> {
        let outbreaks = self.list(filters).await?;
        Ok(OutbreakStatisticsDto::summarize(&outbreaks))
    }

    // =========================================================================
    // ADMIN
    // =========================================================================

    /// List every outbreak, hidden ones included
    pub async fn admin_list(&self, query: &OutbreakAdminQuery) -> Result<(Vec<Outbreak>, i64)> {
        let pattern = search_pattern(query.search.as_deref());
        let page = query.pagination();

        let count_sql = format!("SELECT COUNT(*) FROM {} {}", Outbreak::TABLE, ADMIN_FILTER);
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(&pattern)
            .bind(query.region)
            .bind(query.status)
            .bind(query.is_verified)
            .bind(query.is_active)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count outbreaks: {:?}", e);
                AppError::Database(e)
            })?;

        let list_sql = format!(
            "SELECT {} FROM {} {} ORDER BY date_reported DESC OFFSET $6 LIMIT $7",
            Outbreak::COLUMNS,
            Outbreak::TABLE,
            ADMIN_FILTER
        );
        let outbreaks = sqlx::query_as::<_, Outbreak>(&list_sql)
            .bind(&pattern)
            .bind(query.region)
            .bind(query.status)
            .bind(query.is_verified)
            .bind(query.is_active)
            .bind(page.offset())
            .bind(page.limit())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list outbreaks for admin: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((outbreaks, total))
    }

    /// Any outbreak by id, regardless of visibility
    pub async fn admin_get(&self, id: Uuid) -> Result<Outbreak> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            Outbreak::COLUMNS,
            Outbreak::TABLE
        );

        sqlx::query_as::<_, Outbreak>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch outbreak {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Outbreak with id '{}' not found", id)))
    }

    pub async fn create(&self, dto: OutbreakInputDto) -> Result<Outbreak> {
        let id = Uuid::now_v7();
        let sql = format!(
            r#"
            INSERT INTO outbreaks (
                id, title, description, status, region, latitude, longitude, location_name,
                animals_affected, animals_quarantined, date_reported, date_confirmed,
                date_cleared, source, is_verified, is_active, last_updated
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, NOW())
            RETURNING {}
            "#,
            Outbreak::COLUMNS
        );

        let outbreak = sqlx::query_as::<_, Outbreak>(&sql)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(dto.status)
            .bind(dto.region)
            .bind(to_decimal(dto.latitude)?)
            .bind(to_decimal(dto.longitude)?)
            .bind(&dto.location_name)
            .bind(dto.animals_affected)
            .bind(dto.animals_quarantined)
            .bind(dto.date_reported.unwrap_or_else(Utc::now))
            .bind(dto.date_confirmed)
            .bind(dto.date_cleared)
            .bind(source_or_default(dto.source.as_deref()))
            .bind(dto.is_verified)
            .bind(dto.is_active)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert outbreak: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Outbreak created: id={}, title={}", outbreak.id, outbreak.title);

        Ok(outbreak)
    }

    /// Replace every editable field of an outbreak
    pub async fn update(&self, id: Uuid, dto: OutbreakInputDto) -> Result<Outbreak> {
        let sql = format!(
            r#"
            UPDATE outbreaks SET
                title = $2, description = $3, status = $4, region = $5, latitude = $6,
                longitude = $7, location_name = $8, animals_affected = $9,
                animals_quarantined = $10, date_reported = COALESCE($11, date_reported),
                date_confirmed = $12, date_cleared = $13, source = $14, is_verified = $15,
                is_active = $16, last_updated = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            Outbreak::COLUMNS
        );

        let outbreak = sqlx::query_as::<_, Outbreak>(&sql)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(dto.status)
            .bind(dto.region)
            .bind(to_decimal(dto.latitude)?)
            .bind(to_decimal(dto.longitude)?)
            .bind(&dto.location_name)
            .bind(dto.animals_affected)
            .bind(dto.animals_quarantined)
            .bind(dto.date_reported)
            .bind(dto.date_confirmed)
            .bind(dto.date_cleared)
            .bind(source_or_default(dto.source.as_deref()))
            .bind(dto.is_verified)
            .bind(dto.is_active)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update outbreak {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Outbreak with id '{}' not found", id)))?;

        tracing::info!("Outbreak updated: id={}", id);

        Ok(outbreak)
    }

    /// Hard delete; updates pointing at the outbreak keep a null reference
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM outbreaks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete outbreak {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Outbreak with id '{}' not found",
                id
            )));
        }

        tracing::info!("Outbreak deleted: id={}", id);

        Ok(())
    }

    /// Apply a bulk action as one statement; returns the number of matched rows
    pub async fn apply_action(&self, action: OutbreakAction, ids: &[Uuid]) -> Result<u64> {
        let sql = match action {
            OutbreakAction::MarkVerified => {
                "UPDATE outbreaks SET is_verified = TRUE, last_updated = NOW() WHERE id = ANY($1)"
            }
            OutbreakAction::MarkCleared => {
                "UPDATE outbreaks SET status = 'cleared', \
                 date_cleared = COALESCE(date_cleared, GREATEST(NOW(), date_confirmed)), \
                 last_updated = NOW() \
                 WHERE id = ANY($1)"
            }
        };

        let affected = sqlx::query(sql)
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to apply outbreak action {}: {:?}", action, e);
                AppError::Database(e)
            })?
            .rows_affected();

        tracing::info!(
            "Outbreak action applied: action={}, selected={}, affected={}",
            action,
            ids.len(),
            affected
        );

        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_filter_binds_in_order() {
        for (n, column) in [
            (1, "title ILIKE"),
            (2, "region ="),
            (3, "status ="),
            (4, "is_verified ="),
            (5, "is_active ="),
        ] {
            assert!(ADMIN_FILTER.contains(&format!("{} ${}", column, n)));
        }
    }

    // Database-backed tests: `DATABASE_URL=postgres://... cargo test -- --ignored`

    use crate::features::outbreaks::dtos::OutbreakQuery;
    use crate::features::outbreaks::models::OutbreakStatus;
    use crate::shared::geojson::collect_features;

    async fn insert_outbreak(
        pool: &PgPool,
        title: &str,
        region: &str,
        status: &str,
        days_ago: i32,
        is_verified: bool,
        is_active: bool,
    ) -> Uuid {
        let id = Uuid::now_v7();
        sqlx::query(
            "INSERT INTO outbreaks (id, title, description, status, region, latitude, longitude, \
             location_name, animals_affected, animals_quarantined, date_reported, is_verified, is_active) \
             VALUES ($1, $2, '', $3::outbreak_status, $4::region, -26.5, 31.4, 'Farm', 10, 4, \
             NOW() - make_interval(days => $5), $6, $7)",
        )
        .bind(id)
        .bind(title)
        .bind(status)
        .bind(region)
        .bind(days_ago)
        .bind(is_verified)
        .bind(is_active)
        .execute(pool)
        .await
        .unwrap();
        id
    }

    fn filters(status: Option<&str>, region: Option<&str>) -> OutbreakFilters {
        OutbreakFilters::from(&OutbreakQuery {
            status: status.map(str::to_string),
            region: region.map(str::to_string),
        })
    }

    fn titles(outbreaks: &[Outbreak]) -> Vec<&str> {
        outbreaks.iter().map(|o| o.title.as_str()).collect()
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_list_orders_most_recent_first(pool: PgPool) {
        insert_outbreak(&pool, "T-5", "manzini", "active", 5, true, true).await;
        insert_outbreak(&pool, "T-3", "manzini", "active", 3, true, true).await;
        insert_outbreak(&pool, "T-10", "lubombo", "cleared", 10, true, true).await;
        let service = OutbreakService::new(pool);

        let outbreaks = service.list(&OutbreakFilters::default()).await.unwrap();
        assert_eq!(titles(&outbreaks), vec!["T-3", "T-5", "T-10"]);

        // Filters narrow the set without changing the order
        let manzini = service.list(&filters(None, Some("manzini"))).await.unwrap();
        assert_eq!(titles(&manzini), vec!["T-3", "T-5"]);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_hidden_outbreaks_never_public(pool: PgPool) {
        insert_outbreak(&pool, "visible", "manzini", "active", 1, true, true).await;
        insert_outbreak(&pool, "visible too", "hhohho", "surveillance", 2, true, true).await;
        let unverified =
            insert_outbreak(&pool, "unverified", "manzini", "active", 1, false, true).await;
        let inactive =
            insert_outbreak(&pool, "inactive", "manzini", "active", 1, true, false).await;
        let service = OutbreakService::new(pool);

        let outbreaks = service.list(&OutbreakFilters::default()).await.unwrap();
        assert_eq!(titles(&outbreaks), vec!["visible", "visible too"]);

        let collection = collect_features(&outbreaks);
        assert_eq!(collection.features.len(), 2);

        let stats = service.statistics(&OutbreakFilters::default()).await.unwrap();
        assert_eq!(stats.total_outbreaks, 2);
        assert_eq!(stats.total_animals_affected, 20);

        for id in [unverified, inactive] {
            assert!(matches!(service.get(id).await, Err(AppError::NotFound(_))));
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_statistics_total_matches_list_for_every_filter(pool: PgPool) {
        insert_outbreak(&pool, "a", "manzini", "active", 1, true, true).await;
        insert_outbreak(&pool, "b", "manzini", "cleared", 2, true, true).await;
        insert_outbreak(&pool, "c", "lubombo", "surveillance", 3, true, true).await;
        insert_outbreak(&pool, "d", "lubombo", "active", 4, false, true).await;
        let service = OutbreakService::new(pool);

        let statuses = [None, Some("active"), Some("surveillance"), Some("cleared"), Some("bogus")];
        let regions = [None, Some("manzini"), Some("lubombo"), Some("shiselweni")];
        for status in statuses {
            for region in regions {
                let f = filters(status, region);
                let listed = service.list(&f).await.unwrap();
                let stats = service.statistics(&f).await.unwrap();
                assert_eq!(
                    stats.total_outbreaks,
                    listed.len() as i64,
                    "status={:?} region={:?}",
                    status,
                    region
                );
            }
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_repeated_action_reports_same_count(pool: PgPool) {
        let id = insert_outbreak(&pool, "pending", "shiselweni", "active", 1, false, true).await;
        let service = OutbreakService::new(pool);

        let first = service.apply_action(OutbreakAction::MarkVerified, &[id]).await.unwrap();
        let second = service.apply_action(OutbreakAction::MarkVerified, &[id]).await.unwrap();
        assert_eq!((first, second), (1, 1));
        assert!(service.get(id).await.is_ok());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_mark_cleared_keeps_confirmation_order(pool: PgPool) {
        let future = insert_outbreak(&pool, "future", "hhohho", "active", 1, true, true).await;
        let plain = insert_outbreak(&pool, "plain", "hhohho", "active", 2, true, true).await;
        sqlx::query("UPDATE outbreaks SET date_confirmed = NOW() + INTERVAL '1 day' WHERE id = $1")
            .bind(future)
            .execute(&pool)
            .await
            .unwrap();
        let service = OutbreakService::new(pool);

        let affected = service
            .apply_action(OutbreakAction::MarkCleared, &[future, plain])
            .await
            .unwrap();
        assert_eq!(affected, 2);

        let cleared = service.admin_get(future).await.unwrap();
        assert_eq!(cleared.status, OutbreakStatus::Cleared);
        assert_eq!(cleared.date_cleared, cleared.date_confirmed);

        let cleared = service.admin_get(plain).await.unwrap();
        assert!(cleared.date_cleared.is_some());
        assert!(cleared.date_confirmed.is_none());
    }
}
