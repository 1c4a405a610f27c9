use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::cordon_lines::dtos::{
    CordonLineAction, CordonLineAdminQuery, CordonLineFilters, CordonLineInputDto,
};
use crate::features::cordon_lines::models::CordonLine;
use crate::shared::filters::search_pattern;
use crate::shared::visibility::{public_select, PublicVisibility};

const ADMIN_FILTER: &str = r#"
    WHERE ($1::text IS NULL OR name ILIKE $1 OR description ILIKE $1)
      AND ($2::region IS NULL OR region = $2)
      AND ($3::cordon_status IS NULL OR status = $3)
      AND ($4::boolean IS NULL OR is_active = $4)
"#;

const ORDERING: &str = "ORDER BY date_established DESC";

/// Service for cordon line records
pub struct CordonLineService {
    pool: PgPool,
}

impl CordonLineService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Active cordon lines matching the filters, newest first
    pub async fn list(&self, filters: &CordonLineFilters) -> Result<Vec<CordonLine>> {
        if filters.matches_nothing() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "{} AND ($1::region IS NULL OR region = $1) \
             AND ($2::cordon_status IS NULL OR status = $2) {}",
            public_select::<CordonLine>(),
            ORDERING
        );

        let lines = sqlx::query_as::<_, CordonLine>(&sql)
            .bind(filters.region.value())
            .bind(filters.status.value())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list cordon lines: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(lines)
    }

    pub async fn get(&self, id: Uuid) -> Result<CordonLine> {
        let sql = format!("{} AND id = $1", public_select::<CordonLine>());

        sqlx::query_as::<_, CordonLine>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch cordon line {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Cordon line with id '{}' not found", id)))
    }

    // =========================================================================
    // ADMIN
    // =========================================================================

    pub async fn admin_list(
        &self,
        query: &CordonLineAdminQuery,
    ) -> Result<(Vec<CordonLine>, i64)> {
        let pattern = search_pattern(query.search.as_deref());
        let page = query.pagination();

        let count_sql = format!("SELECT COUNT(*) FROM {} {}", CordonLine::TABLE, ADMIN_FILTER);
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(&pattern)
            .bind(query.region)
            .bind(query.status)
            .bind(query.is_active)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count cordon lines: {:?}", e);
                AppError::Database(e)
            })?;

        let list_sql = format!(
            "SELECT {} FROM {} {} {} OFFSET $5 LIMIT $6",
            CordonLine::COLUMNS,
            CordonLine::TABLE,
            ADMIN_FILTER,
            ORDERING
        );
        let lines = sqlx::query_as::<_, CordonLine>(&list_sql)
            .bind(&pattern)
            .bind(query.region)
            .bind(query.status)
            .bind(query.is_active)
            .bind(page.offset())
            .bind(page.limit())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list cordon lines for admin: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((lines, total))
    }

    pub async fn admin_get(&self, id: Uuid) -> Result<CordonLine> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            CordonLine::COLUMNS,
            CordonLine::TABLE
        );

        sqlx::query_as::<_, CordonLine>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch cordon line {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Cordon line with id '{}' not found", id)))
    }

    pub async fn create(&self, dto: CordonLineInputDto) -> Result<CordonLine> {
        let established = dto.date_established.unwrap_or_else(Utc::now);
        dto.check(established)?;

        let sql = format!(
            r#"
            INSERT INTO cordon_lines (
                id, name, region, status, coordinates, description, restrictions,
                date_established, date_expires, is_active
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            CordonLine::COLUMNS
        );

        let line = sqlx::query_as::<_, CordonLine>(&sql)
            .bind(Uuid::now_v7())
            .bind(&dto.name)
            .bind(dto.region)
            .bind(dto.status)
            .bind(Json(&dto.coordinates))
            .bind(&dto.description)
            .bind(&dto.restrictions)
            .bind(established)
            .bind(dto.date_expires)
            .bind(dto.is_active)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert cordon line: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Cordon line created: id={}, name={}, points={}",
            line.id,
            line.name,
            line.coordinates.len()
        );

        Ok(line)
    }

    pub async fn update(&self, id: Uuid, dto: CordonLineInputDto) -> Result<CordonLine> {
        let established = match dto.date_established {
            Some(established) => established,
            None => self.admin_get(id).await?.date_established,
        };
        dto.check(established)?;

        let sql = format!(
            r#"
            UPDATE cordon_lines SET
                name = $2, region = $3, status = $4, coordinates = $5, description = $6,
                restrictions = $7, date_established = $8, date_expires = $9, is_active = $10,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            CordonLine::COLUMNS
        );

        let line = sqlx::query_as::<_, CordonLine>(&sql)
            .bind(id)
            .bind(&dto.name)
            .bind(dto.region)
            .bind(dto.status)
            .bind(Json(&dto.coordinates))
            .bind(&dto.description)
            .bind(&dto.restrictions)
            .bind(established)
            .bind(dto.date_expires)
            .bind(dto.is_active)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update cordon line {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Cordon line with id '{}' not found", id)))?;

        tracing::info!("Cordon line updated: id={}", id);

        Ok(line)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM cordon_lines WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete cordon line {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Cordon line with id '{}' not found",
                id
            )));
        }

        tracing::info!("Cordon line deleted: id={}", id);

        Ok(())
    }

    pub async fn apply_action(&self, action: CordonLineAction, ids: &[Uuid]) -> Result<u64> {
        let assignment = match action {
            CordonLineAction::MarkActive => "status = 'active', is_active = TRUE",
            CordonLineAction::MarkInactive => "status = 'inactive'",
        };
        let sql = format!(
            "UPDATE cordon_lines SET {}, updated_at = NOW() WHERE id = ANY($1)",
            assignment
        );

        let affected = sqlx::query(&sql)
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to apply cordon line action {}: {:?}", action, e);
                AppError::Database(e)
            })?
            .rows_affected();

        tracing::info!(
            "Cordon line action applied: action={}, selected={}, affected={}",
            action,
            ids.len(),
            affected
        );

        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    // Database-backed: `DATABASE_URL=postgres://... cargo test -- --ignored`
    use super::*;
    use crate::features::cordon_lines::models::CordonStatus;
    use crate::shared::geo::LatLng;
    use crate::shared::geojson::{GeoFeature, Geometry};
    use crate::shared::region::Region;
    use chrono::Duration;

    fn input(name: &str, status: CordonStatus, points: &[(f64, f64)]) -> CordonLineInputDto {
        CordonLineInputDto {
            name: name.to_string(),
            region: Region::Lubombo,
            status,
            coordinates: points.iter().map(|&(lat, lng)| LatLng { lat, lng }).collect(),
            description: String::new(),
            restrictions: "No cattle movement".to_string(),
            date_established: None,
            date_expires: None,
            is_active: true,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_stored_vertices_project_in_order(pool: PgPool) {
        let points = [(-26.45, 32.05), (-26.50, 31.95), (-26.40, 32.10)];
        let service = CordonLineService::new(pool);
        let created = service
            .create(input("Lubombo Cordon", CordonStatus::Active, &points))
            .await
            .unwrap();

        let line = service.get(created.id).await.unwrap();
        match line.geometry() {
            Geometry::LineString { coordinates } => {
                let expected: Vec<[f64; 2]> =
                    points.iter().map(|&(lat, lng)| [lng, lat]).collect();
                assert_eq!(coordinates, expected);
            }
            other => panic!("expected a LineString, got {:?}", other),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_list_newest_first_and_status_filter(pool: PgPool) {
        let service = CordonLineService::new(pool);
        let mut older = input("Older", CordonStatus::Temporary, &[(-26.0, 31.0), (-26.1, 31.1)]);
        older.date_established = Some(Utc::now() - Duration::days(10));
        service.create(older).await.unwrap();
        service
            .create(input("Newer", CordonStatus::Active, &[(-26.0, 31.0), (-26.1, 31.1)]))
            .await
            .unwrap();
        let mut hidden = input("Hidden", CordonStatus::Active, &[(-26.0, 31.0), (-26.1, 31.1)]);
        hidden.is_active = false;
        service.create(hidden).await.unwrap();

        let lines = service.list(&CordonLineFilters::default()).await.unwrap();
        let names: Vec<&str> = lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Newer", "Older"]);

        let active = service.list(&CordonLineFilters::active()).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Newer");
    }
}
