use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::dip_tanks::dtos::{
    DipTankAction, DipTankAdminQuery, DipTankFilters, DipTankInputDto,
};
use crate::features::dip_tanks::models::DipTank;
use crate::shared::filters::search_pattern;
use crate::shared::geo::to_decimal;
use crate::shared::visibility::{public_select, PublicVisibility};

const ADMIN_FILTER: &str = r#"
    WHERE ($1::text IS NULL OR name ILIKE $1 OR notes ILIKE $1)
      AND ($2::region IS NULL OR region = $2)
      AND ($3::boolean IS NULL OR is_affected = $3)
      AND ($4::boolean IS NULL OR is_active = $4)
"#;

/// Region code first (alphabetical), then name
const ORDERING: &str = "ORDER BY region::text, name";

/// Service for dip tank records
pub struct DipTankService {
    pool: PgPool,
}

impl DipTankService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Active dip tanks matching the filters
    pub async fn list(&self, filters: &DipTankFilters) -> Result<Vec<DipTank>> {
        if filters.region.matches_nothing() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "{} AND ($1::region IS NULL OR region = $1) \
             AND ($2::boolean IS NULL OR is_affected = $2) {}",
            public_select::<DipTank>(),
            ORDERING
        );

        let tanks = sqlx::query_as::<_, DipTank>(&sql)
            .bind(filters.region.value())
            .bind(filters.affected)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list dip tanks: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(tanks)
    }

    pub async fn get(&self, id: Uuid) -> Result<DipTank> {
        let sql = format!("{} AND id = $1", public_select::<DipTank>());

        sqlx::query_as::<_, DipTank>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch dip tank {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Dip tank with id '{}' not found", id)))
    }

    // =========================================================================
    // ADMIN
    // =========================================================================

    pub async fn admin_list(&self, query: &DipTankAdminQuery) -> Result<(Vec<DipTank>, i64)> {
        let pattern = search_pattern(query.search.as_deref());
        let page = query.pagination();

        let count_sql = format!("SELECT COUNT(*) FROM {} {}", DipTank::TABLE, ADMIN_FILTER);
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(&pattern)
            .bind(query.region)
            .bind(query.is_affected)
            .bind(query.is_active)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count dip tanks: {:?}", e);
                AppError::Database(e)
            })?;

        let list_sql = format!(
            "SELECT {} FROM {} {} {} OFFSET $5 LIMIT $6",
            DipTank::COLUMNS,
            DipTank::TABLE,
            ADMIN_FILTER,
            ORDERING
        );
        let tanks = sqlx::query_as::<_, DipTank>(&list_sql)
            .bind(&pattern)
            .bind(query.region)
            .bind(query.is_affected)
            .bind(query.is_active)
            .bind(page.offset())
            .bind(page.limit())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list dip tanks for admin: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((tanks, total))
    }

    pub async fn admin_get(&self, id: Uuid) -> Result<DipTank> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            DipTank::COLUMNS,
            DipTank::TABLE
        );

        sqlx::query_as::<_, DipTank>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch dip tank {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Dip tank with id '{}' not found", id)))
    }

    pub async fn create(&self, dto: DipTankInputDto) -> Result<DipTank> {
        let sql = format!(
            r#"
            INSERT INTO dip_tanks (
                id, name, region, latitude, longitude, is_affected, capacity,
                last_inspection, notes, is_active
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            DipTank::COLUMNS
        );

        let tank = sqlx::query_as::<_, DipTank>(&sql)
            .bind(Uuid::now_v7())
            .bind(&dto.name)
            .bind(dto.region)
            .bind(to_decimal(dto.latitude)?)
            .bind(to_decimal(dto.longitude)?)
            .bind(dto.is_affected)
            .bind(dto.capacity)
            .bind(dto.last_inspection)
            .bind(&dto.notes)
            .bind(dto.is_active)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert dip tank: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Dip tank created: id={}, name={}", tank.id, tank.name);

        Ok(tank)
    }

    pub async fn update(&self, id: Uuid, dto: DipTankInputDto) -> Result<DipTank> {
        let sql = format!(
            r#"
            UPDATE dip_tanks SET
                name = $2, region = $3, latitude = $4, longitude = $5, is_affected = $6,
                capacity = $7, last_inspection = $8, notes = $9, is_active = $10,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            DipTank::COLUMNS
        );

        let tank = sqlx::query_as::<_, DipTank>(&sql)
            .bind(id)
            .bind(&dto.name)
            .bind(dto.region)
            .bind(to_decimal(dto.latitude)?)
            .bind(to_decimal(dto.longitude)?)
            .bind(dto.is_affected)
            .bind(dto.capacity)
            .bind(dto.last_inspection)
            .bind(&dto.notes)
            .bind(dto.is_active)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update dip tank {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Dip tank with id '{}' not found", id)))?;

        tracing::info!("Dip tank updated: id={}", id);

        Ok(tank)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM dip_tanks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete dip tank {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Dip tank with id '{}' not found",
                id
            )));
        }

        tracing::info!("Dip tank deleted: id={}", id);

        Ok(())
    }

    pub async fn apply_action(&self, action: DipTankAction, ids: &[Uuid]) -> Result<u64> {
        let assignment = match action {
            DipTankAction::MarkAffected => "is_affected = TRUE",
            DipTankAction::MarkClear => "is_affected = FALSE",
            DipTankAction::MarkActive => "is_active = TRUE",
        };
        let sql = format!(
            "UPDATE dip_tanks SET {}, updated_at = NOW() WHERE id = ANY($1)",
            assignment
        );

        let affected = sqlx::query(&sql)
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to apply dip tank action {}: {:?}", action, e);
                AppError::Database(e)
            })?
            .rows_affected();

        tracing::info!(
            "Dip tank action applied: action={}, selected={}, affected={}",
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
    use crate::features::dip_tanks::dtos::DipTankQuery;

    async fn insert_tank(pool: &PgPool, name: &str, region: &str, affected: bool, active: bool) {
        sqlx::query(
            "INSERT INTO dip_tanks (id, name, region, latitude, longitude, is_affected, is_active) \
             VALUES ($1, $2, $3::region, -26.4, 31.2, $4, $5)",
        )
        .bind(Uuid::now_v7())
        .bind(name)
        .bind(region)
        .bind(affected)
        .bind(active)
        .execute(pool)
        .await
        .unwrap();
    }

    fn names(tanks: &[DipTank]) -> Vec<&str> {
        tanks.iter().map(|t| t.name.as_str()).collect()
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_region_and_affected_filters_combine(pool: PgPool) {
        insert_tank(&pool, "A", "manzini", true, true).await;
        insert_tank(&pool, "B", "manzini", false, true).await;
        insert_tank(&pool, "C", "lubombo", false, true).await;
        let service = DipTankService::new(pool);

        let filters = DipTankFilters::from(&DipTankQuery {
            region: Some("manzini".to_string()),
            affected: Some("true".to_string()),
        });
        let tanks = service.list(&filters).await.unwrap();
        assert_eq!(names(&tanks), vec!["A"]);

        // Any value other than "true" selects unaffected tanks
        let filters = DipTankFilters::from(&DipTankQuery {
            region: None,
            affected: Some("yes".to_string()),
        });
        let tanks = service.list(&filters).await.unwrap();
        assert_eq!(names(&tanks), vec!["C", "B"]);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_ordered_by_region_then_name(pool: PgPool) {
        insert_tank(&pool, "Siteki", "lubombo", false, true).await;
        insert_tank(&pool, "Bhunya", "manzini", false, true).await;
        insert_tank(&pool, "Big Bend", "lubombo", false, true).await;
        insert_tank(&pool, "Piggs Peak", "hhohho", false, true).await;
        insert_tank(&pool, "Retired", "hhohho", false, false).await;
        let service = DipTankService::new(pool);

        let tanks = service.list(&DipTankFilters::default()).await.unwrap();
        assert_eq!(names(&tanks), vec!["Piggs Peak", "Big Bend", "Siteki", "Bhunya"]);
    }
}
