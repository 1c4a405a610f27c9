use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::foot_wash_stations::dtos::{
    FootWashStationAction, FootWashStationAdminQuery, FootWashStationFilters,
    FootWashStationInputDto,
};
use crate::features::foot_wash_stations::models::FootWashStation;
use crate::shared::filters::search_pattern;
use crate::shared::geo::to_decimal;
use crate::shared::visibility::{public_select, PublicVisibility};

const ADMIN_FILTER: &str = r#"
    WHERE ($1::text IS NULL OR name ILIKE $1 OR road_name ILIKE $1 OR instructions ILIKE $1)
      AND ($2::region IS NULL OR region = $2)
      AND ($3::road_type IS NULL OR road_type = $3)
      AND ($4::boolean IS NULL OR is_operational = $4)
      AND ($5::boolean IS NULL OR is_active = $5)
"#;

const ORDERING: &str = "ORDER BY region::text, road_name, name";

/// Service for foot-wash station records
pub struct FootWashStationService {
    pool: PgPool,
}

impl FootWashStationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filters: &FootWashStationFilters) -> Result<Vec<FootWashStation>> {
        if filters.matches_nothing() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "{} AND ($1::region IS NULL OR region = $1) \
             AND ($2::road_type IS NULL OR road_type = $2) \
             AND ($3::boolean IS NULL OR is_operational = $3) {}",
            public_select::<FootWashStation>(),
            ORDERING
        );

        let stations = sqlx::query_as::<_, FootWashStation>(&sql)
            .bind(filters.region.value())
            .bind(filters.road_type.value())
            .bind(filters.operational)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list foot-wash stations: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(stations)
    }

    pub async fn get(&self, id: Uuid) -> Result<FootWashStation> {
        let sql = format!("{} AND id = $1", public_select::<FootWashStation>());

        sqlx::query_as::<_, FootWashStation>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch foot-wash station {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| not_found(id))
    }

    // =========================================================================
    // ADMIN
    // =========================================================================

    pub async fn admin_list(
        &self,
        query: &FootWashStationAdminQuery,
    ) -> Result<(Vec<FootWashStation>, i64)> {
        let pattern = search_pattern(query.search.as_deref());
        let page = query.pagination();

        let count_sql = format!(
            "SELECT COUNT(*) FROM {} {}",
            FootWashStation::TABLE,
            ADMIN_FILTER
        );
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(&pattern)
            .bind(query.region)
            .bind(query.road_type)
            .bind(query.is_operational)
            .bind(query.is_active)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count foot-wash stations: {:?}", e);
                AppError::Database(e)
            })?;

        let list_sql = format!(
            "SELECT {} FROM {} {} {} OFFSET $6 LIMIT $7",
            FootWashStation::COLUMNS,
            FootWashStation::TABLE,
            ADMIN_FILTER,
            ORDERING
        );
        let stations = sqlx::query_as::<_, FootWashStation>(&list_sql)
            .bind(&pattern)
            .bind(query.region)
            .bind(query.road_type)
            .bind(query.is_operational)
            .bind(query.is_active)
            .bind(page.offset())
            .bind(page.limit())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list foot-wash stations for admin: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((stations, total))
    }

    pub async fn admin_get(&self, id: Uuid) -> Result<FootWashStation> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            FootWashStation::COLUMNS,
            FootWashStation::TABLE
        );

        sqlx::query_as::<_, FootWashStation>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch foot-wash station {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, dto: FootWashStationInputDto) -> Result<FootWashStation> {
        let sql = format!(
            r#"
            INSERT INTO foot_wash_stations (
                id, name, region, road_name, road_type, latitude, longitude, instructions,
                operating_hours, contact_person, contact_phone, is_operational,
                last_maintenance, is_active
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {}
            "#,
            FootWashStation::COLUMNS
        );

        let station = sqlx::query_as::<_, FootWashStation>(&sql)
            .bind(Uuid::now_v7())
            .bind(&dto.name)
            .bind(dto.region)
            .bind(&dto.road_name)
            .bind(dto.road_type)
            .bind(to_decimal(dto.latitude)?)
            .bind(to_decimal(dto.longitude)?)
            .bind(&dto.instructions)
            .bind(&dto.operating_hours)
            .bind(&dto.contact_person)
            .bind(&dto.contact_phone)
            .bind(dto.is_operational)
            .bind(dto.last_maintenance)
            .bind(dto.is_active)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert foot-wash station: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Foot-wash station created: id={}, name={}, road={}",
            station.id,
            station.name,
            station.road_name
        );

        Ok(station)
    }

    pub async fn update(&self, id: Uuid, dto: FootWashStationInputDto) -> Result<FootWashStation> {
        let sql = format!(
            r#"
            UPDATE foot_wash_stations SET
                name = $2, region = $3, road_name = $4, road_type = $5, latitude = $6,
                longitude = $7, instructions = $8, operating_hours = $9, contact_person = $10,
                contact_phone = $11, is_operational = $12, last_maintenance = $13,
                is_active = $14, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            FootWashStation::COLUMNS
        );

        let station = sqlx::query_as::<_, FootWashStation>(&sql)
            .bind(id)
            .bind(&dto.name)
            .bind(dto.region)
            .bind(&dto.road_name)
            .bind(dto.road_type)
            .bind(to_decimal(dto.latitude)?)
            .bind(to_decimal(dto.longitude)?)
            .bind(&dto.instructions)
            .bind(&dto.operating_hours)
            .bind(&dto.contact_person)
            .bind(&dto.contact_phone)
            .bind(dto.is_operational)
            .bind(dto.last_maintenance)
            .bind(dto.is_active)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update foot-wash station {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| not_found(id))?;

        tracing::info!("Foot-wash station updated: id={}", id);

        Ok(station)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM foot_wash_stations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete foot-wash station {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tracing::info!("Foot-wash station deleted: id={}", id);

        Ok(())
    }

    pub async fn apply_action(&self, action: FootWashStationAction, ids: &[Uuid]) -> Result<u64> {
        let operational = matches!(action, FootWashStationAction::MarkOperational);

        let affected = sqlx::query(
            "UPDATE foot_wash_stations SET is_operational = $2, updated_at = NOW() \
             WHERE id = ANY($1)",
        )
        .bind(ids)
        .bind(operational)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to apply foot-wash station action {}: {:?}", action, e);
            AppError::Database(e)
        })?
        .rows_affected();

        tracing::info!(
            "Foot-wash station action applied: action={}, selected={}, affected={}",
            action,
            ids.len(),
            affected
        );

        Ok(affected)
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Foot-wash station with id '{}' not found", id))
}
