use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::admin::dtos as admin_dtos;
use crate::features::cordon_lines::{
    dtos as cordon_lines_dtos, handlers as cordon_lines_handlers, models as cordon_lines_models,
};
use crate::features::dip_tanks::{dtos as dip_tanks_dtos, handlers as dip_tanks_handlers};
use crate::features::foot_wash_stations::{
    dtos as stations_dtos, handlers as stations_handlers, models as stations_models,
};
use crate::features::outbreaks::{
    dtos as outbreaks_dtos, handlers as outbreaks_handlers, models as outbreaks_models,
};
use crate::features::updates::{
    dtos as updates_dtos, handlers as updates_handlers, models as updates_models,
};
use crate::shared::geo::LatLng;
use crate::shared::region::Region;
use crate::shared::types::{ApiResponse, ListResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Outbreaks
        outbreaks_handlers::list_outbreaks,
        outbreaks_handlers::get_outbreak,
        outbreaks_handlers::outbreaks_geojson,
        outbreaks_handlers::outbreak_statistics,
        // Dip tanks
        dip_tanks_handlers::list_dip_tanks,
        dip_tanks_handlers::get_dip_tank,
        dip_tanks_handlers::dip_tanks_geojson,
        // Cordon lines
        cordon_lines_handlers::list_cordon_lines,
        cordon_lines_handlers::get_cordon_line,
        cordon_lines_handlers::cordon_lines_geojson,
        // Foot-wash stations
        stations_handlers::list_foot_wash_stations,
        stations_handlers::get_foot_wash_station,
        stations_handlers::foot_wash_stations_geojson,
        // Updates
        updates_handlers::list_updates,
        updates_handlers::get_update,
        // Admin
        outbreaks_handlers::admin_list_outbreaks,
        outbreaks_handlers::admin_get_outbreak,
        outbreaks_handlers::admin_create_outbreak,
        outbreaks_handlers::admin_update_outbreak,
        outbreaks_handlers::admin_delete_outbreak,
        outbreaks_handlers::admin_outbreak_actions,
        outbreaks_handlers::admin_apply_outbreak_action,
        dip_tanks_handlers::admin_list_dip_tanks,
        dip_tanks_handlers::admin_get_dip_tank,
        dip_tanks_handlers::admin_create_dip_tank,
        dip_tanks_handlers::admin_update_dip_tank,
        dip_tanks_handlers::admin_delete_dip_tank,
        dip_tanks_handlers::admin_dip_tank_actions,
        dip_tanks_handlers::admin_apply_dip_tank_action,
        cordon_lines_handlers::admin_list_cordon_lines,
        cordon_lines_handlers::admin_get_cordon_line,
        cordon_lines_handlers::admin_create_cordon_line,
        cordon_lines_handlers::admin_update_cordon_line,
        cordon_lines_handlers::admin_delete_cordon_line,
        cordon_lines_handlers::admin_cordon_line_actions,
        cordon_lines_handlers::admin_apply_cordon_line_action,
        stations_handlers::admin_list_foot_wash_stations,
        stations_handlers::admin_get_foot_wash_station,
        stations_handlers::admin_create_foot_wash_station,
        stations_handlers::admin_update_foot_wash_station,
        stations_handlers::admin_delete_foot_wash_station,
        stations_handlers::admin_foot_wash_station_actions,
        stations_handlers::admin_apply_foot_wash_station_action,
        updates_handlers::admin_list_updates,
        updates_handlers::admin_get_update,
        updates_handlers::admin_create_update,
        updates_handlers::admin_replace_update,
        updates_handlers::admin_delete_update,
        updates_handlers::admin_update_actions,
        updates_handlers::admin_apply_update_action,
    ),
    components(
        schemas(
            // Shared
            Meta,
            Region,
            LatLng,
            // Outbreaks
            outbreaks_models::OutbreakStatus,
            outbreaks_dtos::OutbreakListItemDto,
            outbreaks_dtos::OutbreakDetailDto,
            outbreaks_dtos::OutbreakStatisticsDto,
            outbreaks_dtos::StatusCountDto,
            outbreaks_dtos::RegionCountDto,
            outbreaks_dtos::OutbreakInputDto,
            outbreaks_dtos::OutbreakAdminDto,
            ListResponse<outbreaks_dtos::OutbreakListItemDto>,
            ApiResponse<outbreaks_dtos::OutbreakAdminDto>,
            ApiResponse<Vec<outbreaks_dtos::OutbreakAdminDto>>,
            // Dip tanks
            dip_tanks_dtos::DipTankListItemDto,
            dip_tanks_dtos::DipTankDetailDto,
            dip_tanks_dtos::DipTankInputDto,
            dip_tanks_dtos::DipTankAdminDto,
            ListResponse<dip_tanks_dtos::DipTankListItemDto>,
            ApiResponse<dip_tanks_dtos::DipTankAdminDto>,
            ApiResponse<Vec<dip_tanks_dtos::DipTankAdminDto>>,
            // Cordon lines
            cordon_lines_models::CordonStatus,
            cordon_lines_dtos::CordonLineListItemDto,
            cordon_lines_dtos::CordonLineDetailDto,
            cordon_lines_dtos::CordonLineInputDto,
            cordon_lines_dtos::CordonLineAdminDto,
            ListResponse<cordon_lines_dtos::CordonLineListItemDto>,
            ApiResponse<cordon_lines_dtos::CordonLineAdminDto>,
            ApiResponse<Vec<cordon_lines_dtos::CordonLineAdminDto>>,
            // Foot-wash stations
            stations_models::RoadType,
            stations_dtos::FootWashStationListItemDto,
            stations_dtos::FootWashStationDetailDto,
            stations_dtos::FootWashStationInputDto,
            stations_dtos::FootWashStationAdminDto,
            ListResponse<stations_dtos::FootWashStationListItemDto>,
            ApiResponse<stations_dtos::FootWashStationAdminDto>,
            ApiResponse<Vec<stations_dtos::FootWashStationAdminDto>>,
            // Updates
            updates_models::UpdateType,
            updates_dtos::UpdateListItemDto,
            updates_dtos::UpdateDetailDto,
            updates_dtos::UpdateInputDto,
            updates_dtos::UpdateAdminDto,
            ListResponse<updates_dtos::UpdateListItemDto>,
            ApiResponse<updates_dtos::UpdateAdminDto>,
            ApiResponse<Vec<updates_dtos::UpdateAdminDto>>,
            // Admin
            admin_dtos::BulkActionDto,
            admin_dtos::BulkActionResultDto,
            admin_dtos::AdminActionDto,
            ApiResponse<admin_dtos::BulkActionResultDto>,
            ApiResponse<Vec<admin_dtos::AdminActionDto>>,
        )
    ),
    tags(
        (name = "outbreaks", description = "Verified outbreak reports, map features and statistics"),
        (name = "diptanks", description = "Dip tanks with their 5 km map radius"),
        (name = "cordonlines", description = "Movement-control cordon lines"),
        (name = "footwashstations", description = "Roadside foot-wash stations"),
        (name = "updates", description = "News, announcements, guidelines and alerts"),
        (name = "admin", description = "Staff editing endpoints (HTTP basic auth)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "FMD Watch API",
        version = "0.1.0",
        description = "Foot-and-Mouth Disease outbreaks and control measures",
    )
)]
pub struct ApiDoc;

/// Adds the staff basic-auth security scheme to the OpenAPI document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_public_and_admin_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/outbreaks/"));
        assert!(paths.contains_key("/api/outbreaks/statistics/"));
        assert!(paths.contains_key("/api/cordonlines/geojson/"));
        assert!(paths.contains_key("/api/admin/updates/actions/{action}"));
    }

    #[test]
    fn test_basic_auth_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("basic_auth"));
    }

    #[test]
    fn test_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Staging".to_string(),
            version: "9.9.9".to_string(),
            description: "staging build".to_string(),
        }
        .modify(&mut doc);
        assert_eq!(doc.info.title, "Staging");
        assert_eq!(doc.info.version, "9.9.9");
    }
}
