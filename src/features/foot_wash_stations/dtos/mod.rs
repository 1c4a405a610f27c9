mod foot_wash_station_admin_dto;
mod foot_wash_station_dto;

pub use foot_wash_station_admin_dto::{
    FootWashStationAction, FootWashStationAdminDto, FootWashStationAdminQuery,
    FootWashStationInputDto,
};
pub use foot_wash_station_dto::{
    FootWashStationDetailDto, FootWashStationFilters, FootWashStationListItemDto,
    FootWashStationProperties, FootWashStationQuery,
};
