mod outbreak_admin_dto;
mod outbreak_dto;

pub use outbreak_admin_dto::{
    OutbreakAction, OutbreakAdminDto, OutbreakAdminQuery, OutbreakInputDto,
};
pub use outbreak_dto::{
    OutbreakDetailDto, OutbreakFilters, OutbreakListItemDto, OutbreakProperties, OutbreakQuery,
    OutbreakStatisticsDto, RegionCountDto, StatusCountDto,
};
