mod dip_tank_admin_dto;
mod dip_tank_dto;

pub use dip_tank_admin_dto::{DipTankAction, DipTankAdminDto, DipTankAdminQuery, DipTankInputDto};
pub use dip_tank_dto::{
    DipTankDetailDto, DipTankFilters, DipTankListItemDto, DipTankProperties, DipTankQuery,
};
