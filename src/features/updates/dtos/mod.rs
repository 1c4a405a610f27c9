mod update_admin_dto;
mod update_dto;

pub use update_admin_dto::{UpdateAction, UpdateAdminDto, UpdateAdminQuery, UpdateInputDto};
pub use update_dto::{UpdateDetailDto, UpdateFilters, UpdateListItemDto, UpdateQuery};
