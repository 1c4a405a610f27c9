mod cordon_line_admin_dto;
mod cordon_line_dto;

pub use cordon_line_admin_dto::{
    CordonLineAction, CordonLineAdminDto, CordonLineAdminQuery, CordonLineInputDto,
};
pub use cordon_line_dto::{
    CordonLineDetailDto, CordonLineFilters, CordonLineListItemDto, CordonLineProperties,
    CordonLineQuery,
};
