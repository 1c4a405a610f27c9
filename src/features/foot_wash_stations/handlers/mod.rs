mod foot_wash_station_admin_handler;
mod foot_wash_station_handler;

pub use foot_wash_station_admin_handler::*;
pub use foot_wash_station_handler::*;
