mod dip_tank_admin_handler;
mod dip_tank_handler;

pub use dip_tank_admin_handler::*;
pub use dip_tank_handler::*;
