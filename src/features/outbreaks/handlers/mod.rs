mod outbreak_admin_handler;
mod outbreak_handler;

pub use outbreak_admin_handler::*;
pub use outbreak_handler::*;
