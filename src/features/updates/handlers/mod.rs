mod update_admin_handler;
mod update_handler;

pub use update_admin_handler::*;
pub use update_handler::*;
