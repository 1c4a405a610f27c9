mod cordon_line_admin_handler;
mod cordon_line_handler;

pub use cordon_line_admin_handler::*;
pub use cordon_line_handler::*;
