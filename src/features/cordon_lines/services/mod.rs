mod cordon_line_service;

pub use cordon_line_service::CordonLineService;
