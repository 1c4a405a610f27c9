mod outbreak_service;

pub use outbreak_service::OutbreakService;
