mod dip_tank_service;

pub use dip_tank_service::DipTankService;
