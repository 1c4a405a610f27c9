mod foot_wash_station_service;

pub use foot_wash_station_service::FootWashStationService;
