mod foot_wash_station;

pub use foot_wash_station::{FootWashStation, RoadType};
#[cfg(test)]
pub(crate) use foot_wash_station::fixtures;
