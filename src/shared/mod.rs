pub mod constants;
pub mod filters;
pub mod geo;
pub mod geojson;
pub mod labels;
pub mod region;
pub mod templates;
pub mod test_helpers;
pub mod types;
pub mod validation;
pub mod visibility;
