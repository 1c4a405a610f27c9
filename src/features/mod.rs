pub mod admin;
pub mod auth;
pub mod cordon_lines;
pub mod dip_tanks;
pub mod foot_wash_stations;
pub mod outbreaks;
pub mod pages;
pub mod updates;
