mod dip_tank;

pub use dip_tank::DipTank;
#[cfg(test)]
pub(crate) use dip_tank::fixtures;
