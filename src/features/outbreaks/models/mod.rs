mod outbreak;

#[cfg(test)]
pub(crate) use outbreak::fixtures;
pub use outbreak::{Outbreak, OutbreakStatus};
