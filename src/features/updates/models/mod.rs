mod update;

pub use update::{Update, UpdateType};
#[cfg(test)]
pub(crate) use update::fixtures;
