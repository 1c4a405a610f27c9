mod cordon_line;

pub use cordon_line::{CordonLine, CordonStatus};
#[cfg(test)]
pub(crate) use cordon_line::fixtures;
