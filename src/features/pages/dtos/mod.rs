mod page_context;

pub use page_context::{ControlMeasuresContext, HomeContext, UpdatesContext};
