pub mod handle;
pub mod record;
pub mod transition;

pub use record::CallRecord;
pub use transition::{BufferTransition, ImageTransition};
