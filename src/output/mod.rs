//! Output sink for CZML documents.
//!
//! Every writer of a document emits into one [`CzmlOutputStream`], shared
//! through a [`SharedOutput`] handle.

mod sink;
mod stream;

pub use sink::MemorySink;
pub use stream::{CzmlOutputStream, SharedOutput, WriterToken};
