//! Arena-backed in-memory document.

mod arena;
mod outline;
mod spec;


pub use arena::{Document, ScrollRequest, SCROLL_HISTORY_LIMIT};
pub use spec::NodeSpec;
