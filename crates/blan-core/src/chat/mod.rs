//! Community chat domain models.

mod model;

pub use model::{ChatMessage, MessageKind};
