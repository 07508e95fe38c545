//! Cross-cutting notification domain models.

mod model;

pub use model::{Notification, NotificationDraft, NotificationKind, MAX_NOTIFICATIONS};
