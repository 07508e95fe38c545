//! Security alert domain models.

mod model;

pub use model::{SecurityAlert, Severity, MAX_ALERTS};
