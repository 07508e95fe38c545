//! Neighborhood job domain models and the claim state machine.

mod model;

pub use model::{ClaimOutcome, Job, JobStatus};
