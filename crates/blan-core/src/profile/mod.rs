//! Resident profile domain models.

mod model;

pub use model::Profile;
