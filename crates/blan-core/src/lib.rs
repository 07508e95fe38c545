//! Domain core of the B-LAN community portal state model.
//!
//! Defines the persisted entities, the key-value storage capability, the
//! typed channels over it, and the external skill-matcher boundary. The
//! concrete stores live in `blan-infrastructure`; the use-case services
//! (polling, notifications, workflows) live in `blan-application`.

pub mod channel;
pub mod chat;
pub mod config;
pub mod error;
pub mod hash;
pub mod job;
pub mod ledger;
pub mod matcher;
pub mod notification;
pub mod profile;
pub mod security;
pub mod store;
pub mod time;

// Re-export common error type
pub use error::{BlanError, Result};
