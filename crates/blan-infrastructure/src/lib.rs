//! Infrastructure layer for the B-LAN state core.
//!
//! Concrete [`blan_core::store::KeyValueStore`] implementations, path
//! resolution, and the TOML configuration service.

pub mod config_service;
pub mod json_dir_store;
pub mod memory_store;
pub mod paths;

pub use config_service::ConfigService;
pub use json_dir_store::JsonDirStore;
pub use memory_store::MemoryStore;
