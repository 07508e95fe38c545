//! Application layer for the B-LAN state core.
//!
//! This crate provides the use-case services that coordinate between the
//! domain and infrastructure layers: the polling synchronizer, the
//! notification aggregator, and the per-view workflows (jobs, chat,
//! security, ledger, profile).

pub mod chat_service;
pub mod job_board;
pub mod ledger_service;
pub mod matcher;
pub mod notification_center;
pub mod profile_service;
pub mod security_desk;
pub mod seeds;
pub mod sync;

pub use chat_service::{ChatService, SendOutcome};
pub use job_board::JobBoard;
pub use ledger_service::LedgerService;
pub use matcher::OfflineMatcher;
pub use notification_center::NotificationCenter;
pub use profile_service::ProfileService;
pub use security_desk::SecurityDesk;
pub use sync::{PollingSynchronizer, SyncHandle};
