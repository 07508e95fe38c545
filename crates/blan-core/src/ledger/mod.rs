//! Karma ledger domain models.

mod model;

pub use model::LedgerEntry;
