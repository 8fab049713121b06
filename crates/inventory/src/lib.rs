//! Inventory store: the authoritative in-memory stock collection.
//!
//! This crate contains the business rules for inventory, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage). A presentation
//! layer owns rendering, confirmation dialogs and notification display; it
//! calls into [`InventoryStore`] for every mutation and re-renders from the
//! returned snapshot and statistics.

pub mod exchange;
pub mod item;
pub mod store;

pub use exchange::{ImportReport, export_file_name};
pub use item::{DEFAULT_REORDER_LEVEL, InventoryItem, ItemDraft, ItemUpdate};
pub use store::{
    AddOutcome, CreatedReceipt, InventoryStore, MergeReceipt, PendingMerge, Statistics,
};
