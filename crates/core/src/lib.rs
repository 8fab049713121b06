//! `stockbook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod notify;

pub use error::{DomainError, DomainResult};
pub use id::ItemId;
pub use notify::{Notice, Severity};
