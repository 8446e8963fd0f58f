//! Primitives for navigating an externally owned edit-history log.
//!
//! The log itself — an append-only sequence of edit records grouped by
//! boundary sentinels — belongs to the host editor. This crate defines the
//! vocabulary for talking about it ([`LogPos`], [`EntryKind`],
//! [`CommandToken`]), the seam through which a controller reaches the
//! editor ([`HistoryHost`]), the pure navigation queries
//! ([`HistoryCursor`]), and an in-memory reference host ([`memlog`]) used
//! by tests and as a template for real host implementations.

pub mod cursor;
pub mod host;
pub mod memlog;

mod position;
mod token;

pub use cursor::HistoryCursor;
pub use host::{HistoryHost, PrimitiveError, RunStart, UndoMode};
pub use memlog::MemoryHost;
pub use position::{EntryKind, LogPos};
pub use token::CommandToken;
