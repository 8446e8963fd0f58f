//! Checkpoint-constrained undo/redo for a host text editor.
//!
//! Steps backward and forward through an externally owned, append-only
//! edit-history log along a single linear strand. Redo normally refuses to
//! walk past the point where the user's undo sequence began (the
//! checkpoint); an explicit cancel gesture lifts the constraint for the
//! remainder of the continuous run, and the first unrelated command
//! restores it.
//!
//! # Architecture
//!
//! ```text
//! HistoryCommands                     HistoryHost (editor implements)
//! ┌────────────────────────┐          ┌────────────────────────────────┐
//! │ CheckpointState        │          │ head() / entry_below()         │
//! │ classify()             │◄────────►│ equivalence_lookup()           │
//! │ undo engine            │          │ apply_inverse_edits()          │
//! │ redo engine            │          │ selection / notify() / tokens  │
//! └────────────────────────┘          └────────────────────────────────┘
//! ```
//!
//! The controller owns no text: the log, the equivalence table, and the
//! inverse-edit primitive all belong to the editor behind
//! [`rewind_log::HistoryHost`]. One [`HistoryCommands`] instance exists per
//! open document and dies with it.

pub mod checkpoint;
pub mod commands;
pub mod error;

mod redo;
mod undo;

pub use checkpoint::{CheckpointState, Continuity, Options};
pub use commands::HistoryCommands;
pub use error::{RedoError, UndoError};
pub use redo::RedoReport;
