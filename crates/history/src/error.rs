//! Failure kinds for the undo/redo engines.
//!
//! Every failure here is recoverable and user-facing: the facade folds it
//! into one notified message and the invocation simply ends. Nothing in
//! this crate panics or propagates a crash.

use thiserror::Error;

/// Why a redo invocation — or a step inside one — refused to proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RedoError {
	/// The last change was not produced by an undo; there is nothing to
	/// re-apply.
	#[error("no undo to redo")]
	NoUndoToRedo,
	/// Undo-produced records exist deeper in the log, but the head group
	/// was not produced by an undo.
	#[error("step not found")]
	StepNotFound,
	/// The run reached the point where the undo sequence began; the
	/// cancel gesture steps over it.
	#[error("end-point hit")]
	EndPointHit,
	/// The walk ran out of history. Only reachable with the checkpoint
	/// lifted.
	#[error("end of history")]
	OutOfHistory,
}

/// Why an undo invocation did not apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UndoError {
	/// The host's primitive found no further changes to undo.
	#[error("nothing to undo")]
	NothingToUndo,
}
