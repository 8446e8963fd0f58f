//! The seam between the history controller and the host editor.
//!
//! The controller owns no text and records no edits. Everything it needs
//! from the editor — log access, the equivalence table, the inverse-edit
//! primitive, selection state, the notification channel, and command
//! identity — comes through [`HistoryHost`]. The editor implements the
//! trait once; the engines stay testable against a stub.

use thiserror::Error;

use crate::position::{EntryKind, LogPos};
use crate::token::CommandToken;

/// Where an application of inverse edits starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStart {
	/// A fresh run from the head of the log.
	Head,
	/// Continue the host's own pending run, as a multi-step undo chain
	/// does. Hosts with no pending run treat this as [`RunStart::Head`].
	Resume,
	/// A targeted application from an explicit position.
	At(LogPos),
}

/// How inverse edits are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoMode {
	/// Whole-history undo. The host refuses to reuse positions already
	/// reached by a prior plain undo in the same run.
	Linear,
	/// Undo scoped to the active selection.
	Selection,
}

/// Failure of the host's inverse-edit primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PrimitiveError {
	/// The walk ran out of history before applying a single group.
	#[error("no further changes to undo")]
	NothingToUndo,
}

/// Host-editor operations required by the history controller.
///
/// The log is append-only from the editor's recording side; the only
/// mutation reachable from here is [`apply_inverse_edits`], which may
/// extend it with inverse records.
///
/// [`apply_inverse_edits`]: HistoryHost::apply_inverse_edits
pub trait HistoryHost {
	/// Current head of the edit log (one past the newest entry).
	fn head(&self) -> LogPos;

	/// Kind of the entry directly beneath `pos`, or `None` at the bottom.
	fn entry_below(&self, pos: LogPos) -> Option<EntryKind>;

	/// `Some(earlier)` iff the log state at `pos` was produced by an undo
	/// and reproduces the state at `earlier`.
	///
	/// The host maintains the table on every successful application of
	/// inverse edits, collapsing chains so values are canonical.
	fn equivalence_lookup(&self, pos: LogPos) -> Option<LogPos>;

	/// Applies up to `steps` groups of inverse edits and returns the
	/// resulting log cursor.
	///
	/// Applies fewer groups when history runs out mid-walk; fails with
	/// [`PrimitiveError::NothingToUndo`] only when not even one group
	/// could be applied.
	fn apply_inverse_edits(
		&mut self,
		start: RunStart,
		steps: usize,
		mode: UndoMode,
	) -> Result<LogPos, PrimitiveError>;

	/// Whether a selection is currently active.
	fn has_active_selection(&self) -> bool;

	/// Drops the active selection, if any.
	fn clear_selection(&mut self);

	/// Shows a transient, non-blocking message to the user.
	fn notify(&mut self, message: &str);

	/// Identity of the previously executed command.
	fn previous_command(&self) -> CommandToken;

	/// Records the identity of the command that just completed.
	fn set_command_identity(&mut self, token: CommandToken);
}
