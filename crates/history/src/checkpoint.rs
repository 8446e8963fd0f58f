//! Per-document checkpoint state and run classification.

use rewind_log::{CommandToken, LogPos};
use tracing::trace;

/// Behavioural options for the controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
	/// Permit selection-scoped undo. When off, an active selection is
	/// cleared before undoing instead of scoping the undo to it.
	pub allow_undo_in_region: bool,
}

/// Mutable flags for one document's undo/redo runs.
///
/// Created on first use and dropped with the document. Never shared: the
/// user's sequential command stream is the only mutator.
#[derive(Debug)]
pub struct CheckpointState {
	/// Checkpoint boundary enforced.
	pub(crate) respect: bool,
	/// The active run is scoped to a selection.
	pub(crate) in_region: bool,
	/// Continuation cursor for an in-progress redo run.
	pub(crate) pending_redo: Option<LogPos>,
}

impl Default for CheckpointState {
	fn default() -> Self {
		Self {
			respect: true,
			in_region: false,
			pending_redo: None,
		}
	}
}

impl CheckpointState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether the checkpoint boundary is currently enforced.
	pub fn respects_checkpoint(&self) -> bool {
		self.respect
	}

	/// Whether the active run is scoped to a selection.
	pub fn in_region(&self) -> bool {
		self.in_region
	}

	/// Disables enforcement for the remainder of the continuous run.
	pub(crate) fn lift_checkpoint(&mut self) {
		self.respect = false;
		self.in_region = false;
	}
}

/// How the current invocation relates to the previous command.
#[derive(Debug, Clone, Copy)]
pub struct Continuity {
	/// Previous command was an undo: the host's plain undo or this
	/// controller's undo entry point.
	pub was_undo: bool,
	/// Previous command was this controller's redo entry point.
	pub was_redo: bool,
	/// Previous command was the cancel gesture.
	pub was_cancel: bool,
}

impl Continuity {
	/// Whether this call continues a prior undo-or-redo run.
	pub fn continues_run(self) -> bool {
		self.was_undo || self.was_redo
	}
}

/// Classifies the invocation against the previous command and re-arms the
/// checkpoint after an unrelated command.
///
/// Commits before either engine reads the state: an override from a prior
/// call survives only along a continuous undo/redo run, so the first
/// unrelated command in between restores enforcement (and drops any stale
/// redo continuation).
pub(crate) fn classify(
	state: &mut CheckpointState,
	options: Options,
	previous: CommandToken,
) -> Continuity {
	let was_undo = matches!(
		previous,
		CommandToken::PlainUndo | CommandToken::ConstrainedUndo
	);
	let was_redo = previous == CommandToken::ConstrainedRedo;
	let was_cancel = previous == CommandToken::Cancel;

	if !state.respect && !(was_undo || was_redo) {
		state.respect = true;
		if options.allow_undo_in_region {
			state.in_region = false;
		}
		state.pending_redo = None;
		trace!(?previous, "checkpoint re-armed after unrelated command");
	}

	Continuity {
		was_undo,
		was_redo,
		was_cancel,
	}
}
