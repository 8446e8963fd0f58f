//! The undo engine.
//!
//! Undo itself is unconstrained — the checkpoint only bounds redo. This
//! engine handles selection scoping and the cancel override, then hands
//! the right continuation to the host's primitive: a call that continues a
//! prior undo-or-redo run resumes the host's own pending walk, anything
//! else starts fresh from the head.

use rewind_log::{HistoryHost, LogPos, PrimitiveError, RunStart, UndoMode};
use tracing::trace;

use crate::checkpoint::{CheckpointState, Continuity, Options};
use crate::error::UndoError;

pub(crate) fn run<H: HistoryHost>(
	state: &mut CheckpointState,
	options: Options,
	host: &mut H,
	continuity: Continuity,
	steps: usize,
) -> Result<LogPos, UndoError> {
	// A new undo invalidates any redo continuation.
	state.pending_redo = None;

	if host.has_active_selection() {
		if options.allow_undo_in_region {
			host.notify("Undo in region in use; end-point ignored for this run");
			state.respect = false;
			state.in_region = true;
		} else {
			host.clear_selection();
		}
	}

	if continuity.was_cancel {
		state.lift_checkpoint();
		host.notify("Undo end-point stepped over");
	}

	let start = if continuity.continues_run() {
		RunStart::Resume
	} else {
		RunStart::Head
	};
	let mode = if state.in_region {
		UndoMode::Selection
	} else {
		UndoMode::Linear
	};
	trace!(?start, ?mode, steps, "undo requested");

	match host.apply_inverse_edits(start, steps, mode) {
		Ok(cursor) => {
			trace!(cursor = cursor.0, "undo applied");
			Ok(cursor)
		}
		Err(PrimitiveError::NothingToUndo) => Err(UndoError::NothingToUndo),
	}
}
