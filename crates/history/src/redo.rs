//! The constrained redo engine.
//!
//! Redo is a targeted undo of the inverse records the log accumulated
//! while undoing: each step consumes one such group, re-applying the edit
//! that group had undone. Validity is a property of positions — a step is
//! sanctioned while its base position is traceable through the host's
//! equivalence table to an undo the user actually performed in this
//! session. The checkpoint, the point where that undo sequence began, is
//! exactly where traceability ends.
//!
//! An invocation of N steps runs as a loop of single constrained steps, so
//! "redo all" can request an unbounded count and be stopped by the
//! per-step checks themselves. No log mutation happens before a step's
//! checks pass; the first failed check of the first step is the
//! invocation's error, a failed check after applied steps merely halts the
//! walk.

use rewind_log::{HistoryCursor, HistoryHost, LogPos, PrimitiveError, RunStart, UndoMode};
use tracing::trace;

use crate::checkpoint::{CheckpointState, Continuity, Options};
use crate::error::RedoError;

/// Outcome of a redo invocation that applied at least one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedoReport {
	/// Steps actually applied.
	pub applied: usize,
	/// Log cursor after the last applied step.
	pub cursor: LogPos,
	/// Why the walk stopped before the requested count, if it did.
	pub halted: Option<RedoError>,
}

pub(crate) fn run<H: HistoryHost>(
	state: &mut CheckpointState,
	options: Options,
	host: &mut H,
	continuity: Continuity,
	steps: usize,
) -> Result<RedoReport, RedoError> {
	// A redo run survives its own steps and the cancel override; anything
	// else starts a fresh walk from the head.
	let mut continuing =
		continuity.was_redo || (continuity.was_cancel && state.pending_redo.is_some());
	if !continuing {
		state.pending_redo = None;
	}

	if continuity.was_cancel {
		state.lift_checkpoint();
		host.notify("Redo end-point stepped over");
	}

	// A redo step is internally an undo of the inverse, so selection
	// handling mirrors the undo engine.
	if host.has_active_selection() {
		if options.allow_undo_in_region {
			host.notify("Undo in region in use; end-point ignored for this run");
			state.respect = false;
			state.in_region = true;
		} else {
			host.clear_selection();
		}
	}

	let mut applied = 0usize;
	let mut last_cursor = None;
	let mut halted = None;

	while applied < steps {
		match permit_step(state, &*host, continuing) {
			Ok(base) => {
				let mode = if state.in_region {
					UndoMode::Selection
				} else {
					UndoMode::Linear
				};
				match host.apply_inverse_edits(RunStart::At(base), 1, mode) {
					Ok(cursor) => {
						state.pending_redo = Some(cursor);
						last_cursor = Some(cursor);
						applied += 1;
						continuing = true;
						trace!(from = base.0, cursor = cursor.0, applied, "redo step applied");
					}
					Err(PrimitiveError::NothingToUndo) => {
						halted = Some(RedoError::OutOfHistory);
						break;
					}
				}
			}
			Err(err) => {
				halted = Some(err);
				break;
			}
		}
	}

	match last_cursor {
		Some(cursor) => {
			trace!(applied, cursor = cursor.0, ?halted, "redo walk finished");
			Ok(RedoReport {
				applied,
				cursor,
				halted,
			})
		}
		None => Err(halted.unwrap_or(RedoError::NoUndoToRedo)),
	}
}

/// Decides whether one redo step may proceed and from where.
///
/// The base is the pending-redo cursor when continuing a run with one (a
/// run that has applied at least one step always has one), else the
/// boundary-skipped head.
///
/// - A continuing step whose base is not redo-equivalent fails with
///   [`RedoError::EndPointHit`] while enforcement is active: the walk
///   reached the point where the undo sequence began. With enforcement
///   lifted it proceeds, stepping over the checkpoint.
/// - A fresh step whose head is not redo-equivalent fails regardless of
///   enforcement: with [`RedoError::StepNotFound`] when the position past
///   the next group boundary is redo-equivalent (a redo step exists deeper
///   in the log, behind an unrelated edit), with
///   [`RedoError::NoUndoToRedo`] otherwise.
fn permit_step<H: HistoryHost>(
	state: &CheckpointState,
	host: &H,
	continuing: bool,
) -> Result<LogPos, RedoError> {
	let cursor = HistoryCursor::new(host);

	let pending = if continuing { state.pending_redo } else { None };
	let base = cursor.skip_boundaries(pending.unwrap_or_else(|| host.head()));

	if cursor.is_at_redo_equivalent(base) {
		return Ok(base);
	}

	if pending.is_some() {
		if state.respect {
			Err(RedoError::EndPointHit)
		} else {
			Ok(base)
		}
	} else if state.respect
		&& cursor.is_at_redo_equivalent(cursor.next_group_boundary(base))
	{
		Err(RedoError::StepNotFound)
	} else {
		Err(RedoError::NoUndoToRedo)
	}
}
