//! User-facing command surface.
//!
//! Two operations — undo and redo — plus the redo-everything convenience.
//! Each invocation runs the classifier, runs its engine, folds a failure
//! into a single notified message, and records its own identity on the
//! host only once the call has fully completed, so the next invocation
//! classifies against what actually ran.

use rewind_log::{CommandToken, HistoryHost, LogPos};

use crate::checkpoint::{CheckpointState, Options, classify};
use crate::error::{RedoError, UndoError};
use crate::redo::{self, RedoReport};
use crate::undo;

/// Step count meaning "as many as available"; the per-step constraint
/// checks stop the walk long before this runs out.
const UNBOUNDED_STEPS: usize = usize::MAX;

/// Checkpoint-constrained undo/redo commands for one document.
///
/// Owns the document's [`CheckpointState`]; create one per open document
/// and drop it when the document closes.
#[derive(Debug, Default)]
pub struct HistoryCommands {
	state: CheckpointState,
	options: Options,
}

impl HistoryCommands {
	pub fn new(options: Options) -> Self {
		Self {
			state: CheckpointState::new(),
			options,
		}
	}

	/// The document's checkpoint state, for inspection.
	pub fn state(&self) -> &CheckpointState {
		&self.state
	}

	/// Undoes `steps` change groups (zero is treated as one).
	///
	/// Failures are reported to the user via the host and returned for the
	/// caller's benefit; they never escape as panics.
	pub fn undo<H: HistoryHost>(
		&mut self,
		host: &mut H,
		steps: usize,
	) -> Result<LogPos, UndoError> {
		let continuity = classify(&mut self.state, self.options, host.previous_command());
		let result = undo::run(
			&mut self.state,
			self.options,
			host,
			continuity,
			steps.max(1),
		);
		if let Err(err) = &result {
			let message = format!("Undo: {err}");
			host.notify(&message);
		}
		host.set_command_identity(CommandToken::ConstrainedUndo);
		result
	}

	/// Redoes `steps` undone change groups (zero is treated as one).
	///
	/// A walk that applies some steps and then stops short reports why it
	/// halted; a walk that applies none fails outright.
	pub fn redo<H: HistoryHost>(
		&mut self,
		host: &mut H,
		steps: usize,
	) -> Result<RedoReport, RedoError> {
		let continuity = classify(&mut self.state, self.options, host.previous_command());
		let result = redo::run(
			&mut self.state,
			self.options,
			host,
			continuity,
			steps.max(1),
		);
		match &result {
			Err(err) => {
				let message = format!("Redo: {err}");
				host.notify(&message);
			}
			Ok(report) => {
				if let Some(halt) = report.halted {
					let message = format!("Redo stopped: {halt}");
					host.notify(&message);
				}
			}
		}
		host.set_command_identity(CommandToken::ConstrainedRedo);
		result
	}

	/// Redoes until the checkpoint — or the end of history — stops the
	/// walk.
	pub fn redo_all<H: HistoryHost>(&mut self, host: &mut H) -> Result<RedoReport, RedoError> {
		self.redo(host, UNBOUNDED_STEPS)
	}
}
