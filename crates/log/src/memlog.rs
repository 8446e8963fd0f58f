//! In-memory reference host.
//!
//! A self-contained [`HistoryHost`] backed by a `Vec` of entry kinds and an
//! `FxHashMap` equivalence table. Groups carry no text — only their shape,
//! which is all a controller navigates by — so this host doubles as the
//! test fixture for the engine crates and as a template for real host
//! implementations.
//!
//! # Semantics
//!
//! [`apply_inverse_edits`] walks the requested groups downward from the
//! start position, appends one inverse record group covering the whole
//! application, maps the new head to the canonical earlier position the
//! buffer state now reproduces, and returns the landing cursor. Chains
//! collapse on insert: a record whose landing position is itself in the
//! table maps through to that entry's value.
//!
//! [`apply_inverse_edits`]: HistoryHost::apply_inverse_edits

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::host::{HistoryHost, PrimitiveError, RunStart, UndoMode};
use crate::position::{EntryKind, LogPos};
use crate::token::CommandToken;

/// Reference [`HistoryHost`] over an in-memory log.
#[derive(Debug, Default)]
pub struct MemoryHost {
	log: Vec<EntryKind>,
	equiv: FxHashMap<LogPos, LogPos>,
	pending_undo: Option<LogPos>,
	selection: bool,
	last_command: CommandToken,
	notices: Vec<String>,
	last_mode: Option<UndoMode>,
}

impl MemoryHost {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a host whose log holds one change group per element of
	/// `groups`, each with that many edit records and a trailing boundary.
	pub fn with_groups(groups: &[usize]) -> Self {
		let mut host = Self::new();
		for &len in groups {
			host.record_group(len);
		}
		host
	}

	/// Appends a fresh user-edit group (and its boundary) to the log, the
	/// way the editor records an ordinary edit command.
	pub fn record_group(&mut self, len: usize) {
		for _ in 0..len {
			self.log.push(EntryKind::Edit);
		}
		self.log.push(EntryKind::Boundary);
	}

	/// Selection toggle for tests.
	pub fn set_selection(&mut self, active: bool) {
		self.selection = active;
	}

	/// Messages shown so far, oldest first.
	pub fn notices(&self) -> &[String] {
		&self.notices
	}

	/// Mode of the most recent inverse-edit application.
	pub fn last_mode(&self) -> Option<UndoMode> {
		self.last_mode
	}

	/// Number of entries currently in the log.
	pub fn log_len(&self) -> usize {
		self.log.len()
	}

	fn skip_boundaries(&self, mut pos: LogPos) -> LogPos {
		while pos.0 > 0 && matches!(self.log.get(pos.0 - 1), Some(EntryKind::Boundary)) {
			pos = LogPos(pos.0 - 1);
		}
		pos
	}
}

impl HistoryHost for MemoryHost {
	fn head(&self) -> LogPos {
		LogPos(self.log.len())
	}

	fn entry_below(&self, pos: LogPos) -> Option<EntryKind> {
		pos.0.checked_sub(1).and_then(|idx| self.log.get(idx).copied())
	}

	fn equivalence_lookup(&self, pos: LogPos) -> Option<LogPos> {
		self.equiv.get(&pos).copied()
	}

	fn apply_inverse_edits(
		&mut self,
		start: RunStart,
		steps: usize,
		mode: UndoMode,
	) -> Result<LogPos, PrimitiveError> {
		let from = match start {
			RunStart::Head => self.head(),
			RunStart::Resume => self.pending_undo.unwrap_or_else(|| self.head()),
			RunStart::At(pos) => pos,
		};

		let mut cursor = self.skip_boundaries(from);
		let mut consumed = 0usize;
		let mut applied = 0usize;
		for _ in 0..steps {
			let mut group = 0usize;
			while matches!(self.entry_below(cursor), Some(EntryKind::Edit)) {
				cursor = LogPos(cursor.0 - 1);
				group += 1;
			}
			if group == 0 {
				break;
			}
			cursor = self.skip_boundaries(cursor);
			consumed += group;
			applied += 1;
		}
		if applied == 0 {
			return Err(PrimitiveError::NothingToUndo);
		}

		// One inverse record group per application; the new head maps to
		// the canonical position whose state the buffer now matches.
		for _ in 0..consumed {
			self.log.push(EntryKind::Edit);
		}
		let key = LogPos(self.log.len());
		let canonical = self.equiv.get(&cursor).copied().unwrap_or(cursor);
		self.equiv.insert(key, canonical);
		self.log.push(EntryKind::Boundary);

		self.pending_undo = Some(cursor);
		self.last_mode = Some(mode);
		trace!(from = from.0, cursor = cursor.0, applied, ?mode, "inverse edits applied");
		Ok(cursor)
	}

	fn has_active_selection(&self) -> bool {
		self.selection
	}

	fn clear_selection(&mut self) {
		self.selection = false;
	}

	fn notify(&mut self, message: &str) {
		self.notices.push(message.to_owned());
	}

	fn previous_command(&self) -> CommandToken {
		self.last_command
	}

	fn set_command_identity(&mut self, token: CommandToken) {
		self.last_command = token;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn undo_appends_an_inverse_record_and_an_equivalence() {
		let mut host = MemoryHost::with_groups(&[1, 2]);
		// Log: E b E E b — head 5.
		let cursor = host
			.apply_inverse_edits(RunStart::Head, 1, UndoMode::Linear)
			.unwrap();

		assert_eq!(
			cursor,
			LogPos(1),
			"walk consumes the newest group and its boundary"
		);
		// Two inverse records plus a boundary were appended.
		assert_eq!(host.log_len(), 8);
		assert_eq!(host.equivalence_lookup(LogPos(7)), Some(LogPos(1)));
	}

	#[test]
	fn resume_continues_where_the_previous_application_stopped() {
		let mut host = MemoryHost::with_groups(&[1, 1, 1]);
		host.apply_inverse_edits(RunStart::Head, 1, UndoMode::Linear)
			.unwrap();
		let cursor = host
			.apply_inverse_edits(RunStart::Resume, 1, UndoMode::Linear)
			.unwrap();

		assert_eq!(cursor, LogPos(1), "second step consumes the next group down");
	}

	#[test]
	fn equivalence_values_collapse_chains() {
		let mut host = MemoryHost::with_groups(&[1, 1]);
		let first = host
			.apply_inverse_edits(RunStart::Head, 1, UndoMode::Linear)
			.unwrap();
		// Redo the step just recorded: land where the undo started.
		let key = host.skip_boundaries(host.head());
		assert_eq!(host.equivalence_lookup(key), Some(first));

		let back = host
			.apply_inverse_edits(RunStart::At(key), 1, UndoMode::Linear)
			.unwrap();
		let key = host.skip_boundaries(host.head());
		assert_eq!(
			host.equivalence_lookup(key),
			Some(back),
			"landing outside the table maps to the raw cursor"
		);
	}

	#[test]
	fn exhausted_walk_fails_without_mutating_the_log() {
		let mut host = MemoryHost::new();
		host.record_group(1);
		host.apply_inverse_edits(RunStart::Head, 1, UndoMode::Linear)
			.unwrap();
		let len = host.log_len();

		let err = host
			.apply_inverse_edits(RunStart::Resume, 1, UndoMode::Linear)
			.unwrap_err();
		assert_eq!(err, PrimitiveError::NothingToUndo);
		assert_eq!(host.log_len(), len);
	}

	#[test]
	fn partial_walk_applies_what_exists() {
		let mut host = MemoryHost::with_groups(&[1, 1]);
		let cursor = host
			.apply_inverse_edits(RunStart::Head, 5, UndoMode::Linear)
			.unwrap();
		assert_eq!(cursor, LogPos::BOTTOM);
	}
}
