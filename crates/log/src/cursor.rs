//! Read-only navigation over a host's edit log.

use crate::host::HistoryHost;
use crate::position::{EntryKind, LogPos};

/// Pure queries over the log of a [`HistoryHost`].
///
/// Borrows the host immutably; nothing here mutates the log or the
/// equivalence table. Instantiate transiently wherever a query is needed.
pub struct HistoryCursor<'a, H: HistoryHost + ?Sized> {
	host: &'a H,
}

impl<'a, H: HistoryHost + ?Sized> HistoryCursor<'a, H> {
	pub fn new(host: &'a H) -> Self {
		Self { host }
	}

	/// Steps over leading boundary sentinels beneath `pos`.
	pub fn skip_boundaries(&self, mut pos: LogPos) -> LogPos {
		while let Some(EntryKind::Boundary) = self.host.entry_below(pos) {
			pos = LogPos(pos.0 - 1);
		}
		pos
	}

	/// Whether the log state at `pos` was produced by an undo.
	///
	/// Skips leading boundary sentinels, then consults the host's
	/// equivalence table.
	pub fn is_at_redo_equivalent(&self, pos: LogPos) -> bool {
		self.host
			.equivalence_lookup(self.skip_boundaries(pos))
			.is_some()
	}

	/// Position after the current change group: skips leading boundaries,
	/// the group's edit records, and any boundary sentinels that follow.
	///
	/// This is where the log cursor would land if one more group were
	/// consumed from `pos`.
	pub fn next_group_boundary(&self, pos: LogPos) -> LogPos {
		let mut pos = self.skip_boundaries(pos);
		while let Some(EntryKind::Edit) = self.host.entry_below(pos) {
			pos = LogPos(pos.0 - 1);
		}
		self.skip_boundaries(pos)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::host::{RunStart, UndoMode};
	use crate::memlog::MemoryHost;

	#[test]
	fn skip_boundaries_steps_over_sentinel_runs() {
		let host = MemoryHost::with_groups(&[2, 1]);
		let cursor = HistoryCursor::new(&host);

		// Log: E E b E b — head 5, one boundary beneath it.
		assert_eq!(cursor.skip_boundaries(LogPos(5)), LogPos(4));
		assert_eq!(cursor.skip_boundaries(LogPos(4)), LogPos(4));
		assert_eq!(cursor.skip_boundaries(LogPos(0)), LogPos(0));
	}

	#[test]
	fn next_group_boundary_lands_past_the_following_sentinels() {
		let host = MemoryHost::with_groups(&[2, 1]);
		let cursor = HistoryCursor::new(&host);

		// From the head: over the boundary, the one-record group, and its
		// boundary, onto the two-record group.
		assert_eq!(cursor.next_group_boundary(LogPos(5)), LogPos(2));
		assert_eq!(cursor.next_group_boundary(LogPos(2)), LogPos(0));
	}

	#[test]
	fn next_group_boundary_at_the_bottom_stays_put() {
		let host = MemoryHost::with_groups(&[1]);
		let cursor = HistoryCursor::new(&host);

		assert_eq!(cursor.next_group_boundary(LogPos(0)), LogPos(0));
	}

	#[test]
	fn redo_equivalence_appears_only_after_an_undo() {
		let mut host = MemoryHost::with_groups(&[1, 1]);

		assert!(!HistoryCursor::new(&host).is_at_redo_equivalent(host.head()));

		host.apply_inverse_edits(RunStart::Head, 1, UndoMode::Linear)
			.unwrap();

		let cursor = HistoryCursor::new(&host);
		assert!(
			cursor.is_at_redo_equivalent(host.head()),
			"head should trace back to the undo that produced it"
		);
		assert!(!cursor.is_at_redo_equivalent(LogPos(1)));
	}
}
