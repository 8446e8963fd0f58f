/// Identity of the most recently executed command.
///
/// The run-continuity channel: read at the start of every invocation to
/// decide whether the call continues an undo/redo run, written back once an
/// invocation fully completes. Compared by value; never inspected
/// structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandToken {
	/// The host editor's own plain undo command.
	PlainUndo,
	/// This controller's undo entry point.
	ConstrainedUndo,
	/// This controller's redo entry point.
	ConstrainedRedo,
	/// The explicit cancel gesture that lifts the checkpoint.
	Cancel,
	/// Any unrelated command.
	#[default]
	Other,
}
