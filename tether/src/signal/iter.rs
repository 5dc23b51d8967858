//! Slot call iterator

// Imports
use {
	crate::{SignalWorld, Slot, slot::SlotNode},
	core::{fmt, iter::FusedIterator},
	tether_world::Rc,
};

/// Slot call iterator.
///
/// Calls each connected, unblocked slot as it's advanced, yielding
/// it's result. The next slot is read *before* calling the current one,
/// so slots added after it during the call aren't called by this emission,
/// and a panicking slot leaves the iterator ready to call the next one.
pub struct SlotCallIter<'a, A: ?Sized + 'static, R: 'static, W: SignalWorld> {
	/// Next slot to visit
	next: Option<Rc<SlotNode<A, R, W>, W>>,

	/// Arguments
	args: &'a A,
}

impl<'a, A: ?Sized + 'static, R: 'static, W: SignalWorld> SlotCallIter<'a, A, R, W> {
	/// Creates a new iterator starting at `first`
	pub(crate) const fn new(first: Option<Rc<SlotNode<A, R, W>, W>>, args: &'a A) -> Self {
		Self { next: first, args }
	}
}

impl<A: ?Sized + 'static, R: 'static, W: SignalWorld> Iterator for SlotCallIter<'_, A, R, W> {
	type Item = R;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let slot = self.next.take()?;
			self.next = slot.next_slot();

			// Skip any disconnected or blocked slots
			if slot.is_blocked() {
				continue;
			}
			let Some(callback) = slot.callback() else {
				continue;
			};

			// Note: We keep `slot` and `callback` alive until the call returns, so
			//       if the slot is disconnected during it, it's callback is only
			//       dropped afterwards.
			let args = self.args;
			return Some(slot.calling(|| (*callback)(args)));
		}
	}
}

impl<A: ?Sized + 'static, R: 'static, W: SignalWorld> FusedIterator for SlotCallIter<'_, A, R, W> {}

impl<A: ?Sized + 'static, R: 'static, W: SignalWorld> fmt::Debug for SlotCallIter<'_, A, R, W> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SlotCallIter")
			.field("next", &self.next.as_deref())
			.finish_non_exhaustive()
	}
}
