//! Connection
//!
//! A handle to a slot connected to a signal.

// Modules
pub mod blocked;
pub mod scoped;

// Exports
pub use self::{blocked::BlockedConnection, scoped::ScopedConnection};

// Imports
use {
	crate::{SignalWorld, Slot, loc::Loc},
	core::fmt,
	tether_world::{Rc, RcLike, WorldDefault},
};

/// Connection.
///
/// Shares ownership of a slot, keeping it alive (but not connected) after
/// it's signal is gone. Dropping a connection does *not* disconnect it, see
/// [`ScopedConnection`] for that.
pub struct Connection<W: SignalWorld = WorldDefault> {
	/// Slot
	slot: Option<Rc<W::SlotDyn, W>>,
}

impl<W: SignalWorld> Connection<W> {
	/// Creates an empty connection, not associated with any slot
	#[must_use]
	pub const fn new() -> Self {
		Self { slot: None }
	}

	/// Creates a connection to `slot`
	pub(crate) const fn from_slot(slot: Rc<W::SlotDyn, W>) -> Self {
		Self { slot: Some(slot) }
	}

	/// Blocks the slot.
	///
	/// Blocked slots are skipped by emissions, but remain connected.
	pub fn block(&self) {
		self.set_blocked(true);
	}

	/// Unblocks the slot
	pub fn unblock(&self) {
		self.set_blocked(false);
	}

	/// Sets whether the slot is blocked.
	///
	/// Does nothing if this connection is empty.
	pub fn set_blocked(&self, blocked: bool) {
		if let Some(slot) = &self.slot {
			slot.set_blocked(blocked);
		}
	}

	/// Returns if the slot is blocked.
	///
	/// Empty connections and disconnected slots are never blocked.
	#[must_use]
	pub fn is_blocked(&self) -> bool {
		self.slot.as_ref().is_some_and(|slot| slot.is_connected() && slot.is_blocked())
	}

	/// Disconnects the slot.
	///
	/// Does nothing if already disconnected, or if this connection is empty.
	pub fn disconnect(&self) {
		if let Some(slot) = &self.slot {
			slot.disconnect();
		}
	}

	/// Returns if the slot is still connected
	#[must_use]
	pub fn is_connected(&self) -> bool {
		self.slot.as_ref().is_some_and(|slot| slot.is_connected())
	}

	/// Returns where the slot was connected
	#[must_use]
	pub fn connected_loc(&self) -> Option<Loc> {
		self.slot.as_ref().map(|slot| slot.connected_loc())
	}
}

impl<W: SignalWorld> Clone for Connection<W> {
	fn clone(&self) -> Self {
		Self {
			slot: self.slot.clone(),
		}
	}
}

impl<W: SignalWorld> Default for Connection<W> {
	fn default() -> Self {
		Self::new()
	}
}

impl<W: SignalWorld> PartialEq for Connection<W> {
	fn eq(&self, other: &Self) -> bool {
		// Note: Clones of a connection share the same slot
		match (&self.slot, &other.slot) {
			(Some(lhs), Some(rhs)) => <Rc<W::SlotDyn, W> as RcLike<W::SlotDyn>>::ptr_eq(lhs, rhs),
			(None, None) => true,
			_ => false,
		}
	}
}

impl<W: SignalWorld> Eq for Connection<W> {}

impl<W: SignalWorld> fmt::Debug for Connection<W> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Connection")
			.field("connected", &self.is_connected())
			.field("blocked", &self.is_blocked())
			.field("connected_loc", &self.connected_loc())
			.finish_non_exhaustive()
	}
}
