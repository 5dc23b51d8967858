//! Slot
//!
//! Slots are stored in an intrusive, reference counted, doubly linked list.
//!
//! Each slot holds a strong reference to the slot after it, and a weak
//! reference to the *link* that holds it, which is either the signal's head
//! or the `next` link of the previous slot. This lets a slot remove itself
//! without knowing which signal it belongs to.
//!
//! A disconnected slot keeps it's `next` link, so an emission currently
//! holding it may still reach the rest of the list.

// Lints
#![expect(
	type_alias_bounds,
	reason = "They aren't enforced, but they let us use the `W::Callback` shorthand"
)]

// Modules
#[cfg(test)]
mod tests;

// Imports
use {
	crate::{SignalWorld, SlotKey, loc::Loc},
	core::fmt,
	tether_world::{IMut, IMutLike, Rc, RcLike, Weak, WeakLike},
};

/// A link to a slot
pub(crate) type Link<A: ?Sized, R, W: SignalWorld> = IMut<Option<Rc<SlotNode<A, R, W>, W>>, W>;

/// Callback of a slot
pub(crate) type Callback<A: ?Sized, R, W: SignalWorld> = Rc<W::Callback<A, R>, W>;

/// Owner of a slot.
///
/// References the link that holds the slot.
pub(crate) enum Owner<A: ?Sized + 'static, R: 'static, W: SignalWorld> {
	/// The head of a signal
	Head(Weak<Link<A, R, W>, W>),

	/// The `next` link of another slot
	Slot(Weak<SlotNode<A, R, W>, W>),
}

impl<A: ?Sized + 'static, R: 'static, W: SignalWorld> Owner<A, R, W> {
	/// Uses the link referenced by this owner.
	///
	/// Returns `None` if the link no longer exists.
	pub(crate) fn with_link<F, O>(&self, f: F) -> Option<O>
	where
		F: FnOnce(&Link<A, R, W>) -> O,
	{
		match self {
			Self::Head(head) => head.upgrade().map(|head| f(&head)),
			Self::Slot(slot) => slot.upgrade().map(|slot| f(&slot.next)),
		}
	}
}

impl<A: ?Sized + 'static, R: 'static, W: SignalWorld> Clone for Owner<A, R, W> {
	fn clone(&self) -> Self {
		match self {
			Self::Head(head) => Self::Head(head.clone()),
			Self::Slot(slot) => Self::Slot(slot.clone()),
		}
	}
}

/// Slot node.
///
/// The strong count of the `Rc` holding a node is it's reference count:
/// each connection, the owning link and any emission currently on this
/// slot hold one reference.
pub struct SlotNode<A: ?Sized + 'static, R: 'static, W: SignalWorld> {
	/// The link that owns us, `None` once disconnected
	previous: IMut<Option<Owner<A, R, W>>, W>,

	/// Next slot
	next: Link<A, R, W>,

	/// Whether we're blocked
	blocked: IMut<bool, W>,

	/// Number of calls currently running
	calls: IMut<usize, W>,

	/// Callback, released once disconnected
	callback: IMut<Option<Callback<A, R, W>>, W>,

	/// Key
	key: Option<SlotKey>,

	/// Where we were connected
	connected_loc: Loc,
}

impl<A: ?Sized + 'static, R: 'static, W: SignalWorld> SlotNode<A, R, W> {
	/// Creates a new slot and links it right after `owner`.
	///
	/// Whatever `owner` held before becomes our `next` slot.
	pub(crate) fn insert(
		owner: Owner<A, R, W>,
		callback: Callback<A, R, W>,
		key: Option<SlotKey>,
		connected_loc: Loc,
	) -> Rc<Self, W> {
		let slot: Rc<Self, W> = RcLike::new(Self {
			previous: IMutLike::new(Some(owner.clone())),
			next: IMutLike::new(None),
			blocked: IMutLike::new(false),
			calls: IMutLike::new(0),
			callback: IMutLike::new(Some(callback)),
			key,
			connected_loc,
		});

		// Adopt whatever the owner held, and become it's owner
		let adopted = owner.with_link(|link| link.get_cloned()).flatten();
		if let Some(next) = &adopted {
			next.previous.set(Some(Owner::Slot(RcLike::downgrade(&slot))));
		}
		slot.next.set(adopted);

		// Note: This drops the owner's reference to `adopted`, which we now hold.
		owner.with_link(|link| link.set(Some(slot.clone())));

		slot
	}

	/// Returns the next slot
	pub(crate) fn next_slot(&self) -> Option<Rc<Self, W>> {
		self.next.get_cloned()
	}

	/// Returns the callback, if we're still connected
	pub(crate) fn callback(&self) -> Option<Callback<A, R, W>> {
		self.callback.get_cloned()
	}

	/// Calls `f` while marking this slot as calling
	pub(crate) fn calling<F, O>(&self, f: F) -> O
	where
		F: FnOnce() -> O,
	{
		self.calls.with_mut(|calls| *calls += 1);
		scopeguard::defer! {
			self.calls.with_mut(|calls| *calls -= 1);
		}

		f()
	}
}

/// Type-erased slot
pub trait Slot {
	/// Disconnects this slot.
	///
	/// Does nothing if already disconnected. If the slot is currently
	/// being called, it's callback is only released after the call returns.
	fn disconnect(&self);

	/// Returns if this slot is still connected
	fn is_connected(&self) -> bool;

	/// Returns if this slot is blocked
	fn is_blocked(&self) -> bool;

	/// Sets whether this slot is blocked
	fn set_blocked(&self, blocked: bool);

	/// Returns if this slot is currently being called
	fn is_calling(&self) -> bool;

	/// Returns this slot's key
	fn key(&self) -> Option<SlotKey>;

	/// Returns where this slot was connected
	fn connected_loc(&self) -> Loc;
}

impl<A: ?Sized + 'static, R: 'static, W: SignalWorld> Slot for SlotNode<A, R, W> {
	fn disconnect(&self) {
		// Note: Clearing this first means any disconnect while
		//       we're in the middle of this one does nothing.
		let Some(owner) = self.previous.take() else {
			return;
		};
		tracing::trace!(connected_loc=%self.connected_loc, "Disconnecting slot");

		// Have our next slot be owned by our owner instead.
		// Note: We keep our `next` so any emission on us can still continue.
		let next = self.next.get_cloned();
		if let Some(next) = &next {
			next.previous.set(Some(owner.clone()));
		}

		// Note: This releases the owner's reference to us, but whoever
		//       called us must still have one.
		let prev = owner.with_link(|link| link.replace(next));
		drop(prev);

		// Finally release the callback.
		// Note: Any call still running holds it's own reference to it, so
		//       it'll only be dropped once that call returns.
		let callback = self.callback.take();
		drop(callback);
	}

	fn is_connected(&self) -> bool {
		self.previous.with(Option::is_some)
	}

	fn is_blocked(&self) -> bool {
		self.blocked.get_cloned()
	}

	fn set_blocked(&self, blocked: bool) {
		self.blocked.set(blocked);
	}

	fn is_calling(&self) -> bool {
		self.calls.get_cloned() != 0
	}

	fn key(&self) -> Option<SlotKey> {
		self.key
	}

	fn connected_loc(&self) -> Loc {
		self.connected_loc
	}
}

impl<A: ?Sized + 'static, R: 'static, W: SignalWorld> Drop for SlotNode<A, R, W> {
	fn drop(&mut self) {
		debug_assert!(
			!self.is_connected(),
			"Slot connected at {} was dropped while connected",
			self.connected_loc
		);

		// Release the rest of the chain iteratively, or a long chain of
		// disconnected slots would recurse once per slot.
		// Note: A connected slot is always also held by it's owner, so
		//       we never unwrap one here.
		let mut next = self.next.take();
		while let Some(slot) = next {
			next = match <Rc<Self, W> as RcLike<Self>>::try_unwrap(slot) {
				Ok(slot) => slot.next.take(),
				Err(_) => None,
			};
		}
	}
}

impl<A: ?Sized + 'static, R: 'static, W: SignalWorld> fmt::Debug for SlotNode<A, R, W> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SlotNode")
			.field("connected", &self.is_connected())
			.field("blocked", &self.is_blocked())
			.field("calling", &self.is_calling())
			.field("key", &self.key)
			.field("connected_loc", &self.connected_loc)
			.finish_non_exhaustive()
	}
}
