//! Signal
//!
//! A list of slots, called in order whenever the signal is emitted.
//!
//! Slots may freely connect or disconnect any slot (including themselves)
//! while being called. A slot disconnected during it's own call is only
//! released once the call returns.

// Modules
pub mod iter;

// Exports
pub use self::iter::SlotCallIter;

// Imports
use {
	crate::{
		Combiner,
		Connection,
		IntoCallback,
		LastValue,
		SignalWorld,
		Slot,
		SlotKey,
		Track,
		Trackable,
		loc::Loc,
		slot::{Callback, Link, Owner, SlotNode},
	},
	core::fmt,
	tether_world::{IMutLike, Rc, RcLike, WeakLike, WorldDefault, WorldGlobal, WorldThreadLocal},
};

/// Signal.
///
/// Emitting the signal with [`emit`](Self::emit) calls each slot with `&A`,
/// and folds their results of type `R` with the combiner `C`.
///
/// Dropping the signal disconnects all of it's slots.
pub struct Signal<A: ?Sized + 'static, R: 'static = (), C = LastValue, W: SignalWorld = WorldDefault> {
	/// Head
	head: Rc<Link<A, R, W>, W>,

	/// Combiner
	combiner: C,
}

impl<A: ?Sized + 'static, R: 'static, C, W: SignalWorld> Signal<A, R, C, W> {
	/// Creates a new, empty signal
	#[must_use]
	pub fn new() -> Self
	where
		C: Default,
	{
		Self::with_combiner(C::default())
	}

	/// Creates a new, empty signal with a combiner
	#[must_use]
	pub fn with_combiner(combiner: C) -> Self {
		Self {
			head: RcLike::new(IMutLike::new(None)),
			combiner,
		}
	}

	/// Returns the combiner
	#[must_use]
	pub const fn combiner(&self) -> &C {
		&self.combiner
	}

	/// Returns the combiner mutably
	#[must_use]
	pub const fn combiner_mut(&mut self) -> &mut C {
		&mut self.combiner
	}

	/// Connects a slot after all others
	#[track_caller]
	pub fn connect<F>(&self, f: F) -> Connection<W>
	where
		F: Fn(&A) -> R + IntoCallback<A, R, W>,
	{
		let callback = <F as IntoCallback<A, R, W>>::into_callback(f);
		self.connect_inner(self.last_owner(), callback, None, Loc::caller())
	}

	/// Connects a slot before all others
	#[track_caller]
	pub fn connect_front<F>(&self, f: F) -> Connection<W>
	where
		F: Fn(&A) -> R + IntoCallback<A, R, W>,
	{
		let callback = <F as IntoCallback<A, R, W>>::into_callback(f);
		self.connect_inner(self.head_owner(), callback, None, Loc::caller())
	}

	/// Connects a slot after all others, with a key.
	///
	/// The slot may later be disconnected with [`disconnect`](Self::disconnect).
	#[track_caller]
	pub fn connect_keyed<F>(&self, key: SlotKey, f: F) -> Connection<W>
	where
		F: Fn(&A) -> R + IntoCallback<A, R, W>,
	{
		let callback = <F as IntoCallback<A, R, W>>::into_callback(f);
		self.connect_inner(self.last_owner(), callback, Some(key), Loc::caller())
	}

	/// Connects a slot before all others, with a key.
	///
	/// The slot may later be disconnected with [`disconnect`](Self::disconnect).
	#[track_caller]
	pub fn connect_front_keyed<F>(&self, key: SlotKey, f: F) -> Connection<W>
	where
		F: Fn(&A) -> R + IntoCallback<A, R, W>,
	{
		let callback = <F as IntoCallback<A, R, W>>::into_callback(f);
		self.connect_inner(self.head_owner(), callback, Some(key), Loc::caller())
	}

	/// Connects a slot after all others, tracking it in `trackable`.
	///
	/// The slot is disconnected once `trackable` is dropped.
	#[track_caller]
	pub fn connect_tracked<F>(&self, trackable: &Trackable<W>, f: F) -> Connection<W>
	where
		F: Fn(&A) -> R + IntoCallback<A, R, W>,
	{
		let connection = self.connect(f);
		trackable.track(connection.clone());
		connection
	}

	/// Inner function for all `connect*` methods
	fn connect_inner(
		&self,
		owner: Owner<A, R, W>,
		callback: Callback<A, R, W>,
		key: Option<SlotKey>,
		connected_loc: Loc,
	) -> Connection<W> {
		let slot = SlotNode::insert(owner, callback, key, connected_loc);
		tracing::trace!(%connected_loc, ?key, "Connected slot");

		Connection::from_slot(W::erase_slot(slot))
	}

	/// Returns the owner of the first slot
	fn head_owner(&self) -> Owner<A, R, W> {
		Owner::Head(RcLike::downgrade(&self.head))
	}

	/// Returns the owner of the slot after the last slot
	fn last_owner(&self) -> Owner<A, R, W> {
		let mut owner = self.head_owner();
		let mut cur = self.head.get_cloned();
		while let Some(slot) = cur {
			cur = slot.next_slot();
			owner = Owner::Slot(RcLike::downgrade(&slot));
		}

		owner
	}

	/// Disconnects all slots connected with `key`.
	///
	/// Does nothing if no slots match.
	pub fn disconnect(&self, key: &SlotKey) {
		let mut cur = self.head.get_cloned();
		while let Some(slot) = cur {
			cur = slot.next_slot();
			if slot.key().as_ref() == Some(key) {
				slot.disconnect();
			}
		}
	}

	/// Disconnects all slots.
	///
	/// Note that this disconnects slots connected by anyone, so prefer
	/// disconnecting only the connections you own.
	pub fn disconnect_all_slots(&self) {
		while let Some(slot) = self.head.get_cloned() {
			slot.disconnect();
		}
	}

	/// Returns the number of connected slots.
	///
	/// This is `O(n)`.
	#[must_use]
	pub fn num_slots(&self) -> usize {
		let mut num_slots = 0;
		let mut cur = self.head.get_cloned();
		while let Some(slot) = cur {
			cur = slot.next_slot();
			num_slots += 1;
		}

		num_slots
	}

	/// Returns if there are no connected slots
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.head.with(Option::is_none)
	}

	/// Emits this signal.
	///
	/// Calls every connected, unblocked slot with `args`, in order, as the
	/// combiner requests results. Panics from slots propagate, and stop the
	/// emission, unless the combiner catches them.
	pub fn emit(&self, args: &A) -> C::Output
	where
		C: Combiner<R>,
	{
		let slots = SlotCallIter::<A, R, W>::new(self.head.get_cloned(), args);
		self.combiner.combine(slots)
	}
}

#[duplicate::duplicate_item(
	WorldTy            SendSync;
	[WorldThreadLocal] ['static];
	[WorldGlobal]      [Send + Sync + 'static];
)]
impl<A: ?Sized + 'static, R: 'static, C> Signal<A, R, C, WorldTy> {
	/// Connects `method` on `target` after all other slots.
	///
	/// The slot only holds a weak reference to `target`, and is tracked by
	/// it's [`Trackable`], so it's disconnected once `target` is dropped.
	/// It may also be disconnected with the key `SlotKey::new(&*target, &method)`.
	#[track_caller]
	pub fn connect_method<T, M>(&self, target: &Rc<T, WorldTy>, method: M) -> Connection<WorldTy>
	where
		T: Track<WorldTy> + SendSync,
		M: Fn(&T, &A) -> R + SendSync,
		R: Default,
	{
		let key = SlotKey::new::<T, M>(target, &method);
		let weak_target = RcLike::downgrade(target);
		let connection = self.connect_keyed(key, move |args: &A| match WeakLike::upgrade(&weak_target) {
			Some(target) => method(&target, args),
			None => R::default(),
		});
		target.trackable().track(connection.clone());

		connection
	}
}

impl<A: ?Sized + 'static, R: 'static, C: Default, W: SignalWorld> Default for Signal<A, R, C, W> {
	fn default() -> Self {
		Self::new()
	}
}

impl<A: ?Sized + 'static, R: 'static, C, W: SignalWorld> Drop for Signal<A, R, C, W> {
	fn drop(&mut self) {
		tracing::trace!(num_slots = self.num_slots(), "Dropping signal");
		self.disconnect_all_slots();
	}
}

impl<A: ?Sized + 'static, R: 'static, C: fmt::Debug, W: SignalWorld> fmt::Debug for Signal<A, R, C, W> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("num_slots", &self.num_slots())
			.field("combiner", &self.combiner)
			.finish_non_exhaustive()
	}
}
