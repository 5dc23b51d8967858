//! World
//!
//! Binds a [`World`] to the types slots are stored as.

// Imports
use {
	crate::slot::{Slot, SlotNode},
	std::{rc, sync},
	tether_world::{Rc, World, WorldGlobal, WorldThreadLocal},
};

/// Signal world
///
/// Only implemented by [`WorldThreadLocal`] and [`WorldGlobal`]. The global
/// world additionally requires every callback to be `Send + Sync`.
pub trait SignalWorld: World + sealed::Sealed {
	/// Callback type of a slot taking `A` and returning `R`
	type Callback<A: ?Sized + 'static, R: 'static>: ?Sized + Fn(&A) -> R + 'static;

	/// Type-erased slot, as held by connections
	type SlotDyn: ?Sized + Slot + 'static;

	/// Erases the argument and return types of a slot
	fn erase_slot<A: ?Sized + 'static, R: 'static>(slot: Rc<SlotNode<A, R, Self>, Self>) -> Rc<Self::SlotDyn, Self>;
}

#[duplicate::duplicate_item(
	WorldTy            Ptr          SendSync;
	[WorldThreadLocal] [rc::Rc]     ['static];
	[WorldGlobal]      [sync::Arc]  [Send + Sync + 'static];
)]
impl SignalWorld for WorldTy {
	type Callback<A: ?Sized + 'static, R: 'static> = dyn Fn(&A) -> R + SendSync;
	type SlotDyn = dyn Slot + SendSync;

	fn erase_slot<A: ?Sized + 'static, R: 'static>(slot: Ptr<SlotNode<A, R, Self>>) -> Ptr<Self::SlotDyn> {
		slot
	}
}

/// Types that may be stored as the callback of a slot in the world `W`
pub trait IntoCallback<A: ?Sized + 'static, R: 'static, W: SignalWorld> {
	/// Moves this value into a callback
	fn into_callback(self) -> Rc<W::Callback<A, R>, W>;
}

#[duplicate::duplicate_item(
	WorldTy            Ptr          SendSync;
	[WorldThreadLocal] [rc::Rc]     ['static];
	[WorldGlobal]      [sync::Arc]  [Send + Sync + 'static];
)]
impl<A, R, F> IntoCallback<A, R, WorldTy> for F
where
	A: ?Sized + 'static,
	R: 'static,
	F: Fn(&A) -> R + SendSync,
{
	fn into_callback(self) -> Ptr<dyn Fn(&A) -> R + SendSync> {
		Ptr::new(self)
	}
}

/// Sealed trait
mod sealed {
	// Imports
	use tether_world::{WorldGlobal, WorldThreadLocal};

	/// Sealed
	pub trait Sealed {}

	impl Sealed for WorldThreadLocal {}
	impl Sealed for WorldGlobal {}
}
