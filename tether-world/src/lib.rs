//! `tether`'s world types.
//!
//! A world decides how shared state is counted and mutated.
//! The thread-local world uses `Rc` and `RefCell`, while the global
//! world uses `Arc` and `parking_lot::Mutex`, so that values built
//! in it may be shared across threads.

// Lints
#![expect(
	type_alias_bounds,
	reason = "They aren't enforced, but they let us use the `W::RC` shorthand"
)]

// Modules
pub mod imut;
pub mod rc;

// Exports
pub use self::{
	imut::{IMutFamily, IMutLike, ParkingLotMutex, StdRefCell},
	rc::{RcFamily, RcLike, StdArc, StdRc, WeakLike},
};

/// World
pub trait World: Sized + Clone + 'static {
	/// Reference-counted pointer family
	type RC: RcFamily;

	/// Inner mutability family
	type IM: IMutFamily;
}

/// Thread-local world
///
/// Reference counts are non-atomic, and nothing built in this
/// world may leave the thread it was created in.
#[derive(Clone, Copy, Default, Debug)]
pub struct WorldThreadLocal;

impl World for WorldThreadLocal {
	type IM = StdRefCell;
	type RC = StdRc;
}

/// Global world
///
/// Reference counts are atomic, and inner mutability is
/// guarded by a mutex.
#[derive(Clone, Copy, Default, Debug)]
pub struct WorldGlobal;

impl World for WorldGlobal {
	type IM = ParkingLotMutex;
	type RC = StdArc;
}

/// The `Rc` of the world `W`
pub type Rc<T: ?Sized, W: World> = <W::RC as RcFamily>::Rc<T>;

/// The `Weak` of the world `W`
pub type Weak<T: ?Sized, W: World> = <W::RC as RcFamily>::Weak<T>;

/// The `IMut` of the world `W`
pub type IMut<T, W: World> = <W::IM as IMutFamily>::IMut<T>;

/// Default world
#[cfg(not(feature = "sync"))]
pub type WorldDefault = WorldThreadLocal;

/// Default world
#[cfg(feature = "sync")]
pub type WorldDefault = WorldGlobal;
