//! Signals and slots.
//!
//! A [`Signal`] holds a list of slots (callbacks), and calls each of them,
//! in order, when emitted. The results of each slot are folded into the
//! result of the emission by the signal's [`Combiner`].
//!
//! Connecting a slot returns a [`Connection`], which may be used to block or
//! disconnect it later. Connections can be freely copied, and may outlive both
//! the signal and the slot. [`ScopedConnection`] disconnects a connection once
//! dropped, while [`Trackable`] disconnects all connections to an object's
//! methods once the object is dropped.
//!
//! By default, signals and their connections live in a single thread. The
//! [`WorldGlobal`] world (or the `sync` feature) allows signals to be shared
//! and emitted across threads, as long as all slots are `Send + Sync`.
//!
//! # Example
//!
//! ```
//! use tether::{Signal, combiner::Collect};
//!
//! let signal = Signal::<i32, i32, Collect>::new();
//! let double = signal.connect(|value| value * 2);
//! signal.connect(|value| value + 1);
//! assert_eq!(signal.emit(&5), [10, 6]);
//!
//! double.disconnect();
//! assert_eq!(signal.emit(&5), [6]);
//! ```

// Modules
pub mod combiner;
pub mod connection;
pub mod error;
pub mod key;
pub mod loc;
pub mod signal;
pub mod slot;
pub mod trackable;
pub mod world;

// Exports
pub use {
	self::{
		combiner::{AnyTrue, CatchPanics, CatchingCombiner, Collect, Combiner, FirstSome, LastValue},
		connection::{BlockedConnection, Connection, ScopedConnection},
		error::SlotPanic,
		key::SlotKey,
		loc::Loc,
		signal::{Signal, SlotCallIter},
		slot::{Slot, SlotNode},
		trackable::{Track, Trackable},
		world::{IntoCallback, SignalWorld},
	},
	tether_world::{WorldDefault, WorldGlobal, WorldThreadLocal},
};
