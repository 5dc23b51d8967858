//! Inner-mutability types
//!
//! Access is scoped to a closure, so a borrow (or lock) can never be
//! held across a call into user code, as long as the closures passed
//! in don't call into it themselves. Values replaced out of an
//! [`IMutLike`] are always returned and dropped *after* the borrow ends.

// Imports
use core::{cell::RefCell, mem};

/// Inner mutability family
pub trait IMutFamily: Sized {
	/// Returns the inner mutability type of `T`
	type IMut<T>: IMutLike<T>;
}

/// Inner mutability-like
pub trait IMutLike<T> {
	/// Creates a new value
	fn new(value: T) -> Self;

	/// Uses the value immutably
	fn with<F, O>(&self, f: F) -> O
	where
		F: FnOnce(&T) -> O;

	/// Uses the value mutably
	fn with_mut<F, O>(&self, f: F) -> O
	where
		F: FnOnce(&mut T) -> O;

	/// Replaces the value, returning the previous one
	fn replace(&self, value: T) -> T {
		self.with_mut(|cur| mem::replace(cur, value))
	}

	/// Sets the value, dropping the previous one
	fn set(&self, value: T) {
		let prev = self.replace(value);
		drop(prev);
	}

	/// Takes the value, leaving the default in it's place
	fn take(&self) -> T
	where
		T: Default,
	{
		self.replace(T::default())
	}

	/// Clones the value
	fn get_cloned(&self) -> T
	where
		T: Clone,
	{
		self.with(T::clone)
	}
}

/// Refcell family of inner-mutability
#[derive(Debug)]
pub struct StdRefCell;

impl IMutFamily for StdRefCell {
	type IMut<T> = RefCell<T>;
}

impl<T> IMutLike<T> for RefCell<T> {
	fn new(value: T) -> Self {
		Self::new(value)
	}

	#[track_caller]
	fn with<F, O>(&self, f: F) -> O
	where
		F: FnOnce(&T) -> O,
	{
		f(&self.borrow())
	}

	#[track_caller]
	fn with_mut<F, O>(&self, f: F) -> O
	where
		F: FnOnce(&mut T) -> O,
	{
		f(&mut self.borrow_mut())
	}
}

/// `parking_lot::Mutex` family of inner-mutability
#[derive(Debug)]
pub struct ParkingLotMutex;

impl IMutFamily for ParkingLotMutex {
	type IMut<T> = parking_lot::Mutex<T>;
}

impl<T> IMutLike<T> for parking_lot::Mutex<T> {
	fn new(value: T) -> Self {
		Self::new(value)
	}

	fn with<F, O>(&self, f: F) -> O
	where
		F: FnOnce(&T) -> O,
	{
		f(&self.lock())
	}

	fn with_mut<F, O>(&self, f: F) -> O
	where
		F: FnOnce(&mut T) -> O,
	{
		f(&mut self.lock())
	}
}
