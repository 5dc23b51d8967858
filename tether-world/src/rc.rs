//! Reference-counted pointer
//!
//! The reference count of a value is the only piece of shared state
//! that differs in atomicity between worlds.

// Imports
use {
	core::ops,
	std::{rc, sync},
};

/// Reference-counted pointer family
pub trait RcFamily: Sized {
	/// Returns the reference counted type of `T`
	type Rc<T: ?Sized>: RcLike<T, Family = Self>;

	/// Weak type
	type Weak<T: ?Sized>: WeakLike<T, Family = Self>;
}

/// A reference-counted pointer
pub trait RcLike<T: ?Sized>: ops::Deref<Target = T> + Clone {
	/// The family of this pointer
	type Family: RcFamily<Rc<T> = Self>;

	/// Creates a new Rc from a value
	fn new(value: T) -> Self
	where
		T: Sized;

	/// Downgrades this Rc to a Weak
	fn downgrade(this: &Self) -> <Self::Family as RcFamily>::Weak<T>;

	/// Returns the inner value, if this is the only strong reference.
	///
	/// Otherwise returns this Rc back.
	fn try_unwrap(this: Self) -> Result<T, Self>
	where
		T: Sized;

	/// Returns if both Rcs point to the same allocation
	fn ptr_eq(this: &Self, other: &Self) -> bool;
}

/// A Reference-counted weak pointer
pub trait WeakLike<T: ?Sized>: Clone {
	/// The family of this pointer
	type Family: RcFamily<Weak<T> = Self>;

	/// Upgrades this weak to an rc
	fn upgrade(&self) -> Option<<Self::Family as RcFamily>::Rc<T>>;
}

/// Arc family of reference-counter pointers
#[derive(Debug)]
pub struct StdArc;

impl RcFamily for StdArc {
	type Rc<T: ?Sized> = sync::Arc<T>;
	type Weak<T: ?Sized> = sync::Weak<T>;
}

/// Rc family of reference-counter pointers
#[derive(Debug)]
pub struct StdRc;

impl RcFamily for StdRc {
	type Rc<T: ?Sized> = rc::Rc<T>;
	type Weak<T: ?Sized> = rc::Weak<T>;
}

#[duplicate::duplicate_item(
	FamilyTy Ptr          WeakPtr;
	[StdArc] [sync::Arc]  [sync::Weak];
	[StdRc]  [rc::Rc]     [rc::Weak];
)]
impl<T: ?Sized> RcLike<T> for Ptr<T> {
	type Family = FamilyTy;

	fn new(value: T) -> Self
	where
		T: Sized,
	{
		Self::new(value)
	}

	fn downgrade(this: &Self) -> WeakPtr<T> {
		Self::downgrade(this)
	}

	fn try_unwrap(this: Self) -> Result<T, Self>
	where
		T: Sized,
	{
		Self::try_unwrap(this)
	}

	fn ptr_eq(this: &Self, other: &Self) -> bool {
		Self::ptr_eq(this, other)
	}
}

#[duplicate::duplicate_item(
	FamilyTy Ptr          WeakPtr;
	[StdArc] [sync::Arc]  [sync::Weak];
	[StdRc]  [rc::Rc]     [rc::Weak];
)]
impl<T: ?Sized> WeakLike<T> for WeakPtr<T> {
	type Family = FamilyTy;

	fn upgrade(&self) -> Option<Ptr<T>> {
		self.upgrade()
	}
}
