//! Slot keys
//!
//! Closures can't be compared, so slots that need to be disconnected
//! by value carry a [`SlotKey`] instead.

// Imports
use core::{any::TypeId, fmt, ptr};

/// Comparable identity of a slot.
///
/// A key is made of an object identity (an address) and a method identity
/// (a type). Keys built from the same object and the same method compare equal,
/// which is what [`Signal::disconnect`](crate::Signal::disconnect) matches on.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct SlotKey {
	/// Object address
	object: usize,

	/// Method identity
	method: TypeId,
}

impl SlotKey {
	/// Creates a key for `method` bound to `object`.
	///
	/// Every function item and closure has it's own type, so two keys
	/// built from the same function item are equal. Function *pointers*
	/// all share one type, so keys built from them only distinguish objects.
	#[must_use]
	pub fn new<T: ?Sized, M: 'static>(object: &T, _method: &M) -> Self {
		Self {
			object: ptr::from_ref(object).cast::<()>().addr(),
			method: TypeId::of::<M>(),
		}
	}

	/// Creates a key for a free function or closure, not bound to any object
	#[must_use]
	pub fn unbound<M: 'static>(_method: &M) -> Self {
		Self {
			object: 0,
			method: TypeId::of::<M>(),
		}
	}
}

impl fmt::Debug for SlotKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SlotKey")
			.field("object", &format_args!("{:#x}", self.object))
			.field("method", &self.method)
			.finish()
	}
}
