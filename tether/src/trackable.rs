//! Trackable
//!
//! Objects that own connections to their own methods embed a [`Trackable`],
//! which disconnects all of them once the object is dropped.

// Imports
use {
	crate::{Connection, SignalWorld},
	core::fmt,
	tether_world::{IMut, IMutLike, WorldDefault},
};

/// Trackable.
///
/// Tracks connections, disconnecting all of them when dropped.
pub struct Trackable<W: SignalWorld = WorldDefault> {
	/// Tracked connections
	connections: IMut<Vec<Connection<W>>, W>,
}

impl<W: SignalWorld> Trackable<W> {
	/// Creates a new trackable, tracking nothing
	#[must_use]
	pub fn new() -> Self {
		Self {
			connections: IMutLike::new(vec![]),
		}
	}

	/// Tracks `connection`.
	///
	/// Any tracked connections that were since disconnected are forgotten.
	pub fn track(&self, connection: Connection<W>) {
		// Note: Disconnected slots have already released their callbacks,
		//       so forgetting them can't call back into us.
		self.connections.with_mut(|connections| {
			connections.retain(Connection::is_connected);
			connections.push(connection);
		});
	}

	/// Returns the number of tracked connections that are still connected
	#[must_use]
	pub fn num_tracked(&self) -> usize {
		self.connections.with(|connections| {
			connections
				.iter()
				.filter(|connection| connection.is_connected())
				.count()
		})
	}

	/// Disconnects all tracked connections.
	///
	/// This trackable may still track connections afterwards.
	pub fn disconnect_tracked_connections(&self) {
		let connections = self.connections.take();
		if connections.is_empty() {
			return;
		}

		tracing::trace!(num_connections = connections.len(), "Disconnecting tracked connections");
		for connection in connections {
			connection.disconnect();
		}
	}
}

impl<W: SignalWorld> Default for Trackable<W> {
	fn default() -> Self {
		Self::new()
	}
}

impl<W: SignalWorld> Drop for Trackable<W> {
	fn drop(&mut self) {
		self.disconnect_tracked_connections();
	}
}

impl<W: SignalWorld> fmt::Debug for Trackable<W> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Trackable")
			.field("num_tracked", &self.num_tracked())
			.finish_non_exhaustive()
	}
}

/// Types that embed a [`Trackable`].
///
/// Connecting a method of these types with
/// [`Signal::connect_method`](crate::Signal::connect_method) tracks the
/// connection in their trackable.
pub trait Track<W: SignalWorld = WorldDefault> {
	/// Returns the trackable of this value
	fn trackable(&self) -> &Trackable<W>;
}

impl<W: SignalWorld> Track<W> for Trackable<W> {
	fn trackable(&self) -> &Trackable<W> {
		self
	}
}
