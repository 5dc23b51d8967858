//! Scoped connection

// Imports
use {
	super::Connection,
	crate::SignalWorld,
	core::{fmt, mem},
	tether_world::WorldDefault,
};

/// Scoped connection.
///
/// Disconnects it's connection when dropped, or when replaced by
/// [`set`](Self::set).
#[derive(derive_more::Deref)]
pub struct ScopedConnection<W: SignalWorld = WorldDefault> {
	/// Connection
	connection: Connection<W>,
}

impl<W: SignalWorld> ScopedConnection<W> {
	/// Creates a new scoped connection
	#[must_use]
	pub const fn new(connection: Connection<W>) -> Self {
		Self { connection }
	}

	/// Replaces the connection, disconnecting the previous one.
	pub fn set(&mut self, connection: Connection<W>) {
		let prev = mem::replace(&mut self.connection, connection);
		prev.disconnect();
	}

	/// Releases the connection without disconnecting it
	#[must_use]
	pub fn release(mut self) -> Connection<W> {
		mem::take(&mut self.connection)
	}
}

impl<W: SignalWorld> Default for ScopedConnection<W> {
	fn default() -> Self {
		Self::new(Connection::new())
	}
}

impl<W: SignalWorld> From<Connection<W>> for ScopedConnection<W> {
	fn from(connection: Connection<W>) -> Self {
		Self::new(connection)
	}
}

impl<W: SignalWorld> Drop for ScopedConnection<W> {
	fn drop(&mut self) {
		self.connection.disconnect();
	}
}

impl<W: SignalWorld> fmt::Debug for ScopedConnection<W> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ScopedConnection").field(&self.connection).finish()
	}
}
