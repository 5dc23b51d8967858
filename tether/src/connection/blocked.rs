//! Blocked connection

// Imports
use {
	super::Connection,
	crate::SignalWorld,
	core::fmt,
	tether_world::WorldDefault,
};

/// Blocked connection.
///
/// Blocks a connection until dropped, then restores it to exactly how
/// it was. Connections that were already blocked (or disconnected)
/// are left untouched.
pub struct BlockedConnection<W: SignalWorld = WorldDefault> {
	/// Connection we blocked, if any
	blocked: Option<Connection<W>>,
}

impl<W: SignalWorld> BlockedConnection<W> {
	/// Blocks `connection` until dropped
	#[must_use = "The connection will be unblocked once dropped"]
	pub fn new(connection: &Connection<W>) -> Self {
		Self::new_if(connection, true)
	}

	/// Blocks `connection` until dropped, if `block` is true
	#[must_use = "The connection will be unblocked once dropped"]
	pub fn new_if(connection: &Connection<W>, block: bool) -> Self {
		let blocked = match block && connection.is_connected() && !connection.is_blocked() {
			true => {
				connection.block();
				Some(connection.clone())
			},
			false => None,
		};

		Self { blocked }
	}

	/// Returns if we blocked the connection
	#[must_use]
	pub const fn is_blocking(&self) -> bool {
		self.blocked.is_some()
	}
}

impl<W: SignalWorld> Drop for BlockedConnection<W> {
	fn drop(&mut self) {
		if let Some(connection) = self.blocked.take() {
			connection.unblock();
		}
	}
}

impl<W: SignalWorld> fmt::Debug for BlockedConnection<W> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BlockedConnection")
			.field("blocked", &self.blocked)
			.finish()
	}
}
