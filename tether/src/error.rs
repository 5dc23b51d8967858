//! Errors

// Imports
use core::any::Any;

/// A slot panicked while being called
#[derive(PartialEq, Eq, Clone, Debug, thiserror::Error)]
#[error("Slot panicked: {message}")]
pub struct SlotPanic {
	/// Panic message
	message: String,
}

impl SlotPanic {
	/// Creates a slot panic from a panic payload.
	///
	/// Payloads that aren't a `&str` or a `String` get a placeholder message.
	#[must_use]
	pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
		let message = match payload.downcast_ref::<&'static str>() {
			Some(message) => (*message).to_owned(),
			None => match payload.downcast_ref::<String>() {
				Some(message) => message.clone(),
				None => "<non-string panic payload>".to_owned(),
			},
		};

		Self { message }
	}

	/// Returns the panic message
	#[must_use]
	pub fn message(&self) -> &str {
		&self.message
	}
}
