//! Combiners
//!
//! A combiner folds the results of each slot called during an emission
//! into the result of the emission.
//!
//! Slots are only called as the combiner advances the iterator it's given,
//! so combiners may stop calling slots early by not consuming it entirely.

// Imports
use {
	crate::SlotPanic,
	core::{
		fmt,
		panic::AssertUnwindSafe,
	},
	std::panic,
};

/// Combiner
pub trait Combiner<R> {
	/// Output of the emission
	type Output;

	/// Combines the results of all slots.
	///
	/// Each call to `results.next()` calls the next slot.
	fn combine<I>(&self, results: I) -> Self::Output
	where
		I: Iterator<Item = R>;
}

/// Combiner that returns the result of the last slot called.
///
/// Returns `None` if no slots were called.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
pub struct LastValue;

impl<R> Combiner<R> for LastValue {
	type Output = Option<R>;

	fn combine<I>(&self, results: I) -> Self::Output
	where
		I: Iterator<Item = R>,
	{
		results.last()
	}
}

/// Combiner that returns if any slot returned `true`.
///
/// Slots after the first one to return `true` aren't called.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
pub struct AnyTrue;

impl Combiner<bool> for AnyTrue {
	type Output = bool;

	fn combine<I>(&self, mut results: I) -> Self::Output
	where
		I: Iterator<Item = bool>,
	{
		results.any(|handled| handled)
	}
}

/// Combiner that returns the first `Some` returned by a slot.
///
/// Slots after the first one to return `Some` aren't called.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
pub struct FirstSome;

impl<T> Combiner<Option<T>> for FirstSome {
	type Output = Option<T>;

	fn combine<I>(&self, results: I) -> Self::Output
	where
		I: Iterator<Item = Option<T>>,
	{
		results.flatten().next()
	}
}

/// Combiner that collects the results of all slots
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
pub struct Collect;

impl<R> Combiner<R> for Collect {
	type Output = Vec<R>;

	fn combine<I>(&self, results: I) -> Self::Output
	where
		I: Iterator<Item = R>,
	{
		results.collect()
	}
}

/// Combiner that logs any slot failures instead of propagating them.
///
/// Every slot is called, even if a previous one panicked. Slots may also
/// return a `Result<(), E>`, in which case errors are logged too.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
pub struct CatchingCombiner;

impl Combiner<()> for CatchingCombiner {
	type Output = ();

	fn combine<I>(&self, results: I) -> Self::Output
	where
		I: Iterator<Item = ()>,
	{
		self::catch_each(results, |()| (), |err| tracing::error!(%err, "Emitting signal"));
	}
}

impl<E: fmt::Display> Combiner<Result<(), E>> for CatchingCombiner {
	type Output = ();

	fn combine<I>(&self, results: I) -> Self::Output
	where
		I: Iterator<Item = Result<(), E>>,
	{
		self::catch_each(
			results,
			|res| {
				if let Err(err) = res {
					tracing::error!(%err, "Emitting signal");
				}
			},
			|err| tracing::error!(%err, "Emitting signal"),
		);
	}
}

/// Combiner that collects the results of all slots, and any panics separately.
///
/// Every slot is called, even if a previous one panicked.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
pub struct CatchPanics;

impl<R> Combiner<R> for CatchPanics {
	type Output = (Vec<R>, Vec<SlotPanic>);

	fn combine<I>(&self, results: I) -> Self::Output
	where
		I: Iterator<Item = R>,
	{
		let mut values = vec![];
		let mut panics = vec![];
		self::catch_each(results, |value| values.push(value), |err| panics.push(err));

		(values, panics)
	}
}

/// Calls `on_result` with every result of `results`, and `on_panic`
/// with every panic while advancing it.
fn catch_each<I, T, F>(mut results: I, mut on_result: T, mut on_panic: F)
where
	I: Iterator,
	T: FnMut(I::Item),
	F: FnMut(SlotPanic),
{
	loop {
		match panic::catch_unwind(AssertUnwindSafe(|| results.next())) {
			Ok(Some(result)) => on_result(result),
			Ok(None) => break,
			Err(payload) => on_panic(SlotPanic::from_payload(&*payload)),
		}
	}
}
