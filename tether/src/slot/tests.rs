//! Tests

// Imports
use {
	super::*,
	crate::IntoCallback,
	core::cell::{Cell, RefCell},
	std::rc,
	tether_world::WorldThreadLocal,
};

/// Test world
type W = WorldThreadLocal;

/// Test slot
type TestSlot = SlotNode<i32, i32, W>;

/// Creates an empty head link
fn head() -> rc::Rc<Link<i32, i32, W>> {
	rc::Rc::new(RefCell::new(None))
}

/// Inserts a slot returning `value` at the start of `head`
fn insert_front(head: &rc::Rc<Link<i32, i32, W>>, value: i32) -> rc::Rc<TestSlot> {
	let callback = IntoCallback::<i32, i32, W>::into_callback(move |_: &i32| value);
	TestSlot::insert(Owner::Head(rc::Rc::downgrade(head)), callback, None, Loc::caller())
}

/// Inserts a slot returning `value` right after `slot`
fn insert_after(slot: &rc::Rc<TestSlot>, value: i32) -> rc::Rc<TestSlot> {
	let callback = IntoCallback::<i32, i32, W>::into_callback(move |_: &i32| value);
	TestSlot::insert(Owner::Slot(rc::Rc::downgrade(slot)), callback, None, Loc::caller())
}

/// Calls every connected slot reachable from `head`
fn call_all(head: &rc::Rc<Link<i32, i32, W>>) -> Vec<i32> {
	let mut values = vec![];
	let mut cur = head.borrow().clone();
	while let Some(slot) = cur {
		if let Some(callback) = slot.callback() {
			values.push(callback(&0));
		}
		cur = slot.next_slot();
	}

	values
}

/// Disconnects every slot reachable from `head`
fn disconnect_all(head: &rc::Rc<Link<i32, i32, W>>) {
	let mut cur = head.borrow().clone();
	while let Some(slot) = cur {
		cur = slot.next_slot();
		slot.disconnect();
	}
}

/// Ensures the head and each handle hold a reference
#[test]
fn ref_count() {
	let head = head();
	let slot = insert_front(&head, 1);
	assert!(slot.is_connected(), "Slot wasn't connected");
	assert_eq!(rc::Rc::strong_count(&slot), 2, "Head didn't take a reference");

	slot.disconnect();
	assert!(!slot.is_connected(), "Slot wasn't disconnected");
	assert_eq!(rc::Rc::strong_count(&slot), 1, "Head kept it's reference");
	assert!(head.borrow().is_none(), "Head still held a slot");
}

/// Ensures inserting links slots in the right order
#[test]
fn insert_order() {
	let head = head();
	let second = insert_front(&head, 2);
	let first = insert_front(&head, 1);
	let _third = insert_after(&second, 3);
	let _fourth = insert_after(&first, 4);

	assert_eq!(call_all(&head), [1, 4, 2, 3], "Slots were linked out of order");
	disconnect_all(&head);
}

/// Ensures disconnecting a slot unlinks it, but keeps it's `next` link
#[test]
fn disconnect_keeps_next() {
	let head = head();
	let first = insert_front(&head, 1);
	let second = insert_after(&first, 2);
	let third = insert_after(&second, 3);

	second.disconnect();
	assert_eq!(call_all(&head), [1, 3], "Disconnected slot was still reachable");

	// The disconnected slot can still reach the rest of the list
	let next = second.next_slot().expect("Disconnected slot lost it's next slot");
	assert!(rc::Rc::ptr_eq(&next, &third), "Disconnected slot's next slot changed");

	// And `third` is now owned by `first`
	third.disconnect();
	assert_eq!(call_all(&head), [1], "Disconnected slot was still reachable");
	assert!(first.next_slot().is_none(), "Slot wasn't unlinked from it's new owner");
	disconnect_all(&head);
}

/// Ensures disconnecting twice is a no-op
#[test]
fn disconnect_idempotent() {
	let head = head();
	let first = insert_front(&head, 1);
	let second = insert_after(&first, 2);

	first.disconnect();
	first.disconnect();
	assert!(!first.is_connected(), "Slot wasn't disconnected");
	assert!(second.is_connected(), "Disconnecting twice affected another slot");
	assert_eq!(call_all(&head), [2], "Disconnected slot was still reachable");
	disconnect_all(&head);
}

/// Ensures the callback is released on disconnect, even with other references alive
#[test]
fn disconnect_releases_callback() {
	let dropped = rc::Rc::new(Cell::new(false));
	let guard = scopeguard::guard((), {
		let dropped = rc::Rc::clone(&dropped);
		move |()| dropped.set(true)
	});

	let head = head();
	let callback = IntoCallback::<i32, i32, W>::into_callback(move |_: &i32| {
		let () = *guard;
		0
	});
	let slot = TestSlot::insert(Owner::Head(rc::Rc::downgrade(&head)), callback, None, Loc::caller());
	let other = rc::Rc::clone(&slot);

	assert!(!dropped.get(), "Callback was released early");
	slot.disconnect();
	assert!(dropped.get(), "Callback wasn't released");
	assert!(slot.callback().is_none(), "Disconnected slot still had a callback");
	drop(other);
}

/// Ensures a running call keeps the callback alive after a disconnect
#[test]
fn disconnect_while_calling() {
	let head = head();
	let slot = insert_front(&head, 1);

	let callback = slot.callback().expect("Slot had no callback");
	let value = slot.calling(|| {
		assert!(slot.is_calling(), "Slot wasn't calling");
		slot.disconnect();
		callback(&0)
	});
	assert_eq!(value, 1, "Call returned the wrong value");
	assert!(!slot.is_calling(), "Slot was still calling");
	assert_eq!(rc::Rc::strong_count(&callback), 1, "Slot didn't release the callback");
}

/// Ensures the call count is restored when the call panics
#[test]
fn calling_unwind() {
	let head = head();
	let slot = insert_front(&head, 1);

	let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| slot.calling(|| -> i32 { panic!("Oh no") })));
	assert!(res.is_err(), "Call didn't panic");
	assert!(!slot.is_calling(), "Slot was still calling after a panic");

	slot.disconnect();
}

/// Ensures slots are freed once no references remain
#[test]
fn freed() {
	let head = head();
	let slot = insert_front(&head, 1);
	let weak = rc::Rc::downgrade(&slot);
	drop(slot);
	assert!(weak.upgrade().is_some(), "Head didn't keep the slot alive");

	weak.upgrade().expect("Slot was freed").disconnect();
	assert!(weak.upgrade().is_none(), "Slot was leaked");
}

/// Ensures releasing a disconnected chain frees unreferenced slots, but stops at referenced ones
#[test]
fn chain_release() {
	let head = head();
	let first = insert_front(&head, 1);
	let second = insert_after(&first, 2);
	let third = insert_after(&second, 3);
	let weak_second = rc::Rc::downgrade(&second);
	drop(second);

	disconnect_all(&head);
	drop(first);
	assert!(weak_second.upgrade().is_none(), "Unreferenced slot was leaked");
	assert_eq!(rc::Rc::strong_count(&third), 1, "Referenced slot was released");
	assert!(third.next_slot().is_none(), "Last slot gained a next slot");
}
