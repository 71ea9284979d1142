// Copyright 2025 the TheColor authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-threaded, current-value signal.
//!
//! [`Signal`] is "state", not "events": it always has a value, a new
//! subscriber is called with that value immediately, and later calls happen
//! only when the value differs from the last one that subscriber was handed.
//!
//! Callbacks run after every internal borrow is released, so a callback may
//! read the signal, subscribe again, drop its own [`Subscription`], or cause
//! another change. A change made from inside a callback is delivered to every
//! subscriber before the outer notification continues; the outer round then
//! skips subscribers that have already seen the newest value.
//!
//! Handles given out by this crate are read-only. Values change only through
//! the owner, such as the controller whose effective appearance a signal
//! reports.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use smallvec::SmallVec;

struct Subscriber<V> {
    id: u64,
    /// Last value handed to `callback`.
    seen: RefCell<V>,
    callback: Box<dyn Fn(&V)>,
}

struct Shared<V> {
    value: RefCell<V>,
    revision: Cell<u64>,
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<Rc<Subscriber<V>>>>,
}

/// Current-value cell with change subscribers.
///
/// Cloning a `Signal` yields another handle to the same value. Outside this
/// crate a handle can only be read and subscribed to:
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use thecolor_color::Color;
/// use thecolor_nav_bar::{NavBarAppearance, NavBarAppearanceController};
///
/// let root = NavBarAppearanceController::new();
/// let signal = root.effective_signal();
/// let seen = Rc::new(Cell::new(0));
/// let sink = Rc::clone(&seen);
/// let _sub = signal.subscribe(move |_| sink.set(sink.get() + 1));
/// assert_eq!(seen.get(), 1, "replays the current value");
///
/// root.push(NavBarAppearance::for_surface(Color::BLACK));
/// assert_eq!(seen.get(), 2);
/// assert_eq!(signal.revision(), 1);
/// ```
///
/// Writing through a handle does not compile:
///
/// ```rust,compile_fail
/// use thecolor_nav_bar::NavBarAppearanceController;
///
/// let root = NavBarAppearanceController::new();
/// root.effective_signal().set(None);
/// ```
pub struct Signal<V> {
    shared: Rc<Shared<V>>,
}

impl<V> Clone for Signal<V> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Signal<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &*self.shared.value.borrow())
            .field("revision", &self.shared.revision.get())
            .field("subscribers", &self.shared.subscribers.borrow().len())
            .finish()
    }
}

impl<V: Clone + PartialEq + 'static> Signal<V> {
    /// Creates a signal holding `value`.
    pub(crate) fn new(value: V) -> Self {
        Self {
            shared: Rc::new(Shared {
                value: RefCell::new(value),
                revision: Cell::new(0),
                next_id: Cell::new(0),
                subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> V {
        self.shared.value.borrow().clone()
    }

    /// Calls `f` with a reference to the current value.
    pub fn with<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.shared.value.borrow())
    }

    /// Number of changes since creation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.shared.revision.get()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.borrow().len()
    }

    /// Replaces the value and notifies subscribers.
    ///
    /// Returns `false`, without notifying anyone, if `value` equals the
    /// current value.
    pub(crate) fn set(&self, value: V) -> bool {
        {
            let mut current = self.shared.value.borrow_mut();
            if *current == value {
                return false;
            }
            *current = value;
        }
        self.shared.revision.set(self.shared.revision.get() + 1);
        self.notify();
        true
    }

    /// Registers `callback`, calls it with the current value, and keeps
    /// calling it on every change until the returned [`Subscription`] is
    /// dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&V) + 'static) -> Subscription {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);
        let current = self.get();
        let subscriber = Rc::new(Subscriber {
            id,
            seen: RefCell::new(current.clone()),
            callback: Box::new(callback),
        });
        self.shared
            .subscribers
            .borrow_mut()
            .push(Rc::clone(&subscriber));

        (subscriber.callback)(&current);

        let source: Weak<dyn Unsubscribe> = Rc::downgrade(&self.shared) as Weak<dyn Unsubscribe>;
        Subscription {
            source: Some(source),
            id,
        }
    }

    fn notify(&self) {
        let snapshot: SmallVec<[Rc<Subscriber<V>>; 4]> =
            self.shared.subscribers.borrow().iter().cloned().collect();
        for subscriber in snapshot {
            // A callback earlier in this round may have unsubscribed this one.
            if !self.shared.is_subscribed(subscriber.id) {
                continue;
            }
            let current = self.get();
            // A nested round may already have delivered this value.
            if *subscriber.seen.borrow() == current {
                continue;
            }
            *subscriber.seen.borrow_mut() = current.clone();
            (subscriber.callback)(&current);
        }
    }
}

impl<V> Shared<V> {
    fn is_subscribed(&self, id: u64) -> bool {
        self.subscribers.borrow().iter().any(|s| s.id == id)
    }
}

trait Unsubscribe {
    fn unsubscribe(&self, id: u64);
}

impl<V> Unsubscribe for Shared<V> {
    fn unsubscribe(&self, id: u64) {
        self.subscribers.borrow_mut().retain(|s| s.id != id);
    }
}

/// Keeps a [`Signal`] callback registered; dropping it unsubscribes.
///
/// A subscription does not keep the signal alive.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    source: Option<Weak<dyn Unsubscribe>>,
    id: u64,
}

impl Subscription {
    /// Unsubscribes now. Equivalent to dropping the subscription.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    /// Returns `true` while the callback is still registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.source
            .as_ref()
            .is_some_and(|source| source.strong_count() > 0)
    }

    fn release(&mut self) {
        if let Some(source) = self.source.take().and_then(|weak| weak.upgrade()) {
            source.unsubscribe(self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}
