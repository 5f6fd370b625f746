//! Observable value cells with synchronous change notification
//!
//! A [`Store`] holds a single value that view components read, write, and
//! subscribe to. Notification has no scheduling layer: every [`Store::set`]
//! or [`Store::update`] invokes all current subscribers, in subscription
//! order, before it returns. There are no derived or computed cells.
//!
//! Stores are single-threaded (`Rc`-based) and intended for a cooperative
//! event-loop environment. The subscriber list is snapshotted before each
//! fan-out and the value borrow is released first, so a listener may `get`,
//! `set`, `subscribe`, or unsubscribe on the same cell without a borrow
//! panic. A listener that writes its own cell recurses.
//!
//! # Example
//!
//! ```
//! use scrollstory::Store;
//!
//! let count = Store::new(0_u32);
//! let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
//! let log = std::rc::Rc::clone(&seen);
//! let sub = count.subscribe(move |v| log.borrow_mut().push(*v));
//!
//! count.set(5);
//! assert_eq!(*seen.borrow(), vec![5]);
//!
//! sub.unsubscribe();
//! count.set(6);
//! assert_eq!(*seen.borrow(), vec![5]);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct StoreInner<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(u64, Listener<T>)>>,
    next_token: Cell<u64>,
}

/// A mutable single-value cell with subscription-based change notification.
///
/// Cloning the handle shares the underlying cell; all clones observe the
/// same value and subscriber list.
pub struct Store<T> {
    inner: Rc<StoreInner<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone> Store<T> {
    /// Creates a cell holding `initial`. The value's shape is fixed by this
    /// initial value; no further validation happens on writes.
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                value: RefCell::new(initial),
                subscribers: RefCell::new(Vec::new()),
                next_token: Cell::new(0),
            }),
        }
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Replaces the value, then synchronously notifies every subscriber in
    /// subscription order before returning.
    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value.clone();
        self.notify(&value);
    }

    /// Reads the current value, applies `f`, and [`set`](Self::set)s the result.
    pub fn update(&self, f: impl FnOnce(T) -> T) {
        let next = f(self.get());
        self.set(next);
    }

    /// Registers `listener` to run on every subsequent write. No call is
    /// made at subscribe time.
    ///
    /// The returned [`Subscription`] removes the listener via
    /// [`Subscription::unsubscribe`]; merely dropping it leaves the
    /// listener registered for the life of the cell.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription<T> {
        let token = self.inner.next_token.get();
        self.inner.next_token.set(token + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((token, Rc::new(listener)));
        Subscription {
            store: Rc::downgrade(&self.inner),
            token,
        }
    }

    fn notify(&self, value: &T) {
        // Snapshot so listeners can (un)subscribe mid-fan-out. Listeners
        // added during notification first fire on the next write.
        let snapshot: Vec<Listener<T>> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(value);
        }
    }
}

/// Handle to an active [`Store`] subscription.
pub struct Subscription<T> {
    store: Weak<StoreInner<T>>,
    token: u64,
}

impl<T> Subscription<T> {
    /// Removes the listener. Writes after this deliver nothing to it. A
    /// no-op when the cell itself is already gone.
    pub fn unsubscribe(self) {
        if let Some(inner) = self.store.upgrade() {
            inner
                .subscribers
                .borrow_mut()
                .retain(|(token, _)| *token != self.token);
        }
    }
}
