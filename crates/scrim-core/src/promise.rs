#![forbid(unsafe_code)]

//! Single-resolution futures for lifecycle completion.
//!
//! A [`Promise`] resolves at most once with a value supplied through its
//! [`Completer`]. It is a real [`std::future::Future`] so it can be awaited
//! under any executor, and it is also queryable without one via
//! [`Promise::try_get`] for tick-driven hosts.
//!
//! Built on `Rc<RefCell<..>>` single-threaded shared ownership: the engine
//! runs on a cooperative event loop, so promises are neither `Send` nor
//! `Sync` by design.
//!
//! # Invariants
//!
//! 1. `Completer::resolve` consumes the completer; a promise cannot be
//!    resolved twice.
//! 2. At most one waker is stored; a later `poll` replaces it.
//! 3. Dropping the completer without resolving leaves the promise pending
//!    forever (callers own that policy).

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

struct Slot<T> {
    value: Option<T>,
    waker: Option<Waker>,
}

/// The writing half: resolves the paired [`Promise`] exactly once.
pub struct Completer<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Completer<T> {
    /// Resolve the paired promise, waking any pending poller.
    pub fn resolve(self, value: T) {
        let waker = {
            let mut slot = self.slot.borrow_mut();
            slot.value = Some(value);
            slot.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
    }
}

/// The reading half: a future that resolves at most once.
pub struct Promise<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Promise<T> {
    /// Whether a value has been resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.slot.borrow().value.is_some()
    }
}

impl<T: Clone> Promise<T> {
    /// The resolved value, if any, without suspending.
    #[must_use]
    pub fn try_get(&self) -> Option<T> {
        self.slot.borrow().value.clone()
    }
}

impl<T: Clone> Future for Promise<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        let mut slot = self.slot.borrow_mut();
        match slot.value.clone() {
            Some(value) => Poll::Ready(value),
            None => {
                slot.waker = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }
}

/// Create an unresolved promise and its completer.
#[must_use]
pub fn pending<T>() -> (Completer<T>, Promise<T>) {
    let slot = Rc::new(RefCell::new(Slot {
        value: None,
        waker: None,
    }));
    (
        Completer {
            slot: Rc::clone(&slot),
        },
        Promise { slot },
    )
}

/// Create a promise that is already resolved with `value`.
#[must_use]
pub fn resolved<T>(value: T) -> Promise<T> {
    Promise {
        slot: Rc::new(RefCell::new(Slot {
            value: Some(value),
            waker: None,
        })),
    }
}
