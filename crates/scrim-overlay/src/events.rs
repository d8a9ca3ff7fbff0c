#![forbid(unsafe_code)]

//! Synchronous lifecycle event emission with RAII subscriptions.
//!
//! [`EventEmitter`] fans an [`OverlayEvent`] out to subscriber callbacks in
//! registration order. Subscriptions are RAII: dropping the
//! [`Subscription`] guard removes the callback before the next emission.
//!
//! # Invariants
//!
//! 1. Callbacks run synchronously, in registration order.
//! 2. A callback registered or dropped *during* an emission does not affect
//!    that emission (the subscriber list is snapshotted first).
//!
//! # Failure Modes
//!
//! - Callback panic: propagates to the emitter's caller.
//! - Emitter dropped before a subscription: the guard's drop is a no-op.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use scrim_core::OverlayEvent;

type Callback = Rc<dyn Fn(&OverlayEvent)>;

#[derive(Default)]
struct EmitterInner {
    subscribers: Vec<(u64, Callback)>,
    next_id: u64,
}

/// Fan-out of one overlay's lifecycle events.
#[derive(Clone, Default)]
pub struct EventEmitter {
    inner: Rc<RefCell<EmitterInner>>,
}

impl EventEmitter {
    /// Create an emitter with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback; it stays registered until the returned guard is
    /// dropped.
    #[must_use]
    pub fn subscribe(&self, callback: impl Fn(&OverlayEvent) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Rc::new(callback)));
        Subscription {
            id,
            emitter: Rc::downgrade(&self.inner),
        }
    }

    /// Emit an event to every current subscriber.
    pub fn emit(&self, event: &OverlayEvent) {
        // Snapshot so that subscribe/unsubscribe inside a callback cannot
        // invalidate the iteration.
        let callbacks: Vec<Callback> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for callback in callbacks {
            callback(event);
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// RAII guard for a registered callback; unsubscribes on drop.
pub struct Subscription {
    id: u64,
    emitter: Weak<RefCell<EmitterInner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.emitter.upgrade() {
            inner
                .borrow_mut()
                .subscribers
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
