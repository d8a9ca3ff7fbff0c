#![forbid(unsafe_code)]

//! Stack slot registry for concurrently open overlays.
//!
//! [`OverlayStack`] is explicit shared state scoped to the set of currently
//! open overlay instances. It assigns each overlay an identity and a stack
//! index at creation, synchronously, before any suspension point; the index
//! is consumed only to compute a rendering z-order.
//!
//! # Invariants
//!
//! - Indices are strictly increasing across allocations while any overlay
//!   remains open, so z-order comparisons between open overlays are always
//!   monotone in open order.
//! - Identities are never reused within a registry.
//! - The index counter resets only when the open set becomes empty, keeping
//!   it bounded across long-running sessions.
//!
//! # Failure Modes
//!
//! - `release` of an unknown id returns `false` (no panic).
//! - `index_of` / `top` on an unknown/empty registry return `None`.

use std::cell::RefCell;
use std::rc::Rc;

use scrim_core::OverlayId;

/// Base z-order for the overlay layer.
pub const BASE_OVERLAY_Z: u32 = 1000;

/// Z-order increment between overlays (leaves room for internal layers).
pub const Z_STEP: u32 = 10;

/// Stack position of an overlay among concurrently open overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverlayIndex(u32);

impl OverlayIndex {
    /// The raw index value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The rendering z-order for this index.
    #[must_use]
    pub const fn z_order(self) -> u32 {
        BASE_OVERLAY_Z + self.0 * Z_STEP
    }
}

#[derive(Debug, Default)]
struct StackInner {
    /// Open overlays in allocation order (bottom to top).
    open: Vec<(OverlayId, OverlayIndex)>,
    next_index: u32,
    next_id: u64,
}

/// Shared registry of currently open overlays.
///
/// Cheap to clone; all clones share one registry.
#[derive(Debug, Clone, Default)]
pub struct OverlayStack {
    inner: Rc<RefCell<StackInner>>,
}

impl OverlayStack {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an identity and stack slot for a newly created overlay.
    pub fn allocate(&self) -> (OverlayId, OverlayIndex) {
        let mut inner = self.inner.borrow_mut();
        let id = OverlayId::new(inner.next_id);
        inner.next_id += 1;
        let index = OverlayIndex(inner.next_index);
        inner.next_index += 1;
        inner.open.push((id, index));
        (id, index)
    }

    /// Release the slot owned by `id`. Returns whether it was open.
    pub fn release(&self, id: OverlayId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let Some(pos) = inner.open.iter().position(|(open_id, _)| *open_id == id) else {
            return false;
        };
        inner.open.remove(pos);
        if inner.open.is_empty() {
            inner.next_index = 0;
        }
        true
    }

    /// The stack index of an open overlay.
    #[must_use]
    pub fn index_of(&self, id: OverlayId) -> Option<OverlayIndex> {
        self.inner
            .borrow()
            .open
            .iter()
            .find(|(open_id, _)| *open_id == id)
            .map(|(_, index)| *index)
    }

    /// The topmost open overlay (highest index).
    #[must_use]
    pub fn top(&self) -> Option<OverlayId> {
        self.inner
            .borrow()
            .open
            .iter()
            .max_by_key(|(_, index)| *index)
            .map(|(id, _)| *id)
    }

    /// Number of currently open overlays.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.inner.borrow().open.len()
    }

    /// Whether no overlay is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().open.is_empty()
    }
}
