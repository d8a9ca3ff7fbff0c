#![forbid(unsafe_code)]

//! Overlay lifecycle engine.
//!
//! An [`Overlay`] is a floating UI surface (a modal) governed by a five-state
//! machine: it is created, populated with mounted content, animated into
//! view, and later animated out and torn down, while coordinating with a
//! shared [`OverlayStack`] for z-ordering, a tappable [`Backdrop`], soft
//! keyboard dismissal, and lifecycle propagation into the hosted content.
//!
//! # Guarantees
//!
//! - Exactly-once presentation: re-entrant `present` calls are no-ops.
//! - Idempotent dismissal: `dismiss` outside `Presented` returns `false`
//!   with no side effects.
//! - Deterministic event order per instance: `DidLoad`, `WillPresent`,
//!   `DidPresent`, `WillDismiss`, `DidDismiss`, `DidUnload`.
//! - Mounted content is detached exactly once, after `DidDismiss` is
//!   delivered to it.
//!
//! # Example
//!
//! ```ignore
//! use scrim_core::{ComponentDescriptor, OverlayConfig};
//! use scrim_overlay::{Overlay, OverlayStack};
//! use web_time::Instant;
//!
//! let stack = OverlayStack::new();
//! let config = OverlayConfig::new(ComponentDescriptor::new("settings-sheet"));
//! let mut overlay = Overlay::new(config, &stack, env, mounter);
//!
//! overlay.present(Instant::now())?;
//! // ... event loop calls overlay.tick(now) until presented ...
//! let done = overlay.on_did_dismiss();
//! overlay.dismiss(None, Some("save"), Instant::now());
//! ```

pub mod backdrop;
pub mod bridge;
pub mod events;
pub mod lifecycle;
pub mod readiness;
pub mod stack;

pub use backdrop::{Backdrop, BackdropStyle};
pub use bridge::content_event_for;
pub use events::{EventEmitter, Subscription};
pub use lifecycle::{LifecycleState, Overlay};
pub use readiness::content_ready;
pub use stack::{BASE_OVERLAY_Z, OverlayIndex, OverlayStack, Z_STEP};
