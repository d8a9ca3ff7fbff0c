#![forbid(unsafe_code)]

//! Lifecycle events and dismissal payloads.
//!
//! An overlay emits [`OverlayEvent`]s in a fixed order over its life:
//! `DidLoad` once at construction, `WillPresent`/`DidPresent` around the
//! enter transition, `WillDismiss`/`DidDismiss` around the leave transition,
//! and `DidUnload` once at teardown. The engine bridges the four
//! presentation events into the content-facing [`ContentEvent`] vocabulary.
//!
//! # Invariants
//!
//! 1. `WillPresent` strictly precedes `DidPresent`; `WillDismiss` strictly
//!    precedes `DidDismiss`.
//! 2. No dismiss event fires before a present event for the same instance.
//! 3. `WillDismiss` and its matching `DidDismiss` carry the same payload.

use serde_json::Value;

/// Reserved dismissal role meaning "dismissed via a scrim tap", as opposed
/// to caller-supplied roles.
pub const ROLE_BACKDROP: &str = "backdrop";

/// Data attached to a dismissal: an optional value and an optional role.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DismissPayload {
    /// Caller-supplied result data.
    pub data: Option<Value>,
    /// Why the overlay was dismissed (e.g. `"cancel"`, [`ROLE_BACKDROP`]).
    pub role: Option<String>,
}

impl DismissPayload {
    /// Create a payload from optional parts.
    #[must_use]
    pub fn new(data: Option<Value>, role: Option<&str>) -> Self {
        Self {
            data,
            role: role.map(str::to_owned),
        }
    }

    /// The payload for a scrim-tap dismissal.
    #[must_use]
    pub fn backdrop() -> Self {
        Self::new(None, Some(ROLE_BACKDROP))
    }

    /// Whether this dismissal came from a scrim tap.
    #[must_use]
    pub fn is_backdrop(&self) -> bool {
        self.role.as_deref() == Some(ROLE_BACKDROP)
    }
}

/// A lifecycle event emitted by an overlay instance.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayEvent {
    /// The instance was constructed. Fired exactly once.
    DidLoad,
    /// The enter transition is about to run (content is mounted and ready).
    WillPresent,
    /// The enter transition completed; the overlay is presented.
    DidPresent,
    /// The leave transition is about to run.
    WillDismiss(DismissPayload),
    /// The leave transition completed; content is about to be detached.
    DidDismiss(DismissPayload),
    /// The instance was torn down. Fired exactly once, last.
    DidUnload,
}

impl OverlayEvent {
    /// The payload-free tag of this event.
    #[must_use]
    pub fn kind(&self) -> OverlayEventKind {
        match self {
            Self::DidLoad => OverlayEventKind::DidLoad,
            Self::WillPresent => OverlayEventKind::WillPresent,
            Self::DidPresent => OverlayEventKind::DidPresent,
            Self::WillDismiss(_) => OverlayEventKind::WillDismiss,
            Self::DidDismiss(_) => OverlayEventKind::DidDismiss,
            Self::DidUnload => OverlayEventKind::DidUnload,
        }
    }
}

/// Payload-free event tag, handy for dispatch tables and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayEventKind {
    DidLoad,
    WillPresent,
    DidPresent,
    WillDismiss,
    DidDismiss,
    DidUnload,
}

/// A lifecycle notification delivered to the mounted content.
///
/// These mirror the overlay's presentation events under the content-facing
/// naming; the engine forwards them non-bubbling with the same payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentEvent {
    /// The hosting overlay is about to present.
    ViewWillEnter,
    /// The hosting overlay finished presenting.
    ViewDidEnter,
    /// The hosting overlay is about to dismiss.
    ViewWillDismiss(DismissPayload),
    /// The hosting overlay finished dismissing.
    ViewDidDismiss(DismissPayload),
}
