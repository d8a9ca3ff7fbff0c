#![forbid(unsafe_code)]

//! Bridging overlay lifecycle events to the mounted content.
//!
//! One dispatch table, resolved by pattern match over the event union:
//!
//! | overlay event | content event     |
//! |---------------|-------------------|
//! | `WillPresent` | `ViewWillEnter`   |
//! | `DidPresent`  | `ViewDidEnter`    |
//! | `WillDismiss` | `ViewWillDismiss` |
//! | `DidDismiss`  | `ViewDidDismiss`  |
//!
//! `DidLoad` and `DidUnload` are component-level notifications and do not
//! cross the bridge. Dismiss payloads cross unchanged.

use scrim_core::{ContentEvent, OverlayEvent};

/// Map an overlay event to the content-facing notification it produces, if
/// any.
#[must_use]
pub fn content_event_for(event: &OverlayEvent) -> Option<ContentEvent> {
    match event {
        OverlayEvent::WillPresent => Some(ContentEvent::ViewWillEnter),
        OverlayEvent::DidPresent => Some(ContentEvent::ViewDidEnter),
        OverlayEvent::WillDismiss(payload) => {
            Some(ContentEvent::ViewWillDismiss(payload.clone()))
        }
        OverlayEvent::DidDismiss(payload) => Some(ContentEvent::ViewDidDismiss(payload.clone())),
        OverlayEvent::DidLoad | OverlayEvent::DidUnload => None,
    }
}
