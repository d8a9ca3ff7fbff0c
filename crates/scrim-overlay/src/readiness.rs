#![forbid(unsafe_code)]

//! Readiness polling for mounted content.
//!
//! Content is ready when it reports ready and every nested overlay child it
//! has itself opened is (transitively) ready. This is a best-effort poll
//! that never fails; the lifecycle keeps polling from `tick` until it turns
//! true.

use scrim_core::MountedContent;

/// Whether `content` and all of its transitive children report ready.
#[must_use]
pub fn content_ready(content: &dyn MountedContent) -> bool {
    content.is_ready() && content.children().into_iter().all(content_ready)
}
