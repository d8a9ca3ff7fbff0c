#![forbid(unsafe_code)]

//! Host environment contracts.
//!
//! The engine never touches the rendering layer directly. Everything it
//! needs from the host is behind three traits:
//!
//! - [`HostEnv`]: locate the container surface, coordinate the soft
//!   keyboard.
//! - [`ContentMounter`]: turn a [`ComponentDescriptor`] into live content
//!   inside a container, and tear it back down.
//! - [`MountedContent`]: the opaque handle to live content. Owned
//!   exclusively by one overlay instance; created by `attach`, consumed by
//!   `detach`, never shared.
//!
//! # Failure Modes
//!
//! - `attach` is the only fallible operation ([`AttachError`]).
//! - `detach` cannot be called twice on the same handle: the handle is moved
//!   in, so double-detach is unrepresentable.
//! - `MountedContent::is_ready` is a best-effort poll and never fails;
//!   callers decide how long to keep polling.

use crate::config::{ComponentDescriptor, Props};
use crate::error::AttachError;
use crate::event::ContentEvent;

/// Property key under which the hosting overlay's identity is merged into
/// the content props at attach time.
pub const PROP_HOST_REF: &str = "hostRef";

/// Identity of an overlay instance. Unique for the lifetime of the process
/// within one stack registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(u64);

impl OverlayId {
    /// Wrap a raw id value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw id value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Opaque reference to a host container surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerHandle(u64);

impl ContainerHandle {
    /// Wrap a raw container id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw container id.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// The host environment an overlay presents into.
pub trait HostEnv {
    /// The container surface overlays mount into, if one exists right now.
    fn container(&self) -> Option<ContainerHandle>;

    /// Hide the soft keyboard. Called during present when the overlay's
    /// `keyboard_close` option is set. Default: no-op.
    fn hide_keyboard(&mut self) {}
}

/// Live content mounted inside an overlay's container.
pub trait MountedContent {
    /// Deliver a content-facing lifecycle notification.
    fn receive_event(&mut self, event: &ContentEvent);

    /// Whether this content has finished initializing. Best-effort; polled
    /// until true.
    fn is_ready(&self) -> bool {
        true
    }

    /// Nested overlay content this content has itself opened. Readiness is
    /// transitive over these.
    fn children(&self) -> Vec<&dyn MountedContent> {
        Vec::new()
    }
}

/// Creates and destroys mounted content inside host containers.
pub trait ContentMounter {
    /// Resolve `component` and mount it into `container`, applying
    /// `extra_classes` as marker classes and handing `props` to the content.
    fn attach(
        &mut self,
        container: ContainerHandle,
        component: &ComponentDescriptor,
        extra_classes: &[String],
        props: &Props,
    ) -> Result<Box<dyn MountedContent>, AttachError>;

    /// Unmount previously attached content. Consumes the handle.
    fn detach(&mut self, content: Box<dyn MountedContent>);
}
