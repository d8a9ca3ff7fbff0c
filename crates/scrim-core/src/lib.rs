#![forbid(unsafe_code)]

//! Shared vocabulary for the scrim overlay engine.
//!
//! This crate defines the types every layer of the engine speaks:
//!
//! - [`event`]: the overlay lifecycle event union and the content-facing
//!   event vocabulary it bridges to.
//! - [`error`]: the present-time error taxonomy.
//! - [`config`]: the explicit overlay configuration struct.
//! - [`host`]: contracts for the host environment collaborators (container
//!   lookup, content mounting, mounted-content handles).
//! - [`promise`]: the single-resolution future used for dismissal
//!   completion.
//!
//! The lifecycle state machine itself lives in `scrim-overlay`; animation
//! timing lives in `scrim-anim`.

pub mod config;
pub mod error;
pub mod event;
pub mod host;
pub mod promise;

pub use config::{ComponentDescriptor, OverlayConfig, Props};
pub use error::{AttachError, PresentError};
pub use event::{ContentEvent, DismissPayload, OverlayEvent, OverlayEventKind, ROLE_BACKDROP};
pub use host::{ContainerHandle, ContentMounter, HostEnv, MountedContent, OverlayId, PROP_HOST_REF};
pub use promise::{Completer, Promise, pending, resolved};

pub use scrim_anim::Mode;
