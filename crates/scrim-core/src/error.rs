#![forbid(unsafe_code)]

//! Error taxonomy for overlay presentation.
//!
//! Only two things can fail, and both fail the *present attempt* without
//! leaving partial state behind: the host has no container surface, or the
//! content descriptor cannot be resolved. Double-present and double-dismiss
//! are deliberately not errors; the public API is idempotent and safe to
//! call speculatively from multiple call sites.

use std::fmt;

/// A content descriptor could not be resolved to mountable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachError {
    /// The descriptor that failed to resolve.
    pub descriptor: String,
    /// Human-readable reason from the mounter.
    pub reason: String,
}

impl AttachError {
    /// Create an attach error.
    pub fn new(descriptor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot attach content '{}': {}",
            self.descriptor, self.reason
        )
    }
}

impl std::error::Error for AttachError {}

/// Why a `present()` attempt failed. The lifecycle stays `Idle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentError {
    /// The host environment has no container surface at call time.
    NoContainer,
    /// Content attach failed; see the inner error.
    Attach(AttachError),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoContainer => write!(f, "no container surface to present into"),
            Self::Attach(err) => write!(f, "present failed: {err}"),
        }
    }
}

impl std::error::Error for PresentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoContainer => None,
            Self::Attach(err) => Some(err),
        }
    }
}

impl From<AttachError> for PresentError {
    fn from(err: AttachError) -> Self {
        Self::Attach(err)
    }
}
