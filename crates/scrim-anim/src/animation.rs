#![forbid(unsafe_code)]

//! Animation specs and the tick-driven progress driver.
//!
//! An [`AnimationSpec`] describes a transition declaratively (motion shape,
//! duration, easing, whether the backdrop fades in lockstep). An
//! [`AnimationDriver`] binds a spec to a start instant and answers progress
//! queries against a caller-supplied clock, so the overlay lifecycle can be
//! advanced from an ordinary event-loop tick with no timer thread.
//!
//! # Failure Modes
//!
//! - Clock going backwards: progress saturates at `0.0`; the driver simply
//!   takes longer to finish. It never panics and never reports negative
//!   progress.
//! - Zero duration: finished immediately, `progress` reports `1.0`.

use std::time::Duration;

use web_time::Instant;

use crate::easing::Easing;

/// The visual shape of an overlay transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Slide in from the bottom edge.
    SlideUp,
    /// Slide out toward the bottom edge.
    SlideDown,
    /// Scale up from slightly below full size.
    ScaleIn,
    /// Scale down while fading.
    ScaleOut,
    /// Opacity ramp from transparent.
    FadeIn,
    /// Opacity ramp to transparent.
    FadeOut,
}

/// A declarative description of one overlay transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Motion shape of the overlay surface.
    pub motion: Motion,
    /// Total duration. Zero means instantaneous.
    pub duration: Duration,
    /// Easing curve applied to normalized time.
    pub easing: Easing,
    /// Whether the backdrop opacity animates in lockstep.
    pub backdrop_fade: bool,
}

impl AnimationSpec {
    /// Create a spec with linear easing and no backdrop fade.
    #[must_use]
    pub fn new(motion: Motion, duration: Duration) -> Self {
        Self {
            motion,
            duration,
            easing: Easing::Linear,
            backdrop_fade: false,
        }
    }

    /// Create a zero-duration spec (completes instantly).
    #[must_use]
    pub fn instant(motion: Motion) -> Self {
        Self::new(motion, Duration::ZERO)
    }

    /// Set the easing curve.
    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Animate the backdrop opacity in lockstep.
    #[must_use]
    pub fn backdrop_fade(mut self, fade: bool) -> Self {
        self.backdrop_fade = fade;
        self
    }

    /// Whether this spec completes instantly.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.duration.is_zero()
    }
}

/// Tracks a running animation against a caller-supplied clock.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    spec: AnimationSpec,
    started: Instant,
}

impl AnimationDriver {
    /// Start the animation at `now`.
    #[must_use]
    pub fn start(spec: AnimationSpec, now: Instant) -> Self {
        Self { spec, started: now }
    }

    /// The spec this driver is running.
    #[must_use]
    pub fn spec(&self) -> &AnimationSpec {
        &self.spec
    }

    /// Linear progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.spec.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.spec.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn value(&self, now: Instant) -> f32 {
        self.spec.easing.apply(self.progress(now))
    }

    /// Whether the animation has run to completion at `now`.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.spec.duration.is_zero()
            || now.saturating_duration_since(self.started) >= self.spec.duration
    }
}
