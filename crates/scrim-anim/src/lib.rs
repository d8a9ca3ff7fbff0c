#![forbid(unsafe_code)]

//! Animation contracts for the scrim overlay engine.
//!
//! This crate owns everything about *how long* an overlay transition takes
//! and *which* transition a theme gets, without knowing anything about the
//! overlay lifecycle itself:
//!
//! - [`Easing`]: normalized easing curves evaluated on `[0, 1]`.
//! - [`AnimationSpec`] / [`AnimationDriver`]: a declarative description of a
//!   transition plus a tick-driven progress tracker.
//! - [`select`] / [`resolve`]: the theme/direction selection table, with
//!   caller overrides taking precedence.
//!
//! # Invariants
//!
//! 1. A zero-duration spec is finished immediately (`is_finished` is true at
//!    the start instant).
//! 2. A driver reports finished once the wall clock passes `duration`,
//!    regardless of easing shape. Completion is bounded by the clock; there
//!    is no unbounded wait.
//! 3. `select` is a pure function of `(mode, direction)`.

pub mod animation;
pub mod easing;
pub mod selector;

pub use animation::{AnimationDriver, AnimationSpec, Motion};
pub use easing::Easing;
pub use selector::{
    AnimationBuilder, AnimationOverride, Direction, Mode, ios_enter, ios_leave, md_enter,
    md_leave, resolve, select,
};
