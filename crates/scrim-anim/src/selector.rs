#![forbid(unsafe_code)]

//! Theme/direction animation selection.
//!
//! [`select`] is a pure lookup: each visual mode gets a fixed enter and
//! leave animation builder. Callers may override either direction with an
//! [`AnimationOverride`]; [`resolve`] applies the precedence rule (override
//! always wins over the table).
//!
//! | mode | enter       | leave       |
//! |------|-------------|-------------|
//! | Ios  | `ios_enter` | `ios_leave` |
//! | Md   | `md_enter`  | `md_leave`  |

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::animation::{AnimationSpec, Motion};
use crate::easing::Easing;

/// Visual theme an overlay renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Cupertino-style theme (sheet slides up from the bottom).
    #[default]
    Ios,
    /// Material-style theme (surface scales in).
    Md,
}

/// Which side of the lifecycle an animation runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Presenting: animating into view.
    Enter,
    /// Dismissing: animating out of view.
    Leave,
}

/// A function that builds an animation spec for one transition.
pub type AnimationBuilder = fn() -> AnimationSpec;

/// Enter animation for [`Mode::Ios`].
#[must_use]
pub fn ios_enter() -> AnimationSpec {
    AnimationSpec::new(Motion::SlideUp, Duration::from_millis(400))
        .easing(Easing::EaseOutCubic)
        .backdrop_fade(true)
}

/// Leave animation for [`Mode::Ios`].
#[must_use]
pub fn ios_leave() -> AnimationSpec {
    AnimationSpec::new(Motion::SlideDown, Duration::from_millis(450))
        .easing(Easing::EaseInCubic)
        .backdrop_fade(true)
}

/// Enter animation for [`Mode::Md`].
#[must_use]
pub fn md_enter() -> AnimationSpec {
    AnimationSpec::new(Motion::ScaleIn, Duration::from_millis(280))
        .easing(Easing::Decelerate)
        .backdrop_fade(true)
}

/// Leave animation for [`Mode::Md`].
#[must_use]
pub fn md_leave() -> AnimationSpec {
    AnimationSpec::new(Motion::FadeOut, Duration::from_millis(200))
        .easing(Easing::EaseInCubic)
        .backdrop_fade(true)
}

/// Look up the animation builder for a mode and direction.
#[must_use]
pub fn select(mode: Mode, direction: Direction) -> AnimationBuilder {
    match (mode, direction) {
        (Mode::Ios, Direction::Enter) => ios_enter,
        (Mode::Ios, Direction::Leave) => ios_leave,
        (Mode::Md, Direction::Enter) => md_enter,
        (Mode::Md, Direction::Leave) => md_leave,
    }
}

/// A caller-supplied animation builder that takes precedence over the
/// theme table.
#[derive(Clone)]
pub struct AnimationOverride {
    build: Rc<dyn Fn() -> AnimationSpec>,
}

impl AnimationOverride {
    /// Wrap a builder closure.
    pub fn new(build: impl Fn() -> AnimationSpec + 'static) -> Self {
        Self {
            build: Rc::new(build),
        }
    }

    /// Build the override's animation spec.
    #[must_use]
    pub fn spec(&self) -> AnimationSpec {
        (self.build)()
    }
}

impl fmt::Debug for AnimationOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationOverride").finish_non_exhaustive()
    }
}

/// Resolve the animation for a transition: the override wins when present,
/// otherwise the theme table applies.
#[must_use]
pub fn resolve(
    mode: Mode,
    direction: Direction,
    override_: Option<&AnimationOverride>,
) -> AnimationSpec {
    match override_ {
        Some(custom) => custom.spec(),
        None => select(mode, direction)(),
    }
}
