#![forbid(unsafe_code)]

//! Easing curves for overlay transitions.
//!
//! All curves map a normalized time `t` in `[0, 1]` to a normalized progress
//! value in `[0, 1]`, with `apply(0) == 0` and `apply(1) == 1`. Inputs
//! outside the range are clamped first.

/// An easing curve applied to normalized animation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// No easing; progress equals time.
    #[default]
    Linear,
    /// Cubic ease-in: slow start, fast finish.
    EaseInCubic,
    /// Cubic ease-out: fast start, slow finish.
    EaseOutCubic,
    /// Cubic ease-in-out.
    EaseInOutCubic,
    /// Quadratic deceleration (material-style standard curve).
    Decelerate,
}

impl Easing {
    /// Evaluate the curve at normalized time `t`, clamping to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInCubic => t * t * t,
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Self::Decelerate => {
                let u = 1.0 - t;
                1.0 - u * u
            }
        }
    }
}
