#![forbid(unsafe_code)]

//! The dimming scrim behind a presented overlay.
//!
//! The backdrop is shown and hidden in lockstep with presentation state by
//! the lifecycle; it never drives state itself. Visibility and tappability
//! are independent axes: a backdrop that is not rendered still accepts taps
//! when configured dismissable. A tap on the scrim *requests* dismissal;
//! the request still goes through the lifecycle's idempotent dismiss guard.

/// Backdrop appearance (color + opacity).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropStyle {
    /// Scrim color as RGB.
    pub color: [u8; 3],
    /// Opacity in `[0.0, 1.0]`.
    pub opacity: f32,
}

impl Default for BackdropStyle {
    fn default() -> Self {
        Self {
            color: [0, 0, 0],
            opacity: 0.6,
        }
    }
}

/// The scrim layer behind one overlay instance.
#[derive(Debug, Clone)]
pub struct Backdrop {
    style: BackdropStyle,
    tappable: bool,
    visible: bool,
}

impl Backdrop {
    /// Create a hidden backdrop. `tappable` mirrors the overlay's
    /// `backdrop_dismiss` option.
    #[must_use]
    pub fn new(style: BackdropStyle, tappable: bool) -> Self {
        Self {
            style,
            tappable,
            visible: false,
        }
    }

    /// The configured appearance.
    #[must_use]
    pub fn style(&self) -> BackdropStyle {
        self.style
    }

    /// Whether the scrim is currently rendered.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a tap on the scrim requests dismissal.
    #[must_use]
    pub fn is_tappable(&self) -> bool {
        self.tappable
    }

    pub(crate) fn show(&mut self) {
        self.visible = true;
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether a tap should turn into a dismissal request. Independent of
    /// visibility; the lifecycle's dismiss guard handles presentation state.
    #[must_use]
    pub fn tap(&self) -> bool {
        self.tappable
    }
}
