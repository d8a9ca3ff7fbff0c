#![forbid(unsafe_code)]

//! Overlay configuration.
//!
//! [`OverlayConfig`] is an explicit struct of every recognized option, with
//! chainable builder setters. Defaults match the conventional overlay
//! behavior: animated, dimming backdrop, scrim-tap dismissal, soft-keyboard
//! close on present.
//!
//! The stack position (`overlay_index`) is deliberately *not* here: it is
//! assigned by the engine at construction and never caller-set.

use scrim_anim::{AnimationOverride, Mode};
use serde_json::{Map, Value};

/// The property bag passed to the mounted content.
pub type Props = Map<String, Value>;

/// Names the content to mount inside the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    name: String,
}

impl ComponentDescriptor {
    /// Create a descriptor for a named component.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The component name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Configuration for one overlay instance.
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    /// Visual theme; selects the enter/leave animation table.
    pub mode: Mode,
    /// The content to mount.
    pub component: ComponentDescriptor,
    /// Properties handed to the content at mount time.
    pub props: Props,
    /// Extra marker classes applied to the mounted content.
    pub css_class: Vec<String>,
    /// Run enter/leave animations. When false, transitions complete
    /// instantly.
    pub animated: bool,
    /// Whether a scrim tap dismisses the overlay.
    pub backdrop_dismiss: bool,
    /// Whether the dimming backdrop is rendered at all.
    pub show_backdrop: bool,
    /// Hide the soft keyboard when presenting.
    pub keyboard_close: bool,
    /// Caller-supplied enter animation; wins over the theme table.
    pub enter_animation: Option<AnimationOverride>,
    /// Caller-supplied leave animation; wins over the theme table.
    pub leave_animation: Option<AnimationOverride>,
}

impl OverlayConfig {
    /// Create a config for the given content with default behavior.
    #[must_use]
    pub fn new(component: ComponentDescriptor) -> Self {
        Self {
            mode: Mode::default(),
            component,
            props: Props::new(),
            css_class: Vec::new(),
            animated: true,
            backdrop_dismiss: true,
            show_backdrop: true,
            keyboard_close: true,
            enter_animation: None,
            leave_animation: None,
        }
    }

    /// Set the visual theme.
    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the content property bag.
    #[must_use]
    pub fn props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    /// Add a single content property.
    #[must_use]
    pub fn prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.props.insert(key.into(), value);
        self
    }

    /// Set the extra marker classes.
    #[must_use]
    pub fn css_class(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.css_class = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable transition animations.
    #[must_use]
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Enable or disable scrim-tap dismissal.
    #[must_use]
    pub fn backdrop_dismiss(mut self, dismiss: bool) -> Self {
        self.backdrop_dismiss = dismiss;
        self
    }

    /// Show or hide the dimming backdrop.
    #[must_use]
    pub fn show_backdrop(mut self, show: bool) -> Self {
        self.show_backdrop = show;
        self
    }

    /// Hide the soft keyboard when presenting.
    #[must_use]
    pub fn keyboard_close(mut self, close: bool) -> Self {
        self.keyboard_close = close;
        self
    }

    /// Override the enter animation.
    #[must_use]
    pub fn enter_animation(mut self, animation: AnimationOverride) -> Self {
        self.enter_animation = Some(animation);
        self
    }

    /// Override the leave animation.
    #[must_use]
    pub fn leave_animation(mut self, animation: AnimationOverride) -> Self {
        self.leave_animation = Some(animation);
        self
    }
}
