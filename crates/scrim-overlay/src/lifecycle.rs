#![forbid(unsafe_code)]

//! The overlay present/dismiss state machine.
//!
//! An [`Overlay`] moves through five states:
//!
//! ```text
//! Idle -> Presenting -> Presented -> Dismissing -> Dismissed
//! ```
//!
//! `Dismissed` is terminal; there is no transition out of it. The state
//! field is also the re-entrancy lock: a transition can only start from a
//! stable state, so at most one present and one dismiss are ever in flight,
//! and re-entrant calls are silent no-ops rather than errors.
//!
//! Asynchronous waits (content readiness, animation completion) are
//! tick-driven suspension points: [`Overlay::tick`] advances any in-flight
//! transition against a caller-supplied clock. When the overlay is not
//! animated and its content is immediately ready, `present` and `dismiss`
//! complete synchronously within the call.
//!
//! # Invariants
//!
//! 1. `WillPresent` strictly precedes `DidPresent`; `WillDismiss` strictly
//!    precedes `DidDismiss`; no dismiss event before a present event.
//! 2. `presented` flips only inside the transition protocol.
//! 3. The stack slot is assigned synchronously at construction, before any
//!    suspension point, and released exactly once.
//! 4. The mounted content handle is owned by this instance alone and is
//!    released during teardown; it is never reused.
//!
//! # Failure Modes
//!
//! - No container at present time: [`PresentError::NoContainer`], no events,
//!   state stays `Idle`.
//! - Content attach fails: [`PresentError::Attach`], no events, state stays
//!   `Idle`.
//! - Double-present / double-dismiss: silent no-op (`Ok(())` / `false`).

use scrim_anim::{AnimationDriver, Direction, resolve};
use scrim_core::promise::{self, Completer, Promise};
use scrim_core::{
    DismissPayload, MountedContent, OverlayConfig, OverlayEvent, OverlayId, PROP_HOST_REF,
    PresentError, Props, ROLE_BACKDROP,
};
use serde_json::Value;
use tracing::{debug, trace};
use web_time::Instant;

use crate::backdrop::{Backdrop, BackdropStyle};
use crate::bridge;
use crate::events::{EventEmitter, Subscription};
use crate::readiness;
use crate::stack::{OverlayIndex, OverlayStack};

/// Lifecycle state of an overlay instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Constructed, never presented.
    Idle,
    /// Enter transition in flight.
    Presenting,
    /// Visible and settled.
    Presented,
    /// Leave transition in flight.
    Dismissing,
    /// Torn down. Terminal.
    Dismissed,
}

/// Phase within the enter transition.
#[derive(Debug)]
enum PresentPhase {
    /// Waiting for the mounted content (and nested children) to report
    /// ready.
    AwaitingReady,
    /// Enter animation running.
    Animating(AnimationDriver),
}

#[derive(Debug)]
struct DismissTransition {
    driver: AnimationDriver,
    payload: DismissPayload,
}

/// A floating UI surface presented above the main content.
///
/// Owns its mounted content handle, its backdrop, and its stack slot. See
/// the module docs for the state machine and its invariants.
pub struct Overlay {
    id: OverlayId,
    index: OverlayIndex,
    config: OverlayConfig,
    state: LifecycleState,
    presented: bool,
    present_phase: Option<PresentPhase>,
    dismissing: Option<DismissTransition>,
    content: Option<Box<dyn MountedContent>>,
    backdrop: Backdrop,
    events: EventEmitter,
    env: Box<dyn scrim_core::HostEnv>,
    mounter: Box<dyn scrim_core::ContentMounter>,
    stack: OverlayStack,
    slot_held: bool,
    will_dismiss_waiters: Vec<Completer<DismissPayload>>,
    did_dismiss_waiters: Vec<Completer<DismissPayload>>,
    last_will_dismiss: Option<DismissPayload>,
    last_did_dismiss: Option<DismissPayload>,
}

impl Overlay {
    /// Create an overlay. Assigns the identity and stack slot synchronously
    /// and fires `DidLoad`.
    #[must_use]
    pub fn new(
        config: OverlayConfig,
        stack: &OverlayStack,
        env: Box<dyn scrim_core::HostEnv>,
        mounter: Box<dyn scrim_core::ContentMounter>,
    ) -> Self {
        let mut overlay = Self::raw(config, stack, env, mounter);
        overlay.emit(OverlayEvent::DidLoad);
        overlay
    }

    /// Create an overlay with a lifecycle listener already registered, so
    /// the listener observes `DidLoad`.
    #[must_use]
    pub fn new_with_listener(
        config: OverlayConfig,
        stack: &OverlayStack,
        env: Box<dyn scrim_core::HostEnv>,
        mounter: Box<dyn scrim_core::ContentMounter>,
        listener: impl Fn(&OverlayEvent) + 'static,
    ) -> (Self, Subscription) {
        let mut overlay = Self::raw(config, stack, env, mounter);
        let subscription = overlay.events.subscribe(listener);
        overlay.emit(OverlayEvent::DidLoad);
        (overlay, subscription)
    }

    fn raw(
        config: OverlayConfig,
        stack: &OverlayStack,
        env: Box<dyn scrim_core::HostEnv>,
        mounter: Box<dyn scrim_core::ContentMounter>,
    ) -> Self {
        let (id, index) = stack.allocate();
        debug!(id = id.value(), index = index.value(), "overlay created");
        let backdrop = Backdrop::new(BackdropStyle::default(), config.backdrop_dismiss);
        Self {
            id,
            index,
            config,
            state: LifecycleState::Idle,
            presented: false,
            present_phase: None,
            dismissing: None,
            content: None,
            backdrop,
            events: EventEmitter::new(),
            env,
            mounter,
            stack: stack.clone(),
            slot_held: true,
            will_dismiss_waiters: Vec::new(),
            did_dismiss_waiters: Vec::new(),
            last_will_dismiss: None,
            last_did_dismiss: None,
        }
    }

    /// This overlay's identity.
    #[must_use]
    pub fn id(&self) -> OverlayId {
        self.id
    }

    /// Stack position among concurrently open overlays.
    #[must_use]
    pub fn overlay_index(&self) -> OverlayIndex {
        self.index
    }

    /// Rendering z-order derived from the stack position.
    #[must_use]
    pub fn z_order(&self) -> u32 {
        self.index.z_order()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Whether the overlay is fully presented.
    #[must_use]
    pub fn is_presented(&self) -> bool {
        self.presented
    }

    /// The configuration this overlay was created with.
    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// The scrim behind this overlay.
    #[must_use]
    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    /// Register a lifecycle listener.
    #[must_use]
    pub fn subscribe(&self, listener: impl Fn(&OverlayEvent) + 'static) -> Subscription {
        self.events.subscribe(listener)
    }

    /// Start presenting.
    ///
    /// No-op unless the overlay is `Idle`: re-entrant calls while already
    /// presenting or presented are silently ignored, and `Dismissed` is
    /// terminal. On success the content is mounted, the backdrop shown, and
    /// the enter transition started; with `animated == false` and ready
    /// content the whole transition completes before this returns.
    ///
    /// # Errors
    ///
    /// [`PresentError::NoContainer`] when the host has no container surface,
    /// [`PresentError::Attach`] when the content descriptor cannot be
    /// resolved. Either way no events are emitted and the state stays
    /// `Idle`.
    pub fn present(&mut self, now: Instant) -> Result<(), PresentError> {
        if self.state != LifecycleState::Idle {
            trace!(id = self.id.value(), state = ?self.state, "present ignored");
            return Ok(());
        }

        let container = self.env.container().ok_or(PresentError::NoContainer)?;
        if self.config.keyboard_close {
            self.env.hide_keyboard();
        }

        let mut props: Props = self.config.props.clone();
        props.insert(PROP_HOST_REF.to_owned(), Value::from(self.id.value()));
        let content = self.mounter.attach(
            container,
            &self.config.component,
            &self.config.css_class,
            &props,
        )?;
        self.content = Some(content);

        if self.config.show_backdrop {
            self.backdrop.show();
        }
        self.state = LifecycleState::Presenting;
        self.present_phase = Some(PresentPhase::AwaitingReady);
        debug!(id = self.id.value(), "presenting");
        self.advance(now);
        Ok(())
    }

    /// Request dismissal with an optional result payload.
    ///
    /// Accepted only while `Presented`; calls in any other state (including
    /// mid-transition) return `false` and emit nothing. Returns `true` when
    /// the leave transition was started; with `animated == false` it has
    /// already completed by the time this returns; otherwise completion is
    /// driven by [`Overlay::tick`] and observable via
    /// [`Overlay::on_did_dismiss`].
    pub fn dismiss(&mut self, data: Option<Value>, role: Option<&str>, now: Instant) -> bool {
        if self.state != LifecycleState::Presented {
            trace!(id = self.id.value(), state = ?self.state, "dismiss ignored");
            return false;
        }

        let payload = DismissPayload::new(data, role);
        self.state = LifecycleState::Dismissing;
        debug!(id = self.id.value(), role = ?payload.role, "dismissing");
        self.emit(OverlayEvent::WillDismiss(payload.clone()));
        for waiter in self.will_dismiss_waiters.drain(..) {
            waiter.resolve(payload.clone());
        }
        self.last_will_dismiss = Some(payload.clone());

        if !self.config.animated {
            self.finish_dismiss(payload);
            return true;
        }
        let spec = resolve(
            self.config.mode,
            Direction::Leave,
            self.config.leave_animation.as_ref(),
        );
        if spec.is_instant() {
            self.finish_dismiss(payload);
        } else {
            self.dismissing = Some(DismissTransition {
                driver: AnimationDriver::start(spec, now),
                payload,
            });
        }
        true
    }

    /// Advance any in-flight transition against the clock. No-op in stable
    /// states.
    pub fn tick(&mut self, now: Instant) {
        self.advance(now);
    }

    /// A tap on the scrim. Requests dismissal with the reserved
    /// `"backdrop"` role iff the backdrop is tappable, whether or not it is
    /// rendered; the request still goes through the dismiss guard.
    pub fn tap_backdrop(&mut self, now: Instant) -> bool {
        if !self.backdrop.tap() {
            return false;
        }
        self.dismiss(None, Some(ROLE_BACKDROP), now)
    }

    /// Escape-key dismissal. Follows the same gate as the scrim tap.
    pub fn handle_escape(&mut self, now: Instant) -> bool {
        if !self.config.backdrop_dismiss {
            return false;
        }
        self.dismiss(None, Some(ROLE_BACKDROP), now)
    }

    /// A future for the next `WillDismiss` payload.
    ///
    /// If `WillDismiss` has already fired for this instance, the promise
    /// resolves immediately with the most recent payload.
    #[must_use]
    pub fn on_will_dismiss(&mut self) -> Promise<DismissPayload> {
        if let Some(payload) = &self.last_will_dismiss {
            return promise::resolved(payload.clone());
        }
        let (completer, future) = promise::pending();
        self.will_dismiss_waiters.push(completer);
        future
    }

    /// A future for the next `DidDismiss` payload.
    ///
    /// If `DidDismiss` has already fired for this instance, the promise
    /// resolves immediately with the most recent payload.
    #[must_use]
    pub fn on_did_dismiss(&mut self) -> Promise<DismissPayload> {
        if let Some(payload) = &self.last_did_dismiss {
            return promise::resolved(payload.clone());
        }
        let (completer, future) = promise::pending();
        self.did_dismiss_waiters.push(completer);
        future
    }

    fn advance(&mut self, now: Instant) {
        match self.state {
            LifecycleState::Presenting => self.advance_present(now),
            LifecycleState::Dismissing => self.advance_dismiss(now),
            _ => {}
        }
    }

    fn advance_present(&mut self, now: Instant) {
        if matches!(self.present_phase, Some(PresentPhase::AwaitingReady)) {
            let ready = self
                .content
                .as_deref()
                .map_or(true, readiness::content_ready);
            if !ready {
                trace!(id = self.id.value(), "content not ready");
                return;
            }
            self.emit(OverlayEvent::WillPresent);
            if !self.config.animated {
                self.finish_present();
                return;
            }
            let spec = resolve(
                self.config.mode,
                Direction::Enter,
                self.config.enter_animation.as_ref(),
            );
            if spec.is_instant() {
                self.finish_present();
            } else {
                self.present_phase =
                    Some(PresentPhase::Animating(AnimationDriver::start(spec, now)));
            }
            return;
        }

        let finished = matches!(
            &self.present_phase,
            Some(PresentPhase::Animating(driver)) if driver.is_finished(now)
        );
        if finished {
            self.finish_present();
        }
    }

    fn advance_dismiss(&mut self, now: Instant) {
        if let Some(transition) = self.dismissing.take() {
            if transition.driver.is_finished(now) {
                self.finish_dismiss(transition.payload);
            } else {
                self.dismissing = Some(transition);
            }
        }
    }

    fn finish_present(&mut self) {
        self.present_phase = None;
        self.presented = true;
        self.state = LifecycleState::Presented;
        debug!(id = self.id.value(), "presented");
        self.emit(OverlayEvent::DidPresent);
    }

    fn finish_dismiss(&mut self, payload: DismissPayload) {
        // DidDismiss is delivered (and bridged to the content) before the
        // handle is detached, so the content observes its own teardown.
        self.emit(OverlayEvent::DidDismiss(payload.clone()));
        for waiter in self.did_dismiss_waiters.drain(..) {
            waiter.resolve(payload.clone());
        }
        self.last_did_dismiss = Some(payload);
        self.presented = false;
        if let Some(content) = self.content.take() {
            self.mounter.detach(content);
        }
        self.backdrop.hide();
        self.release_slot();
        self.state = LifecycleState::Dismissed;
        debug!(id = self.id.value(), "dismissed");
        self.emit(OverlayEvent::DidUnload);
    }

    fn emit(&mut self, event: OverlayEvent) {
        trace!(id = self.id.value(), event = ?event.kind(), "emit");
        if let Some(content_event) = bridge::content_event_for(&event)
            && let Some(content) = self.content.as_mut()
        {
            content.receive_event(&content_event);
        }
        self.events.emit(&event);
    }

    fn release_slot(&mut self) {
        if self.slot_held {
            self.stack.release(self.id);
            self.slot_held = false;
        }
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        self.release_slot();
    }
}

impl std::fmt::Debug for Overlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Overlay")
            .field("id", &self.id)
            .field("index", &self.index)
            .field("state", &self.state)
            .field("presented", &self.presented)
            .finish_non_exhaustive()
    }
}
