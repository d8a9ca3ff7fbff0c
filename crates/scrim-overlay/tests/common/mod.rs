//! Shared stub collaborators for the lifecycle integration tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use scrim_core::{
    AttachError, ComponentDescriptor, ContainerHandle, ContentEvent, ContentMounter, HostEnv,
    MountedContent, OverlayConfig, OverlayEvent, OverlayEventKind, Props,
};
use scrim_overlay::{Overlay, OverlayStack, events::Subscription};

pub struct StubEnv {
    container: Option<ContainerHandle>,
    keyboard_hides: Rc<Cell<u32>>,
}

impl HostEnv for StubEnv {
    fn container(&self) -> Option<ContainerHandle> {
        self.container
    }

    fn hide_keyboard(&mut self) {
        self.keyboard_hides.set(self.keyboard_hides.get() + 1);
    }
}

struct StubContent {
    ready: Rc<Cell<bool>>,
    events: Rc<RefCell<Vec<ContentEvent>>>,
}

impl MountedContent for StubContent {
    fn receive_event(&mut self, event: &ContentEvent) {
        self.events.borrow_mut().push(event.clone());
    }

    fn is_ready(&self) -> bool {
        self.ready.get()
    }
}

struct StubMounter {
    fail_attach: bool,
    attached: Rc<Cell<u32>>,
    detached: Rc<Cell<u32>>,
    ready: Rc<Cell<bool>>,
    content_events: Rc<RefCell<Vec<ContentEvent>>>,
    last_props: Rc<RefCell<Option<Props>>>,
    last_classes: Rc<RefCell<Vec<String>>>,
}

impl ContentMounter for StubMounter {
    fn attach(
        &mut self,
        _container: ContainerHandle,
        component: &ComponentDescriptor,
        extra_classes: &[String],
        props: &Props,
    ) -> Result<Box<dyn MountedContent>, AttachError> {
        if self.fail_attach {
            return Err(AttachError::new(component.name(), "unresolvable"));
        }
        self.attached.set(self.attached.get() + 1);
        *self.last_props.borrow_mut() = Some(props.clone());
        *self.last_classes.borrow_mut() = extra_classes.to_vec();
        Ok(Box::new(StubContent {
            ready: Rc::clone(&self.ready),
            events: Rc::clone(&self.content_events),
        }))
    }

    fn detach(&mut self, _content: Box<dyn MountedContent>) {
        self.detached.set(self.detached.get() + 1);
    }
}

/// One overlay under test plus observation points into its collaborators.
pub struct Harness {
    pub stack: OverlayStack,
    pub log: Rc<RefCell<Vec<OverlayEvent>>>,
    pub attached: Rc<Cell<u32>>,
    pub detached: Rc<Cell<u32>>,
    pub ready: Rc<Cell<bool>>,
    pub keyboard_hides: Rc<Cell<u32>>,
    pub content_events: Rc<RefCell<Vec<ContentEvent>>>,
    pub last_props: Rc<RefCell<Option<Props>>>,
    pub last_classes: Rc<RefCell<Vec<String>>>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            stack: OverlayStack::new(),
            log: Rc::default(),
            attached: Rc::default(),
            detached: Rc::default(),
            ready: Rc::new(Cell::new(true)),
            keyboard_hides: Rc::default(),
            content_events: Rc::default(),
            last_props: Rc::default(),
            last_classes: Rc::default(),
        }
    }

    /// Build an overlay whose host has a container and whose mounter
    /// succeeds.
    pub fn overlay(&self, config: OverlayConfig) -> (Overlay, Subscription) {
        self.build(config, true, false)
    }

    /// Build an overlay whose host has no container surface.
    pub fn overlay_without_container(&self, config: OverlayConfig) -> (Overlay, Subscription) {
        self.build(config, false, false)
    }

    /// Build an overlay whose mounter refuses to attach.
    pub fn overlay_failing_attach(&self, config: OverlayConfig) -> (Overlay, Subscription) {
        self.build(config, true, true)
    }

    fn build(
        &self,
        config: OverlayConfig,
        has_container: bool,
        fail_attach: bool,
    ) -> (Overlay, Subscription) {
        let env = StubEnv {
            container: has_container.then(|| ContainerHandle::new(1)),
            keyboard_hides: Rc::clone(&self.keyboard_hides),
        };
        let mounter = StubMounter {
            fail_attach,
            attached: Rc::clone(&self.attached),
            detached: Rc::clone(&self.detached),
            ready: Rc::clone(&self.ready),
            content_events: Rc::clone(&self.content_events),
            last_props: Rc::clone(&self.last_props),
            last_classes: Rc::clone(&self.last_classes),
        };
        let log = Rc::clone(&self.log);
        Overlay::new_with_listener(config, &self.stack, Box::new(env), Box::new(mounter), move |event| {
            log.borrow_mut().push(event.clone())
        })
    }

    /// The payload-free tags of everything emitted so far.
    pub fn kinds(&self) -> Vec<OverlayEventKind> {
        self.log.borrow().iter().map(OverlayEvent::kind).collect()
    }
}

/// A plain config for a non-animated overlay (transitions complete
/// synchronously).
pub fn instant_config() -> OverlayConfig {
    OverlayConfig::new(ComponentDescriptor::new("sheet")).animated(false)
}

/// A plain config with default (animated) behavior.
pub fn animated_config() -> OverlayConfig {
    OverlayConfig::new(ComponentDescriptor::new("sheet"))
}
