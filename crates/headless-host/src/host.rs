//! In-memory host toolkit
//!
//! `HeadlessHost` keeps navigation containers, their stacks, and the modal
//! presentation chain in memory. It calls screen lifecycle hooks, drives custom
//! animators supplied through the animation delegate, and logs every request.
//! Completion can be held back to observe in-flight animations.

use std::collections::HashMap;
use std::fmt;

use navigable_core::{
    AnimationCompleter, AnimationDelegate, AnimationPhase, HostError, HostToolkit, ModalOptions,
    Screen, ScreenHandle, Segue, Transition, TransitionContext,
};

use crate::calls::HostCall;
use crate::catalog::ScreenCatalog;

enum Node {
    Screen(Box<dyn Screen>),
    Container(Vec<ScreenHandle>),
}

/// Host toolkit that runs without a UI
pub struct HeadlessHost {
    catalog: ScreenCatalog,
    nodes: HashMap<ScreenHandle, Node>,
    /// Screen -> enclosing container
    parents: HashMap<ScreenHandle, ScreenHandle>,
    /// Presenter -> presented container
    presented: HashMap<ScreenHandle, ScreenHandle>,
    /// Presented container -> presenter
    presenters: HashMap<ScreenHandle, ScreenHandle>,
    root: Option<ScreenHandle>,
    calls: Vec<HostCall>,
    hold: bool,
    pending: Vec<AnimationCompleter>,
}

impl HeadlessHost {
    /// Create a host over a screen catalog
    pub fn new(catalog: ScreenCatalog) -> Self {
        Self {
            catalog,
            nodes: HashMap::new(),
            parents: HashMap::new(),
            presented: HashMap::new(),
            presenters: HashMap::new(),
            root: None,
            calls: Vec::new(),
            hold: false,
            pending: Vec::new(),
        }
    }

    /// Borrow the catalog
    pub fn catalog(&self) -> &ScreenCatalog {
        &self.catalog
    }

    /// Mutably borrow the catalog
    pub fn catalog_mut(&mut self) -> &mut ScreenCatalog {
        &mut self.catalog
    }

    /// Instantiate a screen and make it the root of a new window
    pub fn install_root(&mut self, group: &str, identifier: &str) -> Option<ScreenHandle> {
        let screen = self.instantiate(group, identifier)?;
        self.install(screen)
    }

    /// Make an existing screen instance the root of a new window
    pub fn install_root_screen<S: Screen>(&mut self, screen: S) -> Option<ScreenHandle> {
        let handle = self.insert_screen(Box::new(screen));
        self.install(handle)
    }

    fn install(&mut self, screen: ScreenHandle) -> Option<ScreenHandle> {
        let container = self.wrap_in_navigation_container(screen).ok()?;
        if let Some(previous) = self.root.replace(container) {
            self.release(previous);
        }
        self.appear(screen, false);
        tracing::debug!(screen = %screen, container = %container, "Root installed");
        Some(screen)
    }

    // -------------------------------------------------------------------------
    // Host-native actions (not requested by the router)
    // -------------------------------------------------------------------------

    /// Instantiate a screen and push it onto the source's stack, as a
    /// storyboard segue would
    pub fn perform_segue(
        &mut self,
        source: ScreenHandle,
        group: &str,
        identifier: &str,
    ) -> Option<Segue> {
        let container = self.container_of(source)?;
        let boxed = self.catalog.instantiate(group, identifier)?;
        let destination = self.insert_screen(boxed);
        self.stack_push(container, destination, true);

        Some(Segue {
            identifier: Some(identifier.to_string()),
            source,
            destination,
        })
    }

    /// Dismiss a presented container without going through the router, as an
    /// interactive swipe would
    pub fn dismiss_natively(&mut self, presented: ScreenHandle) -> bool {
        let presenter = match self.presenters.get(&presented) {
            Some(presenter) => *presenter,
            None => return false,
        };
        let visible = self.visible_in(presented);
        self.disappear(visible, true);
        self.release(presented);
        let uncovered = self.visible_in(presenter);
        self.appear(uncovered, true);
        true
    }

    // -------------------------------------------------------------------------
    // Animations
    // -------------------------------------------------------------------------

    /// Hold completions until `finish_animations` instead of completing at once
    pub fn hold_animations(&mut self, hold: bool) {
        self.hold = hold;
    }

    /// Complete every held animation, returning how many finished
    pub fn finish_animations(&mut self) -> usize {
        let pending = std::mem::take(&mut self.pending);
        let count = pending.len();
        for completer in pending {
            completer.complete();
        }
        count
    }

    /// Number of held animations
    pub fn pending_animations(&self) -> usize {
        self.pending.len()
    }

    // -------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------

    /// Requests received so far
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Number of requests with the given name
    pub fn calls_named(&self, name: &str) -> usize {
        self.calls.iter().filter(|call| call.name() == name).count()
    }

    /// Forget logged requests
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Borrow a live screen as its concrete type
    pub fn screen<T: Screen>(&self, handle: ScreenHandle) -> Option<&T> {
        match self.nodes.get(&handle) {
            Some(Node::Screen(screen)) => screen.as_ref().downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Screens of a container, bottom to top
    pub fn stack(&self, container: ScreenHandle) -> Option<&[ScreenHandle]> {
        match self.nodes.get(&container) {
            Some(Node::Container(stack)) => Some(stack),
            _ => None,
        }
    }

    /// Root container of the window
    pub fn root(&self) -> Option<ScreenHandle> {
        self.root
    }

    /// Container presented over `presenter` or over its container
    pub fn presented_over(&self, presenter: ScreenHandle) -> Option<ScreenHandle> {
        let presenter = self.parents.get(&presenter).copied().unwrap_or(presenter);
        self.presented.get(&presenter).copied()
    }

    /// Topmost visible screen
    pub fn visible_screen(&self) -> Option<ScreenHandle> {
        let mut current = self.root?;
        while let Some(next) = self.presented.get(&current) {
            current = *next;
        }
        self.top_of(current)
    }

    /// Number of live screens, containers excluded
    pub fn screen_count(&self) -> usize {
        self.nodes.values().filter(|node| matches!(node, Node::Screen(_))).count()
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn insert_screen(&mut self, screen: Box<dyn Screen>) -> ScreenHandle {
        let handle = ScreenHandle::new();
        self.nodes.insert(handle, Node::Screen(screen));
        handle
    }

    fn container_of(&self, handle: ScreenHandle) -> Option<ScreenHandle> {
        match self.nodes.get(&handle)? {
            Node::Container(_) => Some(handle),
            Node::Screen(_) => self.parents.get(&handle).copied(),
        }
    }

    fn top_of(&self, container: ScreenHandle) -> Option<ScreenHandle> {
        match self.nodes.get(&container) {
            Some(Node::Container(stack)) => stack.last().copied(),
            _ => None,
        }
    }

    fn visible_in(&self, handle: ScreenHandle) -> ScreenHandle {
        self.top_of(handle).unwrap_or(handle)
    }

    fn appear(&mut self, handle: ScreenHandle, animated: bool) {
        if let Some(Node::Screen(screen)) = self.nodes.get_mut(&handle) {
            screen.will_appear(animated);
        }
    }

    fn disappear(&mut self, handle: ScreenHandle, animated: bool) {
        if let Some(Node::Screen(screen)) = self.nodes.get_mut(&handle) {
            screen.will_disappear(animated);
        }
    }

    fn stack_push(&mut self, container: ScreenHandle, screen: ScreenHandle, animated: bool) {
        if let Some(top) = self.top_of(container) {
            self.disappear(top, animated);
        }
        if let Some(Node::Container(stack)) = self.nodes.get_mut(&container) {
            stack.push(screen);
        }
        self.parents.insert(screen, container);
        self.appear(screen, animated);
    }

    /// Drop a screen or container along with everything above or inside it
    fn release(&mut self, handle: ScreenHandle) {
        if let Some(presented) = self.presented.remove(&handle) {
            self.presenters.remove(&presented);
            self.release(presented);
        }
        if let Some(presenter) = self.presenters.remove(&handle) {
            self.presented.remove(&presenter);
        }

        match self.nodes.remove(&handle) {
            Some(Node::Container(stack)) => {
                for screen in stack {
                    self.parents.remove(&screen);
                    self.release(screen);
                }
            }
            Some(Node::Screen(_)) => {
                if let Some(container) = self.parents.remove(&handle) {
                    if let Some(Node::Container(stack)) = self.nodes.get_mut(&container) {
                        stack.retain(|screen| *screen != handle);
                    }
                }
            }
            None => {}
        }

        if self.root == Some(handle) {
            self.root = None;
        }
    }

    fn dismissal_target(&self, handle: ScreenHandle) -> Option<ScreenHandle> {
        if self.presenters.contains_key(&handle) {
            return Some(handle);
        }
        let container = self.parents.get(&handle).copied();
        if let Some(container) = container {
            if self.presenters.contains_key(&container) {
                return Some(container);
            }
        }
        let presenter = container.unwrap_or(handle);
        self.presented.get(&presenter).copied()
    }

    fn run_animator(
        &self,
        animator: Option<&std::sync::Arc<dyn Transition>>,
        context: TransitionContext,
    ) {
        if let Some(animator) = animator {
            if context.animated {
                tracing::debug!(
                    phase = ?context.phase,
                    duration_ms = animator.duration(&context).as_millis() as u64,
                    "Running custom animator"
                );
                animator.animate(&context);
            }
        }
    }

    fn finish(&mut self, completer: AnimationCompleter) {
        if self.hold {
            self.pending.push(completer);
        } else {
            completer.complete();
        }
    }
}

impl HostToolkit for HeadlessHost {
    fn instantiate(&mut self, resource_group: &str, identifier: &str) -> Option<ScreenHandle> {
        let screen = self
            .catalog
            .instantiate(resource_group, identifier)
            .map(|screen| self.insert_screen(screen));

        self.calls.push(HostCall::Instantiate {
            group: resource_group.to_string(),
            identifier: identifier.to_string(),
            screen,
        });
        screen
    }

    fn screen_mut(&mut self, screen: ScreenHandle) -> Option<&mut (dyn Screen + 'static)> {
        match self.nodes.get_mut(&screen) {
            Some(Node::Screen(screen)) => Some(screen.as_mut()),
            _ => None,
        }
    }

    fn discard(&mut self, screen: ScreenHandle) {
        self.calls.push(HostCall::Discard { screen });
        self.release(screen);
    }

    fn is_alive(&self, screen: ScreenHandle) -> bool {
        self.nodes.contains_key(&screen)
    }

    fn navigation_container(&self, screen: ScreenHandle) -> Option<ScreenHandle> {
        self.parents.get(&screen).copied()
    }

    fn wrap_in_navigation_container(
        &mut self,
        root: ScreenHandle,
    ) -> Result<ScreenHandle, HostError> {
        if !matches!(self.nodes.get(&root), Some(Node::Screen(_))) {
            return Err(HostError::UnknownScreen(root));
        }
        if self.parents.contains_key(&root) {
            return Err(HostError::AlreadyContained(root));
        }

        let container = ScreenHandle::new();
        self.nodes.insert(container, Node::Container(vec![root]));
        self.parents.insert(root, container);
        self.calls.push(HostCall::Wrap { root, container });
        Ok(container)
    }

    fn push(
        &mut self,
        origin: ScreenHandle,
        screen: ScreenHandle,
        animated: bool,
        completer: AnimationCompleter,
    ) -> Result<(), HostError> {
        if !self.nodes.contains_key(&screen) {
            return Err(HostError::UnknownScreen(screen));
        }
        if self.parents.contains_key(&screen) {
            return Err(HostError::AlreadyContained(screen));
        }
        if !self.nodes.contains_key(&origin) {
            return Err(HostError::UnknownScreen(origin));
        }
        let container = self.container_of(origin).ok_or(HostError::NoNavigationContainer(origin))?;

        self.stack_push(container, screen, animated);
        self.calls.push(HostCall::Push { origin, screen, animated });
        self.finish(completer);
        Ok(())
    }

    fn pop(
        &mut self,
        screen: ScreenHandle,
        animated: bool,
        completer: AnimationCompleter,
    ) -> Result<(), HostError> {
        if !self.nodes.contains_key(&screen) {
            return Err(HostError::UnknownScreen(screen));
        }
        let container = self.container_of(screen).ok_or(HostError::NoNavigationContainer(screen))?;
        let removed = match self.nodes.get_mut(&container) {
            Some(Node::Container(stack)) => match stack.iter().position(|s| *s == screen) {
                Some(index) if index > 0 => stack.split_off(index),
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };
        let popped = *removed.last().ok_or(HostError::NothingToDismiss(screen))?;

        self.disappear(popped, animated);
        for released in removed.into_iter().rev() {
            self.parents.remove(&released);
            self.release(released);
        }
        if let Some(top) = self.top_of(container) {
            self.appear(top, animated);
        }

        self.calls.push(HostCall::Pop { screen, popped, animated });
        self.finish(completer);
        Ok(())
    }

    fn present(
        &mut self,
        origin: ScreenHandle,
        presented: ScreenHandle,
        options: ModalOptions,
        animated: bool,
        delegate: Option<&dyn AnimationDelegate>,
        completer: AnimationCompleter,
    ) -> Result<(), HostError> {
        if !self.nodes.contains_key(&origin) {
            return Err(HostError::UnknownScreen(origin));
        }
        if !self.nodes.contains_key(&presented) {
            return Err(HostError::UnknownScreen(presented));
        }
        let presenter = self.parents.get(&origin).copied().unwrap_or(origin);
        if self.presented.contains_key(&presenter) {
            return Err(HostError::AlreadyPresenting(origin));
        }

        let animator = delegate.and_then(|delegate| delegate.animator_for_show(presented));
        self.presented.insert(presenter, presented);
        self.presenters.insert(presented, presenter);

        let covered = self.visible_in(presenter);
        self.disappear(covered, animated);
        let visible = self.visible_in(presented);
        self.appear(visible, animated);
        self.run_animator(
            animator.as_ref(),
            TransitionContext {
                phase: AnimationPhase::Show,
                presenting: Some(origin),
                presented,
                animated,
            },
        );

        self.calls.push(HostCall::Present {
            origin,
            presented,
            options,
            animated,
            custom: animator.is_some(),
        });
        self.finish(completer);
        Ok(())
    }

    fn dismiss(
        &mut self,
        presented: ScreenHandle,
        animated: bool,
        delegate: Option<&dyn AnimationDelegate>,
        completer: AnimationCompleter,
    ) -> Result<(), HostError> {
        if !self.nodes.contains_key(&presented) {
            return Err(HostError::UnknownScreen(presented));
        }
        let target =
            self.dismissal_target(presented).ok_or(HostError::NothingToDismiss(presented))?;

        let animator = delegate.and_then(|delegate| delegate.animator_for_dismiss(target));
        let presenter = self.presenters.get(&target).copied();

        let visible = self.visible_in(target);
        self.disappear(visible, animated);
        self.run_animator(
            animator.as_ref(),
            TransitionContext {
                phase: AnimationPhase::Dismiss,
                presenting: presenter,
                presented: target,
                animated,
            },
        );
        self.release(target);
        if let Some(presenter) = presenter {
            let uncovered = self.visible_in(presenter);
            self.appear(uncovered, animated);
        }

        self.calls.push(HostCall::Dismiss { presented: target, animated, custom: animator.is_some() });
        self.finish(completer);
        Ok(())
    }
}

impl fmt::Debug for HeadlessHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessHost")
            .field("catalog", &self.catalog)
            .field("screens", &self.screen_count())
            .field("containers", &(self.nodes.len() - self.screen_count()))
            .field("presentations", &self.presented.len())
            .field("calls", &self.calls.len())
            .field("pending_animations", &self.pending.len())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
