//! Host toolkit port
//!
//! The router never manipulates UI itself. It talks to the platform's
//! navigation primitives through [`HostToolkit`]: resource instantiation,
//! navigation stacks, and modal presentation. During modal presentation and
//! dismissal the host asks an [`AnimationDelegate`] for a custom animator.

use std::sync::Arc;

use crate::animation::AnimationCompleter;
use crate::configuration::ModalOptions;
use crate::error::HostError;
use crate::screen::{Screen, ScreenHandle};
use crate::transition::Transition;

/// Supplies custom animators to the host during modal transitions
pub trait AnimationDelegate {
    /// Animator for presenting `presented`, if a custom one is attached
    fn animator_for_show(&self, presented: ScreenHandle) -> Option<Arc<dyn Transition>>;

    /// Animator for dismissing `dismissed`, if a custom one is attached
    fn animator_for_dismiss(&self, dismissed: ScreenHandle) -> Option<Arc<dyn Transition>>;
}

/// Navigation primitives provided by the platform UI toolkit
///
/// All calls happen on the UI thread. Display and dismiss calls return as soon
/// as the request is issued and finish the `completer` when the animation ends.
pub trait HostToolkit {
    /// Create a screen from a resource group, `None` if nothing matches
    fn instantiate(&mut self, resource_group: &str, identifier: &str) -> Option<ScreenHandle>;

    /// Borrow a live screen
    fn screen_mut(&mut self, screen: ScreenHandle) -> Option<&mut (dyn Screen + 'static)>;

    /// Release a screen that will never be displayed
    fn discard(&mut self, screen: ScreenHandle);

    /// Check if the handle still refers to a live screen or container
    fn is_alive(&self, screen: ScreenHandle) -> bool;

    /// Navigation container the screen currently belongs to
    fn navigation_container(&self, screen: ScreenHandle) -> Option<ScreenHandle>;

    /// Create a navigation container with `root` as its only screen
    fn wrap_in_navigation_container(&mut self, root: ScreenHandle)
        -> Result<ScreenHandle, HostError>;

    /// Push `screen` onto the stack containing `origin`
    fn push(
        &mut self,
        origin: ScreenHandle,
        screen: ScreenHandle,
        animated: bool,
        completer: AnimationCompleter,
    ) -> Result<(), HostError>;

    /// Pop back to the screen below `screen`
    ///
    /// `screen` and everything pushed above it leave the stack. Fails with
    /// `NothingToDismiss` if `screen` is the root of its stack.
    fn pop(
        &mut self,
        screen: ScreenHandle,
        animated: bool,
        completer: AnimationCompleter,
    ) -> Result<(), HostError>;

    /// Present `presented` modally over `origin`
    fn present(
        &mut self,
        origin: ScreenHandle,
        presented: ScreenHandle,
        options: ModalOptions,
        animated: bool,
        delegate: Option<&dyn AnimationDelegate>,
        completer: AnimationCompleter,
    ) -> Result<(), HostError>;

    /// Dismiss the modal presentation `presented` belongs to
    fn dismiss(
        &mut self,
        presented: ScreenHandle,
        animated: bool,
        delegate: Option<&dyn AnimationDelegate>,
        completer: AnimationCompleter,
    ) -> Result<(), HostError>;
}
