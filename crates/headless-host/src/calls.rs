//! Log of navigation requests received by the headless host

use navigable_core::{ModalOptions, ScreenHandle};

/// A request the host received, in arrival order
///
/// Read-only queries (`is_alive`, `navigation_container`, `screen_mut`) are
/// not logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    /// Screen creation from the catalog
    Instantiate {
        /// Resource group searched
        group: String,
        /// Identifier requested
        identifier: String,
        /// Created screen, `None` if nothing matched
        screen: Option<ScreenHandle>,
    },
    /// Screen released without being displayed
    Discard {
        /// Released screen or container
        screen: ScreenHandle,
    },
    /// Navigation container created
    Wrap {
        /// Root screen of the container
        root: ScreenHandle,
        /// New container
        container: ScreenHandle,
    },
    /// Stack push
    Push {
        /// Screen on the target stack
        origin: ScreenHandle,
        /// Pushed screen
        screen: ScreenHandle,
        /// Animation flag
        animated: bool,
    },
    /// Stack pop
    Pop {
        /// Lowest screen removed from the stack
        screen: ScreenHandle,
        /// Screen that was on top
        popped: ScreenHandle,
        /// Animation flag
        animated: bool,
    },
    /// Modal presentation
    Present {
        /// Presenting screen
        origin: ScreenHandle,
        /// Presented container
        presented: ScreenHandle,
        /// Style pair
        options: ModalOptions,
        /// Animation flag
        animated: bool,
        /// Whether a custom animator drove the transition
        custom: bool,
    },
    /// Modal dismissal
    Dismiss {
        /// Dismissed container
        presented: ScreenHandle,
        /// Animation flag
        animated: bool,
        /// Whether a custom animator drove the transition
        custom: bool,
    },
}

impl HostCall {
    /// Short name of the request
    pub fn name(&self) -> &'static str {
        match self {
            HostCall::Instantiate { .. } => "instantiate",
            HostCall::Discard { .. } => "discard",
            HostCall::Wrap { .. } => "wrap",
            HostCall::Push { .. } => "push",
            HostCall::Pop { .. } => "pop",
            HostCall::Present { .. } => "present",
            HostCall::Dismiss { .. } => "dismiss",
        }
    }

    /// Check if the request put a screen on screen
    pub fn is_display(&self) -> bool {
        matches!(self, HostCall::Push { .. } | HostCall::Present { .. })
    }

    /// Check if the request took a screen off screen
    pub fn is_removal(&self) -> bool {
        matches!(self, HostCall::Pop { .. } | HostCall::Dismiss { .. })
    }
}
