//! Error types for navigation

use thiserror::Error;

use crate::screen::ScreenHandle;

/// The requested screen could not be produced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// Nothing registered under the identifier in the resource group
    #[error("No screen '{identifier}' in resource group '{group}'")]
    NotFound {
        /// Resource group searched
        group: String,
        /// Identifier requested
        identifier: String,
    },

    /// The host produced a screen of a different type
    #[error("Screen '{identifier}' is not a {expected}")]
    ContractMismatch {
        /// Identifier requested
        identifier: String,
        /// Type the caller expected
        expected: &'static str,
    },
}

/// The host toolkit refused an operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// Handle does not refer to a live screen
    #[error("Unknown screen: {0}")]
    UnknownScreen(ScreenHandle),

    /// Stack operation on a screen outside any navigation container
    #[error("Screen {0} is not inside a navigation container")]
    NoNavigationContainer(ScreenHandle),

    /// Screen is already inside a navigation container
    #[error("Screen {0} already belongs to a navigation container")]
    AlreadyContained(ScreenHandle),

    /// Presenter already has a modal on top of it
    #[error("Screen {0} is already presenting")]
    AlreadyPresenting(ScreenHandle),

    /// Nothing to pop or dismiss for this screen
    #[error("Nothing to dismiss for screen {0}")]
    NothingToDismiss(ScreenHandle),
}

/// Navigation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Screen resolution failed
    #[error("Resolution error: {0}")]
    Resolution(#[from] ResolutionError),

    /// Host toolkit error
    #[error("Host error: {0}")]
    Host(#[from] HostError),
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavigationError>;

/// An animation never reported completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnimationError {
    /// The host dropped the completer without completing it
    #[error("Animation abandoned before completion")]
    Abandoned,
}
