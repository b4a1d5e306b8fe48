//! Core contracts for the Navigable router
//!
//! This crate holds the leaf types shared by the router and by every host
//! toolkit port:
//!
//! - [`configuration`] - Transition kinds and modal presentation options
//! - [`transition`] - The custom animator contract
//! - [`screen`] - Screen handles and the `Navigable` screen contract
//! - [`host`] - The host toolkit port and its animation delegate
//! - [`animation`] - Completion handles for display and dismiss requests
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```rust
//! use navigable_core::{ModalPresentationStyle, ModalTransitionStyle, TransitionConfiguration};
//!
//! let config = TransitionConfiguration::default();
//! assert_eq!(config.transition_style, ModalTransitionStyle::CoverVertical);
//! assert_eq!(config.presentation_style, ModalPresentationStyle::FullScreen);
//! assert!(!config.has_custom_transition());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod animation;
pub mod configuration;
pub mod error;
pub mod host;
pub mod screen;
pub mod transition;

pub use animation::{AnimationCompleter, AnimationHandle, Completion};
pub use configuration::{
    ModalOptions, ModalPresentationStyle, ModalTransitionStyle, TransitionConfiguration,
    TransitionKind,
};
pub use error::{AnimationError, HostError, NavigationError, ResolutionError, Result};
pub use host::{AnimationDelegate, HostToolkit};
pub use screen::{short_type_name, AsAny, Navigable, Screen, ScreenHandle, Segue};
pub use transition::{AnimationPhase, Transition, TransitionContext, DEFAULT_TRANSITION_DURATION};
