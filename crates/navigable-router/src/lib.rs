//! Screen router for Navigable
//!
//! Tracks which screen was displayed with which transition kind so that
//! "go back" can be resolved generically.
//!
//! # Modules
//!
//! - [`router`] - Resolution, display dispatch, and `go_back`
//! - [`registry`] - Ordered presentation records
//! - [`bridge`] - Animation delegate handed to the host for custom animators
//! - [`config`] - Router configuration
//! - [`logging`] - Subscriber setup for the router's `tracing` events

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bridge;
pub mod config;
pub mod logging;
pub mod registry;
pub mod router;

pub use bridge::TransitionBridge;
pub use config::{ConfigError, RouterConfig};
pub use logging::init_logging;
pub use registry::{PresentationRecord, Registry};
pub use router::{GoBack, Presented, Router};
