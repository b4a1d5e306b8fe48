//! Headless host toolkit for Navigable
//!
//! An in-memory implementation of [`navigable_core::HostToolkit`] with
//! navigation stacks, modal presentation, lifecycle hooks, and custom
//! animator support. It logs every request it receives, which makes it the
//! host of choice for tests and for running routers outside a UI.
//!
//! # Modules
//!
//! - [`catalog`] - Screen factories keyed by resource group and identifier
//! - [`host`] - The host itself
//! - [`calls`] - Request log entries

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod calls;
pub mod catalog;
pub mod host;

pub use calls::HostCall;
pub use catalog::ScreenCatalog;
pub use host::HeadlessHost;
