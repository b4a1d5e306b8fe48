//! Navigable: generic forward and back navigation between screens
//!
//! Screens are resolved by type from a host toolkit, configured with typed
//! parameters, and displayed with a push or a modal presentation. The router
//! remembers how each screen was displayed so that `go_back` can undo it
//! without the screen knowing how it was reached.
//!
//! - [`contracts`] - Screen, transition, and host toolkit contracts
//! - [`router`] - The router, its registry, and configuration
//! - [`headless`] - An in-memory host toolkit
//!
//! # Example
//!
//! ```rust
//! use navigable::prelude::*;
//!
//! #[derive(Default)]
//! struct Inbox;
//! impl Screen for Inbox {}
//! impl Navigable for Inbox {
//!     type Params = ();
//!     fn configure(&mut self, _params: Option<()>) {}
//! }
//!
//! #[derive(Default)]
//! struct Thread {
//!     id: u64,
//! }
//! impl Screen for Thread {}
//! impl Navigable for Thread {
//!     type Params = u64;
//!     fn configure(&mut self, params: Option<u64>) {
//!         self.id = params.unwrap_or_default();
//!     }
//! }
//!
//! let mut catalog = ScreenCatalog::new();
//! catalog
//!     .register_navigable("Main", Inbox::default)
//!     .register_navigable("Main", Thread::default);
//! let mut host = HeadlessHost::new(catalog);
//! let inbox = host.install_root("Main", "Inbox").unwrap();
//!
//! let mut router = Router::new(host);
//! let thread = router.push::<Thread>(inbox, Some(42)).unwrap();
//! assert_eq!(router.host().screen::<Thread>(thread.screen).unwrap().id, 42);
//!
//! assert!(router.go_back_default(thread.screen).unwrap().is_dismissed());
//! assert!(router.registry().is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use headless_host as headless;
pub use navigable_core as contracts;
pub use navigable_router as router;

/// Commonly used items
pub mod prelude {
    pub use headless_host::{HeadlessHost, HostCall, ScreenCatalog};
    pub use navigable_core::{
        AnimationDelegate, AnimationHandle, AnimationPhase, HostToolkit, ModalOptions,
        ModalPresentationStyle, ModalTransitionStyle, Navigable, NavigationError, Screen,
        ScreenHandle, Segue, Transition, TransitionConfiguration, TransitionContext,
        TransitionKind,
    };
    pub use navigable_router::{init_logging, GoBack, Presented, Router, RouterConfig};
}
