//! Screens and the `Navigable` contract
//!
//! The host owns screen instances. Everything else refers to them through a
//! [`ScreenHandle`], which never keeps a screen alive; ask the host whether a
//! handle is still live.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use uuid::Uuid;

// =============================================================================
// Screen Handle
// =============================================================================

/// Non-owning identity of a screen or navigation container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScreenHandle(Uuid);

impl ScreenHandle {
    /// Issue a fresh handle
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying id
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ScreenHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScreenHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

// =============================================================================
// Screen
// =============================================================================

/// Downcasting support for screens
pub trait AsAny: Any {
    /// Borrow as `Any`
    fn as_any(&self) -> &dyn Any;

    /// Mutably borrow as `Any`
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A displayable unit of UI owned by the host
///
/// Lifecycle hooks are called by the host as the screen becomes visible or
/// hidden.
pub trait Screen: AsAny {
    /// Screen is about to become visible
    fn will_appear(&mut self, _animated: bool) {}

    /// Screen is about to be hidden
    fn will_disappear(&mut self, _animated: bool) {}
}

impl dyn Screen {
    /// Check if the concrete screen is a `T`
    pub fn is<T: Screen>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Borrow the concrete screen as a `T`
    pub fn downcast_ref<T: Screen>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Mutably borrow the concrete screen as a `T`
    pub fn downcast_mut<T: Screen>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

/// Per-screen navigation contract
///
/// # Example
///
/// ```rust
/// use navigable_core::{Navigable, Screen};
///
/// #[derive(Default)]
/// struct ProfileScreen {
///     handle: String,
/// }
///
/// impl Screen for ProfileScreen {}
///
/// impl Navigable for ProfileScreen {
///     type Params = String;
///
///     fn configure(&mut self, params: Option<String>) {
///         self.handle = params.unwrap_or_default();
///     }
/// }
///
/// assert_eq!(ProfileScreen::identifier(), "ProfileScreen");
/// assert_eq!(ProfileScreen::resource_group(), None);
/// ```
pub trait Navigable: Screen + Sized {
    /// Parameters accepted by `configure`
    type Params;

    /// Identifier used to resolve the screen inside its resource group
    fn identifier() -> &'static str {
        short_type_name::<Self>()
    }

    /// Resource group holding the screen, `None` for the router's default
    fn resource_group() -> Option<&'static str> {
        None
    }

    /// Prepare the screen before it is displayed
    fn configure(&mut self, params: Option<Self::Params>);
}

/// Last path segment of a type's name, without generic arguments
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

// =============================================================================
// Segue
// =============================================================================

/// A host-driven transition whose destination the host already instantiated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segue {
    /// Segue identifier from the resource group, if any
    pub identifier: Option<String>,
    /// Screen the segue started from
    pub source: ScreenHandle,
    /// Screen the segue leads to
    pub destination: ScreenHandle,
}

impl Segue {
    /// Create an unnamed segue
    pub fn new(source: ScreenHandle, destination: ScreenHandle) -> Self {
        Self { identifier: None, source, destination }
    }
}

// =============================================================================
// Tests
// =============================================================================
