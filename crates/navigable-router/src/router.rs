//! Router: screen resolution, display dispatch, and "go back"
//!
//! The router resolves a screen through the host, configures it, displays it
//! with the requested transition kind, and records how it was displayed.
//! `go_back` uses that record to pick the inverse operation, so screens never
//! need to know how they were reached.
//!
//! The router is an ordinary value owned by the application's composition
//! root. It expects to be driven from the UI thread only.

use navigable_core::{
    AnimationCompleter, AnimationDelegate, AnimationHandle, Completion, HostError, HostToolkit,
    Navigable, ResolutionError, Result, ScreenHandle, Segue, TransitionConfiguration,
    TransitionKind,
};

use crate::bridge::TransitionBridge;
use crate::config::RouterConfig;
use crate::registry::{PresentationRecord, Registry};

/// A screen the router just displayed
#[derive(Debug)]
pub struct Presented {
    /// The displayed screen
    pub screen: ScreenHandle,
    /// Navigation container created for modal kinds
    pub container: Option<ScreenHandle>,
    /// Completes when the host finishes the display animation
    pub animation: AnimationHandle,
}

/// Outcome of `go_back`
#[derive(Debug)]
pub enum GoBack {
    /// The recorded screen was popped or dismissed
    Dismissed {
        /// The screen whose record was resolved
        screen: ScreenHandle,
        /// Completes when the host finishes the dismiss animation
        animation: AnimationHandle,
    },
    /// No record for the origin; nothing was done
    NotRegistered,
}

impl GoBack {
    /// Check if a screen was popped or dismissed
    pub fn is_dismissed(&self) -> bool {
        matches!(self, GoBack::Dismissed { .. })
    }
}

/// Navigation router over a host toolkit
pub struct Router<H> {
    host: H,
    registry: Registry,
    config: RouterConfig,
}

impl<H: HostToolkit> Router<H> {
    /// Create a router with the default configuration
    pub fn new(host: H) -> Self {
        Self::with_config(host, RouterConfig::default())
    }

    /// Create a router with a custom configuration
    pub fn with_config(host: H, config: RouterConfig) -> Self {
        Self { host, registry: Registry::new(), config }
    }

    /// Borrow the host
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutably borrow the host
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Take the host back
    pub fn into_host(self) -> H {
        self.host
    }

    /// Current configuration
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Presentation records in display order
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Check if `screen` has a presentation record
    pub fn is_registered(&self, screen: ScreenHandle) -> bool {
        self.registry.contains(screen)
    }

    /// Resolve, configure, display, and register a `T`
    ///
    /// `configure` runs before the host is asked to display the screen. The
    /// record is in place before `completion` can fire.
    pub fn show<T: Navigable>(
        &mut self,
        origin: ScreenHandle,
        params: Option<T::Params>,
        kind: TransitionKind,
        animated: bool,
        completion: Option<Completion>,
    ) -> Result<Presented> {
        if self.config.prune_stale_on_show {
            self.prune_stale();
        }

        let screen = self.resolve::<T>(params)?;
        let label = kind.label();
        let (completer, animation) = AnimationCompleter::pair(completion);

        let container = match self.display(origin, screen, kind, animated, completer) {
            Ok(container) => container,
            Err(err) => {
                self.registry.remove(screen);
                // A discarded container already took the screen with it
                if self.host.is_alive(screen) {
                    self.host.discard(screen);
                }
                tracing::warn!(screen = %screen, kind = label, "Host rejected display: {}", err);
                return Err(err.into());
            }
        };

        tracing::info!(
            screen = %screen,
            identifier = T::identifier(),
            kind = label,
            registered = self.registry.len(),
            "Screen displayed"
        );

        Ok(Presented { screen, container, animation })
    }

    /// Push a `T` onto the origin's stack using the configured animation flag
    pub fn push<T: Navigable>(
        &mut self,
        origin: ScreenHandle,
        params: Option<T::Params>,
    ) -> Result<Presented> {
        let animated = self.config.animated_by_default;
        self.show::<T>(origin, params, TransitionKind::Push, animated, None)
    }

    /// Present a `T` modally using the configured animation flag
    pub fn present<T: Navigable>(
        &mut self,
        origin: ScreenHandle,
        params: Option<T::Params>,
        configuration: TransitionConfiguration,
    ) -> Result<Presented> {
        let animated = self.config.animated_by_default;
        self.show::<T>(origin, params, TransitionKind::Modal(configuration), animated, None)
    }

    /// Undo the display recorded for `origin`
    ///
    /// Matches the record whose screen is `origin`, or whose screen or
    /// container is the navigation container enclosing `origin`. Without a
    /// match nothing is sent to the host. Records of screens released along
    /// with the dismissed one are dropped. If the host rejects the request and
    /// the screen is still alive, its record is kept.
    pub fn go_back(
        &mut self,
        origin: ScreenHandle,
        animated: bool,
        completion: Option<Completion>,
    ) -> Result<GoBack> {
        let record = match self.lookup(origin) {
            Some(record) => record.clone(),
            None => {
                tracing::debug!(screen = %origin, "No presentation record, go_back ignored");
                return Ok(GoBack::NotRegistered);
            }
        };

        let (completer, animation) = AnimationCompleter::pair(completion);
        let result = match &record.kind {
            TransitionKind::Push => self.host.pop(record.screen, animated, completer),
            TransitionKind::DefaultModal | TransitionKind::Modal(_) => {
                let bridge = TransitionBridge::new(&self.registry);
                let delegate: Option<&dyn AnimationDelegate> =
                    if record.transition().is_some() { Some(&bridge) } else { None };
                self.host.dismiss(record.dismiss_target(), animated, delegate, completer)
            }
        };

        match result {
            Ok(()) => {
                self.registry.remove(record.screen);
                // Screens stacked above or presented over the dismissed one go with it
                let host = &self.host;
                let released = self.registry.retain(|other| host.is_alive(other.screen));
                tracing::info!(
                    screen = %record.screen,
                    kind = record.kind.label(),
                    released,
                    registered = self.registry.len(),
                    "Screen dismissed"
                );
                Ok(GoBack::Dismissed { screen: record.screen, animation })
            }
            Err(err) => {
                if !self.host.is_alive(record.screen) {
                    self.registry.remove(record.screen);
                }
                tracing::warn!(screen = %record.screen, "Host rejected dismissal: {}", err);
                Err(err.into())
            }
        }
    }

    /// `go_back` using the configured animation flag
    pub fn go_back_default(&mut self, origin: ScreenHandle) -> Result<GoBack> {
        let animated = self.config.animated_by_default;
        self.go_back(origin, animated, None)
    }

    /// Configure and register the destination of a host-performed segue
    ///
    /// The host already displayed the destination on the source's stack, so it
    /// is recorded as a push. Returns `false` if the destination is not a `T`.
    pub fn adopt_segue<T: Navigable>(&mut self, segue: &Segue, params: Option<T::Params>) -> bool {
        let configured = match self
            .host
            .screen_mut(segue.destination)
            .and_then(|screen| screen.downcast_mut::<T>())
        {
            Some(destination) => {
                destination.configure(params);
                true
            }
            None => false,
        };

        if !configured {
            tracing::debug!(
                screen = %segue.destination,
                expected = T::identifier(),
                "Segue destination not adopted"
            );
            return false;
        }

        self.registry.register(PresentationRecord::pushed(segue.destination));
        tracing::info!(
            screen = %segue.destination,
            identifier = T::identifier(),
            segue = segue.identifier.as_deref().unwrap_or(""),
            "Segue destination adopted"
        );
        true
    }

    /// Drop the record for a screen destroyed outside `go_back`
    pub fn forget(&mut self, screen: ScreenHandle) -> bool {
        let removed = self.registry.remove(screen).is_some();
        if removed {
            tracing::debug!(screen = %screen, "Presentation record forgotten");
        }
        removed
    }

    /// Drop records whose screens the host no longer keeps alive
    pub fn prune_stale(&mut self) -> usize {
        let host = &self.host;
        let pruned = self.registry.retain(|record| host.is_alive(record.screen));
        if pruned > 0 {
            tracing::warn!(pruned, "Pruned records of released screens");
        }
        pruned
    }

    fn lookup(&self, origin: ScreenHandle) -> Option<&PresentationRecord> {
        self.registry.find(origin).or_else(|| {
            let container = self.host.navigation_container(origin)?;
            self.registry.find(container)
        })
    }

    fn resolve<T: Navigable>(&mut self, params: Option<T::Params>) -> Result<ScreenHandle> {
        let identifier = T::identifier();
        let group = T::resource_group().unwrap_or(self.config.default_resource_group.as_str());

        let screen = match self.host.instantiate(group, identifier) {
            Some(screen) => screen,
            None => {
                tracing::warn!(group, identifier, "Screen not found in resource group");
                return Err(ResolutionError::NotFound {
                    group: group.to_string(),
                    identifier: identifier.to_string(),
                }
                .into());
            }
        };

        let configured = match self.host.screen_mut(screen).and_then(|s| s.downcast_mut::<T>()) {
            Some(target) => {
                target.configure(params);
                true
            }
            None => false,
        };

        if !configured {
            self.host.discard(screen);
            tracing::warn!(group, identifier, "Resolved screen has the wrong type");
            return Err(ResolutionError::ContractMismatch {
                identifier: identifier.to_string(),
                expected: std::any::type_name::<T>(),
            }
            .into());
        }

        tracing::debug!(screen = %screen, identifier, "Screen configured");
        Ok(screen)
    }

    fn display(
        &mut self,
        origin: ScreenHandle,
        screen: ScreenHandle,
        kind: TransitionKind,
        animated: bool,
        completer: AnimationCompleter,
    ) -> std::result::Result<Option<ScreenHandle>, HostError> {
        if let TransitionKind::Push = kind {
            self.registry.register(PresentationRecord::pushed(screen));
            self.host.push(origin, screen, animated, completer)?;
            return Ok(None);
        }

        let options = match &kind {
            TransitionKind::Modal(configuration) => configuration.options(),
            _ => self.config.default_transition,
        };
        let custom = kind.transition().is_some();
        let container = self.host.wrap_in_navigation_container(screen)?;
        self.registry.register(PresentationRecord::presented(screen, container, kind));

        let bridge = TransitionBridge::new(&self.registry);
        let delegate: Option<&dyn AnimationDelegate> = if custom { Some(&bridge) } else { None };
        if let Err(err) = self.host.present(origin, container, options, animated, delegate, completer)
        {
            self.host.discard(container);
            return Err(err);
        }

        tracing::debug!(screen = %screen, container = %container, custom, "Presented modally");
        Ok(Some(container))
    }
}

// =============================================================================
// Tests
// =============================================================================
