//! Presentation registry
//!
//! Ordered collection of the screens the router displayed, with the transition
//! kind used for each. Lookups go by handle identity; order only gives a stable
//! iteration basis.

use std::sync::Arc;

use navigable_core::{ScreenHandle, Transition, TransitionKind};

/// One displayed screen and how it was displayed
#[derive(Debug, Clone)]
pub struct PresentationRecord {
    /// The displayed screen
    pub screen: ScreenHandle,
    /// Navigation container wrapping the screen for modal kinds
    pub container: Option<ScreenHandle>,
    /// How the screen was displayed
    pub kind: TransitionKind,
}

impl PresentationRecord {
    /// Record for a pushed screen
    pub fn pushed(screen: ScreenHandle) -> Self {
        Self { screen, container: None, kind: TransitionKind::Push }
    }

    /// Record for a screen presented inside `container`
    pub fn presented(screen: ScreenHandle, container: ScreenHandle, kind: TransitionKind) -> Self {
        Self { screen, container: Some(container), kind }
    }

    /// Custom animator attached to the presentation
    pub fn transition(&self) -> Option<&Arc<dyn Transition>> {
        self.kind.transition()
    }

    /// Check if `handle` is the screen or its container
    pub fn matches(&self, handle: ScreenHandle) -> bool {
        self.screen == handle || self.container == Some(handle)
    }

    /// Handle the host should dismiss for modal kinds
    pub fn dismiss_target(&self) -> ScreenHandle {
        self.container.unwrap_or(self.screen)
    }
}

/// Ordered registry of presentation records
#[derive(Debug, Default)]
pub struct Registry {
    records: Vec<PresentationRecord>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, replacing any existing record for the same screen
    ///
    /// Returns the replaced record.
    pub fn register(&mut self, record: PresentationRecord) -> Option<PresentationRecord> {
        let replaced = self.remove(record.screen);
        self.records.push(record);
        replaced
    }

    /// Index of the record whose screen or container is `handle`
    pub fn position_of(&self, handle: ScreenHandle) -> Option<usize> {
        self.records.iter().position(|record| record.matches(handle))
    }

    /// Record whose screen or container is `handle`
    pub fn find(&self, handle: ScreenHandle) -> Option<&PresentationRecord> {
        self.records.iter().find(|record| record.matches(handle))
    }

    /// Remove the record for `screen`
    pub fn remove(&mut self, screen: ScreenHandle) -> Option<PresentationRecord> {
        let index = self.records.iter().position(|record| record.screen == screen)?;
        Some(self.records.remove(index))
    }

    /// Keep only records matching the predicate, returning how many were dropped
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&PresentationRecord) -> bool,
    {
        let before = self.records.len();
        self.records.retain(keep);
        before - self.records.len()
    }

    /// Check if `screen` has a record
    pub fn contains(&self, screen: ScreenHandle) -> bool {
        self.records.iter().any(|record| record.screen == screen)
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &PresentationRecord> {
        self.records.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_find() {
        let mut registry = Registry::new();
        let pushed = ScreenHandle::new();
        let modal = ScreenHandle::new();
        let container = ScreenHandle::new();

        registry.register(PresentationRecord::pushed(pushed));
        registry.register(PresentationRecord::presented(
            modal,
            container,
            TransitionKind::DefaultModal,
        ));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.position_of(pushed), Some(0));
        assert_eq!(registry.position_of(container), Some(1));
        assert_eq!(registry.find(container).map(|r| r.screen), Some(modal));
        assert!(registry.find(ScreenHandle::new()).is_none());
    }

    #[test]
    fn test_register_replaces_same_screen() {
        let mut registry = Registry::new();
        let screen = ScreenHandle::new();

        assert!(registry.register(PresentationRecord::pushed(screen)).is_none());
        let replaced = registry.register(PresentationRecord::presented(
            screen,
            ScreenHandle::new(),
            TransitionKind::DefaultModal,
        ));

        assert!(matches!(replaced.map(|r| r.kind), Some(TransitionKind::Push)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut registry = Registry::new();
        let handles: Vec<_> = (0..4).map(|_| ScreenHandle::new()).collect();
        for handle in &handles {
            registry.register(PresentationRecord::pushed(*handle));
        }

        registry.remove(handles[1]);
        let remaining: Vec<_> = registry.iter().map(|r| r.screen).collect();
        assert_eq!(remaining, vec![handles[0], handles[2], handles[3]]);
    }

    #[test]
    fn test_remove_is_by_screen_only() {
        let mut registry = Registry::new();
        let screen = ScreenHandle::new();
        let container = ScreenHandle::new();
        registry.register(PresentationRecord::presented(
            screen,
            container,
            TransitionKind::DefaultModal,
        ));

        assert!(registry.remove(container).is_none());
        assert!(registry.remove(screen).is_some());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_retain_counts_dropped() {
        let mut registry = Registry::new();
        let keep = ScreenHandle::new();
        registry.register(PresentationRecord::pushed(keep));
        registry.register(PresentationRecord::pushed(ScreenHandle::new()));
        registry.register(PresentationRecord::pushed(ScreenHandle::new()));

        assert_eq!(registry.retain(|r| r.screen == keep), 2);
        assert!(registry.contains(keep));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_dismiss_target() {
        let screen = ScreenHandle::new();
        let container = ScreenHandle::new();
        assert_eq!(PresentationRecord::pushed(screen).dismiss_target(), screen);
        assert_eq!(
            PresentationRecord::presented(screen, container, TransitionKind::DefaultModal)
                .dismiss_target(),
            container
        );
    }
}
