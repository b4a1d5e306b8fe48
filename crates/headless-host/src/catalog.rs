//! Screen catalog
//!
//! The headless counterpart of storyboard resources: factories keyed by
//! resource group and identifier.

use std::collections::HashMap;
use std::fmt;

use navigable_core::{Navigable, Screen};

type Factory = Box<dyn Fn() -> Box<dyn Screen>>;

/// Screen factories grouped by resource group
#[derive(Default)]
pub struct ScreenCatalog {
    groups: HashMap<String, HashMap<String, Factory>>,
}

impl ScreenCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under an explicit group and identifier
    pub fn register<S, F>(
        &mut self,
        group: impl Into<String>,
        identifier: impl Into<String>,
        factory: F,
    ) -> &mut Self
    where
        S: Screen,
        F: Fn() -> S + 'static,
    {
        self.groups
            .entry(group.into())
            .or_default()
            .insert(identifier.into(), Box::new(move || Box::new(factory()) as Box<dyn Screen>));
        self
    }

    /// Register a factory where the screen declares it will be looked up
    ///
    /// Screens without a declared resource group land in `default_group`.
    pub fn register_navigable<T, F>(&mut self, default_group: &str, factory: F) -> &mut Self
    where
        T: Navigable,
        F: Fn() -> T + 'static,
    {
        let group = T::resource_group().unwrap_or(default_group);
        self.register(group, T::identifier(), factory)
    }

    /// Build a new screen, `None` if nothing is registered
    pub fn instantiate(&self, group: &str, identifier: &str) -> Option<Box<dyn Screen>> {
        let factory = self.groups.get(group)?.get(identifier)?;
        Some(factory())
    }

    /// Check if a factory is registered
    pub fn contains(&self, group: &str, identifier: &str) -> bool {
        self.groups.get(group).is_some_and(|screens| screens.contains_key(identifier))
    }

    /// Number of registered factories
    pub fn len(&self) -> usize {
        self.groups.values().map(HashMap::len).sum()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for ScreenCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut groups: Vec<_> = self.groups.iter().map(|(g, s)| (g.as_str(), s.len())).collect();
        groups.sort_unstable();
        f.debug_struct("ScreenCatalog").field("groups", &groups).finish()
    }
}
