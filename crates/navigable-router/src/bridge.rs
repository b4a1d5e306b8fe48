//! Animation delegate bridge
//!
//! Handed to the host during modal presentation and dismissal. For each host
//! callback it looks up the presentation record, fires the animator's
//! lifecycle hook once, and returns the animator. It performs no animation.

use std::sync::Arc;

use navigable_core::{AnimationDelegate, ScreenHandle, Transition};

use crate::registry::Registry;

/// Routes host animation callbacks to the registered custom animators
#[derive(Debug, Clone, Copy)]
pub struct TransitionBridge<'a> {
    registry: &'a Registry,
}

impl<'a> TransitionBridge<'a> {
    /// Create a bridge over the registry
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    fn animator(&self, handle: ScreenHandle) -> Option<Arc<dyn Transition>> {
        self.registry.find(handle)?.transition().cloned()
    }
}

impl AnimationDelegate for TransitionBridge<'_> {
    fn animator_for_show(&self, presented: ScreenHandle) -> Option<Arc<dyn Transition>> {
        let animator = self.animator(presented)?;
        tracing::debug!(screen = %presented, "custom transition will show");
        animator.will_show();
        Some(animator)
    }

    fn animator_for_dismiss(&self, dismissed: ScreenHandle) -> Option<Arc<dyn Transition>> {
        let animator = self.animator(dismissed)?;
        tracing::debug!(screen = %dismissed, "custom transition will dismiss");
        animator.will_dismiss();
        Some(animator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PresentationRecord;
    use navigable_core::{TransitionConfiguration, TransitionContext, TransitionKind};
    use parking_lot::Mutex;

    #[derive(Default)]
    struct CountingAnimator {
        shows: Mutex<u32>,
        dismissals: Mutex<u32>,
    }

    impl Transition for CountingAnimator {
        fn will_show(&self) {
            *self.shows.lock() += 1;
        }

        fn will_dismiss(&self) {
            *self.dismissals.lock() += 1;
        }

        fn animate(&self, _context: &TransitionContext) {}
    }

    fn registry_with(animator: Arc<CountingAnimator>) -> (Registry, ScreenHandle, ScreenHandle) {
        let mut registry = Registry::new();
        let screen = ScreenHandle::new();
        let container = ScreenHandle::new();
        let config = TransitionConfiguration::default().with_transition(animator);
        registry.register(PresentationRecord::presented(
            screen,
            container,
            TransitionKind::Modal(config),
        ));
        (registry, screen, container)
    }

    #[test]
    fn test_show_fires_hook_once_and_returns_animator() {
        let animator = Arc::new(CountingAnimator::default());
        let (registry, _, container) = registry_with(Arc::clone(&animator));
        let bridge = TransitionBridge::new(&registry);

        assert!(bridge.animator_for_show(container).is_some());
        assert_eq!(*animator.shows.lock(), 1);
        assert_eq!(*animator.dismissals.lock(), 0);
    }

    #[test]
    fn test_dismiss_matches_screen_handle_too() {
        let animator = Arc::new(CountingAnimator::default());
        let (registry, screen, _) = registry_with(Arc::clone(&animator));
        let bridge = TransitionBridge::new(&registry);

        assert!(bridge.animator_for_dismiss(screen).is_some());
        assert_eq!(*animator.dismissals.lock(), 1);
    }

    #[test]
    fn test_no_animator_for_unknown_or_plain_records() {
        let mut registry = Registry::new();
        let plain = ScreenHandle::new();
        let container = ScreenHandle::new();
        registry.register(PresentationRecord::presented(
            plain,
            container,
            TransitionKind::DefaultModal,
        ));
        let bridge = TransitionBridge::new(&registry);

        assert!(bridge.animator_for_show(container).is_none());
        assert!(bridge.animator_for_show(ScreenHandle::new()).is_none());
        assert!(bridge.animator_for_dismiss(plain).is_none());
    }
}
