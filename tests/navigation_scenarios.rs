//! Navigation Scenario Tests
//!
//! End-to-end flows through the router and the headless host.

use std::sync::Arc;

use navigable::prelude::*;
use parking_lot::Mutex;

// =============================================================================
// Screens
// =============================================================================

#[derive(Default)]
struct Home;

impl Screen for Home {}

impl Navigable for Home {
    type Params = ();

    fn configure(&mut self, _params: Option<()>) {}
}

#[derive(Debug, Clone, PartialEq)]
struct ComposeDraft {
    text: String,
}

#[derive(Default)]
struct Compose {
    draft: Option<ComposeDraft>,
    draft_at_appear: Option<ComposeDraft>,
    appearances: usize,
}

impl Screen for Compose {
    fn will_appear(&mut self, _animated: bool) {
        self.appearances += 1;
        self.draft_at_appear = self.draft.clone();
    }
}

impl Navigable for Compose {
    type Params = ComposeDraft;

    fn configure(&mut self, params: Option<ComposeDraft>) {
        self.draft = params;
    }
}

#[derive(Default)]
struct Lightbox;

impl Screen for Lightbox {}

impl Navigable for Lightbox {
    type Params = ();

    fn resource_group() -> Option<&'static str> {
        Some("Media")
    }

    fn configure(&mut self, _params: Option<()>) {}
}

/// Animator that records hook and animation order
#[derive(Default)]
struct RecordingAnimator {
    events: Mutex<Vec<&'static str>>,
}

impl Transition for RecordingAnimator {
    fn will_show(&self) {
        self.events.lock().push("will_show");
    }

    fn will_dismiss(&self) {
        self.events.lock().push("will_dismiss");
    }

    fn animate(&self, context: &TransitionContext) {
        let event = match context.phase {
            AnimationPhase::Show => "animate_show",
            AnimationPhase::Dismiss => "animate_dismiss",
        };
        self.events.lock().push(event);
    }
}

fn router() -> (Router<HeadlessHost>, ScreenHandle) {
    let mut catalog = ScreenCatalog::new();
    catalog
        .register_navigable("Main", Home::default)
        .register_navigable("Main", Compose::default)
        .register("Main", "Lightbox", Lightbox::default);

    let mut host = HeadlessHost::new(catalog);
    let home = host.install_root("Main", "Home").unwrap();
    host.clear_calls();
    (Router::new(host), home)
}

fn draft(text: &str) -> Option<ComposeDraft> {
    Some(ComposeDraft { text: text.to_string() })
}

// =============================================================================
// Scenarios
// =============================================================================

/// Push with parameters, then go back with one pop
#[test]
fn test_push_then_go_back() {
    let (mut router, home) = router();

    let shown = router
        .show::<Compose>(home, draft("hi"), TransitionKind::Push, true, None)
        .unwrap();

    let compose = router.host().screen::<Compose>(shown.screen).unwrap();
    assert_eq!(compose.draft, draft("hi"));
    assert_eq!(compose.draft_at_appear, draft("hi"));
    assert_eq!(router.host().visible_screen(), Some(shown.screen));

    let outcome = router.go_back(shown.screen, true, None).unwrap();

    assert!(outcome.is_dismissed());
    assert_eq!(router.host().calls_named("pop"), 1);
    assert!(router.registry().is_empty());
    assert_eq!(router.host().visible_screen(), Some(home));
}

/// Custom animator hooks run before each animation
#[test]
fn test_custom_animator_order() {
    let (mut router, home) = router();
    let animator = Arc::new(RecordingAnimator::default());
    let configuration =
        TransitionConfiguration::new(ModalTransitionStyle::CrossDissolve, ModalPresentationStyle::Custom)
            .with_transition(animator.clone());

    let shown = router
        .show::<Compose>(home, None, TransitionKind::Modal(configuration), true, None)
        .unwrap();
    assert!(shown.container.is_some());
    router.go_back(shown.screen, true, None).unwrap();

    assert_eq!(
        *animator.events.lock(),
        vec!["will_show", "animate_show", "will_dismiss", "animate_dismiss"]
    );
    let custom_calls = router
        .host()
        .calls()
        .iter()
        .filter(|call| matches!(call, HostCall::Present { custom: true, .. } | HostCall::Dismiss { custom: true, .. }))
        .count();
    assert_eq!(custom_calls, 2);
}

/// Modal without a custom animator never involves the bridge
#[test]
fn test_plain_modal_has_no_custom_animation() {
    let (mut router, home) = router();

    let shown = router
        .present::<Compose>(home, None, TransitionConfiguration::default())
        .unwrap();
    router.go_back_default(shown.screen).unwrap();

    assert!(router
        .host()
        .calls()
        .iter()
        .all(|call| !matches!(call, HostCall::Present { custom: true, .. } | HostCall::Dismiss { custom: true, .. })));
}

/// Going back from an unregistered screen sends nothing to the host
#[test]
fn test_go_back_unregistered() {
    let (mut router, home) = router();

    let outcome = router.go_back(home, true, None).unwrap();

    assert!(!outcome.is_dismissed());
    assert!(router.host().calls().is_empty());
}

/// One record per displayed screen, removed by go_back
#[test]
fn test_registry_tracks_live_displays() {
    let (mut router, home) = router();

    let first = router.push::<Compose>(home, draft("one")).unwrap();
    let second = router.push::<Compose>(first.screen, draft("two")).unwrap();
    let modal = router
        .show::<Home>(second.screen, None, TransitionKind::DefaultModal, false, None)
        .unwrap();
    assert_eq!(router.registry().len(), 3);

    router.go_back(modal.screen, false, None).unwrap();
    router.go_back(second.screen, false, None).unwrap();
    router.go_back(first.screen, false, None).unwrap();

    assert!(router.registry().is_empty());
    assert_eq!(router.host().visible_screen(), Some(home));
    assert_eq!(router.host().screen_count(), 1);
}

/// Parameters are applied before the screen becomes visible
#[test]
fn test_configured_before_visible() {
    let (mut router, home) = router();

    let shown = router
        .show::<Compose>(home, draft("modal"), TransitionKind::DefaultModal, true, None)
        .unwrap();

    let compose = router.host().screen::<Compose>(shown.screen).unwrap();
    assert_eq!(compose.appearances, 1);
    assert_eq!(compose.draft_at_appear, draft("modal"));
}

/// Declared resource groups are used for lookup
#[test]
fn test_resource_group_lookup() {
    // Lightbox is filed under "Main" while declaring "Media"
    let (mut router, home) = router();

    let err = router.push::<Lightbox>(home, None).unwrap_err();
    match err {
        NavigationError::Resolution(resolution) => {
            assert!(resolution.to_string().contains("'Media'"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(router.registry().is_empty());
    assert_eq!(router.host().calls_named("push"), 0);
}

/// Going back from inside a presented stack dismisses the whole stack
#[test]
fn test_go_back_inside_presented_stack() {
    let (mut router, home) = router();
    let modal = router
        .show::<Compose>(home, None, TransitionKind::DefaultModal, false, None)
        .unwrap();
    let inner = router.push::<Compose>(modal.screen, draft("nested")).unwrap();

    // Nested push is registered on its own and pops first
    router.go_back(inner.screen, false, None).unwrap();
    assert_eq!(router.host().calls_named("pop"), 1);

    router.go_back(modal.screen, false, None).unwrap();
    assert_eq!(router.host().calls_named("dismiss"), 1);
    assert!(router.registry().is_empty());
    assert_eq!(router.host().visible_screen(), Some(home));
}

/// Custom configuration changes defaults used by convenience calls
#[test]
fn test_configured_router() {
    let config = RouterConfig::from_json(
        r#"{"defaultResourceGroup": "Main", "animatedByDefault": false}"#,
    )
    .unwrap();
    let (router, home) = router();
    let mut router = Router::with_config(router.into_host(), config);

    router.push::<Compose>(home, None).unwrap();

    let animated = router.host().calls().iter().find_map(|call| match call {
        HostCall::Push { animated, .. } => Some(*animated),
        _ => None,
    });
    assert_eq!(animated, Some(false));
}

/// Completion handles resolve once the host finishes animating
#[tokio::test]
async fn test_await_display_animation() {
    let (mut router, home) = router();
    router.host_mut().hold_animations(true);

    let shown = router.push::<Compose>(home, None).unwrap();
    assert_eq!(router.host().pending_animations(), 1);

    router.host_mut().finish_animations();
    assert!(shown.animation.finished().await.is_ok());

    let back = router.go_back_default(shown.screen).unwrap();
    router.host_mut().finish_animations();
    match back {
        GoBack::Dismissed { animation, .. } => assert!(animation.finished().await.is_ok()),
        GoBack::NotRegistered => panic!("push was not registered"),
    }
}

/// Logging can be initialized more than once
#[test]
fn test_init_logging() {
    init_logging("navigable=debug");
    assert!(!init_logging("navigable=debug"));
}
