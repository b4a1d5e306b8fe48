//! Custom transition animators
//!
//! A [`Transition`] is attached to a modal presentation through
//! [`TransitionConfiguration`](crate::TransitionConfiguration). The router
//! fires its lifecycle hooks and hands it to the host, which drives the actual
//! animation through [`Transition::animate`].

use std::time::Duration;

use crate::screen::ScreenHandle;

/// Duration reported by animators that do not override it
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(350);

/// Which half of a modal round trip is animating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationPhase {
    /// Presented container is coming on screen
    Show,
    /// Presented container is going away
    Dismiss,
}

/// What the host passes to an animator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionContext {
    /// Show or dismiss
    pub phase: AnimationPhase,
    /// Screen the presentation originates from, when the host knows it
    pub presenting: Option<ScreenHandle>,
    /// Container being presented or dismissed
    pub presented: ScreenHandle,
    /// Whether the host was asked to animate
    pub animated: bool,
}

/// Custom modal animator
///
/// `will_show`/`will_dismiss` fire once per occurrence, before the host calls
/// `animate` for the matching phase.
pub trait Transition: Send + Sync {
    /// Presentation is about to start
    fn will_show(&self);

    /// Dismissal is about to start
    fn will_dismiss(&self);

    /// How long the animation runs
    fn duration(&self, _context: &TransitionContext) -> Duration {
        DEFAULT_TRANSITION_DURATION
    }

    /// Perform the animation for the given phase
    fn animate(&self, context: &TransitionContext);
}
