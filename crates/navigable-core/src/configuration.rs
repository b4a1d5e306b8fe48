//! Transition configuration
//!
//! Describes how a screen is displayed: pushed onto the origin's stack,
//! presented modally with the default options, or presented modally with an
//! explicit configuration that may carry a custom animator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::transition::Transition;

// =============================================================================
// Modal Styles
// =============================================================================

/// Animation style used by the host when presenting modally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ModalTransitionStyle {
    /// Slide up from the bottom edge
    #[default]
    CoverVertical,
    /// Horizontal 3D flip
    FlipHorizontal,
    /// Fade between screens
    CrossDissolve,
    /// Page curl from the corner
    PartialCurl,
}

/// How the presented container covers the presenting screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ModalPresentationStyle {
    /// Covers the whole screen
    #[default]
    FullScreen,
    /// Card-style sheet
    PageSheet,
    /// Centered form sheet
    FormSheet,
    /// Covers only the presenting screen's context
    CurrentContext,
    /// Presentation fully driven by a custom animator
    Custom,
    /// Full screen, presenting content stays visible underneath
    OverFullScreen,
    /// Current context, presenting content stays visible underneath
    OverCurrentContext,
    /// Popover anchored to the presenting screen
    Popover,
    /// Host picks the style
    Automatic,
}

/// The style pair handed to the host for a modal presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ModalOptions {
    /// Transition animation style
    #[serde(default)]
    pub transition_style: ModalTransitionStyle,
    /// Presentation coverage style
    #[serde(default)]
    pub presentation_style: ModalPresentationStyle,
}

// =============================================================================
// Transition Configuration
// =============================================================================

/// How a screen should be presented modally
///
/// Defaults to [`ModalTransitionStyle::CoverVertical`] /
/// [`ModalPresentationStyle::FullScreen`] with no custom animator.
#[derive(Clone, Default)]
pub struct TransitionConfiguration {
    /// Transition animation style
    pub transition_style: ModalTransitionStyle,
    /// Presentation coverage style
    pub presentation_style: ModalPresentationStyle,
    /// Optional custom animator
    pub transition: Option<Arc<dyn Transition>>,
}

impl TransitionConfiguration {
    /// Create a configuration without a custom animator
    pub fn new(
        transition_style: ModalTransitionStyle,
        presentation_style: ModalPresentationStyle,
    ) -> Self {
        Self { transition_style, presentation_style, transition: None }
    }

    /// Attach a custom animator
    pub fn with_transition(mut self, transition: Arc<dyn Transition>) -> Self {
        self.transition = Some(transition);
        self
    }

    /// The style pair handed to the host
    pub fn options(&self) -> ModalOptions {
        ModalOptions {
            transition_style: self.transition_style,
            presentation_style: self.presentation_style,
        }
    }

    /// Check if a custom animator is attached
    pub fn has_custom_transition(&self) -> bool {
        self.transition.is_some()
    }
}

impl From<ModalOptions> for TransitionConfiguration {
    fn from(options: ModalOptions) -> Self {
        Self::new(options.transition_style, options.presentation_style)
    }
}

impl fmt::Debug for TransitionConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionConfiguration")
            .field("transition_style", &self.transition_style)
            .field("presentation_style", &self.presentation_style)
            .field("custom_transition", &self.has_custom_transition())
            .finish()
    }
}

// =============================================================================
// Transition Kind
// =============================================================================

/// Display mode for a screen
#[derive(Debug, Clone, Default)]
pub enum TransitionKind {
    /// Push onto the origin's navigation stack
    #[default]
    Push,
    /// Wrap in a navigation container and present with the default options
    DefaultModal,
    /// Wrap in a navigation container and present with the given configuration
    Modal(TransitionConfiguration),
}

impl TransitionKind {
    /// Check if this kind presents modally
    pub fn is_modal(&self) -> bool {
        !matches!(self, TransitionKind::Push)
    }

    /// The custom animator, if any
    pub fn transition(&self) -> Option<&Arc<dyn Transition>> {
        match self {
            TransitionKind::Modal(config) => config.transition.as_ref(),
            _ => None,
        }
    }

    /// Short label for logs
    pub fn label(&self) -> &'static str {
        match self {
            TransitionKind::Push => "push",
            TransitionKind::DefaultModal => "default-modal",
            TransitionKind::Modal(_) => "modal",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::TransitionContext;

    struct NoopAnimator;

    impl Transition for NoopAnimator {
        fn will_show(&self) {}
        fn will_dismiss(&self) {}
        fn animate(&self, _context: &TransitionContext) {}
    }

    #[test]
    fn test_default_configuration() {
        let config = TransitionConfiguration::default();
        assert_eq!(config.transition_style, ModalTransitionStyle::CoverVertical);
        assert_eq!(config.presentation_style, ModalPresentationStyle::FullScreen);
        assert!(config.transition.is_none());
        assert_eq!(config.options(), ModalOptions::default());
    }

    #[test]
    fn test_with_transition() {
        let config = TransitionConfiguration::new(
            ModalTransitionStyle::CrossDissolve,
            ModalPresentationStyle::Custom,
        )
        .with_transition(Arc::new(NoopAnimator));

        assert!(config.has_custom_transition());
        assert_eq!(config.options().transition_style, ModalTransitionStyle::CrossDissolve);

        let debug = format!("{:?}", config);
        assert!(debug.contains("custom_transition: true"));
    }

    #[test]
    fn test_clone_shares_animator() {
        let animator: Arc<dyn Transition> = Arc::new(NoopAnimator);
        let config = TransitionConfiguration::default().with_transition(Arc::clone(&animator));
        let copy = config.clone();

        assert_eq!(Arc::strong_count(&animator), 3);
        drop(config);
        assert!(copy.has_custom_transition());
    }

    #[test]
    fn test_transition_kind() {
        assert!(!TransitionKind::Push.is_modal());
        assert!(TransitionKind::DefaultModal.is_modal());
        assert!(TransitionKind::DefaultModal.transition().is_none());

        let kind = TransitionKind::Modal(
            TransitionConfiguration::default().with_transition(Arc::new(NoopAnimator)),
        );
        assert!(kind.is_modal());
        assert!(kind.transition().is_some());
        assert_eq!(kind.label(), "modal");
        assert_eq!(TransitionKind::default().label(), "push");
    }

    #[test]
    fn test_modal_options_serde() {
        let options = ModalOptions {
            transition_style: ModalTransitionStyle::FlipHorizontal,
            presentation_style: ModalPresentationStyle::OverCurrentContext,
        };
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(
            json,
            r#"{"transitionStyle":"flipHorizontal","presentationStyle":"overCurrentContext"}"#
        );

        let partial: ModalOptions = serde_json::from_str(r#"{"presentationStyle":"formSheet"}"#).unwrap();
        assert_eq!(partial.transition_style, ModalTransitionStyle::CoverVertical);
        assert_eq!(partial.presentation_style, ModalPresentationStyle::FormSheet);
    }
}
