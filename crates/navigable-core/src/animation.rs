//! Completion handles for display and dismiss requests
//!
//! Every request the router issues to the host carries an
//! [`AnimationCompleter`]. The host completes it once its animation machinery
//! has finished; the caller holds the matching [`AnimationHandle`] and can poll
//! or await it. The router itself never waits.

use std::fmt;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::error::AnimationError;

/// Caller callback run when an animation completes
pub type Completion = Box<dyn FnOnce() + 'static>;

/// Host side of a pending animation
pub struct AnimationCompleter {
    sender: Option<oneshot::Sender<()>>,
    callback: Option<Completion>,
}

impl AnimationCompleter {
    /// Create a completer and its handle
    pub fn pair(callback: Option<Completion>) -> (Self, AnimationHandle) {
        let (sender, receiver) = oneshot::channel();
        let completer = Self { sender: Some(sender), callback };
        let handle = AnimationHandle { receiver, outcome: None };
        (completer, handle)
    }

    /// Run the callback and resolve the handle
    pub fn complete(mut self) {
        if let Some(callback) = self.callback.take() {
            callback();
        }
        if let Some(sender) = self.sender.take() {
            // Handle may already be gone
            let _ = sender.send(());
        }
    }

    /// Check if a caller callback is attached
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }
}

impl fmt::Debug for AnimationCompleter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationCompleter")
            .field("has_callback", &self.has_callback())
            .finish()
    }
}

/// Caller side of a pending animation
#[derive(Debug)]
pub struct AnimationHandle {
    receiver: oneshot::Receiver<()>,
    outcome: Option<Result<(), AnimationError>>,
}

impl AnimationHandle {
    /// A handle that is already complete
    pub fn completed() -> Self {
        let (completer, handle) = AnimationCompleter::pair(None);
        completer.complete();
        handle
    }

    /// Poll without blocking; `None` while the animation is still running
    pub fn try_finished(&mut self) -> Option<Result<(), AnimationError>> {
        if self.outcome.is_none() {
            self.outcome = match self.receiver.try_recv() {
                Ok(()) => Some(Ok(())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Closed) => Some(Err(AnimationError::Abandoned)),
            };
        }
        self.outcome
    }

    /// Check if the animation completed successfully
    pub fn is_finished(&mut self) -> bool {
        matches!(self.try_finished(), Some(Ok(())))
    }

    /// Wait for the animation to finish
    pub async fn finished(self) -> Result<(), AnimationError> {
        match self.outcome {
            Some(outcome) => outcome,
            None => self.receiver.await.map_err(|_| AnimationError::Abandoned),
        }
    }
}
