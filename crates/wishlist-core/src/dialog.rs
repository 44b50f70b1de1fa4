//! Dialogs
//!
//! Blocking user prompts expressed as futures. A prompt resolves once the
//! user confirms or cancels; until then the awaiting flow is suspended.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;
use futures_channel::oneshot;

use crate::{NameError, ReserverName};

/// Result of asking for a reserver name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamePrompt {
    Confirmed(ReserverName),
    Cancelled,
}

/// Asks who is reserving a wish
#[async_trait(?Send)]
pub trait NameDialog {
    async fn ask_name(&self) -> NamePrompt;
}

/// Yes/no confirmation before destructive actions
#[async_trait(?Send)]
pub trait ConfirmDialog {
    async fn confirm(&self, message: &str) -> bool;
}

/// Future returned by [`NameModal::open`].
///
/// Resolves to [`NamePrompt::Cancelled`] if the modal is dropped or reopened
/// before the user answers.
pub struct PromptFuture(oneshot::Receiver<NamePrompt>);

impl Future for PromptFuture {
    type Output = NamePrompt;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.0)
            .poll(cx)
            .map(|answer| answer.unwrap_or(NamePrompt::Cancelled))
    }
}

/// State of the name-capture modal.
///
/// Submitting an invalid name keeps the modal open with the error set; only a
/// valid name or an explicit cancel resolves the pending prompt.
#[derive(Debug, Default)]
pub struct NameModal {
    input: String,
    error: Option<NameError>,
    pending: Option<oneshot::Sender<NamePrompt>>,
}

impl NameModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the modal with an empty input
    pub fn open(&mut self) -> PromptFuture {
        let (tx, rx) = oneshot::channel();
        self.input.clear();
        self.error = None;
        // a still-pending earlier prompt sees its sender dropped and cancels
        self.pending = Some(tx);
        PromptFuture(rx)
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn error(&self) -> Option<NameError> {
        self.error
    }

    pub fn submit(&mut self) -> Result<(), NameError> {
        let name = match ReserverName::parse(&self.input) {
            Ok(name) => name,
            Err(err) => {
                self.error = Some(err);
                return Err(err);
            }
        };
        self.error = None;
        if let Some(tx) = self.pending.take() {
            let _ = tx.send(NamePrompt::Confirmed(name));
        }
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.error = None;
        if let Some(tx) = self.pending.take() {
            let _ = tx.send(NamePrompt::Cancelled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_short_name_keeps_modal_open() {
        let mut modal = NameModal::new();
        let answer = modal.open();

        modal.set_input("a");
        assert!(modal.submit().is_err());
        assert!(modal.is_open());
        assert!(modal.error().is_some());

        modal.set_input("  Anna ");
        assert!(modal.submit().is_ok());
        assert!(!modal.is_open());
        assert_eq!(
            answer.await,
            NamePrompt::Confirmed(ReserverName::parse("Anna").unwrap())
        );
    }

    #[tokio::test]
    async fn test_cancel_resolves_cancelled() {
        let mut modal = NameModal::new();
        let answer = modal.open();
        modal.cancel();
        assert!(!modal.is_open());
        assert_eq!(answer.await, NamePrompt::Cancelled);
    }

    #[tokio::test]
    async fn test_reopen_cancels_previous_prompt() {
        let mut modal = NameModal::new();
        let first = modal.open();
        modal.set_input("stale");
        let _second = modal.open();

        assert_eq!(modal.input(), "");
        assert_eq!(first.await, NamePrompt::Cancelled);
    }
}
