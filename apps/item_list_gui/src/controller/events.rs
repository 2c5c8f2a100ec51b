//! Backend-to-UI events and error modeling for the item list window.

use client_core::{DisplayState, FailureKind, FailureReason};

pub enum UiEvent {
    StateChanged(DisplayState),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Startup,
    Transport,
    Data,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    message: String,
}

impl UiError {
    pub fn startup(message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Startup,
            message: message.into(),
        }
    }

    pub fn from_failure(failure: &FailureReason) -> Self {
        let category = match failure.kind {
            FailureKind::Transport | FailureKind::Status | FailureKind::Timeout => {
                UiErrorCategory::Transport
            }
            FailureKind::Decode | FailureKind::MalformedName => UiErrorCategory::Data,
        };
        Self {
            category,
            message: failure.message.clone(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
