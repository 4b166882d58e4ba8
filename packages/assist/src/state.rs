// ABOUTME: Request lifecycle state observed by the presentation layer
// ABOUTME: Idle -> Loading -> Succeeded | Failed, with the last success kept across failures

use crate::error::Failure;

#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Succeeded(T),
    Failed(Failure),
}

impl<T> RequestState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, RequestState::Succeeded(_) | RequestState::Failed(_))
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            RequestState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }
}

/// Current state plus the most recent successful result, which survives
/// later failures so it can still be inspected
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSnapshot<T> {
    pub state: RequestState<T>,
    pub last_result: Option<T>,
}

impl<T> Default for RequestSnapshot<T> {
    fn default() -> Self {
        Self {
            state: RequestState::Idle,
            last_result: None,
        }
    }
}

/// What a submit or regenerate call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request is now in flight
    Started,
    /// A request was already in flight; nothing happened
    Ignored,
}
