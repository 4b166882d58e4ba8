// ABOUTME: Request orchestration for Resonance
// ABOUTME: Per-feature state machines coordinating prompt building, gateway calls and parsing

pub mod controller;
pub mod error;
pub mod operation;
pub mod state;

pub use controller::{ExpressionSession, RefinementSession, RequestController, SocialSession};
pub use error::{AssistError, Failure, FailureKind};
pub use operation::{ExpressionGenerator, ExpressionRefiner, Operation, SocialAnalyzer};
pub use state::{RequestSnapshot, RequestState, SubmitOutcome};
