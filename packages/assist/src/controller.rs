// ABOUTME: Per-feature request state machine with single-flight submission
// ABOUTME: Publishes snapshots over a watch channel and cancels in-flight work on drop

use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use resonance_core::ValidationError;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::error::{AssistError, Failure};
use crate::operation::{ExpressionGenerator, ExpressionRefiner, Operation, SocialAnalyzer};
use crate::state::{RequestSnapshot, RequestState, SubmitOutcome};

pub type ExpressionSession = RequestController<ExpressionGenerator>;
pub type RefinementSession = RequestController<ExpressionRefiner>;
pub type SocialSession = RequestController<SocialAnalyzer>;

struct Inner<R, T> {
    /// Request as the user submitted it; regeneration starts from here
    base_request: Option<R>,
    /// Bumped on every start and cancel so stale tasks never publish
    generation: u64,
    task: Option<JoinHandle<()>>,
    /// State to restore if the in-flight request is cancelled
    resume_state: RequestState<T>,
}

/// Aborts the wrapped task when dropped
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

struct Shared<O: Operation> {
    inner: Mutex<Inner<O::Request, O::Output>>,
    snapshot_tx: watch::Sender<RequestSnapshot<O::Output>>,
}

impl<O: Operation> Shared<O> {
    fn lock(&self) -> MutexGuard<'_, Inner<O::Request, O::Output>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_loading(&self) -> bool {
        self.snapshot_tx.borrow().state.is_loading()
    }

    fn finish(&self, generation: u64, outcome: Result<O::Output, AssistError>) {
        let mut inner = self.lock();
        if inner.generation != generation {
            debug!(feature = O::NAME, generation, "Discarding result of a cancelled request");
            return;
        }
        inner.task = None;
        inner.resume_state = RequestState::Idle;

        match outcome {
            Ok(output) => {
                info!(feature = O::NAME, generation, "Request succeeded");
                self.snapshot_tx.send_modify(|snapshot| {
                    snapshot.last_result = Some(output.clone());
                    snapshot.state = RequestState::Succeeded(output);
                });
            }
            Err(err) => {
                warn!(feature = O::NAME, generation, "Request failed: {}", err);
                let failure = Failure::from(&err);
                self.snapshot_tx
                    .send_modify(|snapshot| snapshot.state = RequestState::Failed(failure));
            }
        }
    }
}

/// Owns the request lifecycle of one feature screen.
///
/// At most one request is in flight: `submit` and `regenerate` are no-ops
/// while loading. Spawns onto the current Tokio runtime.
pub struct RequestController<O: Operation> {
    operation: Arc<O>,
    shared: Arc<Shared<O>>,
}

impl<O: Operation> RequestController<O> {
    pub fn new(operation: O) -> Self {
        let (snapshot_tx, _) = watch::channel(RequestSnapshot::default());
        Self {
            operation: Arc::new(operation),
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    base_request: None,
                    generation: 0,
                    task: None,
                    resume_state: RequestState::Idle,
                }),
                snapshot_tx,
            }),
        }
    }

    /// Validate and send a new request. Replaces the regeneration base.
    pub fn submit(&self, request: O::Request) -> Result<SubmitOutcome, ValidationError> {
        let mut inner = self.shared.lock();
        if self.shared.is_loading() {
            debug!(feature = O::NAME, "Submit ignored: a request is already in flight");
            return Ok(SubmitOutcome::Ignored);
        }

        self.operation.validate(&request)?;
        inner.base_request = Some(request.clone());
        self.start(&mut inner, request);
        Ok(SubmitOutcome::Started)
    }

    /// Re-send the last submitted request with `note` as additional context.
    /// Each call starts from the original request, so notes do not accumulate.
    pub fn regenerate(&self, note: Option<&str>) -> Result<SubmitOutcome, ValidationError> {
        let mut inner = self.shared.lock();
        if self.shared.is_loading() {
            debug!(feature = O::NAME, "Regenerate ignored: a request is already in flight");
            return Ok(SubmitOutcome::Ignored);
        }

        let base = inner
            .base_request
            .as_ref()
            .ok_or(ValidationError::NothingToRegenerate)?;
        let request = self.operation.with_additional_context(base, note);
        self.operation.validate(&request)?;
        self.start(&mut inner, request);
        Ok(SubmitOutcome::Started)
    }

    fn start(&self, inner: &mut Inner<O::Request, O::Output>, request: O::Request) {
        inner.generation += 1;
        let generation = inner.generation;

        let resume = &mut inner.resume_state;
        self.shared.snapshot_tx.send_modify(|snapshot| {
            *resume = mem::replace(&mut snapshot.state, RequestState::Loading);
        });

        info!(feature = O::NAME, generation, "Request started");
        debug!(feature = O::NAME, "Request: {:?}", request);

        let operation = Arc::clone(&self.operation);
        let shared = Arc::clone(&self.shared);
        inner.task = Some(tokio::spawn(async move {
            // Run the work in its own task so a panic settles the state too
            let mut work = AbortOnDrop(tokio::spawn(async move {
                operation.execute(&request).await
            }));
            let outcome = match (&mut work.0).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!(feature = O::NAME, generation, "Request task failed: {}", e);
                    Err(AssistError::Transport(
                        "the request stopped unexpectedly".to_string(),
                    ))
                }
            };
            shared.finish(generation, outcome);
        }));
    }

    /// Abort the in-flight request, discard its result and restore the
    /// state that preceded it. Returns false when nothing was in flight.
    pub fn cancel(&self) -> bool {
        let mut inner = self.shared.lock();
        let Some(task) = inner.task.take() else {
            return false;
        };

        task.abort();
        inner.generation += 1;
        let resume = mem::replace(&mut inner.resume_state, RequestState::Idle);
        self.shared
            .snapshot_tx
            .send_modify(|snapshot| snapshot.state = resume);

        info!(feature = O::NAME, "Request cancelled");
        true
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestSnapshot<O::Output>> {
        self.shared.snapshot_tx.subscribe()
    }

    pub fn snapshot(&self) -> RequestSnapshot<O::Output> {
        self.shared.snapshot_tx.borrow().clone()
    }

    pub fn state(&self) -> RequestState<O::Output> {
        self.shared.snapshot_tx.borrow().state.clone()
    }

    pub fn last_result(&self) -> Option<O::Output> {
        self.shared.snapshot_tx.borrow().last_result.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.shared.is_loading()
    }

    pub fn base_request(&self) -> Option<O::Request> {
        self.shared.lock().base_request.clone()
    }

    /// Wait until the state leaves `Loading` and return that snapshot
    pub async fn wait_settled(&self) -> RequestSnapshot<O::Output> {
        let mut rx = self.subscribe();
        let snapshot = match rx.wait_for(|snapshot| !snapshot.state.is_loading()).await {
            Ok(snapshot) => snapshot.clone(),
            Err(_) => self.snapshot(),
        };
        snapshot
    }
}

impl<O: Operation> Drop for RequestController<O> {
    fn drop(&mut self) {
        let mut inner = self.shared.lock();
        if let Some(task) = inner.task.take() {
            task.abort();
            inner.generation += 1;
            debug!(feature = O::NAME, "Controller dropped with a request in flight");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Echo {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Operation for Echo {
        type Request = String;
        type Output = String;

        const NAME: &'static str = "echo";

        fn validate(&self, request: &String) -> Result<(), ValidationError> {
            resonance_core::validation::require_text("text", request)
        }

        fn with_additional_context(&self, base: &String, note: Option<&str>) -> String {
            match note {
                Some(note) => format!("{base} + {note}"),
                None => base.clone(),
            }
        }

        async fn execute(&self, request: &String) -> Result<String, AssistError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if request.contains("panic") {
                panic!("echo cannot handle {request}");
            }
            if request.contains("fail") {
                return Err(AssistError::Transport("boom".to_string()));
            }
            Ok(request.to_uppercase())
        }
    }

    #[tokio::test]
    async fn test_new_controller_is_idle() {
        let controller = RequestController::new(Echo::default());

        assert_eq!(controller.snapshot(), RequestSnapshot::default());
        assert!(controller.base_request().is_none());
        assert!(!controller.cancel());
    }

    #[tokio::test]
    async fn test_submit_is_loading_until_task_runs() {
        let controller = RequestController::new(Echo::default());

        assert_eq!(controller.submit("hi".into()), Ok(SubmitOutcome::Started));
        assert!(controller.is_loading());

        let snapshot = controller.wait_settled().await;
        assert_eq!(snapshot.state, RequestState::Succeeded("HI".to_string()));
        assert_eq!(snapshot.last_result.as_deref(), Some("HI"));
    }

    #[tokio::test]
    async fn test_regenerate_starts_from_base_request() {
        let controller = RequestController::new(Echo::default());
        controller.submit("hi".into()).unwrap();
        controller.wait_settled().await;

        controller.regenerate(Some("one")).unwrap();
        assert_eq!(
            controller.wait_settled().await.state,
            RequestState::Succeeded("HI + ONE".to_string())
        );

        controller.regenerate(Some("two")).unwrap();
        assert_eq!(
            controller.wait_settled().await.state,
            RequestState::Succeeded("HI + TWO".to_string())
        );
        assert_eq!(controller.base_request().as_deref(), Some("hi"));
    }

    #[tokio::test]
    async fn test_panicking_operation_settles_as_failure() {
        let controller = RequestController::new(Echo::default());
        controller.submit("ok".into()).unwrap();
        controller.wait_settled().await;

        controller.regenerate(Some("panic")).unwrap();
        let snapshot = controller.wait_settled().await;

        let failure = snapshot.state.failure().unwrap();
        assert_eq!(failure.kind, crate::error::FailureKind::Transport);
        assert_eq!(snapshot.last_result.as_deref(), Some("OK"));
        assert_eq!(controller.submit("again".into()), Ok(SubmitOutcome::Started));
        controller.wait_settled().await;
    }

    #[tokio::test]
    async fn test_failure_keeps_last_result() {
        let controller = RequestController::new(Echo::default());
        controller.submit("ok".into()).unwrap();
        controller.wait_settled().await;

        controller.regenerate(Some("fail")).unwrap();
        let snapshot = controller.wait_settled().await;

        assert!(snapshot.state.failure().is_some());
        assert_eq!(snapshot.last_result.as_deref(), Some("OK"));
    }
}
