// ABOUTME: Drives a request session to completion from the terminal
// ABOUTME: Ctrl-C cancels the in-flight request instead of killing the process

use anyhow::anyhow;
use colored::*;
use resonance_assist::{Operation, RequestController, RequestSnapshot};
use tracing::debug;

/// Wait for the in-flight request; `None` when the user cancelled it
pub async fn settle<O: Operation>(
    session: &RequestController<O>,
    activity: &str,
) -> Option<RequestSnapshot<O::Output>> {
    eprintln!("{}", format!("{}...", activity).dimmed());

    tokio::select! {
        snapshot = session.wait_settled() => Some(snapshot),
        _ = tokio::signal::ctrl_c() => {
            debug!("Interrupted while waiting for {}", O::NAME);
            session.cancel();
            eprintln!("{}", "Cancelled".yellow());
            None
        }
    }
}

/// Settle and turn a failed or cancelled request into an error for the exit code
pub async fn settle_or_fail<O: Operation>(
    session: &RequestController<O>,
    activity: &str,
) -> anyhow::Result<O::Output> {
    let snapshot = settle(session, activity)
        .await
        .ok_or_else(|| anyhow!("Request cancelled"))?;

    if let Some(failure) = snapshot.state.failure() {
        if let Some(raw) = &failure.raw_response {
            debug!("Raw model response: {}", raw);
        }
        return Err(anyhow!("{}", failure.message));
    }

    snapshot
        .state
        .result()
        .cloned()
        .ok_or_else(|| anyhow!("{} finished without a result", O::NAME))
}
