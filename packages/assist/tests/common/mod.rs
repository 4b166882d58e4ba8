// ABOUTME: Shared fixtures for orchestrator tests
// ABOUTME: A gated model that holds each call open until the test releases it

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use resonance_ai::{GatewayResult, GenerationConfig, GenerativeModel};
use resonance_core::{CommunicationContext, ExpressionRequest, RefinementRequest};
use tokio::sync::Semaphore;

/// Model whose calls block until `release` hands out a permit
pub struct GatedModel {
    gate: Semaphore,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    replies: Mutex<VecDeque<GatewayResult<String>>>,
}

impl Default for GatedModel {
    fn default() -> Self {
        Self {
            gate: Semaphore::new(0),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
            replies: Mutex::new(VecDeque::new()),
        }
    }
}

impl GatedModel {
    pub fn with_replies(replies: Vec<GatewayResult<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            ..Default::default()
        }
    }

    pub fn release(&self, calls: usize) {
        self.gate.add_permits(calls);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for GatedModel {
    async fn generate(&self, prompt: &str, _config: &GenerationConfig) -> GatewayResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        self.gate.acquire().await.unwrap().forget();

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("I feel good.".to_string()))
    }
}

/// Let spawned tasks run up to their next suspension point
pub async fn settle_tasks() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

pub fn happy_friend() -> ExpressionRequest {
    ExpressionRequest {
        emotion: "Happy".to_string(),
        emotion_intensity: 7,
        recipient: "Friend".to_string(),
        scenario: "School".to_string(),
        purpose: "Express feelings".to_string(),
        situation_note: None,
        additional_note: None,
    }
}

pub fn deadline_email() -> RefinementRequest {
    RefinementRequest::new(
        "I need the report by friday or else",
        CommunicationContext::Email,
        "Colleague",
        "Make a request",
    )
}
