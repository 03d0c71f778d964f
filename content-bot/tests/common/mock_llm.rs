//! Scripted [`LlmClient`] for integration tests.
//!
//! Returns queued results in order (then a default reply), records every request, and can be
//! held open with a gate to test events that arrive while generation is in flight.

use async_trait::async_trait;
use llm_client::{LlmClient, LlmError};
use prompt::ChatMessage;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub const DEFAULT_IDEAS: &str = "1️⃣ Ідея: A\n2️⃣ Ідея: B\n3️⃣ Ідея: C";

pub struct MockLlm {
    script: Mutex<VecDeque<Result<String, LlmError>>>,
    requests: Mutex<Vec<Vec<ChatMessage>>>,
    /// Notified when a request starts.
    pub started: Arc<Notify>,
    /// When set, each request waits for a notification before answering.
    gate: Option<Arc<Notify>>,
}

impl MockLlm {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::build(None))
    }

    /// Each request blocks until `gate.notify_one()`.
    pub fn gated(gate: Arc<Notify>) -> Arc<Self> {
        Arc::new(Self::build(Some(gate)))
    }

    fn build(gate: Option<Arc<Notify>>) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            started: Arc::new(Notify::new()),
            gate,
        }
    }

    pub fn push(&self, result: Result<String, LlmError>) {
        self.script.lock().unwrap().push_back(result);
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Concatenated contents of the last request.
    pub fn last_prompt(&self) -> Option<String> {
        self.requests.lock().unwrap().last().map(|msgs| {
            msgs.iter()
                .map(|m| m.content.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        })
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn get_llm_response_with_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(messages);
        self.started.notify_one();
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(DEFAULT_IDEAS.to_string()))
    }
}
