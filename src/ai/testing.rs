//! Scripted stub provider for workflow and router tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::ai::message::ChatMessage;
use crate::ai::provider::{AiProvider, TokenUsage};
use crate::error::AppError;

enum Scripted {
    Text(String),
    TransportError(String),
    UpstreamError(String),
}

/// An `AiProvider` that replays a queue of scripted responses and records
/// every request it receives.
#[derive(Default)]
pub struct StubProvider {
    responses: Mutex<VecDeque<Scripted>>,
    calls: AtomicU32,
    requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(self, text: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Scripted::Text(text.to_string()));
        self
    }

    pub fn push_transport_error(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Scripted::TransportError(message.to_string()));
        self
    }

    pub fn push_upstream_error(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Scripted::UpstreamError(message.to_string()));
        self
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Messages from every `complete` call, in order.
    pub fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for StubProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _max_tokens: Option<u32>,
    ) -> Result<(String, Option<TokenUsage>), AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(messages.to_vec());

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Text(text)) => Ok((
                text,
                Some(TokenUsage {
                    input_tokens: 10,
                    output_tokens: 20,
                }),
            )),
            Some(Scripted::TransportError(message)) => Err(AppError::Transport(message)),
            Some(Scripted::UpstreamError(message)) => Err(AppError::Upstream(message)),
            None => panic!("stub provider ran out of scripted responses"),
        }
    }
}
