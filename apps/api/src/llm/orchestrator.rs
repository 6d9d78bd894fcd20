//! LLM orchestration: schema-constrained request, validate-and-repair retry.
//!
//! The retry policy is an explicit state machine
//! (Pending → Sent → Validating → {Success | Correcting → Sent | Exhausted})
//! rather than an exception-driven loop, with the clock injected so the
//! backoff schedule is unit-testable without real delays.
//!
//! A malformed reply never escapes this module: exhausting the attempts is a
//! fatal `GenerationError`, there is no partial-success path.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::llm::prompts;
use crate::llm::schema::Schemas;
use crate::llm::{ChatMessage, ChatRequest, CompletionTransport};
use crate::models::evaluation_raw::EvaluationResponseRaw;

/// Base backoff unit: attempt N waits N × 1.5s before retrying.
const BACKOFF_UNIT_MS: u64 = 1500;

#[derive(Debug, Error)]
#[error("completion failed after {attempts} attempts: {last_error}")]
pub struct GenerationError {
    pub attempts: u32,
    pub last_error: String,
}

/// Injectable clock for backoff, so tests can run the policy instantly.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer.
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Retry-machine states. `Sent` carries the attempt number (1-based);
/// `Correcting` carries the failed reply and the validation error so the
/// follow-up message can quote both.
#[derive(Debug)]
enum State {
    Pending,
    Sent { attempt: u32 },
    Validating { attempt: u32, body: String },
    Correcting { attempt: u32, reply: String, error: String },
    Success(EvaluationResponseRaw),
    Exhausted { attempts: u32, last_error: String },
}

pub struct Orchestrator<'a> {
    transport: &'a dyn CompletionTransport,
    sleeper: &'a dyn Sleeper,
    schemas: &'a Schemas,
    model: &'a str,
    max_attempts: u32,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        transport: &'a dyn CompletionTransport,
        sleeper: &'a dyn Sleeper,
        schemas: &'a Schemas,
        model: &'a str,
        max_attempts: u32,
    ) -> Self {
        Self {
            transport,
            sleeper,
            schemas,
            model,
            max_attempts,
        }
    }

    /// Runs the retry machine to completion.
    pub async fn complete(
        &self,
        system_instruction: &str,
        payload_json: &str,
    ) -> Result<EvaluationResponseRaw, GenerationError> {
        let base_messages = vec![
            ChatMessage::system(system_instruction),
            ChatMessage::user(prompts::user_prompt(payload_json)),
        ];
        let mut messages = base_messages.clone();
        let mut state = State::Pending;

        loop {
            state = match state {
                State::Pending => State::Sent { attempt: 1 },

                State::Sent { attempt } => {
                    let request = ChatRequest {
                        model: self.model.to_string(),
                        messages: messages.clone(),
                        response_format: self.schemas.response_format(),
                    };
                    match self.transport.complete(&request).await {
                        Ok(body) => State::Validating { attempt, body },
                        Err(e) => {
                            // Transport failures retry on the same messages.
                            warn!("completion attempt {attempt} transport failure: {e}");
                            self.next_attempt_or_exhausted(attempt, e.to_string()).await
                        }
                    }
                }

                State::Validating { attempt, body } => match self.validate(&body) {
                    Ok(raw) => {
                        info!("completion validated on attempt {attempt}");
                        State::Success(raw)
                    }
                    Err(error) => State::Correcting {
                        attempt,
                        reply: body,
                        error,
                    },
                },

                State::Correcting { attempt, error, .. } => {
                    warn!("completion attempt {attempt} failed validation: {error}");
                    self.next_attempt_or_exhausted(attempt, error).await
                }

                State::Success(raw) => return Ok(raw),

                State::Exhausted { attempts, last_error } => {
                    return Err(GenerationError { attempts, last_error })
                }
            };

            // Correcting appends the failed exchange onto the base
            // conversation (not onto earlier corrections).
            if let State::Correcting { ref reply, ref error, .. } = state {
                messages = base_messages.clone();
                messages.push(ChatMessage::assistant(reply.clone()));
                messages.push(ChatMessage::user(prompts::correction_prompt(error)));
            }
        }
    }

    fn validate(&self, body: &str) -> Result<EvaluationResponseRaw, String> {
        if body.trim().is_empty() {
            return Err("empty response body".to_string());
        }
        let value: Value = serde_json::from_str(body)
            .map_err(|e| format!("response is not valid JSON: {e}"))?;
        self.schemas
            .validate_raw(&value)
            .map_err(|e| format!("response failed schema validation: {e}"))?;
        serde_json::from_value(value).map_err(|e| format!("response failed to deserialize: {e}"))
    }

    /// Sleeps the linear backoff and moves to the next attempt, or gives up.
    async fn next_attempt_or_exhausted(&self, attempt: u32, error: String) -> State {
        if attempt >= self.max_attempts {
            return State::Exhausted {
                attempts: attempt,
                last_error: error,
            };
        }
        self.sleeper
            .sleep(Duration::from_millis(BACKOFF_UNIT_MS * attempt as u64))
            .await;
        State::Sent { attempt: attempt + 1 }
    }
}
