use std::fmt;
use std::sync::Arc;

use exam_core::model::Chapter;
use exam_core::session::{
    Effect, GenerationTicket, PassPolicy, QuizEvent, ScoreReport, SessionError, SessionState,
};

use crate::generator::{GenerationScope, QuestionGenerator};

//
// ─── PENDING GENERATION ────────────────────────────────────────────────────────
//

/// A generator call requested by the state machine but not yet run.
///
/// Owns everything it needs, so it can be awaited (or spawned) while the
/// session keeps accepting intents.
pub struct PendingGeneration {
    ticket: GenerationTicket,
    generator: Arc<dyn QuestionGenerator>,
}

impl PendingGeneration {
    #[must_use]
    pub fn ticket(&self) -> &GenerationTicket {
        &self.ticket
    }

    /// Call the generator and turn the outcome into a tagged completion event.
    pub async fn run(self) -> QuizEvent {
        let scope = GenerationScope::for_chapter(self.ticket.chapter());
        match self.generator.generate(&scope).await {
            Ok(questions) => {
                tracing::info!(
                    attempt = %self.ticket.attempt(),
                    count = questions.len(),
                    "questions generated"
                );
                self.ticket.succeeded(questions)
            }
            Err(err) => {
                tracing::warn!(
                    attempt = %self.ticket.attempt(),
                    chapter = %self.ticket.chapter().id(),
                    error = %err,
                    "question generation failed"
                );
                self.ticket.failed(err.failure())
            }
        }
    }
}

impl fmt::Debug for PendingGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingGeneration")
            .field("ticket", &self.ticket)
            .finish_non_exhaustive()
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Owns the session state and connects it to a question generator.
pub struct QuizSession {
    state: SessionState,
    generator: Arc<dyn QuestionGenerator>,
    pass_policy: PassPolicy,
}

impl QuizSession {
    #[must_use]
    pub fn new(generator: Arc<dyn QuestionGenerator>) -> Self {
        Self {
            state: SessionState::new(),
            generator,
            pass_policy: PassPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_pass_policy(mut self, pass_policy: PassPolicy) -> Self {
        self.pass_policy = pass_policy;
        self
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn pass_policy(&self) -> PassPolicy {
        self.pass_policy
    }

    #[must_use]
    pub fn score_report(&self) -> Option<ScoreReport> {
        self.state.score_report(&self.pass_policy)
    }

    /// Apply an intent or completion event.
    ///
    /// Returns the generation to run when the event started an attempt.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when the state machine rejects the event.
    pub fn dispatch(&mut self, event: QuizEvent) -> Result<Option<PendingGeneration>, SessionError> {
        let name = event.name();
        let effect = self.state.apply(event).inspect_err(|err| {
            tracing::debug!(event = name, view = %self.state.view(), error = %err, "event rejected");
        })?;

        match effect {
            Effect::Generate(ticket) => {
                tracing::info!(
                    attempt = %ticket.attempt(),
                    chapter = %ticket.chapter().id(),
                    expected = ticket.expected_count(),
                    "attempt started"
                );
                Ok(Some(PendingGeneration {
                    ticket,
                    generator: Arc::clone(&self.generator),
                }))
            }
            Effect::Discarded => {
                tracing::debug!(event = name, "stale generation result discarded");
                Ok(None)
            }
            Effect::None => Ok(None),
        }
    }

    /// Feed a completion event produced by [`PendingGeneration::run`].
    ///
    /// Completions never fail; stale ones are dropped.
    pub fn complete(&mut self, event: QuizEvent) {
        if let Err(err) = self.dispatch(event) {
            tracing::debug!(error = %err, "completion rejected");
        }
    }

    /// Start an attempt and wait for its questions.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when an attempt cannot start from the current view.
    /// Generation failures are not errors here; they land in `state().error()`.
    pub async fn start_and_wait(&mut self, chapter: Chapter) -> Result<(), SessionError> {
        let pending = self.dispatch(QuizEvent::StartAttempt(chapter))?;
        self.await_pending(pending).await;
        Ok(())
    }

    /// Regenerate a fresh question set for the same chapter and wait for it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` unless the session is showing results.
    pub async fn retry_and_wait(&mut self) -> Result<(), SessionError> {
        let pending = self.dispatch(QuizEvent::Retry)?;
        self.await_pending(pending).await;
        Ok(())
    }

    async fn await_pending(&mut self, pending: Option<PendingGeneration>) {
        if let Some(pending) = pending {
            let completion = pending.run().await;
            self.complete(completion);
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("state", &self.state)
            .field("pass_policy", &self.pass_policy)
            .finish_non_exhaustive()
    }
}
