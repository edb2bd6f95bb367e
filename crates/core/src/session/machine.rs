use thiserror::Error;

use crate::model::{AttemptId, Chapter, OPTION_COUNT, Question, QuestionId};

use super::event::{Effect, GenerationTicket, QuizEvent, QuizFailure, expected_question_count};
use super::state::{QuizView, SessionState};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// A rejected event. The state is left exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("`{event}` is not allowed in {view}")]
    InvalidTransition { event: &'static str, view: QuizView },

    #[error("{unanswered} question(s) still unanswered")]
    Unanswered { unanswered: usize },

    #[error("question {0} is not part of this attempt")]
    UnknownQuestion(QuestionId),

    #[error("option {option} does not exist for question {question_id}")]
    OptionOutOfRange {
        question_id: QuestionId,
        option: usize,
    },

    #[error("no chapter selected")]
    NoChapterSelected,
}

//
// ─── TRANSITIONS ───────────────────────────────────────────────────────────────
//

impl SessionState {
    /// Apply one event to the state machine.
    ///
    /// Start-attempt and Retry return [`Effect::Generate`]; the caller runs the
    /// generator and feeds the outcome back through the ticket's completion
    /// events. Completions for any attempt other than the active one return
    /// [`Effect::Discarded`] without touching the state.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when the event is not legal in the current view or
    /// a guard fails. The state is unchanged in that case.
    pub fn apply(&mut self, event: QuizEvent) -> Result<Effect, SessionError> {
        let name = event.name();
        match event {
            QuizEvent::StartAttempt(chapter) => {
                self.require(&[QuizView::Dashboard, QuizView::Results], name)?;
                Ok(self.start_attempt(chapter))
            }
            QuizEvent::Retry => {
                self.require(&[QuizView::Results], name)?;
                let chapter = self
                    .selected_chapter
                    .clone()
                    .ok_or(SessionError::NoChapterSelected)?;
                Ok(self.start_attempt(chapter))
            }
            QuizEvent::GenerationSucceeded { attempt, questions } => {
                Ok(self.generation_succeeded(attempt, questions))
            }
            QuizEvent::GenerationFailed { attempt, failure } => {
                if !self.is_awaiting(attempt) {
                    return Ok(Effect::Discarded);
                }
                self.abort(failure);
                Ok(Effect::None)
            }
            QuizEvent::SelectAnswer {
                question_id,
                option,
            } => {
                self.require(&[QuizView::Quiz], name)?;
                self.select_answer(question_id, option)?;
                Ok(Effect::None)
            }
            QuizEvent::Next => {
                self.require(&[QuizView::Quiz], name)?;
                if self.current_index + 1 < self.questions.len() {
                    self.current_index += 1;
                }
                Ok(Effect::None)
            }
            QuizEvent::Prev => {
                self.require(&[QuizView::Quiz], name)?;
                self.current_index = self.current_index.saturating_sub(1);
                Ok(Effect::None)
            }
            QuizEvent::Submit => {
                self.require(&[QuizView::Quiz], name)?;
                self.submit()?;
                Ok(Effect::None)
            }
            QuizEvent::Exit => {
                if self.view != QuizView::Dashboard {
                    self.reset_to_dashboard();
                }
                Ok(Effect::None)
            }
        }
    }

    fn require(&self, allowed: &[QuizView], event: &'static str) -> Result<(), SessionError> {
        if allowed.contains(&self.view) {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                event,
                view: self.view,
            })
        }
    }

    fn is_awaiting(&self, attempt: AttemptId) -> bool {
        self.view == QuizView::Loading && self.active_attempt == Some(attempt)
    }

    fn start_attempt(&mut self, chapter: Chapter) -> Effect {
        let attempt = self.last_attempt.next();
        self.last_attempt = attempt;
        self.active_attempt = Some(attempt);

        self.error = None;
        self.answers.clear();
        self.current_index = 0;
        self.score = None;
        self.questions.clear();
        self.selected_chapter = Some(chapter.clone());
        self.view = QuizView::Loading;

        Effect::Generate(GenerationTicket::new(attempt, chapter))
    }

    fn generation_succeeded(&mut self, attempt: AttemptId, questions: Vec<Question>) -> Effect {
        if !self.is_awaiting(attempt) {
            return Effect::Discarded;
        }

        let expected = self
            .selected_chapter
            .as_ref()
            .map_or(0, expected_question_count);
        if questions.len() != expected {
            self.abort(QuizFailure::Generation);
            return Effect::None;
        }

        self.questions = questions
            .into_iter()
            .enumerate()
            .map(|(index, question)| question.with_id(QuestionId::from_position(index)))
            .collect();
        self.current_index = 0;
        self.active_attempt = None;
        self.view = QuizView::Quiz;
        Effect::None
    }

    fn select_answer(&mut self, question_id: QuestionId, option: usize) -> Result<(), SessionError> {
        if !self.questions.iter().any(|q| q.id() == question_id) {
            return Err(SessionError::UnknownQuestion(question_id));
        }
        if option >= OPTION_COUNT {
            return Err(SessionError::OptionOutOfRange {
                question_id,
                option,
            });
        }
        self.answers.insert(question_id, option);
        Ok(())
    }

    fn submit(&mut self) -> Result<(), SessionError> {
        let unanswered = self.questions.len() - self.answered_count();
        if unanswered > 0 {
            return Err(SessionError::Unanswered { unanswered });
        }

        let score = self
            .questions
            .iter()
            .filter(|q| self.answers.get(&q.id()) == Some(&q.correct_answer_index()))
            .count();
        self.score = Some(score);
        self.view = QuizView::Results;
        Ok(())
    }

    fn abort(&mut self, failure: QuizFailure) {
        self.reset_to_dashboard();
        self.error = Some(failure);
    }

    fn reset_to_dashboard(&mut self) {
        self.view = QuizView::Dashboard;
        self.selected_chapter = None;
        self.questions.clear();
        self.answers.clear();
        self.current_index = 0;
        self.score = None;
        self.active_attempt = None;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
