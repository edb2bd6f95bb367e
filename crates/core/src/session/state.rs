use std::collections::BTreeMap;
use std::fmt;

use crate::model::{AttemptId, Chapter, Question, QuestionId};

use super::event::QuizFailure;
use super::score::{PassPolicy, ScoreReport};

//
// ─── VIEW ──────────────────────────────────────────────────────────────────────
//

/// Lifecycle phase of the session. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuizView {
    #[default]
    Dashboard,
    Loading,
    Quiz,
    Results,
}

impl fmt::Display for QuizView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuizView::Dashboard => "DASHBOARD",
            QuizView::Loading => "LOADING",
            QuizView::Quiz => "QUIZ",
            QuizView::Results => "RESULTS",
        };
        f.write_str(name)
    }
}

//
// ─── READ MODELS ───────────────────────────────────────────────────────────────
//

/// Position of the question pointer, for progress display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based position of the current question.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
}

/// One line of the results answer key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionReview<'a> {
    pub question: &'a Question,
    pub selected: Option<usize>,
    pub is_correct: bool,
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Single owned record of the quiz session.
///
/// Mutated only through [`SessionState::apply`]; everything else is read-only
/// accessors and values derived on demand.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub(super) view: QuizView,
    pub(super) selected_chapter: Option<Chapter>,
    pub(super) questions: Vec<Question>,
    pub(super) current_index: usize,
    pub(super) answers: BTreeMap<QuestionId, usize>,
    pub(super) score: Option<usize>,
    pub(super) error: Option<QuizFailure>,
    pub(super) active_attempt: Option<AttemptId>,
    pub(super) last_attempt: AttemptId,
}

impl SessionState {
    /// Fresh state on the dashboard with empty collections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn view(&self) -> QuizView {
        self.view
    }

    #[must_use]
    pub fn selected_chapter(&self) -> Option<&Chapter> {
        self.selected_chapter.as_ref()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<QuestionId, usize> {
        &self.answers
    }

    #[must_use]
    pub fn answer(&self, question_id: QuestionId) -> Option<usize> {
        self.answers.get(&question_id).copied()
    }

    /// Set only once the attempt has been submitted.
    #[must_use]
    pub fn score(&self) -> Option<usize> {
        self.score
    }

    #[must_use]
    pub fn error(&self) -> Option<QuizFailure> {
        self.error
    }

    /// Tag of the generation currently awaited, if any.
    #[must_use]
    pub fn active_attempt(&self) -> Option<AttemptId> {
        self.active_attempt
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.view == QuizView::Quiz || self.view == QuizView::Results {
            self.questions.get(self.current_index)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_current_answered(&self) -> bool {
        self.current_question()
            .is_some_and(|question| self.answers.contains_key(&question.id()))
    }

    #[must_use]
    pub fn all_answered(&self) -> bool {
        self.questions
            .iter()
            .all(|question| self.answers.contains_key(&question.id()))
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|question| self.answers.contains_key(&question.id()))
            .count()
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            position: if self.questions.is_empty() {
                0
            } else {
                self.current_index + 1
            },
            total: self.questions.len(),
            answered: self.answered_count(),
        }
    }

    /// Score, percentage and pass flag; `None` before submission.
    #[must_use]
    pub fn score_report(&self, policy: &PassPolicy) -> Option<ScoreReport> {
        self.score
            .map(|score| ScoreReport::new(score, self.questions.len(), policy))
    }

    /// Per-question answer key, in question order.
    #[must_use]
    pub fn review(&self) -> Vec<QuestionReview<'_>> {
        self.questions
            .iter()
            .map(|question| {
                let selected = self.answer(question.id());
                QuestionReview {
                    question,
                    selected,
                    is_correct: selected.is_some_and(|option| question.is_correct(option)),
                }
            })
            .collect()
    }
}
