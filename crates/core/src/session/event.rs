use crate::model::{AttemptId, Chapter, Question, QuestionId};

/// Questions generated for a single-chapter attempt.
pub const CHAPTER_QUESTION_COUNT: usize = 10;

/// Questions generated for the full mock exam.
pub const MOCK_QUESTION_COUNT: usize = 30;

/// Number of questions an attempt on `chapter` must receive.
#[must_use]
pub fn expected_question_count(chapter: &Chapter) -> usize {
    if chapter.is_mock() {
        MOCK_QUESTION_COUNT
    } else {
        CHAPTER_QUESTION_COUNT
    }
}

//
// ─── FAILURES ──────────────────────────────────────────────────────────────────
//

/// Why an attempt was aborted, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizFailure {
    /// No credential is configured; no request was attempted.
    Configuration,
    /// The service failed or returned something unusable.
    Generation,
}

impl QuizFailure {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            QuizFailure::Configuration => {
                "API कुंजी उपलब्ध नहीं है। कृपया अपनी API कुंजी सेट करें और पुनः प्रयास करें।"
            }
            QuizFailure::Generation => {
                "प्रश्न बनाने में विफल। कृपया सुनिश्चित करें कि आपकी API कुंजी मान्य है और पुनः प्रयास करें।"
            }
        }
    }
}

//
// ─── EVENTS ────────────────────────────────────────────────────────────────────
//

/// Everything that can drive the session state machine.
///
/// User intents map 1:1 to presentation actions; the two `Generation*`
/// variants are completions fed back from the generator boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizEvent {
    StartAttempt(Chapter),
    GenerationSucceeded {
        attempt: AttemptId,
        questions: Vec<Question>,
    },
    GenerationFailed {
        attempt: AttemptId,
        failure: QuizFailure,
    },
    SelectAnswer {
        question_id: QuestionId,
        option: usize,
    },
    Next,
    Prev,
    Submit,
    Retry,
    Exit,
}

impl QuizEvent {
    /// Short name used in errors and logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            QuizEvent::StartAttempt(_) => "start",
            QuizEvent::GenerationSucceeded { .. } => "generation-succeeded",
            QuizEvent::GenerationFailed { .. } => "generation-failed",
            QuizEvent::SelectAnswer { .. } => "select-answer",
            QuizEvent::Next => "next",
            QuizEvent::Prev => "prev",
            QuizEvent::Submit => "submit",
            QuizEvent::Retry => "retry",
            QuizEvent::Exit => "exit",
        }
    }
}

//
// ─── EFFECTS ───────────────────────────────────────────────────────────────────
//

/// Request to generate questions for the attempt tagged `attempt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTicket {
    attempt: AttemptId,
    chapter: Chapter,
}

impl GenerationTicket {
    pub(crate) fn new(attempt: AttemptId, chapter: Chapter) -> Self {
        Self { attempt, chapter }
    }

    #[must_use]
    pub fn attempt(&self) -> AttemptId {
        self.attempt
    }

    #[must_use]
    pub fn chapter(&self) -> &Chapter {
        &self.chapter
    }

    #[must_use]
    pub fn expected_count(&self) -> usize {
        expected_question_count(&self.chapter)
    }

    /// Completion event for a successful generation.
    #[must_use]
    pub fn succeeded(&self, questions: Vec<Question>) -> QuizEvent {
        QuizEvent::GenerationSucceeded {
            attempt: self.attempt,
            questions,
        }
    }

    /// Completion event for a failed generation.
    #[must_use]
    pub fn failed(&self, failure: QuizFailure) -> QuizEvent {
        QuizEvent::GenerationFailed {
            attempt: self.attempt,
            failure,
        }
    }
}

/// What the caller must do after a successful transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run the generator and feed the result back as a completion event.
    Generate(GenerationTicket),
    /// A completion for an attempt that is no longer active was dropped.
    Discarded,
}
