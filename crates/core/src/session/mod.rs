//! Quiz session state machine: DASHBOARD → LOADING → QUIZ → RESULTS.

mod event;
mod machine;
mod score;
mod state;

pub use event::{
    CHAPTER_QUESTION_COUNT, Effect, GenerationTicket, MOCK_QUESTION_COUNT, QuizEvent, QuizFailure,
    expected_question_count,
};
pub use machine::SessionError;
pub use score::{PassPolicy, ScoreReport, percentage};
pub use state::{QuestionReview, QuizProgress, QuizView, SessionState};
