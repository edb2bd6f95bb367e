mod chapter;
mod ids;
mod question;

pub use chapter::{Chapter, Section};
pub use ids::{AttemptId, ChapterId, ParseIdError, QuestionId};
pub use question::{OPTION_COUNT, Question, QuestionDraft, QuestionError};
