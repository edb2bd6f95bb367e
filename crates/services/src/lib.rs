#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod quiz_session;

pub use error::{GenerationError, SchemaError};
pub use generator::{GenerationScope, GeneratorConfig, HttpQuestionGenerator, QuestionGenerator};
pub use quiz_session::{PendingGeneration, QuizSession};
