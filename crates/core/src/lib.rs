#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod session;

pub use catalog::{Catalog, SectionGroup};
pub use session::{Effect, PassPolicy, QuizEvent, QuizFailure, QuizView, SessionError, SessionState};
