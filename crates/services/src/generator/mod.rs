//! Contract for the external question generator.

mod config;
mod http;
pub mod payload;
mod prompt;

use async_trait::async_trait;

use exam_core::model::{Chapter, ChapterId, Question};
use exam_core::session::{CHAPTER_QUESTION_COUNT, MOCK_QUESTION_COUNT};

use crate::error::GenerationError;

pub use config::GeneratorConfig;
pub use http::HttpQuestionGenerator;
pub use prompt::build_prompt;

/// What a generation request covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationScope {
    SingleChapter {
        chapter_id: ChapterId,
        title: String,
        description: String,
    },
    FullSyllabus,
}

impl GenerationScope {
    /// Mock chapter (`id = 0`) maps to the full syllabus, anything else to itself.
    #[must_use]
    pub fn for_chapter(chapter: &Chapter) -> Self {
        if chapter.is_mock() {
            Self::FullSyllabus
        } else {
            Self::single(chapter)
        }
    }

    fn single(chapter: &Chapter) -> Self {
        Self::SingleChapter {
            chapter_id: chapter.id(),
            title: chapter.title().to_owned(),
            description: chapter.description().to_owned(),
        }
    }

    #[must_use]
    pub fn expected_count(&self) -> usize {
        match self {
            Self::SingleChapter { .. } => CHAPTER_QUESTION_COUNT,
            Self::FullSyllabus => MOCK_QUESTION_COUNT,
        }
    }
}

/// Produces validated questions for a scope.
///
/// Implementations must return exactly `scope.expected_count()` questions with
/// ids `1..=n` in order, or fail as a whole.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, scope: &GenerationScope) -> Result<Vec<Question>, GenerationError>;

    async fn generate_for_chapter(
        &self,
        chapter: &Chapter,
    ) -> Result<Vec<Question>, GenerationError> {
        self.generate(&GenerationScope::single(chapter)).await
    }

    async fn generate_mock_exam(&self) -> Result<Vec<Question>, GenerationError> {
        self.generate(&GenerationScope::FullSyllabus).await
    }
}
