use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::QuestionId;

/// Every question carries exactly this many options.
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Reasons a raw question cannot be accepted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("expected {OPTION_COUNT} options, got {0}")]
    OptionCount(usize),

    #[error("option {0} is blank")]
    BlankOption(usize),

    #[error("correct answer index {0} is outside 0..{OPTION_COUNT}")]
    AnswerOutOfRange(i64),
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A validated multiple-choice question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: [String; OPTION_COUNT],
    correct_answer_index: usize,
    explanation: String,
}

impl Question {
    /// Builds a question from already-checked parts.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` under the same rules as [`QuestionDraft::validate`].
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct_answer_index: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        QuestionDraft {
            text: Some(text.into()),
            options: Some(options.into()),
            correct_answer_index: Some(i64::try_from(correct_answer_index).unwrap_or(i64::MAX)),
            explanation: Some(explanation.into()),
        }
        .validate(id)
    }

    /// Same question under a different id.
    #[must_use]
    pub(crate) fn with_id(self, id: QuestionId) -> Self {
        Self { id, ..self }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_answer_index(&self) -> usize {
        self.correct_answer_index
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer_index
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Untrusted question as received from a generator.
///
/// Any `id` in the raw payload is ignored; ids are assigned by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub correct_answer_index: Option<i64>,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl QuestionDraft {
    /// Check field presence, option arity and answer range, then assign `id`.
    ///
    /// # Errors
    ///
    /// Returns the first `QuestionError` found; nothing is partially accepted.
    pub fn validate(self, id: QuestionId) -> Result<Question, QuestionError> {
        let text = required(self.text, "text")?;
        let options = self.options.ok_or(QuestionError::MissingField("options"))?;
        let correct = self
            .correct_answer_index
            .ok_or(QuestionError::MissingField("correctAnswerIndex"))?;
        let explanation = required(self.explanation, "explanation")?;

        let options: [String; OPTION_COUNT] = options
            .try_into()
            .map_err(|rejected: Vec<String>| QuestionError::OptionCount(rejected.len()))?;
        if let Some(blank) = options.iter().position(|option| option.trim().is_empty()) {
            return Err(QuestionError::BlankOption(blank));
        }

        let correct_answer_index = usize::try_from(correct)
            .ok()
            .filter(|index| *index < OPTION_COUNT)
            .ok_or(QuestionError::AnswerOutOfRange(correct))?;

        Ok(Question {
            id,
            text,
            options,
            correct_answer_index,
            explanation,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, QuestionError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(QuestionError::MissingField(field)),
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
