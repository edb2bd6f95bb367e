//! Schema validation for generator output.

use serde::Deserialize;

use exam_core::model::{Question, QuestionDraft, QuestionId};

use crate::error::SchemaError;

#[derive(Debug, Deserialize)]
struct QuestionsPayload {
    #[serde(default)]
    questions: Option<Vec<QuestionDraft>>,
}

/// Parse a raw `{ "questions": [...] }` payload into exactly `expected` questions.
///
/// Ids in the payload are ignored and reassigned `1..=n` by position.
///
/// # Errors
///
/// Returns `SchemaError` if the text is not JSON, lacks `questions`, has the
/// wrong number of entries, or any entry fails validation.
pub fn parse_questions(raw: &str, expected: usize) -> Result<Vec<Question>, SchemaError> {
    let payload: QuestionsPayload = serde_json::from_str(strip_code_fence(raw))?;
    let drafts = payload.questions.ok_or(SchemaError::MissingQuestions)?;
    if drafts.len() != expected {
        return Err(SchemaError::WrongCount {
            expected,
            actual: drafts.len(),
        });
    }

    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            draft
                .validate(QuestionId::from_position(index))
                .map_err(|source| SchemaError::Question { index, source })
        })
        .collect()
}

/// Models sometimes wrap JSON in a markdown fence even in JSON mode.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::model::QuestionError;
    use serde_json::json;

    fn entry(text: &str, answer: i64) -> serde_json::Value {
        json!({
            "text": text,
            "options": ["क", "ख", "ग", "घ"],
            "correctAnswerIndex": answer,
            "explanation": "व्याख्या"
        })
    }

    fn payload(count: usize) -> String {
        let questions: Vec<_> = (0..count).map(|i| entry(&format!("Q{i}"), 1)).collect();
        json!({ "questions": questions }).to_string()
    }

    #[test]
    fn ids_are_reassigned_by_position() {
        let raw = json!({
            "questions": [
                { "id": 7, "text": "A", "options": ["1","2","3","4"], "correctAnswerIndex": 0, "explanation": "e" },
                { "id": 7, "text": "B", "options": ["1","2","3","4"], "correctAnswerIndex": 3, "explanation": "e" },
                { "text": "C", "options": ["1","2","3","4"], "correctAnswerIndex": 2, "explanation": "e" }
            ]
        })
        .to_string();
        let questions = parse_questions(&raw, 3).unwrap();
        let ids: Vec<u32> = questions.iter().map(|q| q.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(questions[1].text(), "B");
    }

    #[test]
    fn accepts_exact_count() {
        assert_eq!(parse_questions(&payload(10), 10).unwrap().len(), 10);
    }

    #[test]
    fn rejects_wrong_count() {
        let err = parse_questions(&payload(9), 10).unwrap_err();
        assert!(matches!(err, SchemaError::WrongCount { expected: 10, actual: 9 }));
    }

    #[test]
    fn rejects_non_json() {
        let err = parse_questions("sorry, I cannot help with that", 10).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidJson(_)));
    }

    #[test]
    fn rejects_missing_questions() {
        let err = parse_questions(r#"{"items": []}"#, 10).unwrap_err();
        assert!(matches!(err, SchemaError::MissingQuestions));
    }

    #[test]
    fn one_bad_entry_rejects_everything() {
        let mut questions: Vec<_> = (0..10).map(|i| entry(&format!("Q{i}"), 0)).collect();
        questions[4] = json!({
            "text": "Q4",
            "options": ["a", "b", "c"],
            "correctAnswerIndex": 0,
            "explanation": "e"
        });
        let raw = json!({ "questions": questions }).to_string();
        let err = parse_questions(&raw, 10).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::Question {
                index: 4,
                source: QuestionError::OptionCount(3)
            }
        ));
    }

    #[test]
    fn rejects_missing_field() {
        let mut questions: Vec<_> = (0..10).map(|i| entry(&format!("Q{i}"), 0)).collect();
        questions[0] = json!({ "text": "Q0", "options": ["a","b","c","d"], "correctAnswerIndex": 1 });
        let raw = json!({ "questions": questions }).to_string();
        let err = parse_questions(&raw, 10).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::Question {
                index: 0,
                source: QuestionError::MissingField("explanation")
            }
        ));
    }

    #[test]
    fn strips_markdown_fence() {
        let fenced = format!("```json\n{}\n```", payload(10));
        assert_eq!(parse_questions(&fenced, 10).unwrap().len(), 10);
        assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
    }
}
