use super::GenerationScope;

const RESPONSE_SHAPE: &str = r#"Respond with a single JSON object and nothing else:
{"questions": [{"text": "...", "options": ["...", "...", "...", "..."], "correctAnswerIndex": 0, "explanation": "..."}]}"#;

/// Prompt for an IC38 multiple-choice quiz in Hindi.
#[must_use]
pub fn build_prompt(scope: &GenerationScope) -> String {
    let count = scope.expected_count();
    let topic = match scope {
        GenerationScope::SingleChapter {
            chapter_id,
            title,
            description,
        } => format!(
            "Create a {count}-question multiple choice quiz (MCQ) for the IC38 Insurance Agents Exam in Hindi.\n\
             Topic: Chapter {chapter_id} - {title}\n\
             Description: {description}\n\
             Context: This is for Indian Life Insurance Agents. Ensure questions align with the Insurance Institute of India syllabus.\n\
             Difficulty: Mix of Easy, Medium, and Hard."
        ),
        GenerationScope::FullSyllabus => format!(
            "Create a comprehensive {count}-question mock exam (MCQ) for the IC38 Insurance Agents syllabus in Hindi.\n\
             Scope: All 21 chapters (Common, Life, and Health Insurance sections).\n\
             Context: This is a full practice test for the IRDAI IC38 exam.\n\
             Distribute questions across all 21 chapters to cover the entire syllabus, \
             mixing theoretical and practical scenario-based questions."
        ),
    };

    format!(
        "{topic}\n\n\
         Requirements:\n\
         - Exactly {count} questions.\n\
         - Question text, options and explanations must be in Hindi (Devanagari script).\n\
         - Exactly 4 options per question.\n\
         - correctAnswerIndex is the 0-based index (0-3) of the correct option.\n\
         - explanation briefly says why the answer is correct.\n\n\
         {RESPONSE_SHAPE}"
    )
}
