use exam_core::model::{ChapterId, OPTION_COUNT, Question, QuestionId};
use exam_core::session::{Effect, GenerationTicket, PassPolicy, QuizEvent, QuizView, SessionError, SessionState};
use exam_core::Catalog;

fn generated(count: usize) -> Vec<Question> {
    (0..count)
        .map(|index| {
            Question::new(
                QuestionId::from_position(index),
                format!("प्रश्न {}", index + 1),
                ["क".into(), "ख".into(), "ग".into(), "घ".into()],
                (index * 3) % OPTION_COUNT,
                "व्याख्या",
            )
            .unwrap()
        })
        .collect()
}

fn expect_ticket(effect: Effect) -> GenerationTicket {
    match effect {
        Effect::Generate(ticket) => ticket,
        other => panic!("expected a generation request, got {other:?}"),
    }
}

fn select(state: &mut SessionState, question: &Question, option: usize) {
    state
        .apply(QuizEvent::SelectAnswer {
            question_id: question.id(),
            option,
        })
        .unwrap();
}

#[test]
fn chapter_attempt_scores_seven_of_ten() {
    let catalog = Catalog::ic38();
    let chapter = catalog.find(ChapterId::new(3)).unwrap().clone();
    let mut state = SessionState::new();

    let ticket = expect_ticket(state.apply(QuizEvent::StartAttempt(chapter)).unwrap());
    assert_eq!(ticket.expected_count(), 10);
    state.apply(ticket.succeeded(generated(10))).unwrap();
    assert_eq!(state.view(), QuizView::Quiz);
    assert_eq!(state.questions().len(), 10);

    let questions = state.questions().to_vec();
    // Questions 1-3 wrong, 4-9 right.
    for (index, question) in questions.iter().take(9).enumerate() {
        let option = if index < 3 {
            (question.correct_answer_index() + 1) % OPTION_COUNT
        } else {
            question.correct_answer_index()
        };
        select(&mut state, question, option);
        state.apply(QuizEvent::Next).unwrap();
    }
    assert_eq!(state.current_index(), 9);
    assert!(!state.is_current_answered());

    let err = state.apply(QuizEvent::Submit).unwrap_err();
    assert_eq!(err, SessionError::Unanswered { unanswered: 1 });
    assert_eq!(state.view(), QuizView::Quiz);

    select(&mut state, &questions[9], questions[9].correct_answer_index());
    assert!(state.all_answered());
    state.apply(QuizEvent::Submit).unwrap();

    assert_eq!(state.view(), QuizView::Results);
    assert_eq!(state.score(), Some(7));
    let report = state.score_report(&PassPolicy::default()).unwrap();
    assert_eq!(report.percentage, 70);
    assert!(report.passed);

    let review = state.review();
    assert_eq!(review.len(), 10);
    assert_eq!(review.iter().filter(|r| r.is_correct).count(), 7);
    assert!(!review[0].is_correct);
    assert!(review[9].is_correct);
}

#[test]
fn mock_exam_all_correct() {
    let catalog = Catalog::ic38();
    let mut state = SessionState::new();

    let ticket = expect_ticket(
        state
            .apply(QuizEvent::StartAttempt(catalog.mock_chapter().clone()))
            .unwrap(),
    );
    assert_eq!(ticket.expected_count(), 30);
    state.apply(ticket.succeeded(generated(30))).unwrap();
    assert_eq!(state.questions().len(), 30);

    for question in state.questions().to_vec() {
        select(&mut state, &question, question.correct_answer_index());
    }
    state.apply(QuizEvent::Submit).unwrap();

    assert_eq!(state.score(), Some(30));
    let report = state.score_report(&PassPolicy::default()).unwrap();
    assert_eq!(report.percentage, 100);
    assert!(report.passed);
}

#[test]
fn final_selection_is_what_gets_scored() {
    let mut state = SessionState::new();
    let chapter = Catalog::ic38().chapters()[0].clone();
    let ticket = expect_ticket(state.apply(QuizEvent::StartAttempt(chapter)).unwrap());
    state.apply(ticket.succeeded(generated(10))).unwrap();

    let questions = state.questions().to_vec();
    for question in &questions {
        select(&mut state, question, question.correct_answer_index());
    }
    // Change the mind on the first two.
    for question in questions.iter().take(2) {
        select(&mut state, question, (question.correct_answer_index() + 2) % OPTION_COUNT);
    }
    state.apply(QuizEvent::Submit).unwrap();
    assert_eq!(state.score(), Some(8));
}

#[test]
fn retry_after_results_starts_over() {
    let mut state = SessionState::new();
    let chapter = Catalog::ic38().chapters()[5].clone();
    let first = expect_ticket(state.apply(QuizEvent::StartAttempt(chapter)).unwrap());
    state.apply(first.succeeded(generated(10))).unwrap();
    for question in state.questions().to_vec() {
        select(&mut state, &question, 0);
    }
    state.apply(QuizEvent::Next).unwrap();
    state.apply(QuizEvent::Submit).unwrap();

    let second = expect_ticket(state.apply(QuizEvent::Retry).unwrap());
    assert_ne!(first.attempt(), second.attempt());
    assert_eq!(second.chapter().id(), ChapterId::new(6));

    // The old ticket can no longer land.
    assert_eq!(state.apply(first.succeeded(generated(10))).unwrap(), Effect::Discarded);

    state.apply(second.succeeded(generated(10))).unwrap();
    assert_eq!(state.view(), QuizView::Quiz);
    assert!(state.answers().is_empty());
    assert_eq!(state.current_index(), 0);
    assert_eq!(state.score(), None);
}
