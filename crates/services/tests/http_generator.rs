use exam_core::Catalog;
use serde_json::json;
use services::{GenerationError, GeneratorConfig, HttpQuestionGenerator, QuestionGenerator, SchemaError};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn questions_json(count: usize) -> String {
    let questions: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "id": 1,
                "text": format!("प्रश्न {i}"),
                "options": ["क", "ख", "ग", "घ"],
                "correctAnswerIndex": i % 4,
                "explanation": "व्याख्या"
            })
        })
        .collect();
    json!({ "questions": questions }).to_string()
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
}

fn generator_for(server: &MockServer) -> HttpQuestionGenerator {
    let config = GeneratorConfig::new("test-key")
        .with_base_url(format!("{}/v1/", server.uri()))
        .with_model("test-model");
    HttpQuestionGenerator::new(Some(config))
}

#[tokio::test]
async fn chapter_request_returns_ten_questions_with_dense_ids() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "response_format": { "type": "json_object" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&questions_json(10))))
        .expect(1)
        .mount(&server)
        .await;

    let generator = generator_for(&server);
    let catalog = Catalog::ic38();
    let chapter = &catalog.chapters()[0];
    let questions = generator.generate_for_chapter(chapter).await.unwrap();

    assert_eq!(questions.len(), 10);
    let ids: Vec<u32> = questions.iter().map(|q| q.id().value()).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    assert_eq!(questions[2].correct_answer_index(), 2);
}

#[tokio::test]
async fn mock_exam_returns_thirty_questions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&questions_json(30))))
        .mount(&server)
        .await;

    let questions = generator_for(&server)
        .generate_mock_exam()
        .await
        .unwrap();
    assert_eq!(questions.len(), 30);
}

#[tokio::test]
async fn server_error_is_reported_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = generator_for(&server)
        .generate_mock_exam()
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::HttpStatus(status) if status.as_u16() == 500));
}

#[tokio::test]
async fn short_question_list_is_a_schema_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&questions_json(8))))
        .mount(&server)
        .await;

    let catalog = Catalog::ic38();
    let chapter = &catalog.chapters()[4];
    let err = generator_for(&server)
        .generate_for_chapter(chapter)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        GenerationError::Schema(SchemaError::WrongCount {
            expected: 10,
            actual: 8
        })
    ));
}

#[tokio::test]
async fn non_json_content_is_a_schema_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("not json at all")))
        .mount(&server)
        .await;

    let err = generator_for(&server)
        .generate_mock_exam()
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::Schema(SchemaError::InvalidJson(_))));
}

#[tokio::test]
async fn missing_content_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = generator_for(&server)
        .generate_mock_exam()
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::EmptyResponse));
}

#[tokio::test]
async fn missing_key_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let generator = HttpQuestionGenerator::new(None);
    let err = generator.generate_mock_exam().await.unwrap_err();
    assert!(matches!(err, GenerationError::Configuration));
    assert_eq!(err.failure(), exam_core::QuizFailure::Configuration);
}
