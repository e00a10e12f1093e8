use dreamie_chat::routes::create_router;
use dreamie_chat::services::provider::{
    Candidate, Content, GenerateResponse, GenerationConfig, GenerativeModel, Part, ProviderError,
    SafetySetting,
};
use dreamie_chat::state::AppState;
use dreamie_chat::widget::session::{CONNECT_FAILURE, GREETING};
use dreamie_chat::widget::{ChatWidget, HttpTransport, Message, Phase, Sender};

use std::sync::Arc;

/// Replies with the prompt reversed.
struct ReverseModel;

#[async_trait::async_trait]
impl GenerativeModel for ReverseModel {
    async fn generate_content(
        &self,
        prompt: &str,
        _safety_settings: &[SafetySetting],
        _generation_config: &GenerationConfig,
    ) -> Result<GenerateResponse, ProviderError> {
        Ok(GenerateResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Some("model".into()),
                    parts: vec![Part {
                        text: Some(prompt.chars().rev().collect()),
                    }],
                }),
                finish_reason: Some("STOP".into()),
            }],
            prompt_feedback: None,
        })
    }
}

async fn spawn_server(state: AppState) -> String {
    let app = create_router().with_state(Arc::new(state));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/chat")
}

#[tokio::test]
async fn each_send_appends_one_user_and_one_bot_message() {
    let url = spawn_server(AppState::new(Some(Arc::new(ReverseModel)))).await;
    let transport = HttpTransport::new(url);
    let mut widget = ChatWidget::new();

    for input in ["abc", "  hello world ", "x"] {
        let before = widget.transcript().len();
        widget.set_input(input);
        assert!(widget.submit(&transport).await);

        let transcript = widget.transcript();
        assert_eq!(transcript.len(), before + 2);
        assert_eq!(transcript[before], Message::user(input.trim()));
        assert_eq!(transcript[before + 1].sender, Sender::Bot);
        assert_eq!(
            transcript[before + 1].text,
            input.trim().chars().rev().collect::<String>()
        );
        assert_eq!(widget.phase(), Phase::Idle);
    }

    assert_eq!(widget.transcript()[0], Message::bot(GREETING));
}

#[tokio::test]
async fn blank_input_is_not_sent() {
    let url = spawn_server(AppState::new(Some(Arc::new(ReverseModel)))).await;
    let transport = HttpTransport::new(url);
    let mut widget = ChatWidget::new();

    widget.set_input("    ");
    assert!(!widget.submit(&transport).await);
    assert_eq!(widget.transcript().len(), 1);
}

#[tokio::test]
async fn server_error_becomes_inline_bubble() {
    let url = spawn_server(AppState::unconfigured()).await;
    let transport = HttpTransport::new(url);
    let mut widget = ChatWidget::new();

    widget.set_input("hello");
    widget.submit(&transport).await;

    assert_eq!(
        widget.transcript().last().unwrap().text,
        "Sorry, something went wrong: AI Service is not configured on the server due to missing API key."
    );
    assert!(!widget.is_busy());
}

#[tokio::test]
async fn unreachable_server_uses_connect_message() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = HttpTransport::new(format!("http://{addr}/api/chat"));
    let mut widget = ChatWidget::new();
    widget.set_input("hello");
    widget.submit(&transport).await;

    assert_eq!(widget.transcript().last(), Some(&Message::bot(CONNECT_FAILURE)));
    assert_eq!(widget.phase(), Phase::Idle);
}
