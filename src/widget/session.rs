//! Client-side chat session: transcript, input buffer, busy flag.
//!
//! Only two transitions mutate the conversation: [`ChatWidget::begin_send`]
//! (Idle -> Sending) and [`ChatWidget::finish_send`] (Sending -> Idle).

use serde::{Deserialize, Serialize};

use super::render::{WidgetView, render};
use super::transport::{ApiOutcome, ChatTransport, TransportError};

pub const GREETING: &str = "I'm Dreamie, your helpful AI assistant. How can I help you?";
pub const CONNECT_FAILURE: &str =
    "Sorry, I couldn't connect. Please check your connection and try again.";
const API_FAILURE_PREFIX: &str = "Sorry, something went wrong: ";
const API_FAILURE_FALLBACK: &str = "Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self { sender: Sender::User, text: text.into() }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { sender: Sender::Bot, text: text.into() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Sending,
}

#[derive(Clone, Debug)]
pub struct ChatWidget {
    transcript: Vec<Message>,
    input: String,
    busy: bool,
    visible: bool,
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatWidget {
    /// A fresh, hidden widget seeded with the bot greeting.
    pub fn new() -> Self {
        Self {
            transcript: vec![Message::bot(GREETING)],
            input: String::new(),
            busy: false,
            visible: false,
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn phase(&self) -> Phase {
        if self.busy { Phase::Sending } else { Phase::Idle }
    }

    pub fn can_send(&self) -> bool {
        !self.busy && !self.input.trim().is_empty()
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Accept the current input for sending.
    ///
    /// Returns the trimmed text to put on the wire, or `None` (leaving every
    /// field untouched) when the input is blank or a request is in flight.
    pub fn begin_send(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let text = self.input.trim().to_string();
        self.transcript.push(Message::user(text.clone()));
        self.input.clear();
        self.busy = true;
        Some(text)
    }

    /// Record the outcome of the outstanding request as one bot message.
    ///
    /// Ignored when nothing is in flight.
    pub fn finish_send(&mut self, result: Result<ApiOutcome, TransportError>) {
        if !self.busy {
            tracing::warn!("response arrived with no request in flight; ignoring");
            return;
        }

        let text = match result {
            Ok(ApiOutcome::Reply(reply)) => reply,
            Ok(ApiOutcome::Rejected { status, error }) => {
                tracing::error!(status, error = ?error, "chat API error");
                let detail = error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| API_FAILURE_FALLBACK.to_string());
                format!("{API_FAILURE_PREFIX}{detail}")
            }
            Err(e) => {
                tracing::error!(error = %e, "chat network error");
                CONNECT_FAILURE.to_string()
            }
        };

        self.transcript.push(Message::bot(text));
        self.busy = false;
    }

    /// Run a whole send cycle through `transport`. Returns `false` when the
    /// input was not accepted.
    pub async fn submit(&mut self, transport: &dyn ChatTransport) -> bool {
        let Some(text) = self.begin_send() else {
            return false;
        };
        let result = transport.send(&text).await;
        self.finish_send(result);
        true
    }

    /// `None` while hidden; otherwise the rendered widget, scrolled to the
    /// latest bubble.
    pub fn view(&self) -> Option<WidgetView> {
        if !self.visible {
            return None;
        }
        let bubbles = render(&self.transcript, self.busy);
        let scroll_to = bubbles.len().checked_sub(1);
        Some(WidgetView {
            bubbles,
            input: self.input.clone(),
            input_enabled: !self.busy,
            send_enabled: self.can_send(),
            scroll_to,
        })
    }
}
