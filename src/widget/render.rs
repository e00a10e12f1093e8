use super::session::{Message, Sender};

pub const THINKING_TEXT: &str = "Bot is thinking...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleKind {
    Message,
    Thinking,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    pub align: Align,
    pub kind: BubbleKind,
    pub text: String,
}

/// Everything a front end needs to draw the open widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    pub bubbles: Vec<Bubble>,
    pub input: String,
    pub input_enabled: bool,
    pub send_enabled: bool,
    /// Index of the bubble to keep scrolled into view.
    pub scroll_to: Option<usize>,
}

/// User bubbles sit at the end, bot bubbles at the start, and a thinking
/// indicator trails the transcript while a request is out.
pub fn render(transcript: &[Message], busy: bool) -> Vec<Bubble> {
    let mut bubbles: Vec<Bubble> = transcript
        .iter()
        .map(|m| Bubble {
            align: match m.sender {
                Sender::User => Align::End,
                Sender::Bot => Align::Start,
            },
            kind: BubbleKind::Message,
            text: m.text.clone(),
        })
        .collect();

    if busy {
        bubbles.push(Bubble {
            align: Align::Start,
            kind: BubbleKind::Thinking,
            text: THINKING_TEXT.to_string(),
        });
    }
    bubbles
}

/// Plain-text rendering for terminals.
pub fn render_text(bubbles: &[Bubble]) -> String {
    bubbles
        .iter()
        .map(|b| match (b.kind, b.align) {
            (BubbleKind::Thinking, _) => format!("  ... {}", b.text),
            (BubbleKind::Message, Align::End) => format!("you > {}", b.text),
            (BubbleKind::Message, Align::Start) => format!("bot > {}", b.text),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
