//! Terminal front end for the chat widget.
//!
//! Reads lines from stdin and sends them to `DREAMIE_ENDPOINT`
//! (default `http://localhost:3000/api/chat`).

use dreamie_chat::widget::{ChatWidget, HttpTransport, render::render_text, transport::DEFAULT_ENDPOINT};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let endpoint = std::env::var("DREAMIE_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    let transport = HttpTransport::new(endpoint);
    tracing::info!(endpoint = transport.endpoint(), "chat client started");

    let mut widget = ChatWidget::new();
    widget.open();
    let mut shown = 0;
    shown = print_new(&widget, shown);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == "/quit" {
            break;
        }
        widget.set_input(line);
        if widget.submit(&transport).await {
            shown = print_new(&widget, shown);
        }
    }

    widget.close();
    Ok(())
}

/// Print transcript entries past `shown`; returns the new count.
fn print_new(widget: &ChatWidget, shown: usize) -> usize {
    if let Some(view) = widget.view() {
        let fresh = &view.bubbles[shown.min(view.bubbles.len())..];
        if !fresh.is_empty() {
            println!("{}", render_text(fresh));
        }
        view.bubbles.len()
    } else {
        shown
    }
}
