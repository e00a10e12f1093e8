//! Chat widget: the client half of the chat exchange, independent of any UI
//! toolkit. A front end feeds it input, drives sends through a
//! [`ChatTransport`], and draws whatever [`ChatWidget::view`] returns.

pub mod render;
pub mod session;
pub mod transport;

pub use render::{Align, Bubble, BubbleKind, WidgetView, render};
pub use session::{ChatWidget, Message, Phase, Sender};
pub use transport::{ApiOutcome, ChatTransport, HttpTransport, TransportError};
