//! Report assembly and delivery.
//!
//! Renders per-brand analysis sections from insight summaries, optionally
//! upgrades them through a chat-completion service (falling back to the
//! local rendering whenever that service misbehaves), and delivers the
//! finished report to a webhook. The report layer never fails a run: a
//! brand with zero ads still gets a section, and a dead summarization or
//! notification endpoint only costs a log line.

mod error;
mod notify;
mod render;
mod summarizer;

pub use error::ReportError;
pub use notify::WebhookNotifier;
pub use render::{render_brand_section, render_failure_section, render_report};
pub use summarizer::SummaryClient;
