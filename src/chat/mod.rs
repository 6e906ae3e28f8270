//! Canned-reply chatbot shown on the public pages.
//!
//! # Architecture
//!
//! - `intent` - keyword classifier and quick action keys
//! - `responses` - static reply table
//! - `session` - transcript and typing flag, no clocks
//! - `bot` - reply scheduling on top of a session
//! - `trigger` - auto-show / auto-close state machine and its timers
//! - `widget` - ties bot and trigger together for one mounted widget
//!
//! # Usage
//!
//! ```rust,no_run
//! use carehub::chat::ChatWidget;
//! use carehub::config::ChatbotConfig;
//!
//! # async fn example() {
//! let widget = ChatWidget::new(&ChatbotConfig::default());
//! widget.start();
//! widget.open();
//! widget.submit("How much does it cost?");
//! # }
//! ```
mod bot;
mod intent;
mod responses;
mod session;
mod timer;
mod trigger;
mod widget;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use bot::ChatBot;
pub use intent::{Intent, QuickAction, classify};
pub use responses::ResponseTable;
pub use session::{ChatSession, Message, Sender};
pub use timer::TimerHandle;
pub use trigger::{Trigger, TriggerPhase, Visibility};
pub use widget::ChatWidget;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
