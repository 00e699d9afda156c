//! SMS notification for finished builds.
//!
//! The `NotificationStep` trait is what a build host calls; the
//! `SmsSender` trait is the seam where an SMS provider plugs in.

mod console_sender;
mod listener;
mod provider;

pub mod dispatcher;
pub mod message;
pub mod recipients;

pub use console_sender::ConsoleSender;
pub use dispatcher::{NotificationDispatcher, NotificationStep};
pub use listener::{BuildListener, LogLevel, RecordingListener, TracingListener};
pub use message::compose_message;
pub use provider::{SmsError, SmsSender, SmsSenderFactory};
pub use recipients::{FormValidation, check_recipients, explain_recipients, parse_recipients};
