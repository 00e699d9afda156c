//! Command handlers for CLI operations

pub mod check;
pub mod notify;

pub use check::CheckCommandHandler;
pub use notify::{NotifyCommandHandler, NotifyReport};
