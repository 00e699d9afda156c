pub mod build;
pub mod notification;

pub use build::{BuildOutcome, BuildStatus};
pub use notification::{DispatchEffect, DispatchOutcome, NotificationConfig, SmsCredentials};
