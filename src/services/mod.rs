pub mod notifications;

pub use notifications::{NotificationDispatcher, NotificationStep};
