//! sms-notifier library
//!
//! SMS notifications for failed and unstable builds: recipient validation,
//! message composition and the dispatch decision a build host runs after
//! every build.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
