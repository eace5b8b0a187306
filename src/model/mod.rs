pub mod question;
pub mod user;

pub use question::{InterviewQuestion, Section};
pub use user::{Profile, User};

use chrono::Local;

/// Layout used for timestamps this crate generates itself, e.g. `2026-02-21T13:30:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
