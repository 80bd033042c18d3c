//! Field validators used at the input boundary.
//!
//! Each validator takes raw text, returns `true` when the value is acceptable
//! and otherwise reports a diagnostic through `msg_error!` and returns
//! `false`. They hold no state.

use crate::libs::messages::Message;
use crate::libs::task::{Priority, Status};
use crate::msg_error;
use regex::Regex;
use std::sync::OnceLock;

static DATE_FORMAT: OnceLock<Regex> = OnceLock::new();

fn date_format() -> &'static Regex {
    // Shape only: dd.mm.yyyy, no calendar check.
    DATE_FORMAT.get_or_init(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid date regex"))
}

/// Fails when the value is absent or empty.
pub fn validate_nonempty_text(value: Option<&str>, field_name: &str) -> bool {
    match value {
        Some(text) if !text.is_empty() => true,
        _ => {
            msg_error!(Message::FieldEmpty(field_name.to_string()));
            false
        }
    }
}

pub fn validate_date(value: &str) -> bool {
    if date_format().is_match(value) {
        return true;
    }
    msg_error!(Message::DateInvalidFormat(value.to_string()));
    false
}

pub fn validate_priority(value: &str) -> bool {
    parse_priority(value).is_some()
}

pub fn validate_status(value: &str) -> bool {
    parse_status(value).is_some()
}

/// Like [`validate_priority`], but hands back the parsed variant.
pub fn parse_priority(value: &str) -> Option<Priority> {
    let priority = Priority::from_label(value);
    if priority.is_none() {
        msg_error!(Message::PriorityInvalid(value.to_string()));
    }
    priority
}

pub fn parse_status(value: &str) -> Option<Status> {
    let status = Status::from_label(value);
    if status.is_none() {
        msg_error!(Message::StatusInvalid(value.to_string()));
    }
    status
}
