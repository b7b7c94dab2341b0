//! Log-only serialization path.
//!
//! Produces the human-readable rendering of a batch for diagnostics. Two
//! layers run in order and both always apply:
//! 1. the structured filter — each element's `log_view` decides per-type and
//!    per-field what survives at the logger's effective level (omitted, not
//!    masked);
//! 2. the password scrubber — a blunt substring heuristic that strips whole
//!    comma-delimited tokens mentioning "password" from the rendered text.
//!
//! Output is a string for log lines only; it never feeds back into the wire.

use crate::payload::object::{Severity, WireObject};

/// Render a batch for diagnostic logging at the given effective level.
pub fn render_for_log(objects: &[Box<dyn WireObject>], effective: Severity) -> String {
    let mut parts = Vec::with_capacity(objects.len());
    for object in objects {
        if let Some(view) = object.log_view(effective) {
            parts.push(format!("{}:{}", object.wire_name(), view));
        }
    }
    scrub_passwords(&parts.join(", "))
}

/// Strip every comma-delimited token containing the substring "password"
/// (case-insensitive). Safety net on top of the structured filter.
pub fn scrub_passwords(rendered: &str) -> String {
    if !contains_password(rendered) {
        return rendered.to_string();
    }
    let kept: Vec<&str> = rendered
        .split(',')
        .filter(|token| !contains_password(token))
        .collect();
    kept.join(",")
}

fn contains_password(text: &str) -> bool {
    text.to_ascii_lowercase().contains("password")
}
