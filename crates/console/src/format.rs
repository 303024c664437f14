//! Argument preparation for log output.
//!
//! A string head argument may embed `%c` style markers. Each marker opens an
//! inline styled span whose style text comes from the next unconsumed
//! argument; all remaining arguments are formatted and appended in order.

use crate::value::{self, LogValue};

/// Marker that opens a styled span in a head string.
pub const STYLE_MARKER: &str = "%c";

/// Delimiter between prepared parts when they are joined into one line.
pub const PART_DELIMITER: &str = ", ";

/// Spaces inside styled spans become non-breaking so inline layout keeps
/// the span on one line.
const NBSP: &str = "\u{a0}";

/// Prepare an argument list for display.
///
/// The returned parts are joined with [`PART_DELIMITER`] by the caller.
pub fn prepare(args: &[LogValue]) -> Vec<String> {
    if args.is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::with_capacity(args.len());
    let mut consumed = 1;

    match args[0].as_str() {
        Some(head) if head.contains(STYLE_MARKER) => {
            let (expanded, styles_used) = expand_styles(head, &args[1..]);
            parts.push(expanded);
            consumed += styles_used;
        }
        _ => parts.push(value::format(&args[0])),
    }

    for arg in &args[consumed..] {
        parts.push(value::format(arg));
    }

    parts
}

/// Expand `%c` markers into inline styled spans.
///
/// Returns the expanded text and the number of style arguments consumed.
/// A marker with no style argument left leaves its segment plain.
fn expand_styles(head: &str, styles: &[LogValue]) -> (String, usize) {
    let mut out = String::with_capacity(head.len());
    let mut used = 0;

    let mut segments = head.split(STYLE_MARKER);
    if let Some(first) = segments.next() {
        out.push_str(first);
    }

    for segment in segments {
        match styles.get(used) {
            Some(style) => {
                used += 1;
                out.push_str("<span style=\"");
                out.push_str(&value::format(style));
                out.push_str("\">");
                out.push_str(&segment.replace(' ', NBSP));
                out.push_str("</span>");
            }
            None => out.push_str(segment),
        }
    }

    (out, used)
}
