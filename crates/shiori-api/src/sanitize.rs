//! Cleanup of free-text fields returned by AniList.
//!
//! Titles and descriptions come back with HTML fragments and raw line breaks
//! that should never reach callers.

/// Fragments deleted outright.
const REMOVED: &[&str] = &["<i>", "</i>", "\n", "\r"];

/// Fragments replaced by a single space. `<br><br>` must come before `<br>`.
const REPLACED: &[(&str, &str)] = &[("<br><br>", " "), ("<br>", " ")];

/// Strip markup tokens from `text`.
///
/// The result is not trimmed. Repeated until stable, so deleting one token
/// can't splice a new one together (`<<i>i>`).
pub fn sanitize(text: &str) -> String {
    let mut current = sanitize_once(text);
    loop {
        let next = sanitize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn sanitize_once(text: &str) -> String {
    let mut out = text.to_string();
    for item in REMOVED {
        out = out.replace(item, "");
    }
    for (from, to) in REPLACED {
        out = out.replace(from, to);
    }
    out
}
