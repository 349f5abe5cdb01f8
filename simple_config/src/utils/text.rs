//! ASCII text helpers: trimming and upper-casing.
//!
//! The in-place variants take `&mut String`; the `*ed` variants return a new
//! `String` and leave the input untouched.

/// ASCII "is space": space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`.
///
/// Differs from `char::is_ascii_whitespace`, which leaves out vertical tab.
pub const fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Remove leading whitespace in place.
pub fn ltrim(text: &mut String) {
    let start = text.len() - text.trim_start_matches(is_space).len();
    text.drain(..start);
}

/// Remove trailing whitespace in place.
pub fn rtrim(text: &mut String) {
    let end = text.trim_end_matches(is_space).len();
    text.truncate(end);
}

/// Remove whitespace from both ends in place.
pub fn trim(text: &mut String) {
    rtrim(text);
    ltrim(text);
}

pub fn ltrimmed(text: &str) -> String {
    text.trim_start_matches(is_space).to_string()
}

pub fn rtrimmed(text: &str) -> String {
    text.trim_end_matches(is_space).to_string()
}

pub fn trimmed(text: &str) -> String {
    text.trim_matches(is_space).to_string()
}

/// ASCII upper-case in place; non-ASCII characters are left alone.
pub fn to_upper(text: &mut String) {
    text.make_ascii_uppercase();
}

pub fn to_uppered(text: &str) -> String {
    text.to_ascii_uppercase()
}
