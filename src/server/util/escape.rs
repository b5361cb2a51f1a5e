//! Neutralizes Discord markup in text supplied by game servers.
//!
//! Mentions are broken by inserting a zero-width space after the `@`, which
//! keeps the text readable while Discord no longer resolves it. Markdown
//! control characters are escaped with a backslash, and so is any line that
//! would otherwise open a quote, heading or list.

const ZERO_WIDTH_SPACE: char = '\u{200b}';

/// Characters escaped anywhere in the text. `[` breaks masked links.
const MARKDOWN_CHARS: [char; 7] = ['\\', '*', '_', '~', '|', '`', '['];

/// Characters that only have a meaning at the start of a line (quotes, headings).
const LINE_START_MARKERS: [char; 2] = ['>', '#'];

/// Shortest snowflake Discord resolves in a raw `@id` mention.
const MIN_MENTION_DIGITS: usize = 17;

/// Escapes both mentions and markdown.
pub fn escape_everything(text: &str) -> String {
    escape_markdown(&escape_mentions(text))
}

/// Breaks `@everyone`, `@here` and user/role id mentions (`@id`, `@!id`, `@&id`).
pub fn escape_mentions(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(at) = rest.find('@') {
        escaped.push_str(&rest[..=at]);
        rest = &rest[at + 1..];
        if is_mention_target(rest) {
            escaped.push(ZERO_WIDTH_SPACE);
        }
    }
    escaped.push_str(rest);

    escaped
}

/// Backslash-escapes markdown control characters and block markers.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            escaped.push('\n');
        }
        if opens_block(line) {
            escaped.push('\\');
        }
        for c in line.chars() {
            if MARKDOWN_CHARS.contains(&c) {
                escaped.push('\\');
            }
            escaped.push(c);
        }
    }

    escaped
}

/// Whether a line starts a quote, heading, bullet (`- `), subtext (`-# `) or
/// numbered list item (`1. `). List markers may be indented.
fn opens_block(line: &str) -> bool {
    if line.starts_with(LINE_START_MARKERS) {
        return true;
    }

    let indented = line.trim_start();
    let marker_end = if let Some(rest) = indented.strip_prefix('-') {
        rest.strip_prefix('#').unwrap_or(rest)
    } else {
        let digits = indented.chars().take_while(char::is_ascii_digit).count();
        match indented[digits..].strip_prefix('.') {
            Some(rest) if digits > 0 => rest,
            _ => return false,
        }
    };

    marker_end.starts_with(char::is_whitespace)
}

fn is_mention_target(after_at: &str) -> bool {
    if after_at.starts_with("everyone") || after_at.starts_with("here") {
        return true;
    }

    let id = after_at
        .strip_prefix(&['!', '&'][..])
        .unwrap_or(after_at);
    id.chars().take_while(|c| c.is_ascii_digit()).count() >= MIN_MENTION_DIGITS
}
