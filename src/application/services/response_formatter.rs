use regex::{Captures, Regex};
use std::sync::LazyLock;

static INLINE_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\\((.+?)\\\)").expect("inline math pattern is valid"));

static DISPLAY_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\\\[(.+?)\\\]").expect("display math pattern is valid"));

/// Post-processes a raw model reply for Markdown rendering.
pub fn format_response(raw: &str) -> String {
    remove_table_blank_lines(&rewrite_math_delimiters(raw))
}

/// `\(x\)` becomes `$x$` and `\[x\]` becomes `$$x$$`. Inline spans stay on one line,
/// display spans may cross lines, and both match the shortest possible span.
pub fn rewrite_math_delimiters(text: &str) -> String {
    let inline = INLINE_MATH.replace_all(text, |caps: &Captures| format!("${}$", &caps[1]));
    DISPLAY_MATH
        .replace_all(&inline, |caps: &Captures| format!("$${}$$", &caps[1]))
        .into_owned()
}

/// Drops blank lines once a table row (any line with `|`) has been seen and trims the
/// rows themselves.
///
/// The table latch never resets, so every blank line after the first row is removed,
/// including ones well past the table. Exiting after a run of non-pipe lines would be the
/// better behavior, but clients depend on the current output.
pub fn remove_table_blank_lines(text: &str) -> String {
    let mut lines = Vec::new();
    let mut inside_table = false;

    for line in text.split('\n') {
        if line.contains('|') {
            inside_table = true;
            lines.push(line.trim());
        } else if inside_table && line.trim().is_empty() {
            continue;
        } else {
            lines.push(line);
        }
    }

    lines.join("\n")
}

