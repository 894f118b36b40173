//! Trimming with the same whitespace set a browser uses for `String.trim`.

/// U+FEFF counts as whitespace here, unlike [`str::trim`].
pub fn trim_text(s: &str) -> &str {
    s.trim_matches(is_trimmable)
}

fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
