use crate::text::trim_text;

/// At most this many rules are taken from the brand rules text.
pub const MAX_RULES: usize = 8;

/// Split brand rules into one rule per non-blank line, trimmed, in order,
/// keeping the first [`MAX_RULES`].
pub fn parse_rules(brand_rules: &str) -> Vec<String> {
    brand_rules
        .split('\n')
        .map(trim_text)
        .filter(|line| !line.is_empty())
        .take(MAX_RULES)
        .map(String::from)
        .collect()
}
