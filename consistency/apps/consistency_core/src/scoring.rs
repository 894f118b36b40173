//! Rule-based consistency scoring.
//!
//! Three fixed heuristics run in a fixed order over a [`Brief`]; each one that
//! trips costs [`VIOLATION_PENALTY`] points off a perfect 100.

use std::fmt;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::brief::Brief;
use crate::rules::parse_rules;

/// Texts shorter than this (in UTF-16 code units) count as too thin.
pub const MIN_TEXT_LEN: usize = 20;
pub const VIOLATION_PENALTY: usize = 15;

// ASCII-only case folding: "ſtyle" (long s) must not count as "style".
static TONE_OR_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new("tone|toon|stijl|style")
        .case_insensitive(true)
        .unicode(false)
        .build()
        .expect("tone/style pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    BriefingTooShort,
    BrandRulesTooShort,
    NoToneOrStyleRule,
}

impl Violation {
    pub fn message(self) -> &'static str {
        match self {
            Violation::BriefingTooShort => "Briefing is erg kort (weinig context).",
            Violation::BrandRulesTooShort => "Brand rules zijn erg kort (weinig houvast).",
            Violation::NoToneOrStyleRule => "Geen duidelijke tone-of-voice / style regel gevonden.",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub rules: Vec<String>,
    pub violations: Vec<Violation>,
    pub score: u8,
}

pub fn assess(brief: &Brief) -> Assessment {
    let rules = parse_rules(&brief.brand_rules);

    let mut violations = Vec::new();
    if text_len(&brief.briefing) < MIN_TEXT_LEN {
        violations.push(Violation::BriefingTooShort);
    }
    if text_len(&brief.brand_rules) < MIN_TEXT_LEN {
        violations.push(Violation::BrandRulesTooShort);
    }
    if !has_tone_or_style(&brief.brand_rules) {
        violations.push(Violation::NoToneOrStyleRule);
    }

    let score = score_for(violations.len());
    Assessment { rules, violations, score }
}

/// `100 - 15 * n`, clamped to `0..=100`.
pub fn score_for(violation_count: usize) -> u8 {
    let penalty = violation_count.saturating_mul(VIOLATION_PENALTY);
    100usize.saturating_sub(penalty).min(100) as u8
}

pub fn has_tone_or_style(text: &str) -> bool {
    TONE_OR_STYLE.is_match(text)
}

// Length as a browser would report it.
fn text_len(s: &str) -> usize {
    s.encode_utf16().count()
}
