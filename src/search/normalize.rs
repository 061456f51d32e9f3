//! Ingredient name canonicalization.

use regex::Regex;
use std::sync::LazyLock;

/// Plural suffix rules, applied in order, each exactly once.
///
/// `ies` runs first so that `berries` becomes `berry` instead of losing only its final `s`.
static SUFFIX_RULES: LazyLock<[(Regex, &'static str); 3]> = LazyLock::new(|| {
    [
        (Regex::new("ies$").expect("valid suffix pattern"), "y"),
        (Regex::new("es$").expect("valid suffix pattern"), ""),
        (Regex::new("s$").expect("valid suffix pattern"), ""),
    ]
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Canonicalize an ingredient name for comparison.
///
/// Lowercases, trims, reduces simple English plurals and collapses internal
/// whitespace runs to a single space. Total over any input; `""` maps to `""`.
pub fn normalize(name: &str) -> String {
    let mut normalized = name.trim().to_lowercase();

    for (pattern, replacement) in SUFFIX_RULES.iter() {
        normalized = pattern.replace(&normalized, *replacement).into_owned();
    }

    WHITESPACE_RUN.replace_all(&normalized, " ").into_owned()
}
