use regex::Regex;
use std::sync::LazyLock;

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("tag pattern is a valid regex")
});

pub fn is_valid_tag(token: &str) -> bool {
    TAG_PATTERN.is_match(token)
}

/// Comma-separated text to an ordered tag set. Tokens are trimmed; tokens with
/// characters outside `[A-Za-z0-9_-]` are dropped without an error and repeats keep
/// their first position.
pub fn parse_tags(text: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for token in text.split(',').map(str::trim) {
        if token.is_empty() || !is_valid_tag(token) {
            continue;
        }
        if !tags.iter().any(|t| t == token) {
            tags.push(token.to_string());
        }
    }
    tags
}
