use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::allowlist::SUPPORTED_ATTRIBUTES;

static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_\s]+(.)?").unwrap());

static SUPPORTED: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SUPPORTED_ATTRIBUTES.iter().copied().collect());

/// Convert e.g. `accept-charset` to `acceptCharset`.
///
/// Surrounding whitespace is trimmed. Each run of `-`, `_` or whitespace is
/// dropped and the character after it upper-cased.
pub fn normalize(raw: &str) -> String {
    SEPARATOR_RE
        .replace_all(raw.trim(), |caps: &Captures| {
            caps.get(1)
                .map(|c| c.as_str().to_uppercase())
                .unwrap_or_default()
        })
        .into_owned()
}

pub fn is_supported(name: &str) -> bool {
    SUPPORTED.contains(name)
}

/// Canonical name for `raw`, or `None` if it is not on the allow-list.
pub fn canonical_name(raw: &str) -> Option<String> {
    let name = normalize(raw);
    is_supported(&name).then_some(name)
}

// ── Tests ──
