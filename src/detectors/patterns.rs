//! Lexical patterns shared by the detectors.
//!
//! All patterns run against the raw contract text. The regex engine has
//! no look-around, so detectors that need "not followed by" checks
//! inspect the text after each match instead.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! lexical_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($regex_str).expect("built-in pattern must compile"));
    };
}

// ── Storage ────────────────────────────────────────────────────────────────
lexical_pattern!(
    RE_STATE_VARIABLE,
    r"(?m)^\s*(uint\d*|int\d*|bool|address|bytes\d*|string)\s+(?:public\s+|private\s+|internal\s+)?(\w+)"
);
lexical_pattern!(RE_ASSIGNMENT, r"\w+\s*=\s*[^=]");

// ── Loops ──────────────────────────────────────────────────────────────────
lexical_pattern!(RE_FOR_LOOP, r"for\s*\([^)]+\)\s*\{([^}]+)\}");
lexical_pattern!(RE_WHILE_LOOP, r"while\s*\([^)]+\)\s*\{([^}]+)\}");

// ── Calls ──────────────────────────────────────────────────────────────────
lexical_pattern!(
    RE_FUNCTION,
    r"function\s+(\w+)\s*\([^)]*\)\s*(external|public|internal|private)?\s*(view|pure|payable)?\s*(?:returns\s*\([^)]*\))?\s*\{"
);
lexical_pattern!(RE_PUBLIC_FUNCTION, r"function\s+\w+\s*\([^)]*\)\s*public");
lexical_pattern!(RE_DOTTED_CALL, r"\w+\.\w+\s*\(");
lexical_pattern!(RE_DELEGATECALL, r"delegatecall\s*\(");

// ── Data types ─────────────────────────────────────────────────────────────
lexical_pattern!(RE_UINT256, r"\buint256\b");
lexical_pattern!(RE_UINT128, r"\buint128\b");
lexical_pattern!(RE_UINT64, r"\buint64\b");
lexical_pattern!(RE_UINT32, r"\buint32\b");
lexical_pattern!(RE_UINT, r"\buint\b");
lexical_pattern!(RE_STRING, r"\bstring\b");
lexical_pattern!(RE_BYTES, r"\bbytes\d*\b");

// ── Arrays and mappings ────────────────────────────────────────────────────
lexical_pattern!(RE_PUSH, r"\.push\s*\(");
lexical_pattern!(RE_POP, r"\.pop\s*\(");
lexical_pattern!(RE_LITERAL_INDEX, r"\w+\s*\[\s*\d+\s*\]");
lexical_pattern!(
    RE_MAPPING,
    r"mapping\s*\([^)]+\)\s*(?:public\s+|private\s+|internal\s+)?(\w+)"
);
lexical_pattern!(RE_KEYED_ACCESS, r"\w+\s*\[\s*\w+\s*\]");
lexical_pattern!(RE_INDEXED_ASSIGNMENT, r"\w+\s*\[\s*\w+\s*\]\s*=");

// ── Suggestions ────────────────────────────────────────────────────────────
lexical_pattern!(RE_SIMPLE_ASSIGNMENT, r"(\w+)\s*=\s*([^;]+);");
lexical_pattern!(RE_LITERAL, r#"\b(0x[0-9a-fA-F]+|\d+|true|false|"[^"]*")\b"#);
lexical_pattern!(RE_REQUIRE, r"require\s*\(");
lexical_pattern!(RE_CUSTOM_ERROR, r"error\s+\w+");
lexical_pattern!(RE_EVENT, r"event\s+\w+");
lexical_pattern!(RE_EMIT, r"emit\s+\w+");
lexical_pattern!(RE_STRUCT, r"struct\s+\w+\s*\{([^}]+)\}");
lexical_pattern!(RE_WIDE_UINT, r"uint256");
lexical_pattern!(RE_NARROW_UINT, r"uint(?:8|16|32|64|128)");

/// Number of non-overlapping matches of `re` in `text`.
pub fn count(re: &Regex, text: &str) -> usize {
    re.find_iter(text).count()
}

/// Keyed accesses split into (reads, writes).
///
/// A write is an access followed by optional whitespace and `=`, which
/// also covers `==` comparisons.
pub fn keyed_accesses(text: &str) -> (usize, usize) {
    RE_KEYED_ACCESS
        .find_iter(text)
        .fold((0, 0), |(reads, writes), m| {
            if text[m.end()..].trim_start().starts_with('=') {
                (reads, writes + 1)
            } else {
                (reads + 1, writes)
            }
        })
}

/// `count × weight`, saturating at `u64::MAX`.
pub fn weighted(count: usize, weight: u64) -> u64 {
    (count as u64).saturating_mul(weight)
}
