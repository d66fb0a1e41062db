use std::sync::OnceLock;

use regex::Regex;

/// Normalize raw report text before layout.
///
/// Strips markdown emphasis markers (`**bold**`, `*italic*`), removes stray
/// or unbalanced asterisks, and collapses whitespace so the layout stage
/// sees plain paragraphs separated by single blank lines.
pub fn normalize(text: &str) -> String {
    let mut result = text.to_string();

    // 1. Strip **bold** markers.
    static RE_BOLD: OnceLock<Regex> = OnceLock::new();
    let re_bold = RE_BOLD.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
    result = re_bold.replace_all(&result, "$1").to_string();

    // 2. Strip *italic* markers.
    static RE_ITALIC: OnceLock<Regex> = OnceLock::new();
    let re_italic = RE_ITALIC.get_or_init(|| Regex::new(r"\*([^*]+)\*").unwrap());
    result = re_italic.replace_all(&result, "$1").to_string();

    // 3. Remove standalone asterisks trailed by whitespace.
    static RE_STRAY: OnceLock<Regex> = OnceLock::new();
    let re_stray = RE_STRAY.get_or_init(|| Regex::new(r"\*\s+").unwrap());
    result = re_stray.replace_all(&result, "").to_string();

    // 4. Remove any asterisk run left over from unbalanced markers.
    static RE_RUNS: OnceLock<Regex> = OnceLock::new();
    let re_runs = RE_RUNS.get_or_init(|| Regex::new(r"\*+").unwrap());
    result = re_runs.replace_all(&result, "").to_string();

    // 5. Collapse space runs to a single space.
    static RE_SPACES: OnceLock<Regex> = OnceLock::new();
    let re_spaces = RE_SPACES.get_or_init(|| Regex::new(r" +").unwrap());
    result = re_spaces.replace_all(&result, " ").to_string();

    // 6. Collapse 3+ newlines to a single blank line.
    static RE_PARA: OnceLock<Regex> = OnceLock::new();
    let re_para = RE_PARA.get_or_init(|| Regex::new(r"\n{3,}").unwrap());
    result = re_para.replace_all(&result, "\n\n").to_string();

    result.trim().to_string()
}
