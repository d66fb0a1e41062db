use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// One classified, renderable unit of report content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// Document title (paragraph starting with a single `#`).
    Title(String),
    /// Section heading (`##`+ markers, or a short ALL-CAPS paragraph).
    Heading(String),
    /// Regular body paragraph.
    BodyParagraph(String),
    /// Vertical gap with no text.
    Spacer,
}

/// Split normalized text into paragraphs and classify each into a [`Block`].
pub fn classify_text(text: &str) -> Vec<Block> {
    split_paragraphs(text)
        .into_iter()
        .map(classify_paragraph)
        .collect()
}

/// Split text into paragraphs on blank-line boundaries.
///
/// Two or more consecutive newlines act as the separator.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    static RE_SPLIT: OnceLock<Regex> = OnceLock::new();
    let re_split = RE_SPLIT.get_or_init(|| Regex::new(r"\n{2,}").unwrap());
    re_split.split(text).collect()
}

/// Classify one paragraph of normalized text.
///
/// A `#` marker takes precedence over the ALL-CAPS rule, so `# REPORT` is a
/// title rather than a heading.
pub fn classify_paragraph(paragraph: &str) -> Block {
    let paragraph = paragraph.trim();

    if paragraph.is_empty() {
        return Block::Spacer;
    }

    if paragraph.starts_with('#') {
        let level = paragraph.chars().take_while(|&c| c == '#').count();
        let text = paragraph.trim_start_matches('#').trim().to_string();
        return if level == 1 {
            Block::Title(text)
        } else {
            Block::Heading(text)
        };
    }

    if is_uppercase_heading(paragraph) {
        return Block::Heading(paragraph.to_string());
    }

    Block::BodyParagraph(escape_body(paragraph))
}

/// Short ALL-CAPS paragraphs read as section headings even without markers.
///
/// Requires at least one uppercase letter and no lowercase letters; short
/// uppercase acronym sentences therefore classify as headings as well.
fn is_uppercase_heading(paragraph: &str) -> bool {
    paragraph.chars().count() < 100
        && paragraph.chars().any(|c| c.is_uppercase())
        && !paragraph.chars().any(|c| c.is_lowercase())
}

/// Escape `&`, `<`, and `>` to their HTML entities.
///
/// Applied to body paragraphs only; title and heading text is written as-is.
fn escape_body(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
