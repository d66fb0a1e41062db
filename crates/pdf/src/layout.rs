//! Page layout: greedy line wrapping and pagination.
//!
//! Blocks are laid out top-to-bottom on US Letter pages with a descending
//! vertical cursor. Body text wraps with greedy line-fill measured in glyph
//! widths; a page break is emitted whenever the next line would cross the
//! bottom margin.

use crate::blocks::Block;
use crate::metrics::{self, Font};

/// US Letter page size in points.
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;

/// 0.75 inch margins on all sides.
pub const MARGIN: f32 = 54.0;

/// Horizontal space available to a line of text.
pub const USABLE_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// Vertical gap produced by an empty paragraph.
const SPACER_GAP: f32 = 14.4;

/// Vertical gap appended after every block.
const BLOCK_GAP: f32 = 10.8;

/// Font, size, and spacing for one block category.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub font: Font,
    pub size: f32,
    /// Vertical advance per line.
    pub leading: f32,
    pub space_before: f32,
    pub space_after: f32,
}

pub const TITLE: TextStyle = TextStyle {
    font: Font::HelveticaBold,
    size: 16.0,
    leading: 19.2,
    space_before: 0.0,
    space_after: 12.0,
};

pub const HEADING: TextStyle = TextStyle {
    font: Font::HelveticaBold,
    size: 14.0,
    leading: 16.8,
    space_before: 10.0,
    space_after: 10.0,
};

pub const BODY: TextStyle = TextStyle {
    font: Font::TimesRoman,
    size: 11.0,
    leading: 14.0,
    space_before: 0.0,
    space_after: 8.0,
};

/// A positioned line of text. `x`/`y` are PDF user-space coordinates
/// (origin bottom-left, `y` at the text baseline).
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub font: Font,
    pub size: f32,
    pub x: f32,
    pub y: f32,
}

/// One laid-out page.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub lines: Vec<TextLine>,
}

/// Lay out classified blocks onto pages.
///
/// Always produces at least one page, so empty input still yields a valid
/// document.
pub fn layout_blocks(blocks: &[Block]) -> Vec<Page> {
    let mut cursor = Cursor::new();
    for block in blocks {
        match block {
            Block::Title(text) => cursor.place_text(text, &TITLE),
            Block::Heading(text) => cursor.place_text(text, &HEADING),
            Block::BodyParagraph(text) => cursor.place_text(text, &BODY),
            Block::Spacer => cursor.gap(SPACER_GAP),
        }
        cursor.gap(BLOCK_GAP);
    }
    cursor.finish()
}

/// Greedy line-fill: pack words until the next one would overflow
/// `max_width`, then flush and start a new line with that word.
///
/// Words are never split; a word wider than `max_width` is placed alone on
/// its own line rather than dropped.
pub fn wrap(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let space_width = metrics::text_width(" ", font, size);

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;

    for word in text.split_whitespace() {
        let word_width = metrics::text_width(word, font, size);

        let needed_width = if current.is_empty() {
            word_width
        } else {
            current_width + space_width + word_width
        };

        if needed_width <= max_width || current.is_empty() {
            if !current.is_empty() {
                current.push(' ');
                current_width += space_width;
            }
            current.push_str(word);
            current_width += word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Mutable layout state: the page under construction and the vertical
/// offset of the next line box. The offset always stays within
/// `[MARGIN, PAGE_HEIGHT - MARGIN]`.
struct Cursor {
    pages: Vec<Page>,
    current: Page,
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Cursor {
            pages: Vec::new(),
            current: Page::default(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    /// Wrap and place a block of text, breaking pages as needed.
    fn place_text(&mut self, text: &str, style: &TextStyle) {
        if style.space_before > 0.0 {
            self.gap(style.space_before);
        }
        for line in wrap(text, style.font, style.size, USABLE_WIDTH) {
            self.line(line, style);
        }
        if style.space_after > 0.0 {
            self.gap(style.space_after);
        }
    }

    /// Place one line, starting a new page first if it would cross the
    /// bottom margin.
    fn line(&mut self, text: String, style: &TextStyle) {
        if self.y - style.leading < MARGIN {
            self.break_page();
        }
        self.y -= style.leading;
        self.current.lines.push(TextLine {
            text,
            font: style.font,
            size: style.size,
            x: MARGIN,
            y: self.y,
        });
    }

    /// Advance the cursor without drawing, clamped at the bottom margin.
    fn gap(&mut self, amount: f32) {
        self.y = (self.y - amount).max(MARGIN);
    }

    fn break_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.y = PAGE_HEIGHT - MARGIN;
    }

    fn finish(mut self) -> Vec<Page> {
        self.pages.push(self.current);
        self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::text_width;

    #[test]
    fn test_wrap_respects_max_width() {
        let text = "The quick brown fox jumps over the lazy dog and keeps \
                    running through the long meadow until evening falls";
        let lines = wrap(text, BODY.font, BODY.size, USABLE_WIDTH);
        assert!(lines.len() > 1 || text_width(text, BODY.font, BODY.size) <= USABLE_WIDTH);
        for line in &lines {
            assert!(text_width(line, BODY.font, BODY.size) <= USABLE_WIDTH);
        }
    }

    #[test]
    fn test_wrap_narrow_column() {
        let lines = wrap("alpha beta gamma delta", BODY.font, BODY.size, 40.0);
        assert!(lines.len() >= 3);
        for line in &lines {
            assert_eq!(line.split_whitespace().count(), 1);
        }
    }

    #[test]
    fn test_wrap_preserves_words() {
        let text = "one two three four five six seven eight nine ten";
        let lines = wrap(text, BODY.font, BODY.size, 60.0);
        let rejoined = lines.join(" ");
        assert_eq!(
            rejoined.split_whitespace().collect::<Vec<_>>(),
            text.split_whitespace().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_overlong_word_kept_on_own_line() {
        let word = "M".repeat(80);
        let text = format!("start {word} end");
        let lines = wrap(&text, BODY.font, BODY.size, USABLE_WIDTH);
        assert!(text_width(&word, BODY.font, BODY.size) > USABLE_WIDTH);
        assert!(lines.iter().any(|l| l == &word));
    }

    #[test]
    fn test_wrap_empty_text() {
        assert!(wrap("", BODY.font, BODY.size, USABLE_WIDTH).is_empty());
    }

    #[test]
    fn test_layout_empty_input_is_one_page() {
        let pages = layout_blocks(&[]);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].lines.is_empty());
    }

    #[test]
    fn test_lines_stay_inside_margins() {
        let body = "word ".repeat(600);
        let blocks = vec![
            Block::Title("Annual Review".to_string()),
            Block::BodyParagraph(body.trim().to_string()),
        ];
        for page in layout_blocks(&blocks) {
            for line in &page.lines {
                assert!(line.y >= MARGIN);
                assert!(line.y <= PAGE_HEIGHT - MARGIN);
            }
        }
    }

    #[test]
    fn test_exact_page_count_for_synthetic_input() {
        // Each word is ~489pt wide, so exactly one fits per 504pt line.
        // 100 lines at 14pt leading over a 684pt text area = 48 lines per
        // page, so 100 lines need 3 pages.
        let word = "M".repeat(50);
        let paragraph = vec![word; 100].join(" ");
        let pages = layout_blocks(&[Block::BodyParagraph(paragraph)]);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].lines.len(), 48);
        assert_eq!(pages[1].lines.len(), 48);
        assert_eq!(pages[2].lines.len(), 4);
    }

    #[test]
    fn test_spacer_advances_without_text() {
        let blocks = vec![
            Block::BodyParagraph("above".to_string()),
            Block::Spacer,
            Block::BodyParagraph("below".to_string()),
        ];
        let pages = layout_blocks(&blocks);
        assert_eq!(pages.len(), 1);
        let lines = &pages[0].lines;
        assert_eq!(lines.len(), 2);
        // The spacer gap separates the two lines by more than one leading.
        assert!(lines[0].y - lines[1].y > BODY.leading);
    }
}
