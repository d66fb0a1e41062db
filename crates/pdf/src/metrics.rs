//! Glyph advance widths for the standard-14 fonts the renderer uses.
//!
//! Widths are the AFM values in 1/1000 em for the printable ASCII range.
//! Line wrapping measures rendered width with these tables rather than
//! counting characters.

use serde::{Deserialize, Serialize};

/// Fonts available to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Font {
    HelveticaBold,
    TimesRoman,
}

impl Font {
    /// PostScript base font name written into the PDF font dictionary.
    pub fn base_name(self) -> &'static str {
        match self {
            Font::HelveticaBold => "Helvetica-Bold",
            Font::TimesRoman => "Times-Roman",
        }
    }

    /// Resource-dictionary key under which the font is registered.
    pub fn resource_name(self) -> &'static str {
        match self {
            Font::HelveticaBold => "F1",
            Font::TimesRoman => "F2",
        }
    }
}

/// Helvetica-Bold advance widths for 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Times-Roman advance widths for 0x20..=0x7E.
#[rustfmt::skip]
const TIMES_ROMAN_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

/// Advance width of one glyph in 1/1000 em.
pub fn glyph_width(font: Font, c: char) -> u32 {
    let table = match font {
        Font::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        Font::TimesRoman => &TIMES_ROMAN_WIDTHS,
    };
    match c {
        ' '..='~' => u32::from(table[c as usize - 0x20]),
        // Common typographic characters outside ASCII.
        '\u{2013}' => 500,
        '\u{2014}' => 1000,
        '\u{2018}' | '\u{2019}' => 333,
        '\u{201C}' | '\u{201D}' => 500,
        '\u{2022}' => 350,
        // Nominal advance for anything else.
        _ => 600,
    }
}

/// Width of `text` in points when set in `font` at `size`.
pub fn text_width(text: &str, font: Font, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| glyph_width(font, c)).sum();
    units as f32 * size / 1000.0
}
