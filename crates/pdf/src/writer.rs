//! PDF serialization of laid-out pages via `lopdf`.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::layout::{Page, PAGE_HEIGHT, PAGE_WIDTH};
use crate::metrics::Font;
use crate::RenderError;

/// Serialize laid-out pages into a PDF file at `destination`.
///
/// The whole document is assembled in memory before anything is written;
/// a failed save never leaves an open handle behind.
pub fn write_document(pages: &[Page], destination: &Path) -> Result<(), RenderError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let helvetica_bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => Font::HelveticaBold.base_name(),
        "Encoding" => "WinAnsiEncoding",
    });
    let times_roman_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => Font::TimesRoman.base_name(),
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            Font::HelveticaBold.resource_name() => helvetica_bold_id,
            Font::TimesRoman.resource_name() => times_roman_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let encoded = page_content(page)
            .encode()
            .map_err(|e| RenderError::Render(format!("failed to encode content stream: {e}")))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let file = File::create(destination)?;
    let mut writer = BufWriter::new(file);
    doc.save_to(&mut writer)
        .map_err(|e| RenderError::Render(format!("failed to write PDF: {e}")))?;

    Ok(())
}

/// Build one page's content stream: each line is its own text object.
fn page_content(page: &Page) -> Content {
    let mut operations = Vec::with_capacity(page.lines.len() * 5);
    for line in &page.lines {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![line.font.resource_name().into(), line.size.into()],
        ));
        operations.push(Operation::new("Td", vec![line.x.into(), line.y.into()]));
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_win_ansi(&line.text),
                StringFormat::Literal,
            )],
        ));
        operations.push(Operation::new("ET", vec![]));
    }
    Content { operations }
}

/// Encode text as WinAnsi bytes, with a handful of typographic characters
/// mapped to their code points and everything else replaced by `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            _ => b'?',
        })
        .collect()
}
