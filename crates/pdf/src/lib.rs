use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod blocks;
pub mod cleanup;
pub mod layout;
pub mod metrics;
mod writer;

pub use blocks::Block;
pub use cleanup::normalize;
pub use metrics::Font;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF rendering error: {0}")]
    Render(String),
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render report text into a paginated PDF at `destination`.
///
/// The text is normalized, split into paragraphs, classified into blocks,
/// and laid out on US Letter pages with 0.75in margins. The parent directory
/// of `destination` is created if missing. The operation is all-or-nothing:
/// either a complete document lands at `destination` or an error is
/// returned with nothing left open.
pub fn render_report(text: &str, destination: &Path) -> Result<PathBuf, RenderError> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    log::info!("Creating PDF at: {}", destination.display());

    let cleaned = cleanup::normalize(text);
    let doc_blocks = blocks::classify_text(&cleaned);
    let pages = layout::layout_blocks(&doc_blocks);
    writer::write_document(&pages, destination)?;

    log::info!(
        "PDF created at: {} ({} pages)",
        destination.display(),
        pages.len()
    );
    Ok(destination.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_temp(text: &str) -> (tempfile::TempDir, lopdf::Document) {
        let dir = tempfile::TempDir::new().unwrap();
        let dest = dir.path().join("out").join("report.pdf");
        let saved = render_report(text, &dest).unwrap();
        assert_eq!(saved, dest);
        let doc = lopdf::Document::load(&saved).unwrap();
        (dir, doc)
    }

    #[test]
    fn test_empty_input_produces_valid_single_page() {
        let (_dir, doc) = render_to_temp("");
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_creates_missing_parent_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let dest = dir.path().join("a").join("b").join("report.pdf");
        render_report("hello", &dest).unwrap();
        assert!(dest.exists());
    }

    #[test]
    fn test_round_trip_content() {
        let input = "# Report\n\nHELLO WORLD\n\nThis is body text with \
                     **bold** and *italic* markers.";
        let (_dir, doc) = render_to_temp(input);
        assert_eq!(doc.get_pages().len(), 1);

        let text = doc.extract_text(&[1]).unwrap();
        assert!(text.contains("Report"));
        assert!(text.contains("HELLO WORLD"));
        assert!(text.contains("bold and italic markers"));
        assert!(!text.contains('*'));
    }

    #[test]
    fn test_multi_page_output() {
        // One ~489pt word per 504pt line: 100 lines at 14pt leading fill
        // 48-line pages, so the document must span exactly 3 pages.
        let word = "M".repeat(50);
        let input = vec![word; 100].join(" ");
        let (_dir, doc) = render_to_temp(&input);
        assert_eq!(doc.get_pages().len(), 3);
    }
}
