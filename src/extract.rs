//! Document loading and per-page text extraction.

use std::path::Path;

use lopdf::Document;

/// Open a PDF file, reporting a load failure to stderr.
///
/// Returns `Err(1)` if the file is missing or the library cannot parse it.
fn open_document(file: &Path) -> Result<Document, i32> {
    Document::load(file).map_err(|_| {
        eprintln!("Error: Unable to open PDF file {}", file.display());
        1
    })
}

/// Print the text of every page of `file` to stdout.
///
/// Each page's text is preceded by a `Page <N>:` header, with `<N>` the
/// 1-based page number. Pages are visited in ascending order. A page the
/// library cannot extract is reported to stderr with its 0-based index and
/// skipped; per-page failures do not affect the exit status.
pub fn run(file: &Path) -> Result<(), i32> {
    let doc = open_document(file)?;
    let pages = doc.get_pages();

    for (idx, &number) in pages.keys().enumerate() {
        match doc.extract_text(&[number]) {
            Ok(text) => {
                println!("Page {number}:");
                println!("{text}");
            }
            Err(_) => eprintln!("Error: Unable to get page {idx}"),
        }
    }

    Ok(())
}
