use std::path::PathBuf;

use clap::Parser;

/// Print the text of each page of a PDF document.
#[derive(Debug, Parser)]
#[command(name = "pdftext", about, version)]
pub struct Cli {
    /// Path to the PDF file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}
