//! Plain-text extraction from documents
//!
//! `.docx` packages are opened as zip archives and their main part,
//! `word/document.xml`, is walked in document order. Each paragraph yields its
//! text followed by a blank line, tabs and soft line breaks are kept, and
//! anything that is not visible body text (deleted revisions, field codes,
//! paragraph properties) is skipped.
//!
//! Plain-text files are passed through unchanged.

use roxmltree::Node;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";
const WORDPROCESSING_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const MARKUP_COMPATIBILITY_NS: &str = "http://schemas.openxmlformats.org/markup-compatibility/2006";
const PARAGRAPH_SEPARATOR: &str = "\n\n";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read document {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to extract text from {path:?}: {reason}")]
    Extraction { path: PathBuf, reason: String },

    #[error("unsupported document format: {path:?}")]
    UnsupportedFormat { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Docx,
    PlainText,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "docx" => Ok(DocumentFormat::Docx),
            "txt" | "text" | "md" => Ok(DocumentFormat::PlainText),
            _ => Err(DocumentError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Extracts the text of `bytes`, which were read from `path`.
    pub fn extract(&self, path: &Path, bytes: &[u8]) -> Result<String, DocumentError> {
        match self {
            DocumentFormat::Docx => extract_docx(path, bytes),
            DocumentFormat::PlainText => {
                String::from_utf8(bytes.to_vec()).map_err(|e| DocumentError::Extraction {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })
            }
        }
    }
}

fn extract_docx(path: &Path, bytes: &[u8]) -> Result<String, DocumentError> {
    let extraction = |reason: String| DocumentError::Extraction {
        path: path.to_path_buf(),
        reason,
    };

    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| extraction(format!("not a docx package: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| extraction(format!("missing {DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| extraction(format!("unreadable {DOCUMENT_PART}: {e}")))?;

    let document = roxmltree::Document::parse(&xml)
        .map_err(|e| extraction(format!("malformed {DOCUMENT_PART}: {e}")))?;

    let mut text = String::new();
    collect_text(document.root_element(), &mut text);
    Ok(text)
}

fn collect_text(node: Node, text: &mut String) {
    for child in node.children().filter(Node::is_element) {
        let name = child.tag_name();

        match name.namespace() {
            Some(WORDPROCESSING_NS) => collect_wordprocessing(child, name.name(), text),
            // alternate content repeats itself, the fallback is enough
            Some(MARKUP_COMPATIBILITY_NS) if name.name() == "Choice" => {}
            _ => collect_text(child, text),
        }
    }
}

fn collect_wordprocessing(node: Node, name: &str, text: &mut String) {
    match name {
        "t" => text.push_str(node.text().unwrap_or_default()),
        "tab" => text.push('\t'),
        "cr" => text.push('\n'),
        "br" => {
            if matches!(
                node.attribute((WORDPROCESSING_NS, "type")),
                None | Some("textWrapping")
            ) {
                text.push('\n');
            }
        }
        "noBreakHyphen" => text.push('-'),
        "p" => {
            collect_text(node, text);
            text.push_str(PARAGRAPH_SEPARATOR);
        }
        "pPr" | "rPr" | "sectPr" | "delText" | "instrText" => {}
        _ => collect_text(node, text),
    }
}
