//! Text Extractor — turns uploaded document bytes into one plain-text string.
//!
//! Line breaks survive extraction; the name heuristic reads the first non-empty line.
//! Extraction is all-or-nothing: any decoder failure yields an `ExtractionError` and
//! no text.

use std::fmt;
use std::io::{Cursor, Read};
use std::panic;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::ExtractionError;

const DOCX_BODY_PART: &str = "word/document.xml";

/// Upper bound on the decompressed body part.
const MAX_BODY_PART_BYTES: u64 = 32 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Pdf,
    Doc,
    Docx,
    Txt,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Doc => "doc",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Txt => "txt",
        }
    }

    /// Format from the extension of an uploaded filename.
    pub fn from_filename(filename: &str) -> Result<Self, ExtractionError> {
        match filename.rsplit_once('.') {
            Some((_, ext)) => ext.parse(),
            None => Err(ExtractionError::UnsupportedFormat(filename.to_string())),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentFormat {
    type Err = ExtractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ext = s.trim().trim_start_matches('.').to_lowercase();
        match ext.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "doc" => Ok(DocumentFormat::Doc),
            "docx" => Ok(DocumentFormat::Docx),
            "txt" => Ok(DocumentFormat::Txt),
            _ => Err(ExtractionError::UnsupportedFormat(s.trim().to_string())),
        }
    }
}

/// Extracts plain text from `bytes` according to the declared `format`.
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractionError> {
    debug!("Extracting text from {} document ({} bytes)", format, bytes.len());
    let text = match format {
        DocumentFormat::Pdf => extract_pdf(bytes)?,
        // Legacy .doc goes through the OOXML reader; true binary .doc files fail here.
        DocumentFormat::Doc | DocumentFormat::Docx => extract_docx(bytes, format)?,
        DocumentFormat::Txt => extract_txt(bytes)?,
    };
    debug!("Extracted {} characters from {} document", text.len(), format);
    Ok(text)
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    // The PDF decoder panics on some malformed inputs.
    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractionError::Unreadable {
            format: DocumentFormat::Pdf,
            reason: e.to_string(),
        }),
        Err(_) => {
            warn!("PDF decoder panicked on {} byte input", bytes.len());
            Err(ExtractionError::Unreadable {
                format: DocumentFormat::Pdf,
                reason: "malformed PDF structure".to_string(),
            })
        }
    }
}

fn extract_txt(bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = std::str::from_utf8(bytes).map_err(|e| ExtractionError::Encoding {
        format: DocumentFormat::Txt,
        reason: e.to_string(),
    })?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
}

fn extract_docx(bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractionError> {
    let unreadable = |reason: String| ExtractionError::Unreadable { format, reason };

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| unreadable(format!("not a Word document container: {e}")))?;
    let mut part = archive
        .by_name(DOCX_BODY_PART)
        .map_err(|e| unreadable(format!("missing {DOCX_BODY_PART}: {e}")))?;

    if part.size() > MAX_BODY_PART_BYTES {
        warn!("{} declares {} bytes, over the limit", DOCX_BODY_PART, part.size());
        return Err(unreadable(format!("{DOCX_BODY_PART} exceeds {MAX_BODY_PART_BYTES} bytes")));
    }
    let xml = read_capped(&mut part, MAX_BODY_PART_BYTES, format)?;

    Ok(docx_xml_to_text(&xml))
}

/// Reads at most `limit` bytes as UTF-8. The declared entry size is not trusted.
fn read_capped<R: Read>(
    reader: R,
    limit: u64,
    format: DocumentFormat,
) -> Result<String, ExtractionError> {
    let mut buf = Vec::new();
    reader
        .take(limit + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ExtractionError::Unreadable {
            format,
            reason: e.to_string(),
        })?;
    if buf.len() as u64 > limit {
        return Err(ExtractionError::Unreadable {
            format,
            reason: format!("{DOCX_BODY_PART} exceeds {limit} bytes"),
        });
    }
    String::from_utf8(buf).map_err(|e| ExtractionError::Encoding {
        format,
        reason: e.to_string(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// WordprocessingML → text
// ────────────────────────────────────────────────────────────────────────────

static PARAGRAPH_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</w:p>|<w:p\b[^>]*/>").expect("valid regex"));
// Tab-stop definitions in paragraph properties reuse the `w:tab` element name.
static TAB_STOPS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<w:tabs\b[^>]*>.*?</w:tabs>").expect("valid regex"));
static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<w:(?:br|cr)\b[^>]*/>").expect("valid regex"));
static TAB: Lazy<Regex> = Lazy::new(|| Regex::new(r"<w:tab\b[^>]*/>").expect("valid regex"));
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static CHAR_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#(x[0-9a-fA-F]+|[0-9]+);").expect("valid regex"));

/// One line per paragraph, like reading `paragraph.text` in document order.
fn docx_xml_to_text(xml: &str) -> String {
    let text = TAB_STOPS.replace_all(xml, "");
    let text = PARAGRAPH_END.replace_all(&text, "\n");
    let text = LINE_BREAK.replace_all(&text, "\n");
    let text = TAB.replace_all(&text, "\t");
    let text = ANY_TAG.replace_all(&text, "");
    unescape_xml(&text)
}

fn unescape_xml(text: &str) -> String {
    let text = CHAR_REF.replace_all(text, |caps: &regex::Captures| {
        let code = &caps[1];
        let value = match code.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse::<u32>().ok(),
        };
        value
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    });
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
