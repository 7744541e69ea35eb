//! Export Pipeline — turns the rendered document plus the raw data model
//! into downloadable artifacts.
//!
//! Rasterization itself stays outside this service: the client captures the
//! live surface and posts the bitmap (PDF) or the DOM snapshot markup (HTML
//! bundle). The pipeline owns pagination, document-shell wrapping and
//! archive assembly. Any failure aborts the whole export; the store is never
//! touched, so a failed export is side-effect free.

pub mod bundle;
pub mod handlers;
pub mod pdf;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("captured surface is empty")]
    EmptyCapture,

    #[error("capture decode failed: {0}")]
    Decode(String),

    #[error("PDF assembly failed: {0}")]
    Pdf(String),

    #[error("archive assembly failed: {0}")]
    Archive(String),
}

/// Decodes a posted surface capture: raw base64 or a `data:image/...;base64,`
/// URI, as produced by a canvas `toDataURL` call.
pub fn decode_capture(payload: &str) -> Result<Vec<u8>, ExportError> {
    let payload = payload.trim();
    let encoded = match payload.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => payload,
    };
    if encoded.is_empty() {
        return Err(ExportError::EmptyCapture);
    }
    BASE64
        .decode(encoded)
        .map_err(|e| ExportError::Decode(e.to_string()))
}

/// Download filename for an artifact: `<name>-portfolio.<ext>`, slugged so
/// it is safe in a content-disposition header.
pub fn artifact_filename(full_name: &str, extension: &str) -> String {
    let mut slug = String::new();
    for ch in full_name.trim().to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
        } else if (ch.is_whitespace() || ch == '-' || ch == '_') && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        format!("portfolio.{extension}")
    } else {
        format!("{slug}-portfolio.{extension}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_capture_accepts_data_uri_and_raw_base64() {
        let bytes = b"\x89PNG fake";
        let encoded = BASE64.encode(bytes);
        assert_eq!(decode_capture(&encoded).unwrap(), bytes);
        let uri = format!("data:image/png;base64,{encoded}");
        assert_eq!(decode_capture(&uri).unwrap(), bytes);
    }

    #[test]
    fn test_decode_capture_rejects_empty_and_garbage() {
        assert!(matches!(decode_capture(""), Err(ExportError::EmptyCapture)));
        assert!(matches!(
            decode_capture("not base64!!"),
            Err(ExportError::Decode(_))
        ));
    }

    #[test]
    fn test_artifact_filename_slugs_the_name() {
        assert_eq!(artifact_filename("Jane Doe", "pdf"), "jane-doe-portfolio.pdf");
        assert_eq!(artifact_filename("  ", "zip"), "portfolio.zip");
        assert_eq!(
            artifact_filename("Ana-María P.", "zip"),
            "ana-mara-p-portfolio.zip"
        );
    }
}
