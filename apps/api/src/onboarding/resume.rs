use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("resume is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },

    #[error("unsupported resume format '{0}', upload a .txt or .pdf file")]
    UnsupportedFormat(String),

    #[error("could not read text from PDF: {0}")]
    Pdf(String),

    #[error("resume contains no readable text")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ResumeFormat {
    PlainText,
    Pdf,
}

fn detect_format(file_name: Option<&str>, content_type: Option<&str>) -> Option<ResumeFormat> {
    let mime = content_type
        .map(|c| c.split(';').next().unwrap_or(c).trim().to_ascii_lowercase());
    match mime.as_deref() {
        Some("application/pdf") => return Some(ResumeFormat::Pdf),
        Some("text/plain") => return Some(ResumeFormat::PlainText),
        _ => {}
    }

    let extension = file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => Some(ResumeFormat::Pdf),
        Some("txt") | Some("text") | Some("md") => Some(ResumeFormat::PlainText),
        _ => None,
    }
}

/// Converts an uploaded resume to plain text.
///
/// The declared content type wins over the file extension. Text files are
/// decoded lossily so a stray non-UTF-8 byte never rejects an upload.
pub fn extract_resume_text(
    file_name: Option<&str>,
    content_type: Option<&str>,
    bytes: &[u8],
    max_bytes: usize,
) -> Result<String, ExtractError> {
    if bytes.len() > max_bytes {
        return Err(ExtractError::TooLarge {
            size: bytes.len(),
            limit: max_bytes,
        });
    }

    let format = detect_format(file_name, content_type).ok_or_else(|| {
        ExtractError::UnsupportedFormat(
            content_type
                .or(file_name)
                .unwrap_or("unknown")
                .to_string(),
        )
    })?;

    let text = match format {
        ResumeFormat::PlainText => String::from_utf8_lossy(bytes).into_owned(),
        ResumeFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::Pdf(e.to_string()))?,
    };

    let text = collapse_blank_lines(&text);
    if text.is_empty() {
        return Err(ExtractError::Empty);
    }
    Ok(text)
}

/// Runs `extract_resume_text` on the blocking pool.
///
/// PDF parsing is CPU-bound and the parser panics on some well-formed inputs
/// (pages without a MediaBox); a panic surfaces as `ExtractError::Pdf`.
pub async fn extract_resume_text_blocking<B>(
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: B,
    max_bytes: usize,
) -> Result<String, ExtractError>
where
    B: AsRef<[u8]> + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        extract_resume_text(
            file_name.as_deref(),
            content_type.as_deref(),
            bytes.as_ref(),
            max_bytes,
        )
    })
    .await
    .map_err(|e| {
        warn!("Resume extraction aborted: {e}");
        ExtractError::Pdf("the document could not be parsed".to_string())
    })?
}

/// Trims trailing whitespace per line and squeezes runs of blank lines,
/// which PDF extraction produces in bulk.
fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;
    for line in text.lines().map(str::trim_end) {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_by_extension() {
        let text = extract_resume_text(Some("cv.TXT"), None, b"Rust\nSQL\n", 1024).unwrap();
        assert_eq!(text, "Rust\nSQL");
    }

    #[test]
    fn test_content_type_takes_precedence() {
        let text = extract_resume_text(
            Some("resume.bin"),
            Some("text/plain; charset=utf-8"),
            b"React developer",
            1024,
        )
        .unwrap();
        assert_eq!(text, "React developer");
    }

    #[test]
    fn test_lossy_decoding_keeps_readable_text() {
        let bytes = [b'G', b'o', 0xFF, b'!'];
        let text = extract_resume_text(Some("a.txt"), None, &bytes, 1024).unwrap();
        assert!(text.starts_with("Go"));
        assert!(text.ends_with('!'));
    }

    #[test]
    fn test_oversize_rejected_before_parsing() {
        let err = extract_resume_text(Some("a.txt"), None, &[b'a'; 11], 10).unwrap_err();
        assert_eq!(err, ExtractError::TooLarge { size: 11, limit: 10 });
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = extract_resume_text(Some("resume.docx"), None, b"x", 1024).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let err = extract_resume_text(Some("a.txt"), None, b" \n\n \t\n", 1024).unwrap_err();
        assert_eq!(err, ExtractError::Empty);
    }

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("a  \n\n\n\nb\n"), "a\n\nb");
    }

    #[test]
    fn test_garbage_pdf_is_an_error() {
        let err = extract_resume_text(Some("cv.pdf"), None, b"not a pdf", 1024).unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }

    /// A structurally valid PDF (correct xref offsets) whose single page has
    /// no MediaBox.
    fn pdf_without_media_box() -> Vec<u8> {
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /Contents 4 0 R >>".to_string(),
            {
                let stream = "BT (Rust) Tj ET";
                format!("<< /Length {} >>\nstream\n{stream}\nendstream", stream.len())
            },
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }
        let xref_at = pdf.len();
        pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        pdf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
                objects.len() + 1
            )
            .as_bytes(),
        );
        pdf
    }

    #[tokio::test]
    async fn test_pdf_without_media_box_is_an_error() {
        let err = extract_resume_text_blocking(
            Some("cv.pdf".to_string()),
            Some("application/pdf".to_string()),
            pdf_without_media_box(),
            1 << 20,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_blocking_extraction_of_plain_text() {
        let text = extract_resume_text_blocking(
            Some("cv.txt".to_string()),
            None,
            b"Docker\n\n\nKubernetes".to_vec(),
            1024,
        )
        .await
        .unwrap();
        assert_eq!(text, "Docker\n\nKubernetes");
    }
}
