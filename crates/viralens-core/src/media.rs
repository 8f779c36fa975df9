use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use tokio::fs;

use crate::error::{Result, ViralensError};

/// Upper bound on what gets base64-encoded and shipped to the service.
pub const MAX_VIDEO_BYTES: u64 = 64 * 1024 * 1024;

pub const VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "webm", "mkv", "mov", "avi"];

/// Inline binary media ready for transport: MIME type plus base64 payload.
#[derive(Debug, Clone)]
pub struct InlineMedia {
    pub mime_type: String,
    pub data: String,
}

impl InlineMedia {
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: STANDARD.encode(bytes),
        }
    }

    /// Read a video file into inline form. Rejects unknown extensions and
    /// oversized files before touching the bytes.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let mime = mime_for_path(path).ok_or_else(|| ViralensError::UnsupportedMedia {
            path: path.to_path_buf(),
        })?;

        let size = fs::metadata(path).await?.len();
        if size > MAX_VIDEO_BYTES {
            return Err(ViralensError::VideoTooLarge {
                path: path.to_path_buf(),
                size,
                limit: MAX_VIDEO_BYTES,
            });
        }

        let bytes = fs::read(path).await?;
        Ok(Self::from_bytes(mime, &bytes))
    }
}

pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "mp4" => Some("video/mp4"),
        "webm" => Some("video/webm"),
        "mkv" => Some("video/x-matroska"),
        "mov" => Some("video/quicktime"),
        "avi" => Some("video/x-msvideo"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn mime_detection_covers_the_whitelist() {
        assert_eq!(mime_for_path(Path::new("clip.mp4")), Some("video/mp4"));
        assert_eq!(mime_for_path(Path::new("clip.MOV")), Some("video/quicktime"));
        assert_eq!(mime_for_path(Path::new("clip.gif")), None);
        assert_eq!(mime_for_path(Path::new("noext")), None);
    }

    #[test]
    fn from_bytes_encodes_base64() {
        let media = InlineMedia::from_bytes("video/mp4", b"abc");
        assert_eq!(media.data, "YWJj");
        assert_eq!(media.mime_type, "video/mp4");
    }

    #[tokio::test]
    async fn from_path_rejects_unsupported_extensions() {
        let err = InlineMedia::from_path(&PathBuf::from("slides.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, ViralensError::UnsupportedMedia { .. }));
    }
}
