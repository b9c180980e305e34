use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

/// Image bytes plus the MIME type used in the data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read a file, guessing the MIME type from its extension.
    pub async fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(mime_type_for(path), bytes))
    }

    /// `data:<mime>;base64,<payload>`
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("heic") => "image/heic",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_carries_mime_and_base64_payload() {
        let upload = ImageUpload::new("image/png", b"hello".to_vec());
        assert_eq!(upload.to_data_uri(), "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn mime_is_guessed_case_insensitively() {
        assert_eq!(mime_type_for(Path::new("rash.JPG")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("rash.webp")), "image/webp");
        assert_eq!(mime_type_for(Path::new("rash")), "application/octet-stream");
    }

    #[tokio::test]
    async fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arm.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let upload = ImageUpload::from_path(&path).await.unwrap();
        assert_eq!(upload.mime_type, "image/png");
        assert_eq!(upload.bytes, vec![0x89, b'P', b'N', b'G']);
    }
}
