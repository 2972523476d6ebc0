use blueprint_config as config;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlueprintFormat {
    Jpeg,
    Png,
    Pdf,
    Dwg,
    Dxf,
}

impl BlueprintFormat {
    /// Maps a file extension (any case, no leading dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        if !config::ACCEPTED_EXTENSIONS.contains(&ext.as_str()) {
            return None;
        }
        match ext.as_str() {
            "jpg" | "jpeg" => Some(BlueprintFormat::Jpeg),
            "png" => Some(BlueprintFormat::Png),
            "pdf" => Some(BlueprintFormat::Pdf),
            "dwg" => Some(BlueprintFormat::Dwg),
            "dxf" => Some(BlueprintFormat::Dxf),
            _ => None,
        }
    }

    pub fn is_raster(self) -> bool {
        matches!(self, BlueprintFormat::Jpeg | BlueprintFormat::Png)
    }
}

impl fmt::Display for BlueprintFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BlueprintFormat::Jpeg => "JPG",
            BlueprintFormat::Png => "PNG",
            BlueprintFormat::Pdf => "PDF",
            BlueprintFormat::Dwg => "DWG",
            BlueprintFormat::Dxf => "DXF",
        };
        f.write_str(s)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("unsupported blueprint format '{0}' (expected one of: jpg, jpeg, png, pdf, dwg, dxf)")]
    UnsupportedFormat(String),
    #[error("blueprint file '{0}' is empty")]
    Empty(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// An uploaded blueprint. The bytes are shared so cloning session state stays cheap.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub format: BlueprintFormat,
    pub bytes: Arc<[u8]>,
    pub uploaded_at: DateTime<Utc>,
}

impl UploadedImage {
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, UploadError> {
        let file_name = file_name.into();
        let ext = Path::new(&file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let format = BlueprintFormat::from_extension(ext)
            .ok_or_else(|| UploadError::UnsupportedFormat(ext.to_string()))?;
        if bytes.is_empty() {
            return Err(UploadError::Empty(file_name));
        }

        Ok(Self {
            file_name,
            format,
            bytes: bytes.into(),
            uploaded_at: Utc::now(),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, UploadError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let bytes = std::fs::read(path)?;
        Self::from_bytes(file_name, bytes)
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_extensions_are_case_insensitive() {
        assert_eq!(BlueprintFormat::from_extension("PNG"), Some(BlueprintFormat::Png));
        assert_eq!(BlueprintFormat::from_extension("jpeg"), Some(BlueprintFormat::Jpeg));
        assert_eq!(BlueprintFormat::from_extension("Dxf"), Some(BlueprintFormat::Dxf));
        assert_eq!(BlueprintFormat::from_extension("gif"), None);
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = UploadedImage::from_bytes("plan.bmp", vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedFormat(ext) if ext == "bmp"));
    }

    #[test]
    fn rejects_missing_extension() {
        let err = UploadedImage::from_bytes("plan", vec![1]).unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedFormat(_)));
    }

    #[test]
    fn rejects_empty_file() {
        let err = UploadedImage::from_bytes("plan.png", Vec::new()).unwrap_err();
        assert!(matches!(err, UploadError::Empty(_)));
    }
}
