use blueprint_core::UploadedImage;

/// Source of blueprint uploads: a file dialog on desktop, a path on the CLI.
pub trait ImagePicker {
    /// `Ok(None)` means the user dismissed the picker.
    fn pick(&self) -> anyhow::Result<Option<UploadedImage>>;
}
