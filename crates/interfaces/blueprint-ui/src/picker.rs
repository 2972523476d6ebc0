use anyhow::Context;
use blueprint_app_core::{ImagePicker, UploadedImage};
use blueprint_config as config;

/// Native file dialog filtered to blueprint formats.
pub struct RfdImagePicker;

impl ImagePicker for RfdImagePicker {
    fn pick(&self) -> anyhow::Result<Option<UploadedImage>> {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Select a blueprint")
            .add_filter("Blueprints", config::ACCEPTED_EXTENSIONS)
            .pick_file()
        else {
            return Ok(None);
        };

        let image = UploadedImage::from_path(&path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        Ok(Some(image))
    }
}
