use blueprint_core::{
    BuildingParameters, NavigationState, Page, UploadedImage, ViewerSettings, WalkthroughCamera,
};

use crate::pipeline::PipelineRunState;

/// In-memory session state. Nothing here outlives the process.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub nav: NavigationState,
    pub params: BuildingParameters,
    pub image: Option<UploadedImage>,
    pub conversion: PipelineRunState,
    pub viewer: ViewerSettings,
    pub camera: WalkthroughCamera,
    pub last_error: Option<String>,
}

impl AppState {
    pub fn page(&self) -> Page {
        self.nav.current()
    }
}
