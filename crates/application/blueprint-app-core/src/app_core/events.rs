use blueprint_core::{BuildingParameters, Page, UploadedImage, ViewerSettings, WalkthroughCamera};

use crate::pipeline::{PipelineRunEvent, PipelineRunId};

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Navigation
    RouteChanged(Page),

    // Session inputs
    ImageUploaded(UploadedImage),
    ParametersChanged(BuildingParameters),
    ViewerChanged(ViewerSettings),
    CameraMoved(WalkthroughCamera),

    // Pipeline
    PipelineEvent {
        run_id: PipelineRunId,
        ev: PipelineRunEvent,
    },

    // User-visible errors
    UserError(String),
    ErrorCleared,
}
