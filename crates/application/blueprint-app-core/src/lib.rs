pub mod app;
pub mod app_core;
mod async_runtime;
pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod pipeline;
pub mod ports;
pub mod viewmodel;

pub use app::BlueprintApplication;
pub use app_core::*;
pub use domain::AppState;
pub use error::AppError;
pub use pipeline::{PipelineRunEvent, PipelineRunId, PipelineRunState};
pub use ports::*;
pub use viewmodel::*;

pub use blueprint_core::{
    BuildingParameters, BuildingType, NumberInput, Page, ParamField, RenderQuality,
    UploadedImage, ViewerSettings, WalkthroughCamera,
};
