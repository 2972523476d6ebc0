use std::sync::Arc;
use std::time::Duration;

use blueprint_core::{BuildingParameters, UploadedImage};

/// Scripted stage table: label and simulated duration in milliseconds.
pub const DEFAULT_STAGES: &[(&str, u64)] = &[
    ("Analyzing image structure...", 1000),
    ("Generating depth map...", 1500),
    ("Running 3D reconstruction model...", 2000),
    ("Creating 3D mesh...", 1500),
    ("Applying textures...", 1000),
];

/// Inputs handed to every stage of a run.
#[derive(Debug, Clone)]
pub struct StageContext {
    pub image: UploadedImage,
    pub params: BuildingParameters,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct StageError(pub String);

/// One step of the conversion. Implementations may do real work; the
/// runner only cares about ordering and the reported label.
#[async_trait::async_trait]
pub trait PipelineStage: Send + Sync {
    fn label(&self) -> &str;
    fn estimated_duration(&self) -> Duration;
    async fn execute(&self, ctx: &StageContext) -> Result<(), StageError>;
}

/// Stage that only waits for its estimated duration.
#[derive(Debug, Clone)]
pub struct SimulatedStage {
    label: String,
    duration: Duration,
}

impl SimulatedStage {
    pub fn new(label: impl Into<String>, duration: Duration) -> Self {
        Self {
            label: label.into(),
            duration,
        }
    }

    pub fn arc(label: impl Into<String>, duration: Duration) -> Arc<dyn PipelineStage> {
        Arc::new(Self::new(label, duration))
    }
}

#[async_trait::async_trait]
impl PipelineStage for SimulatedStage {
    fn label(&self) -> &str {
        &self.label
    }

    fn estimated_duration(&self) -> Duration {
        self.duration
    }

    async fn execute(&self, _ctx: &StageContext) -> Result<(), StageError> {
        tokio::time::sleep(self.duration).await;
        Ok(())
    }
}
