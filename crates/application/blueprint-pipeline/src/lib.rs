mod runner;
pub mod stage;

pub use runner::{ConversionPipeline, PipelineError, PipelineEvent, RunSummary, StageTiming};
pub use stage::{PipelineStage, SimulatedStage, StageContext, StageError, DEFAULT_STAGES};

/// Convenience constructor for the scripted five-stage pipeline.
pub fn default_pipeline() -> ConversionPipeline {
    ConversionPipeline::new(
        DEFAULT_STAGES
            .iter()
            .map(|(label, ms)| SimulatedStage::arc(*label, std::time::Duration::from_millis(*ms)))
            .collect(),
    )
}
