use std::sync::Arc;

use tokio::sync::mpsc;

use crate::app_core::DomainEvent;
use crate::pipeline::{PipelineRunEvent, PipelineRunId};
use blueprint_pipeline::{ConversionPipeline, PipelineEvent, StageContext};

pub struct ConversionOrchestrator {
    pipeline: Arc<ConversionPipeline>,
    tx: mpsc::Sender<DomainEvent>,
}

impl ConversionOrchestrator {
    pub fn new(pipeline: Arc<ConversionPipeline>, tx: mpsc::Sender<DomainEvent>) -> Self {
        Self { pipeline, tx }
    }

    pub fn stage_count(&self) -> usize {
        self.pipeline.stage_count()
    }

    pub fn pipeline(&self) -> &ConversionPipeline {
        &self.pipeline
    }

    /// Spawns the run. Progress arrives on the event channel tagged with `run_id`.
    pub fn start(&self, run_id: PipelineRunId, ctx: StageContext) -> anyhow::Result<()> {
        let handle = crate::async_runtime::handle()?;
        let pipeline = self.pipeline.clone();
        let tx = self.tx.clone();

        handle.spawn(async move {
            tracing::info!(%run_id, image = %ctx.image.file_name, "conversion started");
            let res = pipeline
                .run(&ctx, |ev| {
                    if let Some(ev) = to_run_event(ev) {
                        if let Err(e) = tx.try_send(DomainEvent::PipelineEvent { run_id, ev }) {
                            tracing::warn!(%run_id, "dropping pipeline event: {e}");
                        }
                    }
                })
                .await;

            match res {
                Ok(summary) => {
                    tracing::info!(%run_id, total_ms = summary.total_ms as u64, "conversion finished")
                }
                Err(e) => tracing::error!(%run_id, "conversion failed: {e}"),
            }
        });

        Ok(())
    }
}

fn to_run_event(ev: PipelineEvent) -> Option<PipelineRunEvent> {
    match ev {
        PipelineEvent::StageStarted { index, label, .. } => {
            Some(PipelineRunEvent::StageChanged { index, label })
        }
        PipelineEvent::StageFinished { .. } => None,
        PipelineEvent::Completed { summary } => Some(PipelineRunEvent::Completed { summary }),
        PipelineEvent::Failed { label, message, .. } => Some(PipelineRunEvent::Failed {
            message: format!("{label} failed: {message}"),
        }),
    }
}
