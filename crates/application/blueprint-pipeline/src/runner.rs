use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

use crate::stage::{PipelineStage, StageContext};

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    StageStarted {
        index: usize,
        count: usize,
        label: String,
    },
    StageFinished {
        index: usize,
        label: String,
        elapsed: Duration,
    },
    Completed {
        summary: RunSummary,
    },
    Failed {
        index: usize,
        label: String,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: u128,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RunSummary {
    pub stages: Vec<StageTiming>,
    pub total_ms: u128,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PipelineError {
    #[error("stage {index} ('{label}') failed: {message}")]
    Stage {
        index: usize,
        label: String,
        message: String,
    },
}

/// Runs stages strictly in order. Stages do not see each other's output.
#[derive(Clone)]
pub struct ConversionPipeline {
    stages: Vec<Arc<dyn PipelineStage>>,
}

impl ConversionPipeline {
    pub fn new(stages: Vec<Arc<dyn PipelineStage>>) -> Self {
        Self { stages }
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn labels(&self) -> Vec<String> {
        self.stages.iter().map(|s| s.label().to_string()).collect()
    }

    pub fn stages(&self) -> &[Arc<dyn PipelineStage>] {
        &self.stages
    }

    pub fn total_estimated_duration(&self) -> Duration {
        self.stages.iter().map(|s| s.estimated_duration()).sum()
    }

    pub async fn run(
        &self,
        ctx: &StageContext,
        on_event: impl Fn(PipelineEvent) + Send + Sync,
    ) -> Result<RunSummary, PipelineError> {
        let count = self.stages.len();
        let run_started = Instant::now();
        let mut timings = Vec::with_capacity(count);

        for (index, stage) in self.stages.iter().enumerate() {
            let label = stage.label().to_string();
            tracing::info!(stage = index + 1, of = count, "{label}");
            on_event(PipelineEvent::StageStarted {
                index,
                count,
                label: label.clone(),
            });

            let stage_started = Instant::now();
            if let Err(e) = stage.execute(ctx).await {
                tracing::warn!(stage = index + 1, "stage '{label}' failed: {e}");
                on_event(PipelineEvent::Failed {
                    index,
                    label: label.clone(),
                    message: e.to_string(),
                });
                return Err(PipelineError::Stage {
                    index,
                    label,
                    message: e.to_string(),
                });
            }

            let elapsed = stage_started.elapsed();
            tracing::debug!(stage = index + 1, elapsed_ms = elapsed.as_millis() as u64, "stage done");
            timings.push(StageTiming {
                label: label.clone(),
                elapsed_ms: elapsed.as_millis(),
            });
            on_event(PipelineEvent::StageFinished {
                index,
                label,
                elapsed,
            });
        }

        let summary = RunSummary {
            stages: timings,
            total_ms: run_started.elapsed().as_millis(),
        };
        on_event(PipelineEvent::Completed {
            summary: summary.clone(),
        });
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{SimulatedStage, StageError};
    use blueprint_core::{BuildingParameters, UploadedImage};
    use std::sync::Mutex;

    fn ctx() -> StageContext {
        StageContext {
            image: UploadedImage::from_bytes("plan.png", vec![1, 2, 3]).unwrap(),
            params: BuildingParameters::default(),
        }
    }

    struct Broken;

    #[async_trait::async_trait]
    impl PipelineStage for Broken {
        fn label(&self) -> &str {
            "Broken"
        }
        fn estimated_duration(&self) -> Duration {
            Duration::ZERO
        }
        async fn execute(&self, _ctx: &StageContext) -> Result<(), StageError> {
            Err(StageError("no depth data".into()))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn failing_stage_stops_the_run() {
        let stages: Vec<Arc<dyn PipelineStage>> = vec![
            SimulatedStage::arc("First", Duration::from_millis(10)),
            Arc::new(Broken),
            SimulatedStage::arc("After", Duration::from_millis(10)),
        ];
        let pipeline = ConversionPipeline::new(stages);

        let seen = Mutex::new(Vec::new());
        let err = pipeline
            .run(&ctx(), |ev| seen.lock().unwrap().push(ev))
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::Stage { index: 1, .. }));
        let seen = seen.into_inner().unwrap();
        assert!(matches!(seen.last(), Some(PipelineEvent::Failed { index: 1, .. })));
        assert!(!seen
            .iter()
            .any(|e| matches!(e, PipelineEvent::StageStarted { label, .. } if label == "After")));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_pipeline_completes_immediately() {
        let pipeline = ConversionPipeline::new(Vec::new());
        let summary = pipeline.run(&ctx(), |_| {}).await.unwrap();
        assert!(summary.stages.is_empty());
        assert_eq!(summary.total_ms, 0);
    }
}
