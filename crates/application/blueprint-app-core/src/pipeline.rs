use blueprint_pipeline::RunSummary;
use serde::Serialize;
use uuid::Uuid;

pub type PipelineRunId = Uuid;

#[derive(Debug, Clone)]
pub enum PipelineRunEvent {
    Started { stage_count: usize },
    StageChanged { index: usize, label: String },
    Completed { summary: RunSummary },
    Failed { message: String },
}

/// Conversion flags shown on the output page.
///
/// `is_processing` and `model_ready` are never both set; every transition
/// below writes both.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineRunState {
    pub run_id: Option<PipelineRunId>,
    pub is_processing: bool,
    pub model_ready: bool,
    pub current_step_label: String,
    pub stage_index: usize,
    pub stage_count: usize,
    pub error: Option<String>,
    pub summary: Option<RunSummary>,
}

impl PipelineRunState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn starting(run_id: PipelineRunId, stage_count: usize) -> Self {
        Self {
            run_id: Some(run_id),
            is_processing: true,
            model_ready: false,
            stage_count,
            ..Self::default()
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_processing
    }

    /// Fraction of stages already finished, for progress bars.
    pub fn progress(&self) -> f32 {
        if self.model_ready {
            return 1.0;
        }
        if self.stage_count == 0 {
            return 0.0;
        }
        self.stage_index as f32 / self.stage_count as f32
    }

    pub(crate) fn apply(&mut self, ev: PipelineRunEvent) {
        match ev {
            PipelineRunEvent::Started { stage_count } => {
                let run_id = self.run_id;
                *self = Self::starting(run_id.unwrap_or_else(Uuid::new_v4), stage_count);
            }
            PipelineRunEvent::StageChanged { index, label } => {
                self.stage_index = index;
                self.current_step_label = label;
            }
            PipelineRunEvent::Completed { summary } => {
                self.is_processing = false;
                self.model_ready = true;
                self.stage_index = self.stage_count;
                self.summary = Some(summary);
            }
            PipelineRunEvent::Failed { message } => {
                self.is_processing = false;
                self.model_ready = false;
                self.error = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_stay_mutually_exclusive() {
        let mut s = PipelineRunState::idle();
        let id = Uuid::new_v4();
        s.run_id = Some(id);

        let events = [
            PipelineRunEvent::Started { stage_count: 2 },
            PipelineRunEvent::StageChanged {
                index: 0,
                label: "a".into(),
            },
            PipelineRunEvent::StageChanged {
                index: 1,
                label: "b".into(),
            },
            PipelineRunEvent::Completed {
                summary: RunSummary::default(),
            },
            PipelineRunEvent::Started { stage_count: 2 },
            PipelineRunEvent::Failed {
                message: "x".into(),
            },
        ];
        for ev in events {
            s.apply(ev);
            assert!(!(s.is_processing && s.model_ready));
        }
        assert_eq!(s.run_id, Some(id));
        assert_eq!(s.error.as_deref(), Some("x"));
    }

    #[test]
    fn progress_tracks_stage_index() {
        let mut s = PipelineRunState::starting(Uuid::new_v4(), 4);
        assert_eq!(s.progress(), 0.0);
        s.apply(PipelineRunEvent::StageChanged {
            index: 2,
            label: "c".into(),
        });
        assert_eq!(s.progress(), 0.5);
        s.apply(PipelineRunEvent::Completed {
            summary: RunSummary::default(),
        });
        assert_eq!(s.progress(), 1.0);
    }
}
