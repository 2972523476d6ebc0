use std::sync::Arc;

use tokio::sync::mpsc;

use crate::app_core::{reduce, AppCommand, DomainEvent, WalkCommand};
use crate::domain::AppState;
use crate::error::AppError;
use crate::orchestrator::ConversionOrchestrator;
use crate::pipeline::{PipelineRunEvent, PipelineRunId};
use crate::ports::ImagePicker;

use blueprint_core::{BuildingParameters, Page, ParamField, UploadedImage, ViewerSettings};
use blueprint_pipeline::{ConversionPipeline, StageContext};

pub struct BlueprintApplication {
    pub state: AppState,

    orchestrator: ConversionOrchestrator,

    msg_rx: mpsc::Receiver<DomainEvent>,
    msg_tx: mpsc::Sender<DomainEvent>,
}

impl Default for BlueprintApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl BlueprintApplication {
    pub fn new() -> Self {
        Self::with_pipeline(blueprint_pipeline::default_pipeline())
    }

    /// Builds the app around a custom stage list, e.g. a real reconstruction backend.
    pub fn with_pipeline(pipeline: ConversionPipeline) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(blueprint_config::EVENT_CHANNEL_CAPACITY);
        Self {
            state: AppState::default(),
            orchestrator: ConversionOrchestrator::new(Arc::new(pipeline), msg_tx.clone()),
            msg_rx,
            msg_tx,
        }
    }

    fn apply(&mut self, ev: DomainEvent) {
        self.state = reduce(std::mem::take(&mut self.state), ev);
    }

    pub fn pipeline(&self) -> &ConversionPipeline {
        self.orchestrator.pipeline()
    }

    /// Single entry point for UI components. Failures are also surfaced in
    /// `state.last_error` so the view can show them.
    pub fn dispatch(&mut self, cmd: AppCommand) -> Result<(), AppError> {
        let res = match cmd {
            AppCommand::Navigate(page) => {
                self.navigate(page);
                Ok(())
            }
            AppCommand::NavigateToken(token) => {
                self.navigate_token(&token);
                Ok(())
            }
            AppCommand::UploadImage(image) => {
                self.upload_image(image);
                Ok(())
            }
            AppCommand::UpdateParam { field, raw } => self.update_param(field, &raw),
            AppCommand::ResetParams => {
                self.apply(DomainEvent::ParametersChanged(BuildingParameters::default()));
                Ok(())
            }
            AppCommand::StartConversion => self.start_conversion().map(|_| ()),
            AppCommand::UpdateViewer(settings) => {
                self.update_viewer(settings);
                Ok(())
            }
            AppCommand::Walk(cmd) => {
                self.walk(cmd);
                Ok(())
            }
            AppCommand::DismissError => {
                self.apply(DomainEvent::ErrorCleared);
                Ok(())
            }
        };

        if let Err(e) = &res {
            self.apply(DomainEvent::UserError(e.to_string()));
        }
        res
    }

    // --- Navigation ---

    pub fn navigate(&mut self, page: Page) {
        tracing::debug!("navigate -> {page}");
        self.apply(DomainEvent::RouteChanged(page));
    }

    /// Navigates by page token. Unknown tokens are ignored.
    pub fn navigate_token(&mut self, token: &str) -> bool {
        let mut nav = self.state.nav;
        if !nav.select_token(token) {
            return false;
        }
        self.navigate(nav.current());
        true
    }

    // --- Upload ---

    pub fn upload_image(&mut self, image: UploadedImage) {
        tracing::info!(
            file = %image.file_name,
            format = %image.format,
            bytes = image.size_bytes(),
            "blueprint uploaded"
        );
        self.apply(DomainEvent::ImageUploaded(image));
    }

    pub fn upload_path(&mut self, path: &std::path::Path) -> Result<(), AppError> {
        let image = UploadedImage::from_path(path)?;
        self.upload_image(image);
        Ok(())
    }

    /// Returns `Ok(false)` when the picker was dismissed.
    pub fn upload_from(&mut self, picker: &dyn ImagePicker) -> anyhow::Result<bool> {
        match picker.pick() {
            Ok(Some(image)) => {
                self.upload_image(image);
                Ok(true)
            }
            Ok(None) => Ok(false),
            Err(e) => {
                self.apply(DomainEvent::UserError(e.to_string()));
                Err(e)
            }
        }
    }

    // --- Parameters ---

    pub fn update_param(&mut self, field: ParamField, raw: &str) -> Result<(), AppError> {
        let next = self.state.params.with_field(field, raw)?;
        self.apply(DomainEvent::ParametersChanged(next));
        Ok(())
    }

    pub fn set_params(&mut self, params: BuildingParameters) {
        self.apply(DomainEvent::ParametersChanged(params));
    }

    // --- Pipeline ---

    /// Starts a simulated conversion of the uploaded blueprint.
    ///
    /// Without an upload this is a no-op returning `Ok(None)`. A second call
    /// while a run is active is rejected with [`AppError::Busy`].
    pub fn start_conversion(&mut self) -> Result<Option<PipelineRunId>, AppError> {
        let Some(image) = self.state.image.clone() else {
            tracing::debug!("conversion requested without an uploaded blueprint");
            return Ok(None);
        };
        if self.state.conversion.is_running() {
            return Err(AppError::Busy);
        }
        self.state.params.validate()?;

        let run_id: PipelineRunId = uuid::Uuid::new_v4();
        let ctx = StageContext {
            image,
            params: self.state.params.clone(),
        };

        self.apply(DomainEvent::ErrorCleared);
        self.apply(DomainEvent::PipelineEvent {
            run_id,
            ev: PipelineRunEvent::Started {
                stage_count: self.orchestrator.stage_count(),
            },
        });

        if let Err(e) = self.orchestrator.start(run_id, ctx) {
            self.apply(DomainEvent::PipelineEvent {
                run_id,
                ev: PipelineRunEvent::Failed {
                    message: e.to_string(),
                },
            });
            return Err(AppError::Runtime(e.to_string()));
        }
        Ok(Some(run_id))
    }

    /// "Generate 3D Model": show the output page and kick off a run.
    pub fn generate_model(&mut self) -> Result<Option<PipelineRunId>, AppError> {
        self.navigate(Page::Output);
        let res = self.start_conversion();
        if let Err(e) = &res {
            self.apply(DomainEvent::UserError(e.to_string()));
        }
        res
    }

    pub fn is_pipeline_running(&self) -> bool {
        self.state.conversion.is_running()
    }

    /// Call this from the UI loop/tick to process async messages.
    pub fn handle_pipeline_events(&mut self) {
        while let Ok(ev) = self.msg_rx.try_recv() {
            self.accept(ev);
        }
    }

    /// Waits for the next event from a worker and applies it.
    pub async fn wait_for_pipeline_event(&mut self) {
        if let Some(ev) = self.msg_rx.recv().await {
            self.accept(ev);
        }
    }

    fn accept(&mut self, ev: DomainEvent) {
        if let DomainEvent::PipelineEvent { run_id, .. } = &ev {
            if self.state.conversion.run_id != Some(*run_id) {
                tracing::debug!(%run_id, "ignoring event from stale run");
                return;
            }
        }
        self.apply(ev);
    }

    pub fn sender(&self) -> mpsc::Sender<DomainEvent> {
        self.msg_tx.clone()
    }

    // --- Output / walkthrough ---

    pub fn update_viewer(&mut self, settings: ViewerSettings) {
        self.apply(DomainEvent::ViewerChanged(settings));
    }

    pub fn walk(&mut self, cmd: WalkCommand) {
        let mut camera = self.state.camera;
        match cmd {
            WalkCommand::Forward => camera.move_forward(),
            WalkCommand::Backward => camera.move_backward(),
            WalkCommand::TurnLeft => camera.turn_left(),
            WalkCommand::TurnRight => camera.turn_right(),
            WalkCommand::Reset => camera.reset(),
        }
        self.apply(DomainEvent::CameraMoved(camera));
    }
}
