use crate::domain::AppState;

use super::events::DomainEvent;

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::RouteChanged(page) => state.nav.select(page),

        DomainEvent::ImageUploaded(image) => {
            state.image = Some(image);
            state.conversion.model_ready = false;
            state.last_error = None;
        }

        DomainEvent::ParametersChanged(params) => state.params = params,
        DomainEvent::ViewerChanged(viewer) => state.viewer = viewer,
        DomainEvent::CameraMoved(camera) => state.camera = camera,

        DomainEvent::PipelineEvent { run_id, ev } => {
            state.conversion.run_id = Some(run_id);
            state.conversion.apply(ev);
        }

        DomainEvent::UserError(msg) => state.last_error = Some(msg),
        DomainEvent::ErrorCleared => state.last_error = None,
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::PipelineRunEvent;
    use blueprint_core::{Page, UploadedImage};
    use blueprint_pipeline::RunSummary;

    fn image(name: &str) -> UploadedImage {
        UploadedImage::from_bytes(name, vec![1]).unwrap()
    }

    #[test]
    fn initial_state() {
        let s = AppState::default();
        assert_eq!(s.page(), Page::Dashboard);
        assert!(!s.conversion.is_processing);
        assert!(!s.conversion.model_ready);
        assert!(s.image.is_none());
    }

    #[test]
    fn new_upload_resets_model_ready() {
        let run_id = uuid::Uuid::new_v4();
        let mut s = reduce(AppState::default(), DomainEvent::ImageUploaded(image("a.png")));
        s = reduce(
            s,
            DomainEvent::PipelineEvent {
                run_id,
                ev: PipelineRunEvent::Started { stage_count: 5 },
            },
        );
        s = reduce(
            s,
            DomainEvent::PipelineEvent {
                run_id,
                ev: PipelineRunEvent::Completed {
                    summary: RunSummary::default(),
                },
            },
        );
        assert!(s.conversion.model_ready);

        s = reduce(s, DomainEvent::ImageUploaded(image("b.dxf")));
        assert!(!s.conversion.model_ready);
        assert_eq!(s.image.as_ref().map(|i| i.file_name.as_str()), Some("b.dxf"));
    }

    #[test]
    fn started_clears_previous_result() {
        let run_id = uuid::Uuid::new_v4();
        let mut s = AppState::default();
        s.conversion.model_ready = true;
        s.conversion.error = Some("old".into());

        let s = reduce(
            s,
            DomainEvent::PipelineEvent {
                run_id,
                ev: PipelineRunEvent::Started { stage_count: 5 },
            },
        );
        assert!(s.conversion.is_processing);
        assert!(!s.conversion.model_ready);
        assert!(s.conversion.error.is_none());
        assert_eq!(s.conversion.run_id, Some(run_id));
    }
}
