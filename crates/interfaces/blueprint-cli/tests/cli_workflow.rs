use std::sync::Arc;
use std::time::Duration;

use blueprint_app_core::{BlueprintApplication, UploadedImage};
use blueprint_cli::{commands, CliBuildingType, ParamArgs};
use blueprint_core::{BuildingType, NumberInput, ParamError};
use blueprint_pipeline::{
    ConversionPipeline, PipelineStage, SimulatedStage, StageContext, StageError,
};

#[test]
fn flags_override_only_what_was_passed() {
    let args = ParamArgs {
        staircases: Some("3".into()),
        entry_points: Some("1".into()),
        building_type: Some(CliBuildingType::Commercial),
        ..Default::default()
    };

    let report = commands::build_report(&args).unwrap();
    let p = &report.parameters;

    assert!(report.valid);
    assert_eq!(p.staircases, NumberInput::Value(3));
    assert_eq!(p.entry_points, NumberInput::Value(1));
    assert_eq!(p.building_type, BuildingType::Commercial);
    assert_eq!(p.length, NumberInput::Value(20.0));
    assert_eq!(p.floors, NumberInput::Value(2));
}

#[test]
fn bad_numbers_are_reported_not_rejected() {
    let args = ParamArgs {
        width: Some("wide".into()),
        floors: Some("0".into()),
        ..Default::default()
    };

    let report = commands::build_report(&args).unwrap();

    assert!(!report.valid);
    assert!(report.parameters.width.is_nan());
    assert_eq!(report.violations.len(), 2);

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["parameters"]["width"].is_null());
    assert_eq!(json["valid"], false);
}

#[test]
fn notes_pass_through_verbatim() {
    let args = ParamArgs {
        notes: Some("  rooftop garden  ".into()),
        ..Default::default()
    };
    let params = args.apply(Default::default()).unwrap();
    assert_eq!(params.additional_notes, "  rooftop garden  ");
    assert!(matches!(params.validate(), Ok(())));
}

#[tokio::test(start_paused = true)]
async fn run_conversion_reports_every_stage() {
    let mut app = BlueprintApplication::new();
    app.upload_image(UploadedImage::from_bytes("plan.pdf", vec![b'%', b'P', b'D', b'F']).unwrap());

    let mut labels: Vec<String> = Vec::new();
    let state = commands::run_conversion(&mut app, |s| {
        if !s.current_step_label.is_empty()
            && labels.last() != Some(&s.current_step_label)
        {
            labels.push(s.current_step_label.clone());
        }
    })
    .await
    .unwrap();

    assert!(state.model_ready);
    assert_eq!(labels.len(), 5);
    assert_eq!(labels[0], "Analyzing image structure...");
    assert_eq!(labels[4], "Applying textures...");
    assert_eq!(state.summary.unwrap().total_ms, 7000);
}

#[tokio::test(start_paused = true)]
async fn run_conversion_without_image_is_an_error() {
    let mut app = BlueprintApplication::new();
    let err = commands::run_conversion(&mut app, |_| {}).await.unwrap_err();
    assert!(err.to_string().contains("no blueprint"));
}

struct Unreachable;

#[async_trait::async_trait]
impl PipelineStage for Unreachable {
    fn label(&self) -> &str {
        "Running 3D reconstruction model..."
    }
    fn estimated_duration(&self) -> Duration {
        Duration::from_millis(1)
    }
    async fn execute(&self, _ctx: &StageContext) -> Result<(), StageError> {
        Err(StageError("model backend unavailable".into()))
    }
}

#[tokio::test(start_paused = true)]
async fn stage_failure_surfaces_as_error() {
    let stages: Vec<Arc<dyn PipelineStage>> = vec![
        SimulatedStage::arc("Analyzing image structure...", Duration::from_millis(5)),
        Arc::new(Unreachable),
    ];
    let mut app = BlueprintApplication::with_pipeline(ConversionPipeline::new(stages));
    app.upload_image(UploadedImage::from_bytes("plan.png", vec![1]).unwrap());

    let err = commands::run_conversion(&mut app, |_| {}).await.unwrap_err();

    assert!(err.to_string().contains("model backend unavailable"), "{err}");
    assert!(!app.state.conversion.model_ready);
}

#[tokio::test]
async fn convert_rejects_unsupported_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.bmp");
    std::fs::write(&path, [0u8; 4]).unwrap();
    let path = camino::Utf8PathBuf::from_path_buf(path).unwrap();

    let err = commands::cmd_convert(path, &ParamArgs::default(), true)
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("unsupported"), "{err:#}");
}

#[test]
fn unknown_building_type_error_is_typed() {
    let err = blueprint_core::BuildingParameters::default()
        .with_field(blueprint_core::ParamField::BuildingType, "castle")
        .unwrap_err();
    assert_eq!(err, ParamError::UnknownBuildingType("castle".into()));
}
