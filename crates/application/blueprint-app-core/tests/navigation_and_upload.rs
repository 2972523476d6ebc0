use std::io::Write;

use blueprint_app_core::{
    output_preview_vm, AppCommand, BlueprintApplication, BuildingType, ImagePicker, NumberInput,
    OutputPreviewVm, Page, ParamField, UploadedImage, WalkCommand,
};

struct FakePicker(Option<UploadedImage>);

impl ImagePicker for FakePicker {
    fn pick(&self) -> anyhow::Result<Option<UploadedImage>> {
        Ok(self.0.clone())
    }
}

struct PathPicker(std::path::PathBuf);

impl ImagePicker for PathPicker {
    fn pick(&self) -> anyhow::Result<Option<UploadedImage>> {
        Ok(Some(UploadedImage::from_path(&self.0)?))
    }
}

#[test]
fn fresh_app_starts_on_dashboard_with_defaults() {
    let app = BlueprintApplication::new();

    assert_eq!(app.state.page(), Page::Dashboard);
    assert!(app.state.image.is_none());
    assert!(!app.state.conversion.is_processing);
    assert!(!app.state.conversion.model_ready);
    assert_eq!(app.state.params.length, NumberInput::Value(20.0));
    assert_eq!(app.state.params.floors, NumberInput::Value(2));
    assert_eq!(app.state.params.building_type, BuildingType::Residential);
    assert_eq!(app.pipeline().stage_count(), 5);
}

#[test]
fn every_page_is_reachable_from_every_page() {
    let mut app = BlueprintApplication::new();
    for from in Page::ALL {
        for to in Page::ALL {
            app.dispatch(AppCommand::Navigate(from)).unwrap();
            app.dispatch(AppCommand::Navigate(to)).unwrap();
            assert_eq!(app.state.page(), to);
        }
    }
}

#[test]
fn unknown_navigation_token_changes_nothing() {
    let mut app = BlueprintApplication::new();
    app.navigate(Page::Upload);
    let before = app.state.clone();

    app.dispatch(AppCommand::NavigateToken("settings".into()))
        .unwrap();

    assert_eq!(app.state.page(), Page::Upload);
    assert_eq!(app.state.params, before.params);
    assert!(app.state.last_error.is_none());

    assert!(app.navigate_token("walkthrough"));
    assert_eq!(app.state.page(), Page::Walkthrough);
}

#[test]
fn parameter_updates_touch_only_their_field() {
    let mut app = BlueprintApplication::new();

    app.dispatch(AppCommand::UpdateParam {
        field: ParamField::Staircases,
        raw: "3".into(),
    })
    .unwrap();
    app.dispatch(AppCommand::UpdateParam {
        field: ParamField::EntryPoints,
        raw: "1".into(),
    })
    .unwrap();
    app.dispatch(AppCommand::UpdateParam {
        field: ParamField::BuildingType,
        raw: "commercial".into(),
    })
    .unwrap();

    let p = &app.state.params;
    assert_eq!(p.staircases, NumberInput::Value(3));
    assert_eq!(p.entry_points, NumberInput::Value(1));
    assert_eq!(p.building_type, BuildingType::Commercial);
    assert_eq!(p.length, NumberInput::Value(20.0));
    assert_eq!(p.width, NumberInput::Value(15.0));
    assert_eq!(p.height, NumberInput::Value(10.0));
    assert_eq!(p.floors, NumberInput::Value(2));
    assert_eq!(p.additional_notes, "");
}

#[test]
fn unparsable_number_is_stored_as_nan() {
    let mut app = BlueprintApplication::new();

    app.update_param(ParamField::Height, "tall").unwrap();

    assert!(app.state.params.height.is_nan());
    assert!(app.state.params.validate().is_err());
}

#[test]
fn unknown_building_type_is_rejected_and_surfaced() {
    let mut app = BlueprintApplication::new();

    let res = app.dispatch(AppCommand::UpdateParam {
        field: ParamField::BuildingType,
        raw: "castle".into(),
    });

    assert!(res.is_err());
    assert_eq!(app.state.params.building_type, BuildingType::Residential);
    assert!(app.state.last_error.is_some());

    app.dispatch(AppCommand::DismissError).unwrap();
    assert!(app.state.last_error.is_none());
}

#[test]
fn picker_upload_and_dismissal() {
    let mut app = BlueprintApplication::new();

    assert!(!app.upload_from(&FakePicker(None)).unwrap());
    assert!(app.state.image.is_none());

    let img = UploadedImage::from_bytes("plan.dxf", vec![0; 2048]).unwrap();
    assert!(app.upload_from(&FakePicker(Some(img))).unwrap());
    assert_eq!(app.state.image.as_ref().unwrap().file_name, "plan.dxf");
}

#[test]
fn picker_reading_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("second-floor.jpg");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(&[0xFF, 0xD8, 0xFF]).unwrap();
    drop(f);

    let mut app = BlueprintApplication::new();
    assert!(app.upload_from(&PathPicker(path)).unwrap());
    assert_eq!(app.state.image.as_ref().unwrap().size_bytes(), 3);

    let bad = dir.path().join("notes.txt");
    std::fs::write(&bad, b"hello").unwrap();
    assert!(app.upload_from(&PathPicker(bad)).is_err());
    assert!(app.state.last_error.is_some());
    // The earlier upload survives a rejected one.
    assert_eq!(
        app.state.image.as_ref().unwrap().file_name,
        "second-floor.jpg"
    );
}

#[test]
fn walkthrough_commands_move_the_camera() {
    let mut app = BlueprintApplication::new();

    app.dispatch(AppCommand::Walk(WalkCommand::Forward)).unwrap();
    assert!((app.state.camera.z - 1.0).abs() < 1e-9);

    app.dispatch(AppCommand::Walk(WalkCommand::TurnRight)).unwrap();
    assert!((app.state.camera.heading_deg - 15.0).abs() < 1e-9);

    app.dispatch(AppCommand::Walk(WalkCommand::Reset)).unwrap();
    assert_eq!(app.state.camera, Default::default());
}

#[test]
fn viewer_settings_are_clamped_on_update() {
    let mut app = BlueprintApplication::new();
    let mut settings = app.state.viewer.clone();
    settings.set_view_angle_deg(400.0);
    settings.set_zoom(0);
    settings.show_stairs = false;

    app.dispatch(AppCommand::UpdateViewer(settings)).unwrap();

    assert_eq!(app.state.viewer.view_angle_deg(), 360.0);
    assert_eq!(app.state.viewer.zoom(), 1);
    assert!(!app.state.viewer.show_stairs);
}

#[test]
fn generate_without_upload_lands_on_output_placeholder() {
    let mut app = BlueprintApplication::new();
    app.navigate(Page::Parameters);

    let res = app.generate_model().unwrap();

    assert!(res.is_none());
    assert_eq!(app.state.page(), Page::Output);
    assert_eq!(output_preview_vm(&app.state), OutputPreviewVm::Placeholder);
}

// Runs on a plain thread: the conversion must fall back to the shared runtime.
#[test]
fn conversion_without_ambient_tokio_runtime() {
    use std::time::{Duration, Instant};

    use blueprint_pipeline::{ConversionPipeline, SimulatedStage};

    let pipeline = ConversionPipeline::new(vec![
        SimulatedStage::arc("Analyzing image structure...", Duration::from_millis(10)),
        SimulatedStage::arc("Applying textures...", Duration::from_millis(10)),
    ]);
    let mut app = BlueprintApplication::with_pipeline(pipeline);
    app.upload_image(UploadedImage::from_bytes("plan.png", vec![1]).unwrap());

    app.start_conversion()
        .expect("start should not need an ambient runtime")
        .expect("run id");

    let deadline = Instant::now() + Duration::from_secs(5);
    while app.is_pipeline_running() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(10));
        app.handle_pipeline_events();
    }

    assert!(app.state.conversion.model_ready);
}

#[test]
fn upload_path_maps_io_failures_to_upload_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = BlueprintApplication::new();

    let err = app
        .upload_path(&dir.path().join("missing.png"))
        .unwrap_err();

    assert!(matches!(err, blueprint_app_core::AppError::Upload(_)));
    assert!(app.state.image.is_none());
}
