use crate::ParamArgs;
use anyhow::{bail, Context, Result};
use blueprint_app_core::{BlueprintApplication, PipelineRunState};
use blueprint_core::BuildingParameters;
use blueprint_pipeline::PipelineStage;
use camino::Utf8PathBuf;
use humansize::{format_size, DECIMAL};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

pub fn cmd_stages() {
    let pipeline = blueprint_pipeline::default_pipeline();
    println!(":: Conversion stages");
    for (i, stage) in pipeline.stages().iter().enumerate() {
        println!(
            "   {}. {:<36} {:>6} ms",
            i + 1,
            stage.label(),
            stage.estimated_duration().as_millis()
        );
    }
    println!(
        "   Total: {} ms",
        pipeline.total_estimated_duration().as_millis()
    );
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamsReport {
    pub parameters: BuildingParameters,
    pub valid: bool,
    pub violations: Vec<String>,
}

pub fn build_report(args: &ParamArgs) -> Result<ParamsReport> {
    let parameters = args.apply(BuildingParameters::default())?;
    let violations: Vec<String> = parameters
        .violations()
        .iter()
        .map(ToString::to_string)
        .collect();
    Ok(ParamsReport {
        valid: violations.is_empty(),
        parameters,
        violations,
    })
}

pub fn cmd_params(args: &ParamArgs, json: bool) -> Result<()> {
    let report = build_report(args)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let p = &report.parameters;
    println!(":: Building parameters");
    println!("   Length:        {} m", p.length);
    println!("   Width:         {} m", p.width);
    println!("   Height:        {} m", p.height);
    println!("   Floors:        {}", p.floors);
    println!("   Staircases:    {}", p.staircases);
    println!("   Entry points:  {}", p.entry_points);
    println!("   Type:          {}", p.building_type.label());
    if !p.additional_notes.is_empty() {
        println!("   Notes:         {}", p.additional_notes);
    }
    if report.valid {
        println!(":: Parameters are valid.");
    } else {
        println!(":: {} problem(s):", report.violations.len());
        for v in &report.violations {
            println!("   - {v}");
        }
    }
    Ok(())
}

/// Starts a run and pumps events until it finishes. `on_change` sees every
/// intermediate state.
pub async fn run_conversion(
    app: &mut BlueprintApplication,
    mut on_change: impl FnMut(&PipelineRunState),
) -> Result<PipelineRunState> {
    if app.start_conversion()?.is_none() {
        bail!("no blueprint uploaded");
    }
    on_change(&app.state.conversion);

    while app.is_pipeline_running() {
        app.wait_for_pipeline_event().await;
        on_change(&app.state.conversion);
    }

    let state = app.state.conversion.clone();
    if let Some(err) = &state.error {
        bail!("conversion failed: {err}");
    }
    Ok(state)
}

pub async fn cmd_convert(image: Utf8PathBuf, args: &ParamArgs, json: bool) -> Result<()> {
    let params = args
        .apply(BuildingParameters::default())
        .context("invalid parameter flag")?;

    let mut app = BlueprintApplication::new();
    app.upload_path(image.as_std_path())
        .with_context(|| format!("failed to load blueprint {image}"))?;
    app.set_params(params);

    if let (false, Some(upload)) = (json, &app.state.image) {
        println!(":: Blueprint: {}", upload.file_name);
        println!(
            "   Format: {}  Size: {}",
            upload.format,
            format_size(upload.size_bytes(), DECIMAL)
        );
    }

    let pb = ProgressBar::new(app.pipeline().stage_count() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .context("invalid progress template")?
            .progress_chars("=> "),
    );
    if json {
        pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let res = run_conversion(&mut app, |state| {
        pb.set_position(state.stage_index as u64);
        pb.set_message(state.current_step_label.clone());
    })
    .await;

    match res {
        Ok(state) => {
            pb.set_position(state.stage_count as u64);
            pb.finish_with_message("Model ready.");
            if json {
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else if let Some(summary) = &state.summary {
                println!(":: Conversion finished in {} ms", summary.total_ms);
                for s in &summary.stages {
                    println!("   {:<36} {:>6} ms", s.label, s.elapsed_ms);
                }
            }
            Ok(())
        }
        Err(e) => {
            pb.abandon_with_message("Failed.");
            Err(e)
        }
    }
}
