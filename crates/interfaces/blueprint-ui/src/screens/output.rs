use crate::components::{forms::select_field, model_viewer, processing_status};
use crate::theme::*;
use crate::utils::{cmd_button, page_title, section_label, ButtonKind};
use blueprint_app_core::{
    output_preview_vm, AppCommand, BlueprintApplication, OutputPreviewVm, Page, RenderQuality,
};
use blueprint_config as config;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut BlueprintApplication) {
    let preview = output_preview_vm(&app.state);
    let mut settings = app.state.viewer.clone();
    let mut settings_changed = false;
    let mut walkthrough = false;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(10.0),
        size: percent(1.),
        min_size: taffy::Size {
            width: length(0.0),
            height: length(0.0),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| {
            page_title(
                ui,
                "3D Model Output",
                "Your generated 3D model based on the blueprint and parameters",
            )
        });

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(10.0),
            flex_grow: 1.0,
            min_size: taffy::Size {
                width: length(0.0),
                height: length(0.0),
            },
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                flex_grow: 1.0,
                flex_basis: length(0.0),
                min_size: taffy::Size {
                    width: length(0.0),
                    height: length(0.0),
                },
                ..Default::default()
            })
            .add(|tui| match &preview {
                OutputPreviewVm::Processing {
                    label,
                    stage,
                    stage_count,
                    progress,
                } => processing_status::draw(tui, label, *stage, *stage_count, *progress),
                OutputPreviewVm::Ready { file_name } => {
                    model_viewer::draw(tui, file_name, &app.state.params, &app.state.viewer)
                }
                OutputPreviewVm::Failed { message } => placeholder(
                    tui,
                    "Conversion failed",
                    message,
                    COL_ERROR,
                ),
                OutputPreviewVm::Placeholder => placeholder(
                    tui,
                    "3D Model Preview",
                    "Your building model will appear here",
                    COL_TEXT_DIM,
                ),
            });

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                gap: length(8.0),
                padding: length(12.0),
                flex_shrink: 0.0,
                size: taffy::Size {
                    width: length(240.0),
                    height: auto(),
                },
                ..Default::default()
            })
            .bg_add(
                TuiBackground::new()
                    .with_background_color(COL_BG_DARK)
                    .with_border_color(COL_BORDER)
                    .with_border_width(1.0),
                |tui| {
                    tui.ui(|ui| section_label(ui, "MODEL CONTROLS"));

                    tui.ui(|ui| {
                        ui.label("View Angle");
                        let mut angle = settings.view_angle_deg();
                        let resp = ui.add(
                            egui::Slider::new(
                                &mut angle,
                                config::MIN_VIEW_ANGLE_DEG..=config::MAX_VIEW_ANGLE_DEG,
                            )
                            .suffix("°"),
                        );
                        if resp.changed() {
                            settings.set_view_angle_deg(angle);
                            settings_changed = true;
                        }

                        ui.label("Zoom Level");
                        let mut zoom = settings.zoom();
                        if ui
                            .add(egui::Slider::new(&mut zoom, config::MIN_ZOOM..=config::MAX_ZOOM))
                            .changed()
                        {
                            settings.set_zoom(zoom);
                            settings_changed = true;
                        }
                    });

                    let qualities: Vec<(RenderQuality, String)> = RenderQuality::ALL
                        .into_iter()
                        .map(|q| (q, q.label().to_string()))
                        .collect();
                    if let Some(q) = select_field(
                        &mut *tui,
                        "Render Quality",
                        settings.render_quality,
                        &qualities,
                        &[],
                    ) {
                        settings.render_quality = q;
                        settings_changed = true;
                    }

                    tui.ui(|ui| section_label(ui, "DISPLAY OPTIONS"));
                    for (flag, text) in [
                        (&mut settings.show_walls, "Walls"),
                        (&mut settings.show_floors, "Floors"),
                        (&mut settings.show_stairs, "Stairs"),
                        (&mut settings.show_doors, "Doors/Windows"),
                    ] {
                        settings_changed |= tui.ui_add(egui::Checkbox::new(flag, text)).changed();
                    }

                    walkthrough = tui
                        .ui(|ui| cmd_button(ui, "Start Walkthrough", ButtonKind::Primary, true))
                        .clicked();
                },
            );
        });
    });

    if settings_changed {
        let _ = app.dispatch(AppCommand::UpdateViewer(settings));
    }
    if walkthrough {
        let _ = app.dispatch(AppCommand::Navigate(Page::Walkthrough));
    }
}

fn placeholder<'a>(
    tui: impl TuiBuilderLogic<'a>,
    title: &str,
    body: &str,
    body_color: egui::Color32,
) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        align_items: Some(taffy::AlignItems::Center),
        justify_content: Some(taffy::JustifyContent::Center),
        gap: length(6.0),
        flex_grow: 1.0,
        min_size: taffy::Size {
            width: length(0.0),
            height: length(240.0),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG_DARK)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.label(egui::RichText::new(title).size(15.0).strong().color(COL_TEXT));
            tui.label(egui::RichText::new(body).color(body_color));
        },
    );
}
