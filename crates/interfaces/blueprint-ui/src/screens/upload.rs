use crate::picker::RfdImagePicker;
use crate::theme::*;
use crate::utils::{cmd_button, page_title, section_label, ButtonKind};
use blueprint_app_core::{upload_vm, AppCommand, BlueprintApplication, Page};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut BlueprintApplication) {
    let vm = upload_vm(&app.state);
    let mut browse = false;
    let mut next = false;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(12.0),
        size: percent(1.),
        overflow: taffy::Point {
            x: taffy::Overflow::Hidden,
            y: taffy::Overflow::Scroll,
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| {
            page_title(
                ui,
                "Upload Your Blueprint",
                "Upload a 2D architectural blueprint to begin the conversion process",
            )
        });

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            align_items: Some(taffy::AlignItems::Center),
            gap: length(8.0),
            padding: length(32.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .bg_add(
            TuiBackground::new()
                .with_background_color(COL_BG_DARK)
                .with_border_color(COL_ACCENT.linear_multiply(0.5))
                .with_border_width(1.0),
            |tui| {
                tui.label(
                    egui::RichText::new("Select a blueprint file")
                        .size(15.0)
                        .strong()
                        .color(COL_TEXT),
                );
                tui.label(
                    egui::RichText::new("Supported formats: JPG, PNG, PDF, DWG, DXF")
                        .color(COL_TEXT_DIM),
                );
                browse = tui
                    .ui(|ui| cmd_button(ui, "Browse Files", ButtonKind::Primary, true))
                    .clicked();
            },
        );

        if let Some(vm) = &vm {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                gap: length(2.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.ui(|ui| section_label(ui, "CURRENT BLUEPRINT"));
                tui.label(
                    egui::RichText::new(&vm.file_name)
                        .strong()
                        .monospace()
                        .color(COL_SUCCESS),
                );
                tui.label(
                    egui::RichText::new(format!(
                        "{}  |  {}  |  {}",
                        vm.format, vm.size, vm.uploaded_at
                    ))
                    .color(COL_TEXT_DIM),
                );
            });
        }

        if let Some(err) = &app.state.last_error {
            tui.colored_label(COL_ERROR, err.as_str());
        }

        tui.style(taffy::Style {
            justify_content: Some(taffy::JustifyContent::Center),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            next = tui
                .ui(|ui| cmd_button(ui, "Continue to Parameters", ButtonKind::Primary, true))
                .clicked();
        });
    });

    if browse {
        // Errors are recorded in state.last_error by the app.
        if let Err(e) = app.upload_from(&RfdImagePicker) {
            tracing::warn!("upload failed: {e:#}");
        }
    }
    if next {
        let _ = app.dispatch(AppCommand::Navigate(Page::Parameters));
    }
}
