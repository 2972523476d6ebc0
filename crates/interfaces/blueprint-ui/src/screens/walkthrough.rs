use crate::theme::*;
use crate::utils::{cmd_button, page_title, section_label, ButtonKind};
use blueprint_app_core::{AppCommand, BlueprintApplication, Page, WalkCommand};
use blueprint_config as config;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut BlueprintApplication) {
    let camera = app.state.camera;
    let footprint = (
        app.state
            .params
            .length
            .value()
            .filter(|v| *v > 0.0)
            .unwrap_or(config::DEFAULT_LENGTH_M),
        app.state
            .params
            .width
            .value()
            .filter(|v| *v > 0.0)
            .unwrap_or(config::DEFAULT_WIDTH_M),
    );
    let mut walk: Option<WalkCommand> = None;
    let mut back = false;
    let mut export = false;

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
                "Interactive 3D Walkthrough",
                "Experience your building design in an immersive 3D environment",
            )
        });

        tui.style(taffy::Style {
            flex_grow: 1.0,
            min_size: taffy::Size {
                width: length(0.0),
                height: length(260.0),
            },
            size: percent(1.),
            ..Default::default()
        })
        .ui(|ui| {
            let rect = ui.max_rect();
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 0.0, COL_BG_DARK);

            // Top-down plan with the entrance at the origin on the south wall.
            let (len, wid) = (footprint.0 as f32, footprint.1 as f32);
            let scale = (rect.width() / (len * 1.4)).min(rect.height() / (wid * 1.4));
            let origin = egui::pos2(rect.center().x, rect.center().y + wid * scale / 2.0);
            let to_screen =
                |x: f32, z: f32| egui::pos2(origin.x + x * scale, origin.y - z * scale);

            let plan = egui::Rect::from_two_pos(
                to_screen(-len / 2.0, 0.0),
                to_screen(len / 2.0, wid),
            );
            painter.rect_stroke(
                plan,
                0.0,
                egui::Stroke::new(1.0, COL_ACCENT),
                egui::StrokeKind::Middle,
            );

            let pos = to_screen(camera.x as f32, camera.z as f32);
            let heading = (camera.heading_deg as f32).to_radians();
            let dir = egui::vec2(heading.sin(), -heading.cos()) * 18.0;
            painter.circle_filled(pos, 4.0, COL_WARN);
            painter.arrow(pos, dir, egui::Stroke::new(1.5, COL_WARN));
        });

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            justify_content: Some(taffy::JustifyContent::Center),
            gap: length(8.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            for (label, cmd) in [
                ("Move Forward", WalkCommand::Forward),
                ("Turn Left", WalkCommand::TurnLeft),
                ("Turn Right", WalkCommand::TurnRight),
                ("Move Backward", WalkCommand::Backward),
                ("Reset", WalkCommand::Reset),
            ] {
                let kind = if cmd == WalkCommand::Reset {
                    ButtonKind::Ghost
                } else {
                    ButtonKind::Primary
                };
                if tui.ui(|ui| cmd_button(ui, label, kind, true)).clicked() {
                    walk = Some(cmd);
                }
            }
        });

        tui.ui(|ui| section_label(ui, "CAMERA"));
        tui.label(
            egui::RichText::new(format!(
                "x {:+.1} m   z {:+.1} m   heading {:.0}°",
                camera.x, camera.z, camera.heading_deg
            ))
            .monospace()
            .color(COL_TEXT),
        );

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            justify_content: Some(taffy::JustifyContent::SpaceBetween),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            back = tui
                .ui(|ui| cmd_button(ui, "Back to Model", ButtonKind::Outline, true))
                .clicked();
            export = tui
                .ui(|ui| cmd_button(ui, "Export Model", ButtonKind::Primary, true))
                .clicked();
        });
    });

    if let Some(cmd) = walk {
        let _ = app.dispatch(AppCommand::Walk(cmd));
    }
    if back {
        let _ = app.dispatch(AppCommand::Navigate(Page::Output));
    }
    if export {
        tracing::info!("model export is not available in this build");
    }
}
