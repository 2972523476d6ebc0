use crate::theme::*;
use crate::utils::{cmd_button, page_title, ButtonKind};
use blueprint_app_core::{AppCommand, BlueprintApplication, Page};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

const FEATURES: [(&str, &str); 6] = [
    (
        "Automatic Conversion",
        "Transform 2D blueprints into 3D models with minimal user supervision.",
    ),
    (
        "Parameter Input Support",
        "Specify dimensions, staircases, entry/exit points and other custom details.",
    ),
    (
        "3D Walkthrough Simulations",
        "Navigate through your design and inspect it from the inside.",
    ),
    (
        "Offline Functionality",
        "Everything runs locally; no connection is needed once installed.",
    ),
    (
        "Satellite & Map Integration",
        "Place the model against satellite imagery for extra realism.",
    ),
    (
        "Export Options",
        "Export models in standard formats (OBJ, FBX) for reuse elsewhere.",
    ),
];

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut BlueprintApplication) {
    let mut get_started = false;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(12.0),
        size: percent(1.),
        overflow: taffy::Point {
            x: taffy::Overflow::Hidden,
            y: taffy::Overflow::Scroll,
        },
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
                "Project Dashboard",
                "Welcome to Blueprint3D. Transform your 2D blueprints into immersive 3D models.",
            )
        });

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            flex_wrap: taffy::FlexWrap::Wrap,
            gap: length(10.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            for (title, body) in FEATURES {
                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    gap: length(4.0),
                    padding: length(12.0),
                    flex_grow: 1.0,
                    flex_basis: percent(0.3),
                    min_size: taffy::Size {
                        width: length(220.0),
                        height: length(80.0),
                    },
                    ..Default::default()
                })
                .bg_add(
                    TuiBackground::new()
                        .with_background_color(COL_BG_DARK)
                        .with_border_color(COL_BORDER)
                        .with_border_width(1.0),
                    |tui| {
                        tui.label(
                            egui::RichText::new(title)
                                .size(13.0)
                                .strong()
                                .color(COL_ACCENT),
                        );
                        tui.label(egui::RichText::new(body).size(11.0).color(COL_TEXT_DIM));
                    },
                );
            }
        });

        tui.style(taffy::Style {
            justify_content: Some(taffy::JustifyContent::Center),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            get_started = tui
                .ui(|ui| cmd_button(ui, "Get Started - Upload Blueprint", ButtonKind::Primary, true))
                .clicked();
        });
    });

    if get_started {
        let _ = app.dispatch(AppCommand::Navigate(Page::Upload));
    }
}
