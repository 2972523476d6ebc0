use crate::theme::*;
use crate::utils::{cmd_button, ButtonKind};
use blueprint_app_core::{HeaderVm, Page};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

/// What the user did in the top bar this frame.
#[derive(Debug, Default)]
pub struct NavResponse {
    pub selected: Option<Page>,
    pub login_clicked: bool,
    pub register_clicked: bool,
}

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &HeaderVm) -> NavResponse {
    let mut resp = NavResponse::default();

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(6.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG_DARK)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(16.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(
                    egui::RichText::new("BLUEPRINT3D")
                        .family(egui::FontFamily::Monospace)
                        .size(13.0)
                        .extra_letter_spacing(2.0)
                        .strong()
                        .color(COL_ACCENT),
                );

                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Row,
                    align_items: Some(taffy::AlignItems::Center),
                    gap: length(4.0),
                    ..Default::default()
                })
                .add(|tui| {
                    for item in &vm.items {
                        let text = egui::RichText::new(item.title).size(12.0).color(
                            if item.active {
                                COL_ACCENT
                            } else {
                                COL_TEXT_DIM
                            },
                        );
                        let clicked = tui
                            .ui(|ui| ui.selectable_label(item.active, text))
                            .clicked();
                        if clicked && !item.active {
                            resp.selected = Some(item.page);
                        }
                    }
                });
            });

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(6.0),
                ..Default::default()
            })
            .add(|tui| {
                if vm.is_busy {
                    tui.ui_add(egui::Spinner::new());
                    tui.label(
                        egui::RichText::new("PROCESSING")
                            .color(COL_WARN)
                            .size(10.0),
                    );
                }
                resp.login_clicked = tui
                    .ui(|ui| cmd_button(ui, "Login", ButtonKind::Ghost, true))
                    .clicked();
                resp.register_clicked = tui
                    .ui(|ui| cmd_button(ui, "Register", ButtonKind::Outline, true))
                    .clicked();
            });
        },
    );

    resp
}
