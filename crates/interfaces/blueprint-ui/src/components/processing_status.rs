use crate::theme::*;
use crate::utils::section_label;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    label: &str,
    stage: usize,
    stage_count: usize,
    progress: f32,
) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        align_items: Some(taffy::AlignItems::Center),
        justify_content: Some(taffy::JustifyContent::Center),
        gap: length(10.0),
        padding: length(24.0),
        flex_grow: 1.0,
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
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
            tui.ui(|ui| section_label(ui, "PROCESSING"));
            tui.ui_add(egui::Spinner::new().size(32.0).color(COL_ACCENT));
            tui.label(
                egui::RichText::new(label)
                    .size(14.0)
                    .strong()
                    .color(COL_TEXT),
            );
            tui.label(
                egui::RichText::new(format!("STAGE {stage} / {stage_count}"))
                    .monospace()
                    .color(COL_TEXT_DIM),
            );

            tui.style(taffy::Style {
                size: taffy::Size {
                    width: percent(0.6),
                    height: length(4.0),
                },
                ..Default::default()
            })
            .ui(|ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, COL_BORDER);
                let fill = egui::Rect::from_min_size(
                    rect.min,
                    egui::vec2(rect.width() * progress.clamp(0.0, 1.0), rect.height()),
                );
                ui.painter().rect_filled(fill, 0.0, COL_ACCENT);
            });
        },
    );
}
