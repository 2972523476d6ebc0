use crate::theme::COL_ERROR;
use crate::utils::section_label;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

/// Labelled single-line input with its validation messages underneath.
/// Returns true when the text changed this frame.
pub fn text_field<'a>(
    tui: impl TuiBuilderLogic<'a>,
    label: &str,
    value: &mut String,
    hint: &str,
    errors: &[String],
) -> bool {
    let mut changed = false;
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(2.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, label));
        changed = tui
            .ui_add(
                egui::TextEdit::singleline(value)
                    .hint_text(hint)
                    .desired_width(f32::INFINITY)
                    .font(egui::FontId::monospace(12.0)),
            )
            .changed();
        for err in errors {
            tui.colored_label(COL_ERROR, err);
        }
    });
    changed
}

/// Dropdown over a fixed option list. Returns the newly picked option, if any.
pub fn select_field<'a, T: Copy + PartialEq>(
    tui: impl TuiBuilderLogic<'a>,
    label: &str,
    current: T,
    options: &[(T, String)],
    errors: &[String],
) -> Option<T> {
    let mut picked = None;
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(2.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, label));
        tui.ui(|ui| {
            let selected_text = options
                .iter()
                .find(|(v, _)| *v == current)
                .map(|(_, l)| l.as_str())
                .unwrap_or("-");
            egui::ComboBox::from_id_salt(label)
                .selected_text(selected_text)
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for (value, text) in options {
                        if ui.selectable_label(*value == current, text).clicked() {
                            picked = Some(*value);
                        }
                    }
                });
        });
        for err in errors {
            tui.colored_label(COL_ERROR, err);
        }
    });
    picked.filter(|v| *v != current)
}
