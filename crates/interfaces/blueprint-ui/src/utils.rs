use crate::theme::*;
use eframe::egui;
use eframe::egui::Color32;

pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(10.0)
            .color(COL_TEXT_DIM)
            .family(egui::FontFamily::Monospace)
            .strong(),
    );
}

pub fn page_title(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(title)
                .size(20.0)
                .strong()
                .color(COL_TEXT),
        );
        ui.label(egui::RichText::new(subtitle).size(12.0).color(COL_TEXT_DIM));
    });
}

/// Visual weight of a command button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Filled accent; the main action on a page.
    Primary,
    Outline,
    /// Muted border for secondary or inert actions.
    Ghost,
}

impl ButtonKind {
    /// (fill, stroke, text) when the button is enabled.
    fn colors(self) -> (Color32, Color32, Color32) {
        match self {
            ButtonKind::Primary => (COL_ACCENT, COL_ACCENT, COL_BG_DARK),
            ButtonKind::Outline => (Color32::TRANSPARENT, COL_ACCENT, COL_ACCENT),
            ButtonKind::Ghost => (Color32::TRANSPARENT, COL_BORDER, COL_TEXT_DIM),
        }
    }
}

pub fn cmd_button(
    ui: &mut egui::Ui,
    label: &str,
    kind: ButtonKind,
    enabled: bool,
) -> egui::Response {
    let (fill, stroke_col, text_col) = if enabled {
        kind.colors()
    } else {
        (Color32::TRANSPARENT, COL_BORDER, COL_TEXT_DIM)
    };

    let text = egui::RichText::new(label).size(11.0).color(text_col);
    let btn = egui::Button::new(text)
        .min_size(egui::vec2(96.0, 26.0))
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, stroke_col));

    ui.add_enabled(enabled, btn)
}
