use std::collections::BTreeMap;

use crate::components::forms::{select_field, text_field};
use crate::theme::*;
use crate::utils::{cmd_button, page_title, section_label, ButtonKind};
use blueprint_app_core::{
    parameters_vm, AppCommand, BlueprintApplication, BuildingParameters, BuildingType,
    NumberInput, ParamField,
};
use blueprint_config as config;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

/// Text the user is typing, kept apart from the parsed record so partial
/// input such as "12." survives a frame.
pub struct ParamDrafts {
    text: BTreeMap<ParamField, String>,
}

impl ParamDrafts {
    pub fn from_params(params: &BuildingParameters) -> Self {
        Self {
            text: ParamField::ALL
                .into_iter()
                .map(|f| (f, params.raw_value(f)))
                .collect(),
        }
    }

    fn entry(&mut self, field: ParamField) -> &mut String {
        self.text.entry(field).or_default()
    }
}

const TEXT_FIELDS: [(ParamField, &str); 4] = [
    (ParamField::Length, "20"),
    (ParamField::Width, "15"),
    (ParamField::Height, "10"),
    (ParamField::Floors, "2"),
];

fn count_options() -> Vec<(NumberInput<i64>, String)> {
    (config::MIN_COUNT..=config::MAX_COUNT)
        .map(|n| (NumberInput::Value(n), n.to_string()))
        .collect()
}

pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    app: &mut BlueprintApplication,
    drafts: &mut ParamDrafts,
) {
    let vm = parameters_vm(&app.state);
    let params = app.state.params.clone();
    let mut updates: Vec<(ParamField, String)> = Vec::new();
    let mut generate = false;
    let mut reset = false;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(10.0),
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
                "Define Building Parameters",
                "Specify dimensions and features for accurate 3D conversion",
            )
        });

        tui.ui(|ui| section_label(ui, "DIMENSIONS"));
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            gap: length(8.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            for (field, hint) in TEXT_FIELDS {
                let buf = drafts.entry(field);
                if text_field(&mut *tui, field.label(), buf, hint, vm.field_errors(field)) {
                    updates.push((field, buf.clone()));
                }
            }

            let counts = count_options();
            for (field, current) in [
                (ParamField::Staircases, params.staircases),
                (ParamField::EntryPoints, params.entry_points),
            ] {
                if let Some(NumberInput::Value(n)) = select_field(
                    &mut *tui,
                    field.label(),
                    current,
                    &counts,
                    vm.field_errors(field),
                ) {
                    updates.push((field, n.to_string()));
                }
            }
        });

        let types: Vec<(BuildingType, String)> = BuildingType::ALL
            .into_iter()
            .map(|t| (t, t.label().to_string()))
            .collect();
        if let Some(t) = select_field(
            &mut *tui,
            ParamField::BuildingType.label(),
            params.building_type,
            &types,
            &[],
        ) {
            updates.push((ParamField::BuildingType, t.token().to_string()));
        }

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
            tui.ui(|ui| section_label(ui, ParamField::AdditionalNotes.label()));
            let buf = drafts.entry(ParamField::AdditionalNotes);
            let changed = tui
                .ui_add(
                    egui::TextEdit::multiline(buf)
                        .hint_text("Any specific requirements or features...")
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                )
                .changed();
            if changed {
                updates.push((ParamField::AdditionalNotes, buf.clone()));
            }
        });

        if !vm.has_image {
            tui.colored_label(
                COL_WARN,
                "No blueprint uploaded yet. Upload one to generate a model.",
            );
        }
        if let Some(err) = &app.state.last_error {
            tui.colored_label(COL_ERROR, err.as_str());
        }

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
            reset = tui
                .ui(|ui| cmd_button(ui, "Reset", ButtonKind::Ghost, true))
                .clicked();
            generate = tui
                .ui(|ui| cmd_button(ui, "Generate 3D Model", ButtonKind::Primary, vm.can_generate))
                .clicked();
        });
    });

    for (field, raw) in updates {
        // Rejected values are surfaced through state.last_error.
        let _ = app.dispatch(AppCommand::UpdateParam { field, raw });
    }
    if reset {
        let _ = app.dispatch(AppCommand::ResetParams);
        *drafts = ParamDrafts::from_params(&app.state.params);
    }
    if generate {
        let _ = app.generate_model();
    }
}
