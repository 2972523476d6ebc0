use crate::components::header;
use crate::screens::{dashboard, output, parameters, upload, walkthrough};
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

use blueprint_app_core::{header_vm, AppCommand, BlueprintApplication, Page};

pub struct BlueprintUiApp {
    core: BlueprintApplication,
    drafts: parameters::ParamDrafts,
}

impl BlueprintUiApp {
    pub fn new(core: BlueprintApplication) -> Self {
        let drafts = parameters::ParamDrafts::from_params(&core.state.params);
        Self { core, drafts }
    }
}

impl eframe::App for BlueprintUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.core.handle_pipeline_events();

        if let Some(passes) = std::num::NonZeroUsize::new(3) {
            ctx.options_mut(|options| options.max_passes = passes);
        }
        ctx.style_mut(|style| {
            // Width-independent text measurement for the taffy multi-pass layout.
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    ..Default::default()
                })
                .show(|tui| {
                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(36.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| {
                        let vm = header_vm(&self.core.state);
                        let resp = header::draw(tui, &vm);
                        if let Some(page) = resp.selected {
                            let _ = self.core.dispatch(AppCommand::Navigate(page));
                        }
                        if resp.login_clicked || resp.register_clicked {
                            tracing::info!("accounts are not available in this build");
                        }
                    });

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        flex_grow: 1.0,
                        flex_basis: length(0.0),
                        min_size: taffy::Size {
                            width: length(0.0),
                            height: length(0.0),
                        },
                        overflow: taffy::Point {
                            x: taffy::Overflow::Hidden,
                            y: taffy::Overflow::Hidden,
                        },
                        padding: length(16.0),
                        gap: length(8.0),
                        ..Default::default()
                    })
                    .add(|tui| match self.core.state.page() {
                        Page::Dashboard => dashboard::draw(tui, &mut self.core),
                        Page::Upload => upload::draw(tui, &mut self.core),
                        Page::Parameters => {
                            parameters::draw(tui, &mut self.core, &mut self.drafts)
                        }
                        Page::Output => output::draw(tui, &mut self.core),
                        Page::Walkthrough => walkthrough::draw(tui, &mut self.core),
                    });
                });
        });

        if self.core.is_pipeline_running() {
            ctx.request_repaint();
        }
    }
}
