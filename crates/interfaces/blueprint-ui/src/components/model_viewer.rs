//! Wireframe preview of the building envelope.
//!
//! There is no real mesh behind this: the box is derived from the building
//! parameters and projected with a fixed tilt around the vertical axis set by
//! the view angle.

use crate::theme::*;
use crate::utils::section_label;
use blueprint_app_core::{BuildingParameters, ViewerSettings};
use blueprint_config as config;
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

const TILT_DEG: f32 = 30.0;

/// Envelope size in metres with non-numeric inputs replaced by defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Envelope {
    length: f32,
    width: f32,
    height: f32,
    floors: usize,
    staircases: usize,
    entry_points: usize,
}

impl Envelope {
    fn from_params(p: &BuildingParameters) -> Self {
        let dim = |v: Option<f64>, fallback: f64| {
            v.filter(|d| *d > 0.0).unwrap_or(fallback) as f32
        };
        let count = |v: Option<i64>, fallback: i64| {
            config::clamp_count(v.unwrap_or(fallback)) as usize
        };
        Self {
            length: dim(p.length.value(), config::DEFAULT_LENGTH_M),
            width: dim(p.width.value(), config::DEFAULT_WIDTH_M),
            height: dim(p.height.value(), config::DEFAULT_HEIGHT_M),
            floors: p
                .floors
                .value()
                .unwrap_or(config::DEFAULT_FLOORS)
                .clamp(config::MIN_FLOORS, config::MAX_PREVIEW_FLOORS) as usize,
            staircases: count(p.staircases.value(), config::DEFAULT_STAIRCASES),
            entry_points: count(p.entry_points.value(), config::DEFAULT_ENTRY_POINTS),
        }
    }
}

struct Projector {
    center: egui::Pos2,
    scale: f32,
    sin_a: f32,
    cos_a: f32,
    sin_t: f32,
    cos_t: f32,
}

impl Projector {
    fn new(rect: egui::Rect, env: &Envelope, settings: &ViewerSettings) -> Self {
        let (sin_a, cos_a) = settings.view_angle_deg().to_radians().sin_cos();
        let (sin_t, cos_t) = TILT_DEG.to_radians().sin_cos();
        let extent = env.length.max(env.width).max(env.height);
        Self {
            center: rect.center() + egui::vec2(0.0, rect.height() * 0.1),
            scale: settings.zoom_factor() * rect.width().min(rect.height()) / (extent * 2.2),
            sin_a,
            cos_a,
            sin_t,
            cos_t,
        }
    }

    /// Model space is metres with y up and the footprint centred on the origin.
    fn project(&self, x: f32, y: f32, z: f32) -> egui::Pos2 {
        let xr = x * self.cos_a - z * self.sin_a;
        let zr = x * self.sin_a + z * self.cos_a;
        egui::pos2(
            self.center.x + xr * self.scale,
            self.center.y + (zr * self.sin_t - y * self.cos_t) * self.scale,
        )
    }
}

pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    file_name: &str,
    params: &BuildingParameters,
    settings: &ViewerSettings,
) {
    let env = Envelope::from_params(params);

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(4.0),
        flex_grow: 1.0,
        size: percent(1.),
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, &format!("MODEL // {file_name}")));

        tui.style(taffy::Style {
            flex_grow: 1.0,
            min_size: taffy::Size {
                width: length(0.0),
                height: length(280.0),
            },
            size: percent(1.),
            ..Default::default()
        })
        .ui(|ui| {
            let rect = ui.max_rect();
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 0.0, COL_BG_DARK);
            painter.rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(1.0, COL_BORDER),
                egui::StrokeKind::Inside,
            );

            let proj = Projector::new(rect, &env, settings);
            let (hl, hw, h) = (env.length / 2.0, env.width / 2.0, env.height);
            let line = |a: egui::Pos2, b: egui::Pos2, col: egui::Color32| {
                painter.line_segment([a, b], egui::Stroke::new(1.0, col));
            };

            // Ground grid; density follows render quality.
            let divisions = settings.render_quality.edge_segments() * 4;
            for i in 0..=divisions {
                let t = i as f32 / divisions as f32;
                let x = -hl * 1.5 + t * env.length * 1.5;
                let z = -hw * 1.5 + t * env.width * 1.5;
                line(
                    proj.project(x, 0.0, -hw * 1.5),
                    proj.project(x, 0.0, hw * 1.5),
                    COL_GRID,
                );
                line(
                    proj.project(-hl * 1.5, 0.0, z),
                    proj.project(hl * 1.5, 0.0, z),
                    COL_GRID,
                );
            }

            let corners = [(-hl, -hw), (hl, -hw), (hl, hw), (-hl, hw)];
            let ring = |y: f32, col: egui::Color32| {
                for i in 0..corners.len() {
                    let (x0, z0) = corners[i];
                    let (x1, z1) = corners[(i + 1) % corners.len()];
                    line(proj.project(x0, y, z0), proj.project(x1, y, z1), col);
                }
            };

            if settings.show_walls {
                ring(0.0, COL_ACCENT);
                ring(h, COL_ACCENT);
                for (x, z) in corners {
                    line(proj.project(x, 0.0, z), proj.project(x, h, z), COL_ACCENT);
                }
            }

            if settings.show_floors {
                for f in 1..env.floors {
                    ring(h * f as f32 / env.floors as f32, COL_TEXT_DIM);
                }
            }

            if settings.show_stairs && env.staircases > 0 {
                let storey = h / env.floors as f32;
                for s in 0..env.staircases {
                    let x = -hl + env.length * (s as f32 + 1.0) / (env.staircases as f32 + 1.0);
                    let z = hw * 0.6;
                    for f in 0..env.floors.saturating_sub(1) {
                        let y0 = storey * f as f32;
                        line(
                            proj.project(x - 1.5, y0, z),
                            proj.project(x + 1.5, y0 + storey, z),
                            COL_WARN,
                        );
                    }
                }
            }

            if settings.show_doors && env.entry_points > 0 {
                let door_w = (env.length / (env.entry_points as f32 * 3.0)).min(1.2);
                let door_h = (h / env.floors as f32 * 0.7).min(2.2);
                for d in 0..env.entry_points {
                    let x = -hl + env.length * (d as f32 + 1.0) / (env.entry_points as f32 + 1.0);
                    let z = -hw;
                    let pts = [
                        proj.project(x - door_w / 2.0, 0.0, z),
                        proj.project(x - door_w / 2.0, door_h, z),
                        proj.project(x + door_w / 2.0, door_h, z),
                        proj.project(x + door_w / 2.0, 0.0, z),
                    ];
                    for w in pts.windows(2) {
                        line(w[0], w[1], COL_SUCCESS);
                    }
                }
            }

            painter.text(
                rect.left_bottom() + egui::vec2(8.0, -8.0),
                egui::Align2::LEFT_BOTTOM,
                format!(
                    "{:.1} x {:.1} x {:.1} m  |  {} floors  |  {}",
                    env.length,
                    env.width,
                    env.height,
                    env.floors,
                    settings.render_quality.label()
                ),
                egui::FontId::monospace(10.0),
                COL_TEXT_DIM,
            );
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_app_core::NumberInput;

    #[test]
    fn envelope_falls_back_to_defaults_for_bad_input() {
        let params = BuildingParameters::default()
            .with_length(NumberInput::NotANumber)
            .with_height(NumberInput::Value(-3.0))
            .with_floors(NumberInput::Value(0));

        let env = Envelope::from_params(&params);

        assert_eq!(env.length, 20.0);
        assert_eq!(env.width, 15.0);
        assert_eq!(env.height, 10.0);
        assert_eq!(env.floors, 1);
    }

    #[test]
    fn huge_floor_count_is_capped_for_drawing() {
        let params =
            BuildingParameters::default().with_floors(NumberInput::Value(1_000_000_000_000));
        assert!(params.validate().is_ok());

        let env = Envelope::from_params(&params);

        assert_eq!(env.floors, config::MAX_PREVIEW_FLOORS as usize);
    }
}
