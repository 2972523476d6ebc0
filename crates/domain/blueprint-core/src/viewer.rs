use blueprint_config as config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderQuality {
    Low,
    #[default]
    Medium,
    High,
    Ultra,
}

impl RenderQuality {
    pub const ALL: [RenderQuality; 4] = [
        RenderQuality::Low,
        RenderQuality::Medium,
        RenderQuality::High,
        RenderQuality::Ultra,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RenderQuality::Low => "Low",
            RenderQuality::Medium => "Medium",
            RenderQuality::High => "High",
            RenderQuality::Ultra => "Ultra",
        }
    }

    /// Line segments drawn per edge by the preview renderer.
    pub fn edge_segments(self) -> usize {
        match self {
            RenderQuality::Low => 1,
            RenderQuality::Medium => 2,
            RenderQuality::High => 4,
            RenderQuality::Ultra => 8,
        }
    }
}

/// Output page model controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerSettings {
    view_angle_deg: f32,
    zoom: u8,
    pub render_quality: RenderQuality,
    pub show_walls: bool,
    pub show_floors: bool,
    pub show_stairs: bool,
    pub show_doors: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            view_angle_deg: config::DEFAULT_VIEW_ANGLE_DEG,
            zoom: config::DEFAULT_ZOOM,
            render_quality: RenderQuality::default(),
            show_walls: true,
            show_floors: true,
            show_stairs: true,
            show_doors: true,
        }
    }
}

impl ViewerSettings {
    pub fn view_angle_deg(&self) -> f32 {
        self.view_angle_deg
    }

    pub fn set_view_angle_deg(&mut self, v: f32) {
        self.view_angle_deg = config::clamp_view_angle(v);
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn set_zoom(&mut self, v: u8) {
        self.zoom = v.clamp(config::MIN_ZOOM, config::MAX_ZOOM);
    }

    /// Zoom as a scale factor, 1.0 at the default level.
    pub fn zoom_factor(&self) -> f32 {
        self.zoom as f32 / config::DEFAULT_ZOOM as f32
    }
}
