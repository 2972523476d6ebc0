//! Central configuration constants for defaults, ranges and runtime limits.

/// Default building length in metres.
pub const DEFAULT_LENGTH_M: f64 = 20.0;

/// Default building width in metres.
pub const DEFAULT_WIDTH_M: f64 = 15.0;

/// Default building height in metres.
pub const DEFAULT_HEIGHT_M: f64 = 10.0;

/// Default number of floors.
pub const DEFAULT_FLOORS: i64 = 2;

/// Default number of staircases.
pub const DEFAULT_STAIRCASES: i64 = 2;

/// Default number of entry points.
pub const DEFAULT_ENTRY_POINTS: i64 = 2;

/// Minimum number of floors accepted by validation.
pub const MIN_FLOORS: i64 = 1;
/// Most floors the model preview draws; validation has no upper bound.
pub const MAX_PREVIEW_FLOORS: i64 = 200;

/// Staircase and entry point counts offered by the form.
pub const MIN_COUNT: i64 = 1;
pub const MAX_COUNT: i64 = 4;

/// File extensions the blueprint uploader accepts (lowercase, no dot).
pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "pdf", "dwg", "dxf"];

/// Model viewer angle range in degrees.
pub const MIN_VIEW_ANGLE_DEG: f32 = 0.0;
pub const MAX_VIEW_ANGLE_DEG: f32 = 360.0;
pub const DEFAULT_VIEW_ANGLE_DEG: f32 = 45.0;

/// Model viewer zoom range.
pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 100;
pub const DEFAULT_ZOOM: u8 = 50;

/// Walkthrough camera step length in metres.
pub const WALK_STEP_M: f64 = 1.0;

/// Walkthrough camera turn increment in degrees.
pub const TURN_STEP_DEG: f64 = 15.0;

/// Capacity of the domain event channel between workers and the UI loop.
pub const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Desktop window geometry.
pub const WINDOW_SIZE: [f32; 2] = [1024.0, 720.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [800.0, 560.0];
pub const WINDOW_TITLE: &str = "BLUEPRINT3D // 2D TO 3D";

/// Clamp a staircase/entry point count into the advertised range.
pub fn clamp_count(v: i64) -> i64 {
    v.clamp(MIN_COUNT, MAX_COUNT)
}

/// Clamp a view angle into the viewer's range.
pub fn clamp_view_angle(v: f32) -> f32 {
    v.clamp(MIN_VIEW_ANGLE_DEG, MAX_VIEW_ANGLE_DEG)
}
