use blueprint_config as config;
use serde::{Deserialize, Serialize};

/// First-person camera for the walkthrough page. Heading 0 looks down +z.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WalkthroughCamera {
    pub x: f64,
    pub z: f64,
    pub heading_deg: f64,
}

impl WalkthroughCamera {
    pub fn move_forward(&mut self) {
        self.step(config::WALK_STEP_M);
    }

    pub fn move_backward(&mut self) {
        self.step(-config::WALK_STEP_M);
    }

    pub fn turn_left(&mut self) {
        self.turn(-config::TURN_STEP_DEG);
    }

    pub fn turn_right(&mut self) {
        self.turn(config::TURN_STEP_DEG);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn step(&mut self, distance: f64) {
        let rad = self.heading_deg.to_radians();
        self.x += distance * rad.sin();
        self.z += distance * rad.cos();
    }

    fn turn(&mut self, delta: f64) {
        self.heading_deg = (self.heading_deg + delta).rem_euclid(360.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn forward_then_backward_returns_to_start() {
        let mut cam = WalkthroughCamera::default();
        cam.turn_right();
        cam.move_forward();
        cam.move_backward();
        assert!(approx(cam.x, 0.0) && approx(cam.z, 0.0));
    }

    #[test]
    fn heading_wraps() {
        let mut cam = WalkthroughCamera::default();
        cam.turn_left();
        assert!(approx(cam.heading_deg, 345.0));
        for _ in 0..24 {
            cam.turn_right();
        }
        assert!(approx(cam.heading_deg, 345.0));
    }

    #[test]
    fn quarter_turn_moves_along_x() {
        let mut cam = WalkthroughCamera::default();
        for _ in 0..6 {
            cam.turn_right();
        }
        cam.move_forward();
        assert!(approx(cam.x, 1.0));
        assert!(approx(cam.z, 0.0));
        cam.reset();
        assert_eq!(cam, WalkthroughCamera::default());
    }
}
