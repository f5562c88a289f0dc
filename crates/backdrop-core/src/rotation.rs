use glam::Mat4;
use std::f64::consts::TAU;

/// Angle about +Y that advances by a fixed step every frame.
///
/// The angle grows without bound; it is kept in `f64` so a 0.0015 rad step
/// still registers after days of uptime, and only reduced when turned into a
/// matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    angle: f64,
    step: f64,
}

impl Rotation {
    pub fn new(step: f32) -> Self {
        Self {
            angle: 0.0,
            step: step as f64,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.angle += self.step;
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.angle.rem_euclid(TAU) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn advances_by_fixed_step() {
        let mut r = Rotation::new(0.0015);
        for _ in 0..1000 {
            r.advance();
        }
        assert!((r.angle() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn matrix_is_periodic() {
        let mut r = Rotation::new(std::f32::consts::FRAC_PI_2);
        let p = Vec3::X;
        let start = r.matrix().transform_point3(p);
        for _ in 0..4 {
            r.advance();
        }
        let end = r.matrix().transform_point3(p);
        assert!(start.distance(end) < 1e-5);
    }

    #[test]
    fn step_still_resolves_after_long_uptime() {
        // roughly a week at 60 fps
        let mut r = Rotation::new(0.0015);
        r.angle = 0.0015 * 60.0 * 60.0 * 60.0 * 24.0 * 7.0;
        let before = r.angle();
        r.advance();
        assert!(r.angle() > before);
    }
}
