use glam::Vec3;
use rand::Rng;

/// Fixed set of randomly placed markers. Positions never change after
/// generation.
#[derive(Clone, Debug)]
pub struct PointField {
    points: Vec<Vec3>,
    extent: Vec3,
}

impl PointField {
    /// Sample `count` points uniformly inside a box of size `extent` centred
    /// at the origin. Each coordinate lies in `[-extent/2, extent/2)`.
    pub fn generate<R: Rng + ?Sized>(count: usize, extent: Vec3, rng: &mut R) -> Self {
        let half = extent * 0.5;
        let points = (0..count)
            .map(|_| {
                Vec3::new(
                    sample_axis(rng, half.x),
                    sample_axis(rng, half.y),
                    sample_axis(rng, half.z),
                )
            })
            .collect();
        Self { points, extent }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn extent(&self) -> Vec3 {
        self.extent
    }

    /// True when `p` lies inside the sampling box.
    pub fn contains(&self, p: Vec3) -> bool {
        let half = self.extent * 0.5;
        p.abs().cmple(half).all()
    }
}

#[inline]
fn sample_axis<R: Rng + ?Sized>(rng: &mut R, half: f32) -> f32 {
    if half > 0.0 {
        rng.gen_range(-half..half)
    } else {
        0.0
    }
}
