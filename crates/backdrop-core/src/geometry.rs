use std::f32::consts::{PI, TAU};

/// Indexed triangle mesh with positions only.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u16>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Latitude/longitude sphere centred at the origin.
///
/// Vertices form a `(width_segments + 1) x (height_segments + 1)` grid; the
/// pole rows emit a single triangle per cell.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let row = ws + 1;

    let mut positions = Vec::with_capacity((row * (hs + 1)) as usize);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            positions.push([
                -radius * (u * TAU).cos() * (v * PI).sin(),
                radius * (v * PI).cos(),
                radius * (u * TAU).sin() * (v * PI).sin(),
            ]);
        }
    }

    let idx = |ix: u32, iy: u32| (iy * row + ix) as u16;
    let mut indices = Vec::with_capacity((ws * (2 * hs - 2) * 3) as usize);
    for iy in 0..hs {
        for ix in 0..ws {
            let a = idx(ix + 1, iy);
            let b = idx(ix, iy);
            let c = idx(ix, iy + 1);
            let d = idx(ix + 1, iy + 1);
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    Mesh { positions, indices }
}
