use crate::palette::{Palette, Rgb};
use glam::Vec3;

/// A connecting segment between two points of the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Vec3,
    pub b: Vec3,
    /// Indices of the source pair, `pair.0 < pair.1`.
    pub pair: (usize, usize),
}

/// Every proximity segment of a point field, coloured for one palette.
///
/// Batches are never edited in place; a palette change builds a new batch
/// that replaces the old one.
#[derive(Clone, Debug, PartialEq)]
pub struct LineBatch {
    segments: Vec<Segment>,
    color: Rgb,
    opacity: f32,
    generation: u64,
}

/// Number of unordered pairs examined for `n` points.
#[inline]
pub const fn pair_count(n: usize) -> usize {
    if n < 2 {
        0
    } else {
        n * (n - 1) / 2
    }
}

impl LineBatch {
    /// Emit a segment for every unordered pair strictly closer than
    /// `threshold`.
    pub fn build(points: &[Vec3], threshold: f32, palette: &Palette) -> Self {
        let mut segments = Vec::new();
        for (i, a) in points.iter().enumerate() {
            for (j, b) in points.iter().enumerate().skip(i + 1) {
                if a.distance(*b) < threshold {
                    segments.push(Segment {
                        a: *a,
                        b: *b,
                        pair: (i, j),
                    });
                }
            }
        }
        Self {
            segments,
            color: palette.line,
            opacity: palette.line_opacity,
            generation: 0,
        }
    }

    pub(crate) fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn contains_pair(&self, i: usize, j: usize) -> bool {
        let key = if i < j { (i, j) } else { (j, i) };
        self.segments.iter().any(|s| s.pair == key)
    }

    /// Endpoints flattened for a line-list draw, two vertices per segment.
    pub fn vertices(&self) -> Vec<[f32; 3]> {
        self.segments
            .iter()
            .flat_map(|s| [s.a.to_array(), s.b.to_array()])
            .collect()
    }
}
