//! Pointer-driven tilt of an image.
//!
//! The image rotates towards the cursor, up to a fixed angle per axis, and
//! is scaled up slightly while hovered. Every move event is mapped directly
//! to a transform; there is no easing between events.

use crate::constants::{TILT_HOVER_SCALE, TILT_MAX_DEGREES};
use std::fmt;

/// Bounding box of the hovered element in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltTransform {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub scale: f32,
}

impl TiltTransform {
    pub const NEUTRAL: Self = Self {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        scale: 1.0,
    };

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    /// CSS `transform` value, e.g. `rotateX(-4deg) rotateY(2deg) scale(1.05)`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TiltTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // +0.0 turns a negative zero into "0" instead of "-0"
        write!(
            f,
            "rotateX({}deg) rotateY({}deg) scale({})",
            self.rotate_x_deg + 0.0,
            self.rotate_y_deg + 0.0,
            self.scale + 0.0
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TiltState {
    #[default]
    Neutral,
    Tilted(TiltTransform),
}

#[derive(Clone, Copy, Debug)]
pub struct Tilt {
    max_degrees: f32,
    hover_scale: f32,
    state: TiltState,
}

impl Default for Tilt {
    fn default() -> Self {
        Self::new(TILT_MAX_DEGREES, TILT_HOVER_SCALE)
    }
}

impl Tilt {
    pub fn new(max_degrees: f32, hover_scale: f32) -> Self {
        Self {
            max_degrees,
            hover_scale,
            state: TiltState::Neutral,
        }
    }

    pub fn state(&self) -> TiltState {
        self.state
    }

    pub fn transform(&self) -> TiltTransform {
        match self.state {
            TiltState::Neutral => TiltTransform::NEUTRAL,
            TiltState::Tilted(t) => t,
        }
    }

    /// Map a pointer position to a tilt. Vertical offset below centre tips
    /// the top edge away (negative X rotation); horizontal offset right of
    /// centre turns the image right (positive Y rotation).
    pub fn on_pointer_move(&mut self, rect: Rect, client_x: f32, client_y: f32) -> TiltTransform {
        let cx = rect.width / 2.0;
        let cy = rect.height / 2.0;
        if !(cx > 0.0 && cy > 0.0) {
            self.state = TiltState::Neutral;
            return TiltTransform::NEUTRAL;
        }
        let x = client_x - rect.left;
        let y = client_y - rect.top;
        let t = TiltTransform {
            rotate_x_deg: -((y - cy) / cy) * self.max_degrees,
            rotate_y_deg: ((x - cx) / cx) * self.max_degrees,
            scale: self.hover_scale,
        };
        self.state = TiltState::Tilted(t);
        t
    }

    pub fn on_pointer_leave(&mut self) -> TiltTransform {
        self.state = TiltState::Neutral;
        TiltTransform::NEUTRAL
    }
}
