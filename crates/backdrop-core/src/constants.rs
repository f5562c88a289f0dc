// Shared scene tuning constants used by both web and native frontends.

// Point field
pub const POINT_COUNT: usize = 80;
pub const MAX_POINT_COUNT: usize = 2000; // line rebuild is all-pairs on the UI thread
pub const FIELD_EXTENT: [f32; 3] = [10.0, 6.0, 6.0]; // full box size, centred at origin

// Proximity lines
pub const LINK_DISTANCE: f32 = 2.5; // strict upper bound on segment length

// Per-frame rotation about +Y (radians)
pub const ROTATION_STEP: f32 = 0.0015;

// Marker mesh
pub const MARKER_RADIUS: f32 = 0.05;
pub const MARKER_WIDTH_SEGMENTS: u32 = 8;
pub const MARKER_HEIGHT_SEGMENTS: u32 = 8;
pub const MAX_MARKER_VERTICES: u32 = u16::MAX as u32 + 1; // mesh indices are u16

// Camera
pub const CAMERA_FOV_Y_DEGREES: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 8.0;

// Tilt effect
pub const TILT_MAX_DEGREES: f32 = 8.0;
pub const TILT_HOVER_SCALE: f32 = 1.05;
