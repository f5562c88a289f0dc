use crate::constants::*;
use glam::Vec3;
use thiserror::Error;

/// Keys accepted by [`SceneConfig::apply_override`].
pub const OVERRIDE_KEYS: [&str; 4] = ["point-count", "link-distance", "rotation-step", "seed"];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown scene option `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("`{0}` must be positive")]
    NotPositive(&'static str),
    #[error("`{0}` must not be negative")]
    Negative(&'static str),
    #[error("`{key}` exceeds the maximum of {max}")]
    TooLarge { key: &'static str, max: u64 },
}

/// Tunables for building a [`crate::NetworkScene`].
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub point_count: usize,
    pub extent: Vec3,
    pub link_distance: f32,
    pub rotation_step: f32,
    pub marker_radius: f32,
    pub marker_segments: (u32, u32),
    pub fov_y_degrees: f32,
    pub camera_z: f32,
    pub tilt_max_degrees: f32,
    pub tilt_scale: f32,
    /// Fixed RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            point_count: POINT_COUNT,
            extent: Vec3::from(FIELD_EXTENT),
            link_distance: LINK_DISTANCE,
            rotation_step: ROTATION_STEP,
            marker_radius: MARKER_RADIUS,
            marker_segments: (MARKER_WIDTH_SEGMENTS, MARKER_HEIGHT_SEGMENTS),
            fov_y_degrees: CAMERA_FOV_Y_DEGREES,
            camera_z: CAMERA_Z,
            tilt_max_degrees: TILT_MAX_DEGREES,
            tilt_scale: TILT_HOVER_SCALE,
            seed: None,
        }
    }
}

impl SceneConfig {
    /// Apply one `key=value` override. Keys match the `data-*` attribute
    /// names the web front-end reads from its canvas.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let value = value.trim();
        match key {
            "point-count" => self.point_count = value.parse().map_err(|_| invalid())?,
            "link-distance" => self.link_distance = value.parse().map_err(|_| invalid())?,
            "rotation-step" => self.rotation_step = value.parse().map_err(|_| invalid())?,
            "seed" => self.seed = Some(value.parse().map_err(|_| invalid())?),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (k, v) in overrides {
            self.apply_override(k, v)?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.point_count == 0 {
            return Err(ConfigError::NotPositive("point-count"));
        }
        if self.point_count > MAX_POINT_COUNT {
            return Err(ConfigError::TooLarge {
                key: "point-count",
                max: MAX_POINT_COUNT as u64,
            });
        }
        if !(self.link_distance > 0.0) {
            return Err(ConfigError::NotPositive("link-distance"));
        }
        if !(self.rotation_step.is_finite() && self.rotation_step >= 0.0) {
            return Err(ConfigError::Negative("rotation-step"));
        }
        if !self.extent.cmpgt(Vec3::ZERO).all() {
            return Err(ConfigError::NotPositive("extent"));
        }
        if !(self.marker_radius > 0.0) {
            return Err(ConfigError::NotPositive("marker-radius"));
        }
        if self.marker_segments.0 < 3 || self.marker_segments.1 < 2 {
            return Err(ConfigError::NotPositive("marker-segments"));
        }
        let (ws, hs) = self.marker_segments;
        if (ws as u64 + 1) * (hs as u64 + 1) > MAX_MARKER_VERTICES as u64 {
            return Err(ConfigError::TooLarge {
                key: "marker-segments",
                max: MAX_MARKER_VERTICES as u64,
            });
        }
        Ok(())
    }
}
