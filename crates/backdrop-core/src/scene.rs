use crate::camera::{Camera, Viewport};
use crate::config::SceneConfig;
use crate::field::PointField;
use crate::lines::LineBatch;
use crate::palette::{Palette, Rgb, ThemeMode};
use crate::rotation::Rotation;
use glam::Mat4;
use instant::Instant;
use rand::Rng;

/// Everything the backdrop draws, plus the state that changes over time.
///
/// Front-ends own one of these behind shared ownership and forward events
/// into it: [`tick`](Self::tick) once per frame,
/// [`apply_theme`](Self::apply_theme) on theme changes and
/// [`resize`](Self::resize) on window size changes.
pub struct NetworkScene {
    config: SceneConfig,
    field: PointField,
    mode: ThemeMode,
    palette: Palette,
    point_color: Rgb,
    lines: Option<LineBatch>,
    line_generation: u64,
    points_rotation: Rotation,
    lines_rotation: Rotation,
    camera: Camera,
    viewport: Viewport,
}

impl NetworkScene {
    pub fn new<R: Rng + ?Sized>(
        config: SceneConfig,
        mode: ThemeMode,
        viewport: Viewport,
        rng: &mut R,
    ) -> Self {
        let field = PointField::generate(config.point_count, config.extent, rng);
        let palette = Palette::resolve(mode);
        let camera =
            Camera::looking_at_origin(config.camera_z, config.fov_y_degrees, viewport.aspect());
        let mut scene = Self {
            points_rotation: Rotation::new(config.rotation_step),
            lines_rotation: Rotation::new(config.rotation_step),
            config,
            field,
            mode,
            palette,
            point_color: palette.point,
            lines: None,
            line_generation: 0,
            camera,
            viewport,
        };
        scene.rebuild_lines();
        log::info!(
            "[scene] points={} segments={} theme={}",
            scene.field.len(),
            scene.lines.as_ref().map_or(0, LineBatch::len),
            mode.as_str()
        );
        scene
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn field(&self) -> &PointField {
        &self.field
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Colour currently assigned to every marker.
    pub fn point_color(&self) -> Rgb {
        self.point_color
    }

    pub fn lines(&self) -> Option<&LineBatch> {
        self.lines.as_ref()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn points_rotation(&self) -> &Rotation {
        &self.points_rotation
    }

    pub fn lines_rotation(&self) -> &Rotation {
        &self.lines_rotation
    }

    pub fn points_model(&self) -> Mat4 {
        self.points_rotation.matrix()
    }

    pub fn lines_model(&self) -> Mat4 {
        self.lines_rotation.matrix()
    }

    /// Switch palette: recolour markers and rebuild the line batch.
    /// Point positions are untouched.
    pub fn apply_theme(&mut self, mode: ThemeMode) {
        let started = Instant::now();
        self.mode = mode;
        self.palette = Palette::resolve(mode);
        self.point_color = self.palette.point;
        self.rebuild_lines();
        log::info!(
            "[theme] applied {} segments={} in {:?}",
            mode.as_str(),
            self.lines.as_ref().map_or(0, LineBatch::len),
            started.elapsed()
        );
    }

    /// Discard the current batch and build a new one from the current points
    /// and palette.
    pub fn rebuild_lines(&mut self) {
        self.lines = None;
        self.line_generation += 1;
        let batch = LineBatch::build(
            self.field.points(),
            self.config.link_distance,
            &self.palette,
        )
        .with_generation(self.line_generation);
        self.lines = Some(batch);
    }

    /// Advance one frame of rotation.
    pub fn tick(&mut self) {
        self.points_rotation.advance();
        if self.lines.is_some() {
            self.lines_rotation.advance();
        }
    }

    /// Track a new output size. Returns true when it changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if !self.viewport.resize(width, height) {
            return false;
        }
        self.camera.set_aspect(width, height);
        log::debug!("[scene] resized to {}x{}", width, height);
        true
    }
}
