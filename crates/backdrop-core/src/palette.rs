//! Light/dark palettes for the backdrop.
//!
//! The page carries a single theme attribute; `"dark"` selects the dark
//! palette and every other value (including a missing attribute) selects the
//! default light palette.

/// A colour stored as `0xRRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Channels as sRGB-encoded floats in `[0, 1]`.
    pub fn to_srgb(self) -> [f32; 3] {
        let r = (self.0 >> 16) & 0xff;
        let g = (self.0 >> 8) & 0xff;
        let b = self.0 & 0xff;
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
    }

    /// Channels converted to linear light, for writing into sRGB surfaces.
    pub fn to_linear(self) -> [f32; 3] {
        self.to_srgb().map(srgb_to_linear)
    }

    pub fn to_linear_rgba(self, alpha: f32) -> [f32; 4] {
        let [r, g, b] = self.to_linear();
        [r, g, b, alpha]
    }

    /// Channels as a shader should write them: linear for sRGB surfaces,
    /// unchanged otherwise.
    pub fn to_surface_rgba(self, alpha: f32, srgb_surface: bool) -> [f32; 4] {
        if srgb_surface {
            self.to_linear_rgba(alpha)
        } else {
            let [r, g, b] = self.to_srgb();
            [r, g, b, alpha]
        }
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Dark,
    #[default]
    Light,
}

impl ThemeMode {
    /// Resolve the raw attribute value. Only an exact `"dark"` selects dark.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Rgb,
    pub point: Rgb,
    pub line: Rgb,
    pub line_opacity: f32,
}

pub const DARK_PALETTE: Palette = Palette {
    background: Rgb(0x0d0d0d),
    point: Rgb(0x00bcd4),
    line: Rgb(0xffffff),
    line_opacity: 0.25,
};

pub const LIGHT_PALETTE: Palette = Palette {
    background: Rgb(0xf5f5f5),
    point: Rgb(0x0077b6),
    line: Rgb(0x111111),
    line_opacity: 0.35,
};

impl Palette {
    pub fn resolve(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => DARK_PALETTE,
            ThemeMode::Light => LIGHT_PALETTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_dark_selects_dark() {
        assert_eq!(ThemeMode::from_attribute(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_attribute(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_attribute(Some("Dark")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_attribute(Some("")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_attribute(None), ThemeMode::Light);
    }

    #[test]
    fn rgb_channels_unpack_in_order() {
        let [r, g, b] = Rgb(0xff8000).to_srgb();
        assert_eq!(r, 1.0);
        assert!((g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(b, 0.0);
    }

    #[test]
    fn linear_conversion_keeps_endpoints() {
        assert_eq!(Rgb(0x000000).to_linear(), [0.0, 0.0, 0.0]);
        let white = Rgb(0xffffff).to_linear();
        for c in white {
            assert!((c - 1.0).abs() < 1e-6);
        }
        // mid grey is darker in linear light
        let [g, _, _] = Rgb(0x808080).to_linear();
        assert!(g < 0.5);
    }

    #[test]
    fn surface_colour_depends_on_surface_encoding() {
        let bg = DARK_PALETTE.background;
        let [r, g, b] = bg.to_srgb();
        assert_eq!(bg.to_surface_rgba(1.0, false), [r, g, b, 1.0]);

        let linear = bg.to_surface_rgba(0.5, true);
        assert_eq!(linear, bg.to_linear_rgba(0.5));
        assert!(linear[0] < r);
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }
}
