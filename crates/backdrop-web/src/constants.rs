// DOM hooks the page is expected to provide.

// Full-window render surface
pub const CANVAS_ID: &str = "bg-canvas";

// Theme attribute on <html>; "dark" selects the dark palette
pub const THEME_ATTRIBUTE: &str = "data-theme";

// Tilt effect: listeners go on the container, the transform on the image
pub const TILT_CONTAINER_SELECTOR: &str = ".about-img";
pub const TILT_IMAGE_SELECTOR: &str = ".about-img img";

// Prefix for optional canvas attributes overriding scene defaults, e.g. `data-seed`
pub const CONFIG_ATTRIBUTE_PREFIX: &str = "data-";
