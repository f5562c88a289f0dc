use crate::constants::{CONFIG_ATTRIBUTE_PREFIX, THEME_ATTRIBUTE};
use backdrop_core::{ConfigError, SceneConfig, ThemeMode, OVERRIDE_KEYS};
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Window inner size in CSS pixels, or `None` if the browser refuses.
pub fn window_inner_size(window: &web::Window) -> Option<(u32, u32)> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w as u32, h as u32))
}

/// Match the canvas backing store to the window and return the new size.
pub fn sync_canvas_to_window(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
) -> Option<(u32, u32)> {
    let (w, h) = window_inner_size(window)?;
    let (w, h) = (w.max(1), h.max(1));
    canvas.set_width(w);
    canvas.set_height(h);
    Some((w, h))
}

pub fn theme_mode(document: &web::Document) -> ThemeMode {
    let raw = document
        .document_element()
        .and_then(|root| root.get_attribute(THEME_ATTRIBUTE));
    ThemeMode::from_attribute(raw.as_deref())
}

/// Defaults overridden by any `data-<key>` attributes present on the canvas.
pub fn read_scene_config(canvas: &web::HtmlCanvasElement) -> Result<SceneConfig, ConfigError> {
    let found: Vec<(&str, String)> = OVERRIDE_KEYS
        .iter()
        .filter_map(|key| {
            canvas
                .get_attribute(&format!("{CONFIG_ATTRIBUTE_PREFIX}{key}"))
                .map(|value| (*key, value))
        })
        .collect();
    for (key, value) in &found {
        log::info!("[config] {}={}", key, value);
    }
    SceneConfig::default().with_overrides(found.iter().map(|(k, v)| (*k, v.as_str())))
}
