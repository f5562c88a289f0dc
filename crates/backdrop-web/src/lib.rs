#![cfg(target_arch = "wasm32")]
use backdrop_core::{NetworkScene, ThemeWatch, Tilt, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;

use constants::CANVAS_ID;

// Resize only touches the canvas and the scene; the renderer picks up the new
// viewport on the next frame.
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<NetworkScene>>) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let Some(window) = web::window() else { return };
        if let Some((w, h)) = dom::sync_canvas_to_window(&window, &canvas_resize) {
            scene.borrow_mut().resize(w, h);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = dom::read_scene_config(&canvas)?;
    let (width, height) = dom::sync_canvas_to_window(&window, &canvas)
        .unwrap_or((canvas.width(), canvas.height()));
    let mode = dom::theme_mode(&document);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let tilt = Tilt::new(config.tilt_max_degrees, config.tilt_scale);
    let scene = Rc::new(RefCell::new(NetworkScene::new(
        config,
        mode,
        Viewport::new(width, height),
        &mut rng,
    )));

    wire_canvas_resize(&canvas, scene.clone());

    // Theme attribute -> palette swap + line rebuild
    let watch = Rc::new(RefCell::new(ThemeWatch::new(mode)));
    {
        let scene = scene.clone();
        watch
            .borrow_mut()
            .subscribe(move |mode| scene.borrow_mut().apply_theme(mode));
    }
    events::wire_theme_observer(&document, watch)?;

    // The tilt image is optional on pages without an about section
    if let Err(e) = events::wire_tilt(&document, tilt) {
        log::warn!("[tilt] disabled: {}", e);
    }

    let gpu = frame::init_gpu(&canvas, &scene).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext { scene, gpu }));
    frame::start_loop(frame_ctx);
    Ok(())
}
