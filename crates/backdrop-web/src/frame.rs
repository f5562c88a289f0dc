use backdrop_core::{GpuDevice, NetworkScene, SceneRenderer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<NetworkScene>>,
    pub gpu: Option<SceneRenderer<'static>>,
}

impl FrameContext {
    /// One display refresh: rotate, then draw once.
    pub fn frame(&mut self) {
        let mut scene = self.scene.borrow_mut();
        scene.tick();

        if let Some(g) = &mut self.gpu {
            let vp = scene.viewport();
            g.resize_if_needed(vp.width, vp.height);
            match g.render(&scene) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<NetworkScene>>,
) -> Option<SceneRenderer<'static>> {
    let instance = wgpu::Instance::default();
    let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
        Ok(s) => s,
        Err(e) => {
            log::error!("surface error: {:?}", e);
            return None;
        }
    };
    // No scene borrow is held across the await; resize and theme events may
    // still arrive while the adapter is negotiated.
    match GpuDevice::request(&instance, &surface).await {
        Ok(device) => Some(SceneRenderer::new(device, surface, &scene.borrow())),
        Err(e) => {
            log::error!("GPU init error: {}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else { return };
    if let Some(cb) = tick.borrow().as_ref() {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
