use crate::constants::{TILT_CONTAINER_SELECTOR, TILT_IMAGE_SELECTOR};
use crate::dom::js_err;
use backdrop_core::{Rect, Tilt, TiltTransform};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct TiltWiring {
    container: web::Element,
    image: web::HtmlElement,
    tilt: Rc<RefCell<Tilt>>,
}

/// Tilt the about image towards the pointer while it hovers the container.
pub fn wire_tilt(document: &web::Document, tilt: Tilt) -> anyhow::Result<()> {
    let container = document
        .query_selector(TILT_CONTAINER_SELECTOR)
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("missing {}", TILT_CONTAINER_SELECTOR))?;
    let image = document
        .query_selector(TILT_IMAGE_SELECTOR)
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("missing {}", TILT_IMAGE_SELECTOR))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let w = TiltWiring {
        container,
        image,
        tilt: Rc::new(RefCell::new(tilt)),
    };
    wire_pointermove(&w);
    wire_pointerleave(&w);
    log::info!("[tilt] wired on {}", TILT_CONTAINER_SELECTOR);
    Ok(())
}

fn wire_pointermove(w: &TiltWiring) {
    let w = w.clone();
    let target = w.container.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let r = w.container.get_bounding_client_rect();
        let rect = Rect {
            left: r.left() as f32,
            top: r.top() as f32,
            width: r.width() as f32,
            height: r.height() as f32,
        };
        let t = w
            .tilt
            .borrow_mut()
            .on_pointer_move(rect, ev.client_x() as f32, ev.client_y() as f32);
        apply_transform(&w.image, &t);
    }) as Box<dyn FnMut(_)>);

    let _ = target
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(w: &TiltWiring) {
    let w = w.clone();
    let target = w.container.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let t = w.tilt.borrow_mut().on_pointer_leave();
        apply_transform(&w.image, &t);
    }) as Box<dyn FnMut(_)>);

    let _ = target
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
fn apply_transform(image: &web::HtmlElement, t: &TiltTransform) {
    let _ = image.style().set_property("transform", &t.to_css());
}
