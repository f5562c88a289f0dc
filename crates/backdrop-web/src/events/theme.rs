use crate::constants::THEME_ATTRIBUTE;
use crate::dom::js_err;
use backdrop_core::ThemeWatch;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Feed every mutation of the theme attribute on `<html>` into `watch`.
///
/// The observer fires on any write to the attribute, including writes of the
/// same value; `ThemeWatch` filters those out.
pub fn wire_theme_observer(
    document: &web::Document,
    watch: Rc<RefCell<ThemeWatch>>,
) -> anyhow::Result<()> {
    let root = document
        .document_element()
        .ok_or_else(|| anyhow::anyhow!("no document element"))?;

    let root_cb = root.clone();
    let closure = Closure::wrap(Box::new(
        move |_records: js_sys::Array, _observer: web::MutationObserver| {
            let raw = root_cb.get_attribute(THEME_ATTRIBUTE);
            watch.borrow_mut().notify(raw.as_deref());
        },
    ) as Box<dyn FnMut(js_sys::Array, web::MutationObserver)>);

    let observer = web::MutationObserver::new(closure.as_ref().unchecked_ref()).map_err(js_err)?;
    let init = web::MutationObserverInit::new();
    init.set_attributes(true);
    init.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str(THEME_ATTRIBUTE)));
    observer.observe_with_options(&root, &init).map_err(js_err)?;

    // The DOM keeps the observer alive while it observes; the callback must
    // outlive this scope too.
    closure.forget();
    log::info!("[theme] observing {} on <html>", THEME_ATTRIBUTE);
    Ok(())
}
