//! Scroll-triggered reveal via `IntersectionObserver`.

use std::rc::Rc;

use anyhow::anyhow;
use site_core::{parse_delay, timeout_millis, CLASS_VISIBLE, DELAY_ATTR, REVEAL_SELECTOR};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::controller::PageController;
use crate::dom;

pub fn wire_reveal(ctl: &PageController) -> anyhow::Result<()> {
    let config = &ctl.config;
    let elements = Rc::new(dom::query_all(&ctl.document, REVEAL_SELECTOR));
    if elements.is_empty() {
        return Ok(());
    }
    let tracker = ctl.reveal.clone();
    {
        let mut t = tracker.borrow_mut();
        for (id, el) in elements.iter().enumerate() {
            t.observe(id, parse_delay(el.get_attribute(DELAY_ATTR).as_deref()));
        }
    }

    let wnd = ctl.window.clone();
    let els = elements.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let batch = entries.iter().filter_map(|entry| {
                let entry = entry.dyn_into::<web::IntersectionObserverEntry>().ok()?;
                let target = entry.target();
                let id = els.iter().position(|el| {
                    let el: &web::Element = el;
                    *el == target
                })?;
                Some((id, entry.is_intersecting()))
            });
            let due = tracker.borrow_mut().on_intersections(batch);
            for reveal in due {
                let el = els[reveal.id].clone();
                observer.unobserve(&el);
                let tracker = tracker.clone();
                let show = move || {
                    if tracker.borrow_mut().mark_visible(reveal.id) {
                        dom::add_class(&el, CLASS_VISIBLE);
                    }
                };
                if reveal.delay.is_zero() {
                    show();
                } else {
                    dom::set_timeout(&wnd, timeout_millis(reveal.delay), show);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(&config.reveal_root_margin());
    init.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    for el in elements.iter() {
        observer.observe(el);
    }
    log::info!("[reveal] watching {} elements", ctl.reveal.borrow().pending_len());
    Ok(())
}
