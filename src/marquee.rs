//! Drag-to-scroll marquee, for mouse and touch alike.

use std::cell::RefCell;
use std::rc::Rc;

use site_core::{
    parse_translate_x, translate_x_css, DragState, CLASS_DRAGGING, MARQUEE_SELECTOR,
    MARQUEE_TRACK_SELECTOR,
};
use web_sys as web;

use crate::controller::PageController;
use crate::dom;

#[derive(Clone)]
struct MarqueeWiring {
    window: web::Window,
    marquee: web::HtmlElement,
    track: web::HtmlElement,
    drag: Rc<RefCell<DragState>>,
}

impl MarqueeWiring {
    fn current_translate(&self) -> f64 {
        let transform = self
            .window
            .get_computed_style(&self.track)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("transform").ok())
            .unwrap_or_default();
        parse_translate_x(&transform).unwrap_or_else(|e| {
            log::debug!("[marquee] {}", e);
            0.0
        })
    }

    fn start(&self, x: f64) {
        let translate = self.current_translate();
        self.drag.borrow_mut().start(x, translate);
        dom::add_class(&self.marquee, CLASS_DRAGGING);
        // Pin the track where the animation had it so it does not jump.
        dom::set_style(&self.track, "transform", &translate_x_css(translate));
    }

    fn move_to(&self, x: f64) {
        if let Some(px) = self.drag.borrow().move_to(x) {
            dom::set_style(&self.track, "transform", &translate_x_css(px));
        }
    }

    fn end(&self) {
        if !self.drag.borrow_mut().end() {
            return;
        }
        dom::remove_class(&self.marquee, CLASS_DRAGGING);
        dom::clear_style(&self.track, "transform");
    }
}

fn first_touch_x(ev: &web::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|t| t.client_x() as f64)
}

pub fn wire_marquee(ctl: &PageController) {
    let window = &ctl.window;
    let document = &ctl.document;
    let (Some(marquee), Some(track)) = (
        dom::query_one(document, MARQUEE_SELECTOR),
        dom::query_one(document, MARQUEE_TRACK_SELECTOR),
    ) else {
        log::debug!("[marquee] not on this page, skipping");
        return;
    };
    let w = MarqueeWiring {
        window: window.clone(),
        marquee,
        track,
        drag: ctl.drag.clone(),
    };

    // Mouse
    {
        let w = w.clone();
        dom::add_listener(&w.marquee.clone(), "mousedown", move |ev: web::MouseEvent| {
            if ev.button() != 0 {
                return;
            }
            ev.prevent_default();
            w.start(ev.client_x() as f64);
        });
    }
    {
        let w = w.clone();
        dom::add_listener(window, "mousemove", move |ev: web::MouseEvent| {
            w.move_to(ev.client_x() as f64);
        });
    }
    {
        let w = w.clone();
        dom::add_listener(window, "mouseup", move |_: web::MouseEvent| w.end());
    }
    if let Some(root) = document.document_element() {
        let w = w.clone();
        dom::add_listener(&root, "mouseleave", move |_: web::MouseEvent| w.end());
    }

    // Touch
    {
        let w = w.clone();
        dom::add_passive_listener(&w.marquee.clone(), "touchstart", move |ev: web::TouchEvent| {
            if let Some(x) = first_touch_x(&ev) {
                w.start(x);
            }
        });
    }
    {
        let w = w.clone();
        dom::add_passive_listener(window, "touchmove", move |ev: web::TouchEvent| {
            if let Some(x) = first_touch_x(&ev) {
                w.move_to(x);
            }
        });
    }
    for event in ["touchend", "touchcancel"] {
        let w = w.clone();
        dom::add_listener(window, event, move |_: web::TouchEvent| w.end());
    }

    log::info!("[marquee] drag enabled");
}
