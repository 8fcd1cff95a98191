//! Mobile menu wiring: hamburger, in-menu links, Escape and backdrop.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use site_core::{
    scroll_lock_top, MenuController, MenuTransition, CLASS_MENU_OPEN, CLASS_OPEN, HAMBURGER_ID,
    MOBILE_LINK_SELECTOR, MOBILE_MENU_ID,
};
use web_sys as web;

use crate::clock::PageClock;
use crate::controller::PageController;
use crate::dom;

#[derive(Clone)]
struct MenuWiring {
    window: web::Window,
    body: web::HtmlElement,
    hamburger: web::HtmlElement,
    menu: web::HtmlElement,
    controller: Rc<RefCell<MenuController>>,
    clock: PageClock,
}

impl MenuWiring {
    fn apply(&self, transition: Option<MenuTransition>) {
        if transition.is_none() && self.controller.borrow().is_busy(self.clock.now()) {
            log::debug!("[menu] request dropped, transition in progress");
        }
        match transition {
            Some(MenuTransition::Opened { saved_scroll_y }) => {
                dom::add_class(&self.hamburger, CLASS_OPEN);
                dom::add_class(&self.menu, CLASS_OPEN);
                dom::add_class(&self.body, CLASS_MENU_OPEN);
                _ = self.hamburger.set_attribute("aria-expanded", "true");
                dom::set_style(&self.body, "overflow", "hidden");
                dom::set_style(&self.body, "position", "fixed");
                dom::set_style(&self.body, "width", "100%");
                dom::set_style(&self.body, "top", &scroll_lock_top(saved_scroll_y));
            }
            Some(MenuTransition::Closed { restore_scroll_y }) => {
                dom::remove_class(&self.hamburger, CLASS_OPEN);
                dom::remove_class(&self.menu, CLASS_OPEN);
                dom::remove_class(&self.body, CLASS_MENU_OPEN);
                _ = self.hamburger.set_attribute("aria-expanded", "false");
                for prop in ["overflow", "position", "width", "top"] {
                    dom::clear_style(&self.body, prop);
                }
                self.window.scroll_to_with_x_and_y(0.0, restore_scroll_y);
            }
            None => {}
        }
    }
}

pub fn wire_mobile_menu(ctl: &PageController) -> anyhow::Result<()> {
    let document = &ctl.document;
    let hamburger = dom::html_by_id(document, HAMBURGER_ID)
        .ok_or_else(|| anyhow!("missing #{}", HAMBURGER_ID))?;
    let menu = dom::html_by_id(document, MOBILE_MENU_ID)
        .ok_or_else(|| anyhow!("missing #{}", MOBILE_MENU_ID))?;
    let w = MenuWiring {
        window: ctl.window.clone(),
        body: ctl.body.clone(),
        hamburger,
        menu,
        controller: ctl.menu.clone(),
        clock: ctl.clock,
    };

    {
        let w = w.clone();
        dom::add_listener(&w.hamburger.clone(), "click", move |_: web::MouseEvent| {
            let scroll = dom::scroll_y(&w.window);
            let t = w.controller.borrow_mut().toggle(w.clock.now(), scroll);
            w.apply(t);
        });
    }

    for link in dom::query_all(document, MOBILE_LINK_SELECTOR) {
        let w = w.clone();
        dom::add_listener(&link, "click", move |_: web::MouseEvent| {
            let t = w.controller.borrow_mut().on_link_click(w.clock.now());
            w.apply(t);
        });
    }

    {
        let w = w.clone();
        dom::add_listener(document, "keydown", move |ev: web::KeyboardEvent| {
            let t = w.controller.borrow_mut().on_key(w.clock.now(), &ev.key());
            w.apply(t);
        });
    }

    {
        let w = w.clone();
        dom::add_listener(&w.menu.clone(), "click", move |ev: web::MouseEvent| {
            let backdrop: &web::EventTarget = w.menu.as_ref();
            let on_backdrop = ev.target().as_ref() == Some(backdrop);
            let t = w
                .controller
                .borrow_mut()
                .on_backdrop(w.clock.now(), on_backdrop);
            w.apply(t);
        });
    }

    log::info!("[menu] wired");
    Ok(())
}
