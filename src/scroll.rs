//! Scroll-driven behaviors: nav styling, hero parallax and active link.

use site_core::{
    is_scrolled, parallax_offset, translate_y_css, SectionSpan, CLASS_ACTIVE, CLASS_SCROLLED,
    HERO_BG_SELECTOR, NAV_LINK_SELECTOR, SECTION_SELECTOR,
};
use web_sys as web;

use crate::controller::PageController;
use crate::dom;

fn sync_nav(nav: &web::HtmlElement, scroll: f64, threshold: f64) {
    dom::set_class(nav, CLASS_SCROLLED, is_scrolled(scroll, threshold));
}

pub fn wire_nav_styler(ctl: &PageController, nav: web::HtmlElement) {
    let threshold = ctl.config.scroll_threshold_px;
    sync_nav(&nav, dom::scroll_y(&ctl.window), threshold);

    let tracker = ctl.scroll.clone();
    let wnd = ctl.window.clone();
    dom::add_passive_listener(&ctl.window, "scroll", move |_: web::Event| {
        let scroll = dom::scroll_y(&wnd);
        sync_nav(&nav, scroll, threshold);
        let dir = tracker.borrow_mut().update(scroll);
        log::trace!("[scroll] {} {:?}", scroll, dir);
    });
}

pub fn wire_parallax(ctl: &PageController) {
    let Some(hero_bg) = dom::query_one(&ctl.document, HERO_BG_SELECTOR) else {
        log::debug!("[parallax] no hero background, skipping");
        return;
    };
    let rate = ctl.config.parallax_rate;
    let wnd = ctl.window.clone();
    dom::add_passive_listener(&ctl.window, "scroll", move |_: web::Event| {
        let offset = parallax_offset(dom::scroll_y(&wnd), rate);
        dom::set_style(&hero_bg, "transform", &translate_y_css(offset));
    });
}

struct TrackedSection {
    section: web::HtmlElement,
    id: String,
}

pub fn wire_section_highlighter(ctl: &PageController) {
    let document = &ctl.document;
    // Only sections with a matching nav link can be highlighted.
    let sections: Vec<TrackedSection> = dom::query_all(document, SECTION_SELECTOR)
        .into_iter()
        .filter_map(|section| {
            let id = section.id();
            let selector = format!("{}[href=\"#{}\"]", NAV_LINK_SELECTOR, id);
            dom::query_one(document, &selector).map(|_| TrackedSection { section, id })
        })
        .collect();
    if sections.is_empty() {
        log::debug!("[sections] nothing to highlight");
        return;
    }
    let links = dom::query_all(document, NAV_LINK_SELECTOR);
    let look_ahead = ctl.config.section_lookahead_px;
    let highlighter = ctl.highlighter.clone();
    let wnd = ctl.window.clone();

    dom::add_passive_listener(&ctl.window, "scroll", move |_: web::Event| {
        // Layout can shift after load (fonts, images), so measure every tick.
        let spans: Vec<SectionSpan> = sections
            .iter()
            .map(|s| {
                SectionSpan::new(
                    s.id.clone(),
                    s.section.offset_top() as f64,
                    s.section.offset_height() as f64,
                )
            })
            .collect();
        let mut hl = highlighter.borrow_mut();
        let Some(active) = hl.update(&spans, dom::scroll_y(&wnd), look_ahead) else {
            return;
        };
        let target = format!("#{}", active);
        for link in &links {
            let is_target = link.get_attribute("href").as_deref() == Some(target.as_str());
            dom::set_class(link, CLASS_ACTIVE, is_target);
        }
        log::debug!("[sections] active {}", active);
    });
}
