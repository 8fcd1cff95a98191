use site_core::{fragment_id, scroll_target, ANCHOR_SELECTOR};
use web_sys as web;

use crate::controller::PageController;
use crate::dom;

/// Smooth-scroll in-page links, leaving room for the fixed nav bar.
pub fn wire_anchor_links(ctl: &PageController) {
    let anchors = dom::query_all(&ctl.document, ANCHOR_SELECTOR);
    let gap = ctl.config.anchor_gap_px;
    for anchor in &anchors {
        let wnd = ctl.window.clone();
        let doc = ctl.document.clone();
        let nav = ctl.nav.clone();
        let link = anchor.clone();
        dom::add_listener(anchor, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = fragment_id(&href).and_then(|id| doc.get_element_by_id(id)) else {
                return;
            };
            let nav_height = nav.as_ref().map_or(0.0, |n| n.offset_height() as f64);
            let top = scroll_target(
                target.get_bounding_client_rect().top(),
                dom::scroll_y(&wnd),
                nav_height,
                gap,
            );
            let opts = web::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            wnd.scroll_to_with_scroll_to_options(&opts);
        });
    }
    log::debug!("[anchors] wired {} links", anchors.len());
}
