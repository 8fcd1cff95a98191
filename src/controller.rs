//! The single owner of every page behavior's DOM handles and state.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use site_core::{
    ActiveHighlighter, DragState, MenuController, PageConfig, RevealTracker, ScrollTracker, NAV_ID,
};
use web_sys as web;

use crate::clock::PageClock;
use crate::{anchors, dom, marquee, menu, reveal, scroll};

/// Built once per page. Listeners hold clones of the `Rc` state, so the
/// controller itself can be dropped after [`PageController::attach`].
pub struct PageController {
    pub window: web::Window,
    pub document: web::Document,
    pub body: web::HtmlElement,
    pub nav: Option<web::HtmlElement>,
    pub config: PageConfig,
    pub clock: PageClock,

    pub scroll: Rc<RefCell<ScrollTracker>>,
    pub menu: Rc<RefCell<MenuController>>,
    pub reveal: Rc<RefCell<RevealTracker>>,
    pub drag: Rc<RefCell<DragState>>,
    pub highlighter: Rc<RefCell<ActiveHighlighter>>,
}

impl PageController {
    pub fn new() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow!("no document"))?;
        let body = document.body().ok_or_else(|| anyhow!("no <body>"))?;
        let config = PageConfig::with_overrides(|key| body.get_attribute(key));
        let nav = dom::html_by_id(&document, NAV_ID);

        Ok(Self {
            menu: Rc::new(RefCell::new(MenuController::new(config.menu_cooldown))),
            scroll: Rc::new(RefCell::new(ScrollTracker::default())),
            reveal: Rc::new(RefCell::new(RevealTracker::new())),
            drag: Rc::new(RefCell::new(DragState::default())),
            highlighter: Rc::new(RefCell::new(ActiveHighlighter::default())),
            clock: PageClock::start(),
            window,
            document,
            body,
            nav,
            config,
        })
    }

    /// Register every listener. Optional features skip themselves when
    /// their elements are absent.
    pub fn attach(&self) {
        match &self.nav {
            Some(nav) => scroll::wire_nav_styler(self, nav.clone()),
            None => log::warn!("missing #{}, nav styling disabled", NAV_ID),
        }
        if let Err(e) = menu::wire_mobile_menu(self) {
            log::error!("mobile menu disabled: {:?}", e);
        }
        if let Err(e) = reveal::wire_reveal(self) {
            log::error!("reveal disabled: {:?}", e);
        }
        anchors::wire_anchor_links(self);
        marquee::wire_marquee(self);
        scroll::wire_parallax(self);
        scroll::wire_section_highlighter(self);
    }
}
