// Shared tuning values and the markup/style contract the web front-end relies on.

// Scroll behaviors
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0; // nav gets `is-scrolled` strictly above this
pub const PARALLAX_RATE: f64 = 0.3; // hero background moves at this fraction of scroll
pub const SECTION_LOOKAHEAD_PX: f64 = 100.0; // active-section probe sits this far below the top
pub const ANCHOR_GAP_PX: f64 = 20.0; // breathing room between nav bottom and anchor target

// Mobile menu
pub const MENU_COOLDOWN_MS: u64 = 450; // roughly the CSS transition length

// Reveal watcher
pub const REVEAL_MARGIN_BOTTOM_PX: f64 = 80.0; // viewport bottom contracted by this much
pub const REVEAL_THRESHOLD: f64 = 0.1; // fraction of the element that must be visible

// Element ids
pub const NAV_ID: &str = "nav";
pub const HAMBURGER_ID: &str = "hamburger";
pub const MOBILE_MENU_ID: &str = "mobileMenu";

// Selectors
pub const MOBILE_LINK_SELECTOR: &str = ".nav__mobile-link, .nav__mobile-cta";
pub const REVEAL_SELECTOR: &str = "[data-animate]";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const MARQUEE_SELECTOR: &str = ".marquee";
pub const MARQUEE_TRACK_SELECTOR: &str = ".marquee__track";
pub const HERO_BG_SELECTOR: &str = ".hero__bg";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const NAV_LINK_SELECTOR: &str = ".nav__link";

// Attributes
pub const DELAY_ATTR: &str = "data-delay";

// Marker classes
pub const CLASS_SCROLLED: &str = "is-scrolled";
pub const CLASS_OPEN: &str = "is-open";
pub const CLASS_DRAGGING: &str = "is-dragging";
pub const CLASS_VISIBLE: &str = "is-visible";
pub const CLASS_ACTIVE: &str = "is-active";
pub const CLASS_MENU_OPEN: &str = "menu-open";

pub const ESCAPE_KEY: &str = "Escape";
