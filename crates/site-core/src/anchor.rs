/// Extract the element id from an in-page link target.
///
/// Returns `None` for anything that is not `#something`; a bare `#` names no
/// element.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so the target lands just below the nav bar.
///
/// `rect_top` is the target's viewport-relative top (what
/// `getBoundingClientRect` reports), `scroll_y` the current window offset.
#[inline]
pub fn scroll_target(rect_top: f64, scroll_y: f64, nav_height: f64, gap: f64) -> f64 {
    rect_top + scroll_y - nav_height - gap
}
