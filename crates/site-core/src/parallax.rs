/// Vertical background offset for a given scroll offset.
#[inline]
pub fn parallax_offset(scroll: f64, rate: f64) -> f64 {
    scroll * rate
}

#[inline]
pub fn translate_y_css(px: f64) -> String {
    format!("translateY({}px)", px)
}
