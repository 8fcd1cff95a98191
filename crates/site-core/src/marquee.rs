//! Drag-to-scroll for the logo marquee.

use crate::error::{BehaviorError, Result};

/// Horizontal translation encoded in a computed `transform` value.
///
/// Browsers report computed transforms as `none`, `matrix(a, b, c, d, e, f)`
/// or `matrix3d(...)` with 16 entries; the x translation is `e` and the
/// 13th entry respectively.
pub fn parse_translate_x(transform: &str) -> Result<f64> {
    let t = transform.trim();
    if t.is_empty() || t == "none" {
        return Ok(0.0);
    }
    let err = || BehaviorError::ParseTransform(transform.to_string());
    let (args, count, index) = if let Some(rest) = t.strip_prefix("matrix3d(") {
        (rest, 16, 12)
    } else if let Some(rest) = t.strip_prefix("matrix(") {
        (rest, 6, 4)
    } else {
        return Err(err());
    };
    let args = args.strip_suffix(')').ok_or_else(err)?;
    let values = args
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| err())?;
    if values.len() != count {
        return Err(err());
    }
    Ok(values[index])
}

#[inline]
pub fn translate_x_css(px: f64) -> String {
    format!("translateX({}px)", px)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    active: bool,
    start_x: f64,
    start_translate: f64,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        self.active
    }

    /// Begin a drag at pointer `x` with the track currently at `translate`.
    pub fn start(&mut self, x: f64, translate: f64) {
        self.active = true;
        self.start_x = x;
        self.start_translate = translate;
    }

    /// Translation for pointer `x`, or `None` when no drag is in progress.
    pub fn move_to(&self, x: f64) -> Option<f64> {
        self.active
            .then(|| self.start_translate + (x - self.start_x))
    }

    /// Finish the drag. False when there was nothing to finish.
    pub fn end(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }
}
