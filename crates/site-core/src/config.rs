//! Tunable values for every page behavior.
//!
//! Defaults come from [`crate::constants`]. A page may override any of them
//! through `data-*` attributes on `<body>`; the web front-end passes those in
//! via [`PageConfig::with_overrides`].

use std::time::Duration;

use crate::constants::*;
use crate::error::{BehaviorError, Result};

pub const ATTR_SCROLL_THRESHOLD: &str = "data-scroll-threshold";
pub const ATTR_MENU_COOLDOWN_MS: &str = "data-menu-cooldown-ms";
pub const ATTR_REVEAL_MARGIN: &str = "data-reveal-margin";
pub const ATTR_REVEAL_THRESHOLD: &str = "data-reveal-threshold";
pub const ATTR_ANCHOR_GAP: &str = "data-anchor-gap";
pub const ATTR_PARALLAX_RATE: &str = "data-parallax-rate";
pub const ATTR_SECTION_LOOKAHEAD: &str = "data-section-lookahead";

/// Every attribute [`PageConfig::with_overrides`] looks at.
pub const OVERRIDE_ATTRS: [&str; 7] = [
    ATTR_SCROLL_THRESHOLD,
    ATTR_MENU_COOLDOWN_MS,
    ATTR_REVEAL_MARGIN,
    ATTR_REVEAL_THRESHOLD,
    ATTR_ANCHOR_GAP,
    ATTR_PARALLAX_RATE,
    ATTR_SECTION_LOOKAHEAD,
];

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub scroll_threshold_px: f64,
    pub menu_cooldown: Duration,
    pub reveal_margin_bottom_px: f64,
    pub reveal_threshold: f64,
    pub anchor_gap_px: f64,
    pub parallax_rate: f64,
    pub section_lookahead_px: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: SCROLLED_THRESHOLD_PX,
            menu_cooldown: Duration::from_millis(MENU_COOLDOWN_MS),
            reveal_margin_bottom_px: REVEAL_MARGIN_BOTTOM_PX,
            reveal_threshold: REVEAL_THRESHOLD,
            anchor_gap_px: ANCHOR_GAP_PX,
            parallax_rate: PARALLAX_RATE,
            section_lookahead_px: SECTION_LOOKAHEAD_PX,
        }
    }
}

impl PageConfig {
    /// Build a config from the defaults, replacing any value `lookup` yields.
    ///
    /// Values that fail to parse or fall out of range are logged and skipped,
    /// leaving the default in place.
    pub fn with_overrides(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        for key in OVERRIDE_ATTRS {
            let Some(raw) = lookup(key) else { continue };
            if let Err(e) = cfg.apply(key, &raw) {
                log::warn!("[config] {}", e);
            }
        }
        cfg
    }

    /// Apply a single override.
    pub fn apply(&mut self, key: &str, raw: &str) -> Result<()> {
        let invalid = || BehaviorError::InvalidConfig {
            key: key.to_string(),
            value: raw.to_string(),
        };
        match key {
            ATTR_MENU_COOLDOWN_MS => {
                let ms: u64 = raw.trim().parse().map_err(|_| invalid())?;
                self.menu_cooldown = Duration::from_millis(ms);
            }
            ATTR_REVEAL_THRESHOLD => {
                let v = parse_finite(raw).ok_or_else(invalid)?;
                if !(0.0..=1.0).contains(&v) {
                    return Err(invalid());
                }
                self.reveal_threshold = v;
            }
            ATTR_PARALLAX_RATE => {
                self.parallax_rate = parse_finite(raw).ok_or_else(invalid)?;
            }
            ATTR_SCROLL_THRESHOLD | ATTR_REVEAL_MARGIN | ATTR_ANCHOR_GAP
            | ATTR_SECTION_LOOKAHEAD => {
                let v = parse_finite(raw).filter(|v| *v >= 0.0).ok_or_else(invalid)?;
                match key {
                    ATTR_SCROLL_THRESHOLD => self.scroll_threshold_px = v,
                    ATTR_REVEAL_MARGIN => self.reveal_margin_bottom_px = v,
                    ATTR_ANCHOR_GAP => self.anchor_gap_px = v,
                    _ => self.section_lookahead_px = v,
                }
            }
            _ => return Err(invalid()),
        }
        log::debug!("[config] {} = {}", key, raw.trim());
        Ok(())
    }

    /// Root margin for the reveal watcher, in CSS shorthand.
    pub fn reveal_root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.reveal_margin_bottom_px)
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
