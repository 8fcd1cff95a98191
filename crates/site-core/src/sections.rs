//! Active nav link tracking from scroll position.

/// Vertical extent of a page section in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open `[top, top + height)`.
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Id of the section under the probe line `scroll + look_ahead`.
///
/// When spans overlap the last one in document order wins. That mirrors how
/// the page has always behaved, though it is probably accidental rather than
/// a real tie-break rule.
pub fn active_section(spans: &[SectionSpan], scroll: f64, look_ahead: f64) -> Option<&str> {
    let probe = scroll + look_ahead;
    spans
        .iter()
        .rev()
        .find(|s| s.contains(probe))
        .map(|s| s.id.as_str())
}

/// Remembers which section is highlighted so the DOM is only touched on change.
#[derive(Clone, Debug, Default)]
pub struct ActiveHighlighter {
    current: Option<String>,
}

impl ActiveHighlighter {
    /// Returns the newly active id when it differs from the current one.
    /// No match keeps the previous highlight in place.
    pub fn update(&mut self, spans: &[SectionSpan], scroll: f64, look_ahead: f64) -> Option<&str> {
        let next = active_section(spans, scroll, look_ahead)?;
        if self.current.as_deref() == Some(next) {
            return None;
        }
        self.current = Some(next.to_string());
        self.current.as_deref()
    }
}
