#![forbid(unsafe_code)]

//! Platform seam between the paging controller and the page it drives.

/// Scroll axis used by a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Document scroller, sections stacked top to bottom.
    Vertical,
    /// Section container, sections laid out left to right, one viewport wide.
    Horizontal,
}

/// Layout selected from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewMode {
    Mobile,
    Desktop,
}

impl ViewMode {
    /// Widths at or below `breakpoint` are mobile.
    #[must_use]
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Mobile => Axis::Vertical,
            Self::Desktop => Axis::Horizontal,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }
}

/// Everything the controller reads from or asks of the page.
///
/// Implementations must keep the indicator groups the same length as the
/// section list; the controller never passes an index outside it.
pub trait PagingHost {
    /// Current viewport width in CSS pixels.
    fn viewport_width(&self) -> f64;

    /// Current scroll offset of the scroller for `axis`.
    fn scroll_offset(&self, axis: Axis) -> f64;

    /// Top offset of section `index` within the document.
    fn section_top(&self, index: usize) -> f64;

    /// Request a smooth scroll of the scroller for `axis` to `offset`.
    ///
    /// Fire and forget: completion is never reported back synchronously.
    fn smooth_scroll(&mut self, axis: Axis, offset: f64);

    /// Mark indicator `index` active in every group and clear the rest.
    fn mark_active(&mut self, index: usize);
}
