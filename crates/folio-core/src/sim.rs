#![forbid(unsafe_code)]

//! Headless page simulator.
//!
//! [`SimulatedPage`] implements [`PagingHost`] without a browser: it keeps
//! scroll offsets, section geometry and indicator markings in memory and
//! records every smooth-scroll request. Smooth scrolls do not move the
//! offsets until [`SimulatedPage::settle`] is called, mirroring the
//! asynchronous platform animation.

use crate::host::{Axis, PagingHost};

/// Default desktop viewport width used by [`SimulatedPage::desktop`].
pub const DESKTOP_WIDTH: f64 = 1440.0;
/// Default mobile viewport width used by [`SimulatedPage::mobile`].
pub const MOBILE_WIDTH: f64 = 390.0;
/// Height of one simulated section.
pub const SECTION_HEIGHT: f64 = 900.0;

/// A smooth-scroll request issued by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub axis: Axis,
    pub offset: f64,
}

/// In-memory page with `n` sections and two indicator groups.
#[derive(Debug, Clone)]
pub struct SimulatedPage {
    width: f64,
    scroll_top: f64,
    scroll_left: f64,
    section_tops: Vec<f64>,
    links: Vec<bool>,
    dots: Vec<bool>,
    requests: Vec<ScrollRequest>,
}

impl SimulatedPage {
    /// Page of `sections` equally tall sections at the given viewport width.
    #[must_use]
    pub fn new(sections: usize, width: f64) -> Self {
        let tops = (0..sections).map(|i| i as f64 * SECTION_HEIGHT).collect();
        Self::with_section_tops(tops, width)
    }

    /// Page with explicit section top offsets.
    #[must_use]
    pub fn with_section_tops(section_tops: Vec<f64>, width: f64) -> Self {
        let n = section_tops.len();
        Self {
            width,
            scroll_top: 0.0,
            scroll_left: 0.0,
            section_tops,
            links: vec![false; n],
            dots: vec![false; n],
            requests: Vec::new(),
        }
    }

    #[must_use]
    pub fn desktop(sections: usize) -> Self {
        Self::new(sections, DESKTOP_WIDTH)
    }

    #[must_use]
    pub fn mobile(sections: usize) -> Self {
        Self::new(sections, MOBILE_WIDTH)
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        self.section_tops.len()
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Move a scroller directly, as a trackpad or scrollbar drag would.
    pub fn set_scroll(&mut self, axis: Axis, offset: f64) {
        match axis {
            Axis::Vertical => self.scroll_top = offset,
            Axis::Horizontal => self.scroll_left = offset,
        }
    }

    /// Finish the most recent smooth scroll: its target becomes the offset.
    pub fn settle(&mut self) {
        if let Some(last) = self.requests.last().copied() {
            self.set_scroll(last.axis, last.offset);
        }
    }

    /// All smooth-scroll requests issued so far, oldest first.
    #[must_use]
    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.requests
    }

    #[must_use]
    pub fn last_scroll_request(&self) -> Option<ScrollRequest> {
        self.requests.last().copied()
    }

    pub fn clear_scroll_requests(&mut self) {
        self.requests.clear();
    }

    /// Indices of links currently marked active.
    #[must_use]
    pub fn active_links(&self) -> Vec<usize> {
        marked(&self.links)
    }

    /// Indices of dots currently marked active.
    #[must_use]
    pub fn active_dots(&self) -> Vec<usize> {
        marked(&self.dots)
    }

    /// The single active indicator, if both groups agree on exactly one.
    #[must_use]
    pub fn active_indicator(&self) -> Option<usize> {
        match (self.active_links().as_slice(), self.active_dots().as_slice()) {
            ([link], [dot]) if link == dot => Some(*link),
            _ => None,
        }
    }
}

fn marked(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter_map(|(i, active)| active.then_some(i))
        .collect()
}

impl PagingHost for SimulatedPage {
    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn scroll_offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.scroll_top,
            Axis::Horizontal => self.scroll_left,
        }
    }

    fn section_top(&self, index: usize) -> f64 {
        self.section_tops.get(index).copied().unwrap_or(0.0)
    }

    fn smooth_scroll(&mut self, axis: Axis, offset: f64) {
        self.requests.push(ScrollRequest { axis, offset });
    }

    fn mark_active(&mut self, index: usize) {
        for group in [&mut self.links, &mut self.dots] {
            for (i, flag) in group.iter_mut().enumerate() {
                *flag = i == index;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_active_is_exclusive_across_groups() {
        let mut page = SimulatedPage::desktop(4);
        page.mark_active(1);
        page.mark_active(3);
        assert_eq!(page.active_links(), vec![3]);
        assert_eq!(page.active_dots(), vec![3]);
        assert_eq!(page.active_indicator(), Some(3));
    }

    #[test]
    fn smooth_scroll_only_lands_on_settle() {
        let mut page = SimulatedPage::desktop(3);
        page.smooth_scroll(Axis::Horizontal, 2880.0);
        assert_eq!(page.scroll_offset(Axis::Horizontal), 0.0);
        page.settle();
        assert_eq!(page.scroll_offset(Axis::Horizontal), 2880.0);
        assert_eq!(page.scroll_requests().len(), 1);

        page.clear_scroll_requests();
        assert!(page.scroll_requests().is_empty());
        assert_eq!(page.last_scroll_request(), None);
        // Settling with nothing pending leaves the offset alone.
        page.settle();
        assert_eq!(page.scroll_offset(Axis::Horizontal), 2880.0);
    }

    #[test]
    fn fresh_page_has_no_active_indicator() {
        let page = SimulatedPage::mobile(2);
        assert_eq!(page.active_indicator(), None);
        assert_eq!(page.section_count(), 2);
        assert_eq!(page.section_top(1), SECTION_HEIGHT);
    }
}
