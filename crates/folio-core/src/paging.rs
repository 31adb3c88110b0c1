#![forbid(unsafe_code)]

//! Section paging and indicator synchronization.
//!
//! [`PagingController`] owns the current section index, the view mode and
//! the scroll lock. Every input source funnels through
//! [`PagingController::dispatch`]; the controller asks its [`PagingHost`]
//! to scroll and to re-mark the indicators.
//!
//! # Invariants
//!
//! - The tracked index always equals the indicator marked active on the
//!   host. Both are only ever changed together, in `set_index`.
//! - While the scroll lock is held, wheel, key and indicator-click requests
//!   never change the index. Passive scroll reconciliation is suspended too.
//! - Out-of-range requests are dropped, never clamped.
//!
//! # Lock approximation
//!
//! The platform does not report when a smooth scroll finishes. The lock is
//! released once `lock_duration` has passed on the host clock (or on
//! `scrollend`, when [`LockRelease::ScrollEnd`] is configured). A smooth
//! scroll slower than the lock duration can therefore outlive the lock, in
//! which case intermediate scroll events reconcile the indicator early.

use core::time::Duration;

use crate::config::{LockRelease, PagingConfig};
use crate::host::{PagingHost, ViewMode};
use crate::input::{Direction, IndicatorGroup, KeyCode, NavInput, WheelInput};

/// Advisory lock held while a programmatic scroll is assumed to animate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollLock {
    release_at: Option<Duration>,
}

impl ScrollLock {
    /// Hold the lock from `now` for `hold`. Re-acquiring extends the window.
    pub fn acquire(&mut self, now: Duration, hold: Duration) {
        self.release_at = Some(now.saturating_add(hold));
    }

    pub fn release(&mut self) {
        self.release_at = None;
    }

    #[must_use]
    pub fn is_held(&self, now: Duration) -> bool {
        matches!(self.release_at, Some(at) if now < at)
    }

    /// Host time at which the lock lapses, if it was ever taken.
    #[must_use]
    pub const fn release_at(&self) -> Option<Duration> {
        self.release_at
    }
}

/// What the host should do with the DOM event after dispatch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    /// Call `preventDefault()` on the originating event.
    pub prevent_default: bool,
    /// Section the controller navigated to (scroll issued), if any.
    pub navigated: Option<usize>,
    /// Section the indicator was reconciled to without scrolling, if any.
    pub reconciled: Option<usize>,
}

impl Dispatch {
    const fn allow() -> Self {
        Self {
            prevent_default: false,
            navigated: None,
            reconciled: None,
        }
    }

    const fn navigated(prevent_default: bool, target: Option<usize>) -> Self {
        Self {
            prevent_default,
            navigated: target,
            reconciled: None,
        }
    }
}

/// Single page-lifetime paging controller.
#[derive(Debug, Clone)]
pub struct PagingController {
    config: PagingConfig,
    section_count: usize,
    index: usize,
    mode: ViewMode,
    lock: ScrollLock,
    navigations: u64,
}

impl PagingController {
    /// Create a controller for `section_count` sections at index 0.
    ///
    /// Call [`attach`](Self::attach) once the host is ready so the indicator
    /// reflects the real scroll position.
    #[must_use]
    pub fn new(section_count: usize, config: PagingConfig, viewport_width: f64) -> Self {
        let mode = ViewMode::from_width(viewport_width, config.mobile_breakpoint);
        Self {
            config,
            section_count,
            index: 0,
            mode,
            lock: ScrollLock::default(),
            navigations: 0,
        }
    }

    /// Adopt the section currently in view and mark its indicator.
    pub fn attach<H: PagingHost + ?Sized>(&mut self, host: &mut H) {
        self.mode = ViewMode::from_width(host.viewport_width(), self.config.mobile_breakpoint);
        let index = self.compute_current_section(host);
        self.set_index(index, host);
        crate::info!(
            sections = self.section_count,
            mode = self.mode.as_str(),
            index,
            "paging attached"
        );
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.mode
    }

    #[must_use]
    pub const fn section_count(&self) -> usize {
        self.section_count
    }

    #[must_use]
    pub const fn config(&self) -> &PagingConfig {
        &self.config
    }

    #[must_use]
    pub const fn lock(&self) -> ScrollLock {
        self.lock
    }

    #[must_use]
    pub fn is_locked(&self, now: Duration) -> bool {
        self.lock.is_held(now)
    }

    /// Number of programmatic navigations issued since creation.
    #[must_use]
    pub const fn navigation_count(&self) -> u64 {
        self.navigations
    }

    /// Section the viewport currently shows.
    ///
    /// Mobile: the section whose top is nearest the vertical offset (first
    /// wins on ties), so fast transit can report a neighbor. Desktop:
    /// `round(horizontal offset / viewport width)`, assuming every section is
    /// exactly one viewport wide. Degenerate geometry (zero width,
    /// overscroll) is pinned into the section range.
    #[must_use]
    pub fn compute_current_section<H: PagingHost + ?Sized>(&self, host: &H) -> usize {
        let last = self.section_count.saturating_sub(1);
        match self.mode {
            ViewMode::Mobile => {
                let offset = host.scroll_offset(self.mode.axis());
                let mut closest = 0;
                let mut min_distance = f64::INFINITY;
                for i in 0..self.section_count {
                    let distance = (offset - host.section_top(i)).abs();
                    if distance < min_distance {
                        min_distance = distance;
                        closest = i;
                    }
                }
                closest
            }
            ViewMode::Desktop => {
                let width = host.viewport_width();
                let raw = (host.scroll_offset(self.mode.axis()) / width).round();
                if raw.is_finite() && raw > 0.0 {
                    (raw as usize).min(last)
                } else {
                    0
                }
            }
        }
    }

    /// Scroll to section `index` and mark it current.
    ///
    /// `index` must be below the section count; callers range-check first.
    pub fn navigate_to<H: PagingHost + ?Sized>(
        &mut self,
        index: usize,
        host: &mut H,
        now: Duration,
    ) {
        debug_assert!(
            index < self.section_count,
            "navigate_to({index}) with {} sections",
            self.section_count
        );

        self.lock.acquire(now, self.config.lock_duration());

        let axis = self.mode.axis();
        let offset = match self.mode {
            ViewMode::Mobile => host.section_top(index),
            ViewMode::Desktop => index as f64 * host.viewport_width(),
        };
        host.smooth_scroll(axis, offset);
        self.set_index(index, host);
        self.navigations += 1;

        crate::debug!(index, offset, mode = self.mode.as_str(), "navigate");
    }

    /// Wheel input. Desktop converts it into one-section steps and always
    /// suppresses native scrolling; mobile leaves it to the platform.
    pub fn on_wheel<H: PagingHost + ?Sized>(
        &mut self,
        wheel: WheelInput,
        host: &mut H,
        now: Duration,
    ) -> Dispatch {
        if self.mode == ViewMode::Mobile {
            return Dispatch::allow();
        }
        if self.lock.is_held(now) {
            crate::trace!(dx = wheel.dx, dy = wheel.dy, "wheel dropped: locked");
            return Dispatch::navigated(true, None);
        }
        let target = self.step(wheel.direction(), host, now);
        Dispatch::navigated(true, target)
    }

    /// Key press. Only the left/right arrows page.
    pub fn on_key_down<H: PagingHost + ?Sized>(
        &mut self,
        key: &KeyCode,
        host: &mut H,
        now: Duration,
    ) -> Option<usize> {
        if self.lock.is_held(now) {
            crate::trace!(key = %key.to_code_string(), "key dropped: locked");
            return None;
        }
        self.step(key.direction(), host, now)
    }

    /// Click on the link or dot for section `index`.
    pub fn on_indicator_click<H: PagingHost + ?Sized>(
        &mut self,
        index: usize,
        host: &mut H,
        now: Duration,
    ) -> Option<usize> {
        if index >= self.section_count {
            crate::warn!(index, sections = self.section_count, "indicator out of range");
            return None;
        }
        if self.lock.is_held(now) {
            crate::trace!(index, "indicator click dropped: locked");
            return None;
        }
        self.navigate_to(index, host, now);
        Some(index)
    }

    /// Native scroll notification. Re-marks the indicator to follow a scroll
    /// that already happened, without issuing a new one.
    pub fn on_passive_scroll<H: PagingHost + ?Sized>(
        &mut self,
        host: &mut H,
        now: Duration,
    ) -> Option<usize> {
        if self.lock.is_held(now) {
            return None;
        }
        let index = self.compute_current_section(host);
        if index == self.index {
            return None;
        }
        crate::debug!(from = self.index, to = index, "indicator reconciled");
        self.set_index(index, host);
        Some(index)
    }

    /// Platform `scrollend` notification.
    pub fn on_scroll_end(&mut self, now: Duration) {
        if self.config.lock_release == LockRelease::ScrollEnd && self.lock.is_held(now) {
            crate::trace!("scroll lock released on scrollend");
            self.lock.release();
        }
    }

    /// Viewport resize. Switching layout re-navigates to the same section on
    /// the new axis.
    pub fn on_resize<H: PagingHost + ?Sized>(
        &mut self,
        host: &mut H,
        now: Duration,
    ) -> Option<usize> {
        let mode = ViewMode::from_width(host.viewport_width(), self.config.mobile_breakpoint);
        if mode == self.mode {
            return None;
        }
        crate::info!(from = self.mode.as_str(), to = mode.as_str(), "view mode changed");
        self.mode = mode;
        self.navigate_to(self.index, host, now);
        Some(self.index)
    }

    /// Route one normalized input to its handler.
    pub fn dispatch<H: PagingHost + ?Sized>(
        &mut self,
        input: &NavInput,
        host: &mut H,
        now: Duration,
    ) -> Dispatch {
        match input {
            NavInput::Wheel(wheel) => self.on_wheel(*wheel, host, now),
            NavInput::Key { key } => Dispatch::navigated(false, self.on_key_down(key, host, now)),
            NavInput::IndicatorClick { group, index } => {
                // Links are anchors; their native jump must not fight the smooth scroll.
                let prevent = *group == IndicatorGroup::Link;
                Dispatch::navigated(prevent, self.on_indicator_click(*index, host, now))
            }
            NavInput::Scroll { .. } => Dispatch {
                reconciled: self.on_passive_scroll(host, now),
                ..Dispatch::allow()
            },
            NavInput::ScrollEnd { .. } => {
                self.on_scroll_end(now);
                Dispatch::allow()
            }
            NavInput::Resize => Dispatch::navigated(false, self.on_resize(host, now)),
        }
    }

    fn step<H: PagingHost + ?Sized>(
        &mut self,
        direction: Option<Direction>,
        host: &mut H,
        now: Duration,
    ) -> Option<usize> {
        let target = direction?.step(self.index, self.section_count);
        match target {
            Some(target) => self.navigate_to(target, host, now),
            None => crate::trace!(index = self.index, "step dropped: at bound"),
        }
        target
    }

    fn set_index<H: PagingHost + ?Sized>(&mut self, index: usize, host: &mut H) {
        host.mark_active(index);
        self.index = index;
    }
}
