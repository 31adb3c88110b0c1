#![forbid(unsafe_code)]

//! Project carousel: category filtering, loop duplication and strip
//! animation sizing.
//!
//! Rendering is two-phase. [`StripLayout::build`] decides which source cards
//! go into the strip and how many times; the host renders clones, measures
//! them, and hands the widths to [`StripAnimation::measure`], which decides
//! whether the strip scrolls and how far and fast one loop runs.

use crate::config::CarouselConfig;

/// Cards selected for the strip, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripLayout {
    /// Copies of the matching set rendered back to back.
    pub loop_factor: usize,
    /// Indices of matching source cards, in document order.
    pub matches: Vec<usize>,
    /// Source card index for each rendered clone.
    pub cards: Vec<usize>,
}

impl StripLayout {
    /// Select the cards whose category equals `selected` (or every card for
    /// the configured "all" category) and repeat them for looping.
    #[must_use]
    pub fn build<S: AsRef<str>>(categories: &[S], selected: &str, config: &CarouselConfig) -> Self {
        let show_all = selected == config.all_category;
        let matches: Vec<usize> = categories
            .iter()
            .enumerate()
            .filter(|(_, category)| show_all || category.as_ref() == selected)
            .map(|(i, _)| i)
            .collect();
        let loop_factor = if show_all {
            config.loop_factor_all
        } else {
            config.loop_factor_filtered
        };
        let cards = matches
            .iter()
            .copied()
            .cycle()
            .take(matches.len().saturating_mul(loop_factor))
            .collect();
        Self {
            loop_factor,
            matches,
            cards,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Animation decision for a rendered strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StripAnimation {
    /// Content overflows: translate left by `distance` px every
    /// `duration_secs`, then jump back, which is seamless because the strip
    /// holds `loop_factor` identical copies.
    Scrolling { distance: f64, duration_secs: f64 },
    /// Content fits: no animation, strip pinned at its origin.
    Static,
}

impl StripAnimation {
    /// Size the animation from the measured widths of the rendered clones.
    ///
    /// Each card contributes its width plus one gap.
    #[must_use]
    pub fn measure(
        rendered_widths: &[f64],
        outer_width: f64,
        layout: &StripLayout,
        config: &CarouselConfig,
    ) -> Self {
        let total: f64 = rendered_widths.iter().map(|w| w + config.card_gap).sum();
        if layout.is_empty() || total <= outer_width {
            return Self::Static;
        }
        let per_card = layout.matches.len() as f64 * config.secs_per_card;
        Self::Scrolling {
            distance: total / layout.loop_factor as f64,
            duration_secs: per_card.max(config.min_duration_secs),
        }
    }

    /// Value for the strip's `animation` style property.
    #[must_use]
    pub fn animation_css(&self, name: &str) -> String {
        match self {
            Self::Scrolling { duration_secs, .. } => {
                format!("{name} {duration_secs}s linear infinite")
            }
            Self::Static => "none".to_string(),
        }
    }

    /// `@keyframes` rule backing [`animation_css`](Self::animation_css).
    #[must_use]
    pub fn keyframes_css(&self, name: &str) -> Option<String> {
        match self {
            Self::Scrolling { distance, .. } => Some(format!(
                "@keyframes {name} {{ 0% {{ transform: translateX(0); }} \
                 100% {{ transform: translateX(-{distance}px); }} }}"
            )),
            Self::Static => None,
        }
    }
}

/// Strip animation play state, driven by hover on the outer container.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    #[default]
    Running,
    Paused,
}

impl PlayState {
    #[must_use]
    pub const fn from_hover(hovered: bool) -> Self {
        if hovered { Self::Paused } else { Self::Running }
    }

    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Paused => "paused",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cards() -> Vec<&'static str> {
        vec!["rust", "go", "python", "go", "rust"]
    }

    #[test]
    fn all_category_triplicates_every_card() {
        let layout = StripLayout::build(&cards(), "all", &CarouselConfig::default());
        assert_eq!(layout.len(), 15);
        assert_eq!(layout.loop_factor, 3);
        assert_eq!(&layout.cards[..6], &[0, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn filtered_category_duplicates_matches() {
        let layout = StripLayout::build(&cards(), "go", &CarouselConfig::default());
        assert_eq!(layout.matches, vec![1, 3]);
        assert_eq!(layout.cards, vec![1, 3, 1, 3]);
    }

    #[test]
    fn unvalidated_huge_loop_factor_does_not_overflow() {
        let config = CarouselConfig {
            loop_factor_filtered: usize::MAX,
            ..CarouselConfig::default()
        };
        // `cycle` over no matches yields nothing regardless of the factor.
        let layout = StripLayout::build(&cards(), "cobol", &config);
        assert!(layout.is_empty());
        assert_eq!(layout.loop_factor, usize::MAX);
    }

    #[test]
    fn unknown_category_renders_nothing() {
        let layout = StripLayout::build(&cards(), "cobol", &CarouselConfig::default());
        assert!(layout.is_empty());
        let anim = StripAnimation::measure(&[], 800.0, &layout, &CarouselConfig::default());
        assert_eq!(anim, StripAnimation::Static);
    }

    #[test]
    fn fitting_strip_is_static() {
        let config = CarouselConfig::default();
        let layout = StripLayout::build(&["rust"], "rust", &config);
        // 2 × (300 + 32) = 664 fits in 800.
        let anim = StripAnimation::measure(&[300.0, 300.0], 800.0, &layout, &config);
        assert_eq!(anim, StripAnimation::Static);
        assert_eq!(anim.animation_css("scrollProjects"), "none");
        assert_eq!(anim.keyframes_css("scrollProjects"), None);
    }

    #[test]
    fn overflowing_strip_scrolls_one_copy_per_loop() {
        let config = CarouselConfig::default();
        let layout = StripLayout::build(&cards(), "all", &config);
        let widths = vec![368.0; layout.len()];
        let anim = StripAnimation::measure(&widths, 1200.0, &layout, &config);
        // 15 × 400 = 6000 total, one copy = 2000; 5 cards × 4s = 20s.
        assert_eq!(
            anim,
            StripAnimation::Scrolling {
                distance: 2000.0,
                duration_secs: 20.0
            }
        );
        assert_eq!(
            anim.animation_css("scrollProjects"),
            "scrollProjects 20s linear infinite"
        );
        assert_eq!(
            anim.keyframes_css("scrollProjects").unwrap(),
            "@keyframes scrollProjects { 0% { transform: translateX(0); } \
             100% { transform: translateX(-2000px); } }"
        );
    }

    #[test]
    fn short_strips_respect_minimum_duration() {
        let config = CarouselConfig::default();
        let layout = StripLayout::build(&cards(), "go", &config);
        let anim = StripAnimation::measure(&[600.0; 4], 1000.0, &layout, &config);
        match anim {
            StripAnimation::Scrolling { duration_secs, .. } => assert_eq!(duration_secs, 15.0),
            StripAnimation::Static => panic!("expected scrolling strip"),
        }
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        assert_eq!(PlayState::from_hover(true).as_css(), "paused");
        assert_eq!(PlayState::from_hover(false).as_css(), "running");
    }
}
