#![forbid(unsafe_code)]

//! Runtime configuration.
//!
//! Every field has a default matching the stock portfolio page, so an empty
//! JSON object (or no options at all) yields a working setup.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Upper bound on carousel loop factors; more copies add nothing to a loop.
pub const MAX_LOOP_FACTOR: usize = 16;

/// How the scroll lock is released after a programmatic navigation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockRelease {
    /// Release only when the fixed lock duration has elapsed.
    #[default]
    Timer,
    /// Release on the platform `scrollend` notification, with the fixed
    /// duration as a fallback when that notification never arrives.
    ScrollEnd,
}

/// Section paging parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagingConfig {
    /// Viewport widths at or below this value use vertical (mobile) paging.
    /// Default: 1000
    pub mobile_breakpoint: f64,

    /// How long a navigation holds the scroll lock.
    /// Default: 1000ms
    pub lock_duration_ms: u64,

    /// Lock release policy.
    pub lock_release: LockRelease,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 1000.0,
            lock_duration_ms: 1000,
            lock_release: LockRelease::Timer,
        }
    }
}

impl PagingConfig {
    #[must_use]
    pub const fn lock_duration(&self) -> Duration {
        Duration::from_millis(self.lock_duration_ms)
    }
}

/// Project carousel parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Category value that matches every card.
    pub all_category: String,

    /// Horizontal gap between cards, added once per rendered card.
    /// Default: 32 (2rem)
    pub card_gap: f64,

    /// Lower bound on one loop of the strip animation, in seconds.
    /// Default: 15
    pub min_duration_secs: f64,

    /// Animation time contributed by each matching source card, in seconds.
    /// Default: 4
    pub secs_per_card: f64,

    /// Copies of the card set rendered when the `all` category is shown.
    pub loop_factor_all: usize,

    /// Copies of the card set rendered for any other category.
    pub loop_factor_filtered: usize,

    /// Name of the injected `@keyframes` rule.
    pub animation_name: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            all_category: "all".to_string(),
            card_gap: 32.0,
            min_duration_secs: 15.0,
            secs_per_card: 4.0,
            loop_factor_all: 3,
            loop_factor_filtered: 2,
            animation_name: "scrollProjects".to_string(),
        }
    }
}

/// CSS selectors locating the page structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Selectors {
    pub sections: String,
    pub scroll_container: String,
    pub nav_links: String,
    pub dots: String,
    pub category_buttons: String,
    pub project_strip: String,
    pub project_cards: String,
    pub strip_outer: String,
    pub skill_tabs: String,
    pub skill_panels: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            sections: "section".to_string(),
            scroll_container: ".scroll-x".to_string(),
            nav_links: ".nav-links a".to_string(),
            dots: ".dot".to_string(),
            category_buttons: ".language-btn".to_string(),
            project_strip: ".projects-container".to_string(),
            project_cards: ".project-card".to_string(),
            strip_outer: ".projects-outer-container".to_string(),
            skill_tabs: ".skill-tab".to_string(),
            skill_panels: ".skills-category".to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
    pub paging: PagingConfig,
    pub carousel: CarouselConfig,
    pub selectors: Selectors,
    /// `tracing` filter directive for console output.
    pub log_level: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            paging: PagingConfig::default(),
            carousel: CarouselConfig::default(),
            selectors: Selectors::default(),
            log_level: "info".to_string(),
        }
    }
}

impl FolioConfig {
    /// Parse and validate a JSON options object.
    pub fn from_json_str(s: &str) -> Result<Self, FolioError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the runtime cannot operate with.
    pub fn validate(&self) -> Result<(), FolioError> {
        let paging = &self.paging;
        if !paging.mobile_breakpoint.is_finite() || paging.mobile_breakpoint < 0.0 {
            return Err(FolioError::InvalidConfig(format!(
                "paging.mobile_breakpoint must be a non-negative number, got {}",
                paging.mobile_breakpoint
            )));
        }

        let carousel = &self.carousel;
        for (name, factor) in [
            ("loop_factor_all", carousel.loop_factor_all),
            ("loop_factor_filtered", carousel.loop_factor_filtered),
        ] {
            if !(1..=MAX_LOOP_FACTOR).contains(&factor) {
                return Err(FolioError::InvalidConfig(format!(
                    "carousel.{name} must be between 1 and {MAX_LOOP_FACTOR}, got {factor}"
                )));
            }
        }
        for (name, value) in [
            ("card_gap", carousel.card_gap),
            ("min_duration_secs", carousel.min_duration_secs),
            ("secs_per_card", carousel.secs_per_card),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FolioError::InvalidConfig(format!(
                    "carousel.{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if carousel.animation_name.is_empty() {
            return Err(FolioError::InvalidConfig(
                "carousel.animation_name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_yields_defaults() {
        let config = FolioConfig::from_json_str("{}").unwrap();
        assert_eq!(config, FolioConfig::default());
        assert_eq!(config.paging.lock_duration(), Duration::from_millis(1000));
    }

    #[test]
    fn partial_sections_override_only_named_fields() {
        let config = FolioConfig::from_json_str(
            r#"{"paging":{"lock_release":"scroll_end"},"carousel":{"card_gap":16}}"#,
        )
        .unwrap();
        assert_eq!(config.paging.lock_release, LockRelease::ScrollEnd);
        assert_eq!(config.paging.mobile_breakpoint, 1000.0);
        assert_eq!(config.carousel.card_gap, 16.0);
        assert_eq!(config.carousel.loop_factor_all, 3);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = FolioConfig::from_json_str(r#"{"paging":{"breakpoint":800}}"#).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));
    }

    #[test]
    fn zero_loop_factor_is_rejected() {
        let err =
            FolioConfig::from_json_str(r#"{"carousel":{"loop_factor_filtered":0}}"#).unwrap_err();
        assert_eq!(
            err,
            FolioError::InvalidConfig(
                "carousel.loop_factor_filtered must be between 1 and 16, got 0".to_string()
            )
        );
    }

    #[test]
    fn oversized_loop_factor_is_rejected() {
        let err = FolioConfig::from_json_str(
            r#"{"carousel":{"loop_factor_all":9223372036854775807}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(msg) if msg.contains("loop_factor_all")));

        let config = FolioConfig::from_json_str(r#"{"carousel":{"loop_factor_all":16}}"#).unwrap();
        assert_eq!(config.carousel.loop_factor_all, MAX_LOOP_FACTOR);
    }

    #[test]
    fn negative_breakpoint_is_rejected() {
        let mut config = FolioConfig::default();
        config.paging.mobile_breakpoint = -1.0;
        assert!(config.validate().is_err());
    }
}
