#![forbid(unsafe_code)]

//! Setup-time error type.
//!
//! Runtime paging operations never fail; only wiring a page up (parsing
//! options, locating elements, talking to the platform) can.

/// Errors raised while configuring or attaching Folio to a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolioError {
    /// Options could not be parsed or hold out-of-range values.
    InvalidConfig(String),
    /// A required selector matched nothing in the document.
    MissingElement(String),
    /// The indicator groups do not line up one-to-one with the sections.
    IndicatorMismatch {
        sections: usize,
        links: usize,
        dots: usize,
    },
    /// A platform call failed.
    Host(String),
}

impl core::fmt::Display for FolioError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::MissingElement(selector) => write!(f, "no element matches `{selector}`"),
            Self::IndicatorMismatch {
                sections,
                links,
                dots,
            } => write!(
                f,
                "indicator mismatch: {sections} sections, {links} links, {dots} dots"
            ),
            Self::Host(msg) => write!(f, "host error: {msg}"),
        }
    }
}

impl std::error::Error for FolioError {}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_selector() {
        let err = FolioError::MissingElement(".scroll-x".into());
        assert_eq!(err.to_string(), "no element matches `.scroll-x`");
    }

    #[test]
    fn display_lists_indicator_counts() {
        let err = FolioError::IndicatorMismatch {
            sections: 4,
            links: 4,
            dots: 3,
        };
        assert_eq!(
            err.to_string(),
            "indicator mismatch: 4 sections, 4 links, 3 dots"
        );
    }

    #[test]
    fn json_errors_become_invalid_config() {
        let err: FolioError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, FolioError::InvalidConfig(_)));
    }
}
