#![forbid(unsafe_code)]

//! Normalized input schema for the paging controller.
//!
//! The web host converts raw DOM events (wheel, keydown, clicks, scroll,
//! resize) into [`NavInput`] values before they reach
//! [`PagingController::dispatch`](crate::paging::PagingController::dispatch).
//! The schema also has a stable JSON form so hosts can inject events
//! directly and traces can be replayed.

use serde::{Deserialize, Serialize};

/// Paging direction relative to section order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Neighbor of `index` in this direction, or `None` when it would leave
    /// `0..count`.
    #[must_use]
    pub fn step(self, index: usize, count: usize) -> Option<usize> {
        match self {
            Self::Forward => index.checked_add(1).filter(|next| *next < count),
            Self::Backward => index.checked_sub(1),
        }
    }

    fn from_sign(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::Forward)
        } else if delta < 0.0 {
            Some(Self::Backward)
        } else {
            None
        }
    }
}

/// Wheel deltas as reported by the platform.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelInput {
    #[serde(default)]
    pub dx: f64,
    #[serde(default)]
    pub dy: f64,
}

impl WheelInput {
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Direction requested by the dominant axis.
    ///
    /// The vertical delta wins only when strictly larger in magnitude; ties
    /// go to the horizontal delta. A zero (or NaN) dominant delta requests
    /// nothing.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        if self.dy.abs() > self.dx.abs() {
            Direction::from_sign(self.dy)
        } else {
            Direction::from_sign(self.dx)
        }
    }
}

/// Normalized key code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum KeyCode {
    Char(char),
    Enter,
    Escape,
    Tab,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    Unidentified(Box<str>),
}

impl KeyCode {
    /// Paging direction bound to this key, if any.
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        match self {
            Self::Right => Some(Direction::Forward),
            Self::Left => Some(Direction::Backward),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_code_string(&self) -> String {
        match self {
            Self::Char(c) => c.to_string(),
            Self::Enter => "Enter".to_string(),
            Self::Escape => "Escape".to_string(),
            Self::Tab => "Tab".to_string(),
            Self::Home => "Home".to_string(),
            Self::End => "End".to_string(),
            Self::PageUp => "PageUp".to_string(),
            Self::PageDown => "PageDown".to_string(),
            Self::Up => "ArrowUp".to_string(),
            Self::Down => "ArrowDown".to_string(),
            Self::Left => "ArrowLeft".to_string(),
            Self::Right => "ArrowRight".to_string(),
            Self::Unidentified(key) => key.to_string(),
        }
    }
}

impl From<String> for KeyCode {
    fn from(value: String) -> Self {
        normalize_dom_key(&value)
    }
}

impl From<KeyCode> for String {
    fn from(value: KeyCode) -> Self {
        value.to_code_string()
    }
}

/// Deterministic normalization of a DOM `KeyboardEvent.key` string.
#[must_use]
pub fn normalize_dom_key(dom_key: &str) -> KeyCode {
    let mut chars = dom_key.chars();
    if let Some(first) = chars.next()
        && chars.next().is_none()
    {
        return KeyCode::Char(first);
    }

    match dom_key {
        "Enter" => KeyCode::Enter,
        "Escape" | "Esc" => KeyCode::Escape,
        "Tab" => KeyCode::Tab,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,
        // Legacy Edge/IE names.
        "ArrowUp" | "Up" => KeyCode::Up,
        "ArrowDown" | "Down" => KeyCode::Down,
        "ArrowLeft" | "Left" => KeyCode::Left,
        "ArrowRight" | "Right" => KeyCode::Right,
        "Spacebar" => KeyCode::Char(' '),
        other => KeyCode::Unidentified(other.into()),
    }
}

/// Which element reported a native scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollSource {
    /// The document scroller (vertical, mobile layout).
    Window,
    /// The horizontal section container (desktop layout).
    Container,
}

/// Which indicator group a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorGroup {
    Link,
    Dot,
}

/// One normalized input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavInput {
    Wheel(WheelInput),
    Key {
        key: KeyCode,
    },
    IndicatorClick {
        group: IndicatorGroup,
        index: usize,
    },
    Scroll {
        source: ScrollSource,
    },
    ScrollEnd {
        source: ScrollSource,
    },
    Resize,
}

impl NavInput {
    /// Encode this event as a stable JSON string.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode an event previously encoded (or written by a host).
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
