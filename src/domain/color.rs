//! Note color palette.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A color tag from the fixed palette.
///
/// Each color has a short name (`"yellow"`) and a presentation class
/// (`"bg-yellow-100 border-yellow-300"`). Parsing accepts either form,
/// case-insensitively; serialization writes the class so payloads stay
/// readable by the web front-end.
///
/// # Examples
///
/// ```
/// use stickies::domain::Color;
///
/// let c: Color = "Teal".parse().unwrap();
/// assert_eq!(c, Color::Teal);
/// assert_eq!(c.class(), "bg-teal-100 border-teal-300");
///
/// let c: Color = "bg-pink-100 border-pink-300".parse().unwrap();
/// assert_eq!(c, Color::Pink);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
    Orange,
    Teal,
    Cyan,
}

impl Color {
    /// Every color the editor offers.
    pub const ALL: [Color; 9] = [
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Purple,
        Color::Pink,
        Color::Red,
        Color::Orange,
        Color::Teal,
        Color::Cyan,
    ];

    /// Colors new notes are drawn from.
    pub const STARTER: [Color; 5] = [
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Purple,
        Color::Pink,
    ];

    /// Picks a color uniformly from the starter palette.
    pub fn random() -> Self {
        let idx = rand::rng().random_range(0..Self::STARTER.len());
        Self::STARTER[idx]
    }

    /// Returns the short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Teal => "teal",
            Color::Cyan => "cyan",
        }
    }

    /// Returns the presentation class string.
    pub fn class(self) -> &'static str {
        match self {
            Color::Yellow => "bg-yellow-100 border-yellow-300",
            Color::Green => "bg-green-100 border-green-300",
            Color::Blue => "bg-blue-100 border-blue-300",
            Color::Purple => "bg-purple-100 border-purple-300",
            Color::Pink => "bg-pink-100 border-pink-300",
            Color::Red => "bg-red-100 border-red-300",
            Color::Orange => "bg-orange-100 border-orange-300",
            Color::Teal => "bg-teal-100 border-teal-300",
            Color::Cyan => "bg-cyan-100 border-cyan-300",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an unknown color.
#[derive(Debug, Clone)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = Color::ALL.iter().map(|c| c.name()).collect();
        write!(
            f,
            "unknown color '{}': expected one of {}",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        Color::ALL
            .into_iter()
            .find(|c| c.name() == normalized || c.class() == normalized)
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.class())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
