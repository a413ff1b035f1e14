//! Enumerated ratings carried by a journal entry.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Fixed visual treatment used for difficulty and confidence badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
}

/// How hard the problem is rated.
///
/// Decoding is lenient: the journal service stores ratings as free text, so
/// an unrecognised label falls back to Medium. Strict checking of user input
/// happens in the submission validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Returns the wire/display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Badge treatment: green for Easy, yellow for Medium, red for Hard.
    pub fn tone(&self) -> BadgeTone {
        match self {
            Difficulty::Easy => BadgeTone::Success,
            Difficulty::Medium => BadgeTone::Warning,
            Difficulty::Hard => BadgeTone::Danger,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("difficulty", format!("unknown difficulty '{s}'"))
            })
    }
}

/// Self-assessed confidence after solving the problem.
///
/// Decodes leniently, like [`Difficulty`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ConfidenceLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl ConfidenceLevel {
    pub const ALL: [ConfidenceLevel; 3] = [
        ConfidenceLevel::Low,
        ConfidenceLevel::Medium,
        ConfidenceLevel::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "Low",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::High => "High",
        }
    }

    /// Badge treatment: green for High, yellow for Medium, red for Low.
    pub fn tone(&self) -> BadgeTone {
        match self {
            ConfidenceLevel::High => BadgeTone::Success,
            ConfidenceLevel::Medium => BadgeTone::Warning,
            ConfidenceLevel::Low => BadgeTone::Danger,
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfidenceLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfidenceLevel::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "confidenceLevel",
                    format!("unknown confidence level '{s}'"),
                )
            })
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(parse_or_default("difficulty", raw.as_deref()))
    }
}

impl<'de> Deserialize<'de> for ConfidenceLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(parse_or_default("confidenceLevel", raw.as_deref()))
    }
}

fn parse_or_default<T>(field: &'static str, raw: Option<&str>) -> T
where
    T: FromStr + Default + fmt::Display,
{
    let Some(label) = raw else {
        return T::default();
    };
    label.parse().unwrap_or_else(|_| {
        let fallback = T::default();
        tracing::warn!(
            field,
            value = label,
            %fallback,
            "unrecognised rating from journal service"
        );
        fallback
    })
}
