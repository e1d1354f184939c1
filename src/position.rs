//! Position and scoring-system tags.
//!
//! Both are closed enumerations. They serialize as their canonical
//! upper-case names (`"QB"`, `"HALF_PPR"`) and parse leniently from
//! whatever a roster or settings source hands us.

use crate::error::ScoringError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A fantasy position. Selects which scoring formula applies.
///
/// # Examples
///
/// ```rust
/// use gridiron_score::Position;
///
/// let qb: Position = "qb".parse().unwrap();
/// assert_eq!(qb, Position::Qb);
/// assert_eq!(qb.to_string(), "QB");
///
/// // Common spellings of team defense are accepted.
/// assert_eq!("D/ST".parse::<Position>().unwrap(), Position::Def);
/// assert!("LB".parse::<Position>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Position {
    Qb,
    Rb,
    Wr,
    Te,
    K,
    Def,
}

impl Position {
    /// Every position, in display order.
    pub const ALL: [Position; 6] = [
        Position::Qb,
        Position::Rb,
        Position::Wr,
        Position::Te,
        Position::K,
        Position::Def,
    ];

    /// Canonical tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Qb => "QB",
            Position::Rb => "RB",
            Position::Wr => "WR",
            Position::Te => "TE",
            Position::K => "K",
            Position::Def => "DEF",
        }
    }
}

impl FromStr for Position {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "QB" => Ok(Position::Qb),
            "RB" => Ok(Position::Rb),
            "WR" => Ok(Position::Wr),
            "TE" => Ok(Position::Te),
            "K" => Ok(Position::K),
            "DEF" | "DST" | "D/ST" => Ok(Position::Def),
            _ => Err(ScoringError::UnknownPosition(s.to_string())),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Reception-value variant. Orthogonal to [`Position`].
///
/// # Examples
///
/// ```rust
/// use gridiron_score::ScoringSystem;
///
/// let half: ScoringSystem = "half-ppr".parse().unwrap();
/// assert_eq!(half, ScoringSystem::HalfPpr);
/// assert_eq!(half.reception_value(), 0.5);
/// assert_eq!(half.to_string(), "HALF_PPR");
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub enum ScoringSystem {
    #[default]
    Ppr,
    HalfPpr,
    Standard,
}

impl ScoringSystem {
    pub const ALL: [ScoringSystem; 3] = [
        ScoringSystem::Ppr,
        ScoringSystem::HalfPpr,
        ScoringSystem::Standard,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScoringSystem::Ppr => "PPR",
            ScoringSystem::HalfPpr => "HALF_PPR",
            ScoringSystem::Standard => "STANDARD",
        }
    }

    /// Points awarded per reception to RB/WR/TE.
    pub fn reception_value(self) -> f64 {
        match self {
            ScoringSystem::Ppr => 1.0,
            ScoringSystem::HalfPpr => 0.5,
            ScoringSystem::Standard => 0.0,
        }
    }
}

impl FromStr for ScoringSystem {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PPR" => Ok(ScoringSystem::Ppr),
            "HALF_PPR" | "HALF-PPR" | "HALFPPR" | "HALF" => Ok(ScoringSystem::HalfPpr),
            "STANDARD" | "STD" => Ok(ScoringSystem::Standard),
            _ => Err(ScoringError::unknown_system(s)),
        }
    }
}

impl fmt::Display for ScoringSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ScoringSystem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ScoringSystem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
