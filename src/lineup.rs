//! Lineup slots.
//!
//! Scoring does not care about roster shape; this module only helps a
//! roster source check that players were placed in slots they can fill.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A starting-lineup slot.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RosterSlot {
    Qb,
    Rb,
    Wr,
    Te,
    /// Running back or wide receiver.
    Flex,
    Def,
    K,
}

impl RosterSlot {
    /// Whether a player at `position` may fill this slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gridiron_score::{Position, RosterSlot};
    ///
    /// assert!(RosterSlot::Flex.accepts(Position::Rb));
    /// assert!(RosterSlot::Flex.accepts(Position::Wr));
    /// assert!(!RosterSlot::Flex.accepts(Position::Te));
    /// assert!(RosterSlot::Def.accepts(Position::Def));
    /// ```
    pub fn accepts(self, position: Position) -> bool {
        match self {
            RosterSlot::Qb => position == Position::Qb,
            RosterSlot::Rb => position == Position::Rb,
            RosterSlot::Wr => position == Position::Wr,
            RosterSlot::Te => position == Position::Te,
            RosterSlot::Flex => matches!(position, Position::Rb | Position::Wr),
            RosterSlot::Def => position == Position::Def,
            RosterSlot::K => position == Position::K,
        }
    }
}

impl fmt::Display for RosterSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RosterSlot::Qb => "QB",
            RosterSlot::Rb => "RB",
            RosterSlot::Wr => "WR",
            RosterSlot::Te => "TE",
            RosterSlot::Flex => "FLEX",
            RosterSlot::Def => "DEF",
            RosterSlot::K => "K",
        })
    }
}

/// QB, RB×2, WR×2, TE, FLEX, DEF, K.
pub const STANDARD_LINEUP: [RosterSlot; 9] = [
    RosterSlot::Qb,
    RosterSlot::Rb,
    RosterSlot::Rb,
    RosterSlot::Wr,
    RosterSlot::Wr,
    RosterSlot::Te,
    RosterSlot::Flex,
    RosterSlot::Def,
    RosterSlot::K,
];

/// A player placed in a slot they cannot fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotMismatch {
    pub index: usize,
    pub slot: RosterSlot,
    pub position: Position,
}

impl fmt::Display for SlotMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slot {} ({}) cannot hold a {}",
            self.index, self.slot, self.position
        )
    }
}

/// Every filled slot whose player's position does not fit.
///
/// # Examples
///
/// ```rust
/// use gridiron_score::lineup::{slot_mismatches, RosterSlot};
/// use gridiron_score::Position;
///
/// let filled = [
///     (RosterSlot::Qb, Position::Qb),
///     (RosterSlot::Flex, Position::Te),
/// ];
/// let bad = slot_mismatches(&filled);
/// assert_eq!(bad.len(), 1);
/// assert_eq!(bad[0].index, 1);
/// ```
pub fn slot_mismatches(filled: &[(RosterSlot, Position)]) -> Vec<SlotMismatch> {
    filled
        .iter()
        .enumerate()
        .filter(|(_, (slot, position))| !slot.accepts(*position))
        .map(|(index, &(slot, position))| SlotMismatch {
            index,
            slot,
            position,
        })
        .collect()
}
