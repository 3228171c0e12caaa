//! Game generations.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Deserialize;
use serde::Serialize;

/// A main-series game generation, numbered from `1`.
///
/// Deserializing rejects `0`.
#[derive(
  Copy,
  Clone,
  Debug,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Generation(pub u8);

/// Error returned when converting `0` into a [`Generation`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("generations are numbered from 1, but got {0}")]
pub struct InvalidGeneration(pub u8);

impl TryFrom<u8> for Generation {
  type Error = InvalidGeneration;
  fn try_from(n: u8) -> Result<Self, Self::Error> {
    match n {
      0 => Err(InvalidGeneration(n)),
      n => Ok(Self(n)),
    }
  }
}

impl From<Generation> for u8 {
  fn from(g: Generation) -> Self {
    g.0
  }
}

impl Generation {
  /// Generation VI, which introduced Mega Evolution.
  pub const X_Y: Self = Self(6);
  /// Generation VII, the last with Mega Evolution.
  pub const SUN_MOON: Self = Self(7);
  /// Generation VIII, which introduced Dynamax and Gigantamax.
  pub const SWORD_SHIELD: Self = Self(8);
  /// Generation IX, which introduced Terastallization.
  pub const SCARLET_VIOLET: Self = Self(9);

  /// Returns whether this generation falls within `range`.
  pub fn within(self, range: &RangeInclusive<Generation>) -> bool {
    range.contains(&self)
  }
}

impl fmt::Display for Generation {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Generation {}", self.0)
  }
}
