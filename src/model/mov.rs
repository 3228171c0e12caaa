//! Pokemon moves, actions that can be taken during battle to damage opposing
//! Pokemon or change battle status.

use serde::Deserialize;
use serde::Serialize;

use crate::model::text::LocalizedText;
use crate::model::ty::PokemonType;

well_known! {
  /// Whether a move uses physical or special stats, or neither.
  pub enum DamageClass {
    /// Uses Attack and Defense.
    Physical => "physical",
    /// Uses Special Attack and Special Defense.
    Special => "special",
    /// Deals no direct damage.
    Status => "status",
  }
}

/// A move as scraped from a species' learnset tables.
///
/// Every column is kept as the raw text shown on the source page; numeric
/// columns use placeholders such as `"—"` for moves without a value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
  /// The move's English name.
  pub name: String,
  /// The move's type.
  #[serde(rename = "type")]
  pub ty: String,
  /// The move's damage class, as text.
  pub category: String,
  /// The move's base power, as text.
  pub power: String,
  /// The move's accuracy, as text.
  pub accuracy: String,
}

fn parse_number(text: &str) -> Option<u32> {
  text.trim().trim_end_matches('%').parse().ok()
}

impl Move {
  /// Parses this move's damage class, if it is a known one.
  pub fn damage_class(&self) -> Option<DamageClass> {
    self.category.trim().to_ascii_lowercase().parse().ok()
  }

  /// Parses this move's base power; `None` for moves without one.
  pub fn power(&self) -> Option<u32> {
    parse_number(&self.power)
  }

  /// Parses this move's accuracy; `None` for moves that never miss.
  pub fn accuracy(&self) -> Option<u32> {
    parse_number(&self.accuracy)
  }
}

/// A move learned by leveling up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpMove {
  /// The move itself.
  #[serde(flatten)]
  pub mov: Move,
  /// The level it is learned at, as text.
  pub level: String,
}

/// A move learned from a TM or HM.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TmMove {
  /// The move itself.
  #[serde(flatten)]
  pub mov: Move,
  /// The machine's label, such as `"TM26"`.
  pub tm: String,
}

/// Every move a species can learn in one game, grouped by learn method.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovesByMethod {
  /// Moves learned by level-up.
  #[serde(default)]
  pub moves: Vec<LevelUpMove>,
  /// Moves learned upon evolving.
  #[serde(default)]
  pub evolution_moves: Vec<Move>,
  /// Moves learned through breeding.
  #[serde(default)]
  pub egg_moves: Vec<Move>,
  /// Moves learned from TMs.
  #[serde(default)]
  pub tm_moves: Vec<TmMove>,
  /// Moves learned from HMs.
  #[serde(default)]
  pub hm_moves: Vec<TmMove>,
}

impl MovesByMethod {
  /// Returns an iterator over every move, regardless of learn method.
  pub fn iter(&self) -> impl Iterator<Item = &Move> + '_ {
    self
      .moves
      .iter()
      .map(|m| &m.mov)
      .chain(self.evolution_moves.iter())
      .chain(self.egg_moves.iter())
      .chain(self.tm_moves.iter().map(|m| &m.mov))
      .chain(self.hm_moves.iter().map(|m| &m.mov))
  }

  /// Returns whether a move with the given name can be learned at all.
  pub fn can_learn(&self, name: &str) -> bool {
    self.iter().any(|m| m.name.eq_ignore_ascii_case(name))
  }
}

/// The moves learnable in one game version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameVersionMoves {
  /// The game version's name.
  pub version: String,
  /// The moves, grouped by learn method.
  pub moves_by_method: MovesByMethod,
}

/// The moves learnable in each game version of one generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMoves {
  /// The generation's label, as text.
  pub generation: String,
  /// The per-version learnsets.
  pub game_versions: Vec<GameVersionMoves>,
}

/// A move with localized names and parsed numeric columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveI18n {
  /// This move's numeric ID.
  pub id: u32,
  /// The name of this move in various languages.
  pub name: LocalizedText,
  /// The description of this move in various languages.
  pub description: LocalizedText,
  /// This move's type.
  #[serde(rename = "type")]
  pub ty: PokemonType,
  /// This move's base power, if it has one.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub power: Option<u32>,
  /// This move's accuracy, if it can miss.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub accuracy: Option<u32>,
  /// This move's base power points.
  pub pp: u32,
}
