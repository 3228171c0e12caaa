//! Teams, and the competitive configuration of each of their members.

use std::convert::TryFrom;
use std::ops::RangeInclusive;

use chrono::DateTime;
use chrono::Utc;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;
use crate::model::stat::StatSpread;
use crate::model::version::Generation;

/// A generation-specific battle gimmick a team member is built around.
///
/// Only one can apply at a time. On the wire this is spread over the
/// independent `teraType`, `gigantamaxFactor` and `megaEvolution` fields, and
/// records that set more than one of them are rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GimmickFields", into = "GimmickFields")]
pub enum Gimmick {
  /// No gimmick.
  None,
  /// Terastallization into the named type (Generation IX).
  Tera(String),
  /// Gigantamax Factor (Generation VIII).
  Gigantamax,
  /// Mega Evolution via the named Mega Stone (Generations VI and VII).
  MegaEvolution(String),
}

impl Default for Gimmick {
  fn default() -> Self {
    Self::None
  }
}

impl Gimmick {
  /// Builds a gimmick from the three independent wire fields.
  pub fn from_fields(
    tera_type: Option<String>,
    gigantamax_factor: Option<bool>,
    mega_evolution: Option<String>,
  ) -> Result<Self, Error> {
    let gigantamax = gigantamax_factor.unwrap_or(false);
    match (tera_type, gigantamax, mega_evolution) {
      (None, false, None) => Ok(Self::None),
      (Some(ty), false, None) => Ok(Self::Tera(ty)),
      (None, true, None) => Ok(Self::Gigantamax),
      (None, false, Some(stone)) => Ok(Self::MegaEvolution(stone)),
      _ => Err(Error::ConflictingGimmicks),
    }
  }

  /// Returns a human-readable name for this gimmick.
  pub fn name(&self) -> &'static str {
    match self {
      Self::None => "no gimmick",
      Self::Tera(_) => "Terastallization",
      Self::Gigantamax => "Gigantamax",
      Self::MegaEvolution(_) => "Mega Evolution",
    }
  }

  /// Returns the generations this gimmick exists in, or `None` if it is
  /// available everywhere.
  pub fn generations(&self) -> Option<RangeInclusive<Generation>> {
    match self {
      Self::None => None,
      Self::Tera(_) => {
        Some(Generation::SCARLET_VIOLET..=Generation::SCARLET_VIOLET)
      }
      Self::Gigantamax => {
        Some(Generation::SWORD_SHIELD..=Generation::SWORD_SHIELD)
      }
      Self::MegaEvolution(_) => Some(Generation::X_Y..=Generation::SUN_MOON),
    }
  }

  /// Returns whether this gimmick can be used in `generation`.
  pub fn is_available_in(&self, generation: Generation) -> bool {
    self
      .generations()
      .map_or(true, |range| generation.within(&range))
  }
}

#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GimmickFields {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  tera_type: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  gigantamax_factor: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  mega_evolution: Option<String>,
}

impl TryFrom<GimmickFields> for Gimmick {
  type Error = Error;
  fn try_from(f: GimmickFields) -> Result<Self, Self::Error> {
    Self::from_fields(f.tera_type, f.gigantamax_factor, f.mega_evolution)
  }
}

impl From<Gimmick> for GimmickFields {
  fn from(g: Gimmick) -> Self {
    match g {
      Gimmick::None => Self::default(),
      Gimmick::Tera(ty) => Self {
        tera_type: Some(ty),
        ..Self::default()
      },
      Gimmick::Gigantamax => Self {
        gigantamax_factor: Some(true),
        ..Self::default()
      },
      Gimmick::MegaEvolution(stone) => Self {
        mega_evolution: Some(stone),
        ..Self::default()
      },
    }
  }
}

/// A member of a [`Team`]: a species plus its competitive configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPokemon {
  /// The species (or form) this member is.
  pub pokemon_id: u32,
  /// This member's level, from 1 to 100.
  pub level: i32,

  /// The ability this member has.
  pub ability_identifier: String,
  /// The IDs of up to four moves this member knows.
  #[serde(default)]
  pub moves: Vec<u32>,
  /// The item this member holds, if any.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub item_id: Option<u32>,
  /// This member's nature.
  pub nature_id: u32,

  /// Effort values; 0 to 252 per stat, at most 510 total.
  pub evs: StatSpread,
  /// Individual values; 0 to 31 per stat, 31 everywhere if not given.
  #[serde(default = "StatSpread::perfect_ivs")]
  pub ivs: StatSpread,

  /// The generation gimmick this member uses.
  #[serde(flatten)]
  pub gimmick: Gimmick,

  /// Summary of the species, filled in by the API.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pokemon_data: Option<PokemonSummary>,
  /// Summaries of the moves, filled in by the API.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub moves_data: Option<Vec<MoveSummary>>,
  /// Summary of the held item, filled in by the API.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub item_data: Option<ItemSummary>,
  /// Summary of the nature, filled in by the API.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub nature_data: Option<NatureSummary>,
  /// Summary of the ability, filled in by the API.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ability_data: Option<AbilitySummary>,
}

/// A lightweight view of a species attached to a [`TeamPokemon`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct PokemonSummary {
  pub id: u32,
  pub national_number: String,
  pub name: String,
  pub types: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image_url: Option<String>,
}

/// A lightweight view of a move attached to a [`TeamPokemon`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct MoveSummary {
  pub id: u32,
  pub identifier: String,
  pub name: String,
  #[serde(rename = "type")]
  pub ty: String,
  pub category: String,
  pub power: Option<u32>,
  pub accuracy: Option<u32>,
}

/// A lightweight view of an item attached to a [`TeamPokemon`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct ItemSummary {
  pub id: u32,
  pub identifier: String,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sprite_url: Option<String>,
}

/// A lightweight view of a nature attached to a [`TeamPokemon`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct NatureSummary {
  pub id: u32,
  pub identifier: String,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub increased_stat: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub decreased_stat: Option<String>,
}

/// A lightweight view of an ability attached to a [`TeamPokemon`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct AbilitySummary {
  pub id: u32,
  pub identifier: String,
  pub name: String,
}

/// A user-built team.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
  /// This team's ID.
  pub id: String,
  /// This team's name.
  pub name: String,
  /// A free-form description.
  pub description: String,
  /// A free-form write-up of how the team is played.
  pub strategy: String,
  /// The members of this team.
  pub pokemon: Vec<TeamPokemon>,

  /// The ID of the user that built this team.
  pub author_id: String,
  /// The author's username, when joined in from storage.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub author_username: Option<String>,
  /// Whether other users can see this team.
  pub is_public: bool,
  /// How many users liked this team.
  pub likes: u32,

  #[allow(missing_docs)]
  pub created_at: DateTime<Utc>,
  #[allow(missing_docs)]
  pub updated_at: DateTime<Utc>,
}

/// A comment on a [`Team`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
  /// This comment's ID.
  pub id: String,
  /// The comment body.
  pub content: String,
  /// The team being commented on.
  pub team_id: String,
  /// The ID of the commenting user.
  pub author_id: String,
  /// The commenter's username, when joined in from storage.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub author_username: Option<String>,
  /// The comment being replied to, for threaded replies.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub parent_id: Option<String>,

  #[allow(missing_docs)]
  pub created_at: DateTime<Utc>,
  #[allow(missing_docs)]
  pub updated_at: DateTime<Utc>,
}

impl Comment {
  /// Returns whether this is a reply to another comment.
  pub fn is_reply(&self) -> bool {
    self.parent_id.is_some()
  }
}
