//! Pokemon species, the root structures for Pokemon information.

use chrono::DateTime;
use chrono::Utc;

use serde::Deserialize;
use serde::Serialize;

use crate::model::ability::Ability;
use crate::model::evolution::EvolutionNode;
use crate::model::mov::GenerationMoves;
use crate::model::mov::Move;
use crate::model::stat::BaseStats;
use crate::model::stat::StatSpread;
use crate::model::stat::StatValues;
use crate::model::text::LocalizedText;
use crate::model::ty::PokemonType;

well_known! {
  /// A competitive tier ranking.
  pub enum TierRank {
    #[allow(missing_docs)]
    S => "S",
    #[allow(missing_docs)]
    A => "A",
    #[allow(missing_docs)]
    B => "B",
    #[allow(missing_docs)]
    C => "C",
    #[allow(missing_docs)]
    D => "D",
    /// Not ranked; any unrecognized tier also lands here.
    #[serde(other)]
    Unranked => "UNRANKED",
  }
}

impl Default for TierRank {
  fn default() -> Self {
    Self::Unranked
  }
}

impl TierRank {
  /// Parses a tier, treating anything unrecognized as
  /// [`TierRank::Unranked`].
  pub fn parse_lossy(s: &str) -> Self {
    s.trim().to_ascii_uppercase().parse().unwrap_or_default()
  }
}

/// A Pokemon, as shown in list views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
  /// This Pokemon's numeric ID.
  pub id: u32,
  /// This Pokemon's National Pokedex number, zero-padded.
  pub national_number: String,
  /// This Pokemon's English name.
  pub name: String,
  /// This Pokemon's types, by API name.
  pub types: Vec<String>,

  /// The primary ability's API name.
  pub ability1: String,
  /// The secondary ability's API name, if any.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ability2: Option<String>,
  /// The hidden ability's API name, if any.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ability_hidden: Option<String>,

  /// A link to this Pokemon's artwork.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image_url: Option<String>,

  #[allow(missing_docs)]
  pub hp_max: i32,
  #[allow(missing_docs)]
  pub attack_max: i32,
  #[allow(missing_docs)]
  pub defense_max: i32,
  #[allow(missing_docs)]
  pub sp_atk_max: i32,
  #[allow(missing_docs)]
  pub sp_def_max: i32,
  #[allow(missing_docs)]
  pub speed_max: i32,
  /// The base stat total as stored upstream; see
  /// [`PokemonFull::base_stats()`] for the recomputed one.
  pub stat_total: i32,

  #[allow(missing_docs)]
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created_at: Option<DateTime<Utc>>,
  #[allow(missing_docs)]
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
}

impl Pokemon {
  /// Returns the names of every ability this Pokemon can have.
  pub fn abilities(&self) -> impl Iterator<Item = &str> + '_ {
    std::iter::once(self.ability1.as_str())
      .chain(self.ability2.as_deref())
      .chain(self.ability_hidden.as_deref())
  }

  /// Returns whether this Pokemon can have the ability `identifier`.
  pub fn has_ability(&self, identifier: &str) -> bool {
    self.abilities().any(|a| a == identifier)
  }
}

/// Detailed data about a Pokemon, as scraped for its detail page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonDetails {
  /// This record's numeric ID.
  pub id: u32,
  /// The [`Pokemon`] this record describes.
  pub pokemon_id: u32,
  /// The species' category, such as "Mach Pokemon".
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub species: Option<String>,
  /// The height, as text.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub height: Option<String>,
  /// The weight, as text.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub weight: Option<String>,

  #[allow(missing_docs)]
  pub hp_base: i32,
  #[allow(missing_docs)]
  pub hp_min: i32,
  #[allow(missing_docs)]
  pub attack_base: i32,
  #[allow(missing_docs)]
  pub attack_min: i32,
  #[allow(missing_docs)]
  pub defense_base: i32,
  #[allow(missing_docs)]
  pub defense_min: i32,
  #[allow(missing_docs)]
  pub sp_atk_base: i32,
  #[allow(missing_docs)]
  pub sp_atk_min: i32,
  #[allow(missing_docs)]
  pub sp_def_base: i32,
  #[allow(missing_docs)]
  pub sp_def_min: i32,
  #[allow(missing_docs)]
  pub speed_base: i32,
  #[allow(missing_docs)]
  pub speed_min: i32,

  /// Alternate forms of this Pokemon.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub forms: Option<Vec<PokemonForm>>,
  /// The evolution family this Pokemon belongs to.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub evolution_chain: Option<EvolutionNode>,
  /// Learnsets, per generation.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub moves_by_generation: Option<Vec<GenerationMoves>>,

  /// When this record was scraped.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub scraped_at: Option<DateTime<Utc>>,
}

/// An alternate form of a Pokemon, such as a regional variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonForm {
  /// The form's name.
  pub form_name: String,
  /// The form's types, by API name.
  pub types: Vec<String>,
  /// The form's abilities, by API name.
  pub abilities: Vec<String>,
  /// The form's stats.
  pub base_stats: BaseStats,
  /// A link to the form's artwork.
  pub image_url: String,
}

/// A [`Pokemon`] together with its [`PokemonDetails`], for detail pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonFull {
  /// The list-view record.
  #[serde(flatten)]
  pub pokemon: Pokemon,
  /// The detail record, if it has been scraped.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub details: Option<PokemonDetails>,
}

impl PokemonFull {
  /// Assembles [`BaseStats`] from the list view's maxima and the detail
  /// view's base and minimum values.
  ///
  /// Returns `None` if details are missing. The result is not validated.
  pub fn base_stats(&self) -> Option<BaseStats> {
    let p = &self.pokemon;
    let d = self.details.as_ref()?;
    let values = |base, min, max| StatValues { base, min, max };
    Some(BaseStats {
      hp: values(d.hp_base, d.hp_min, p.hp_max),
      attack: values(d.attack_base, d.attack_min, p.attack_max),
      defense: values(d.defense_base, d.defense_min, p.defense_max),
      sp_atk: values(d.sp_atk_base, d.sp_atk_min, p.sp_atk_max),
      sp_def: values(d.sp_def_base, d.sp_def_min, p.sp_def_max),
      speed: values(d.speed_base, d.speed_min, p.speed_max),
    })
  }

  /// Returns the form named `name`, if there is one.
  pub fn form(&self, name: &str) -> Option<&PokemonForm> {
    self
      .details
      .as_ref()?
      .forms
      .as_ref()?
      .iter()
      .find(|f| f.form_name == name)
  }
}

/// A fully localized Pokemon record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonI18n {
  /// This Pokemon's numeric ID.
  pub id: u32,
  /// This Pokemon's National Pokedex number.
  pub national_dex_number: u32,
  /// The name of this Pokemon in various languages.
  pub name: LocalizedText,
  /// The Pokedex description in various languages.
  pub description: LocalizedText,
  /// This Pokemon's types.
  pub types: Vec<PokemonType>,
  /// This Pokemon's base stats.
  pub stats: StatSpread,
  /// This Pokemon's possible abilities.
  pub abilities: Vec<Ability>,
  /// Moves this Pokemon can learn.
  pub moves: Vec<Move>,
  /// The generation this Pokemon was introduced in.
  pub generation: u8,
  /// This Pokemon's competitive tier.
  #[serde(default)]
  pub tier: TierRank,
  /// Height, in decimetres.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub height: Option<u32>,
  /// Weight, in hectograms.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub weight: Option<u32>,
  /// A link to this Pokemon's artwork.
  pub image_url: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  use serde_json::json;

  fn mega_garchomp() -> serde_json::Value {
    json!({
      "formName": "Mega Garchomp",
      "types": ["dragon", "ground"],
      "abilities": ["sand-force"],
      "baseStats": {
        "hp": { "base": 108, "min": 326, "max": 420 },
        "attack": { "base": 170, "min": 310, "max": 482 },
        "defense": { "base": 115, "min": 211, "max": 361 },
        "spAtk": { "base": 120, "min": 220, "max": 372 },
        "spDef": { "base": 95, "min": 175, "max": 317 },
        "speed": { "base": 92, "min": 170, "max": 311 },
        "total": 700,
      },
      "imageUrl": "https://example.com/mega-garchomp.png",
    })
  }

  fn garchomp_details() -> serde_json::Value {
    let mut details = json!({
      "id": 1,
      "pokemonId": 445,
      "species": "Mach Pokemon",
      "hpBase": 108,
      "hpMin": 326,
      "attackBase": 130,
      "attackMin": 238,
      "defenseBase": 95,
      "defenseMin": 175,
      "spAtkBase": 80,
      "spAtkMin": 148,
      "spDefBase": 85,
      "spDefMin": 157,
      "speedBase": 102,
      "speedMin": 188,
    });
    details["forms"] = json!([mega_garchomp()]);
    details
  }

  fn garchomp() -> serde_json::Value {
    let mut pokemon = json!({
      "id": 445,
      "nationalNumber": "0445",
      "name": "Garchomp",
      "types": ["dragon", "ground"],
      "ability1": "sand-veil",
      "abilityHidden": "rough-skin",
      "hpMax": 420,
      "attackMax": 394,
      "defenseMax": 317,
      "spAtkMax": 301,
      "spDefMax": 312,
      "speedMax": 333,
      "statTotal": 600,
    });
    pokemon["details"] = garchomp_details();
    pokemon
  }

  #[test]
  fn test_full_record() {
    let full: PokemonFull = serde_json::from_value(garchomp()).unwrap();
    assert_eq!(full.pokemon.name, "Garchomp");
    assert_eq!(full.pokemon.ability2, None);
    assert!(full.pokemon.has_ability("rough-skin"));
    assert!(!full.pokemon.has_ability("sand-force"));

    let stats = full.base_stats().unwrap();
    assert_eq!(stats.total(), full.pokemon.stat_total);
    assert_eq!(stats.speed.min, 188);
    assert_eq!(stats.speed.max, 333);
    assert!(stats.validate().is_ok());

    let mega = full.form("Mega Garchomp").unwrap();
    assert_eq!(mega.base_stats.total(), 700);
    assert!(full.form("Garchomp-Gmax").is_none());
  }

  #[test]
  fn test_missing_details() {
    let mut json = garchomp();
    json.as_object_mut().unwrap().remove("details");
    let full: PokemonFull = serde_json::from_value(json).unwrap();
    assert!(full.base_stats().is_none());
    assert!(full.form("Mega Garchomp").is_none());
  }

  #[test]
  fn test_tier_fallback() {
    assert_eq!(TierRank::parse_lossy("s"), TierRank::S);
    assert_eq!(TierRank::parse_lossy(" B "), TierRank::B);
    assert_eq!(TierRank::parse_lossy("OU"), TierRank::Unranked);
    assert_eq!(TierRank::parse_lossy(""), TierRank::Unranked);

    let tier: TierRank = serde_json::from_value(json!("Z")).unwrap();
    assert_eq!(tier, TierRank::Unranked);
    assert_eq!(serde_json::to_value(TierRank::A).unwrap(), "A");
  }
}
