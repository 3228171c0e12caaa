//! Competitive legality checks for team members and teams.
//!
//! The limits checked here are collected in [`Rules`]; [`Rules::default()`]
//! is the standard ruleset used by the main-series games. The free functions
//! in this module check against the default rules.

use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;
use crate::error::Field;
use crate::model::nature::Nature;
use crate::model::stat::BaseStats;
use crate::model::stat::StatSpread;
use crate::model::team::Gimmick;
use crate::model::team::Team;
use crate::model::team::TeamPokemon;
use crate::model::version::Generation;
use crate::stats;

/// Limits that a legal configuration must stay within.
///
/// Every field is optional when deserializing; missing fields take their
/// default value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Rules {
  /// The most EVs a single stat can have.
  pub max_ev: i32,
  /// The most EVs all stats together can have.
  pub max_ev_total: i32,
  /// The highest IV a stat can have.
  pub max_iv: i32,
  /// The most moves a Pokemon can know.
  pub max_moves: usize,
  /// The lowest allowed level.
  pub min_level: i32,
  /// The highest allowed level.
  pub max_level: i32,
  /// The most Pokemon a team can have.
  pub max_team_size: usize,
  /// The generation being played, which decides which gimmicks are legal.
  /// If unset, any gimmick is allowed.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub generation: Option<Generation>,
}

impl Default for Rules {
  fn default() -> Self {
    Self {
      max_ev: 252,
      max_ev_total: 510,
      max_iv: 31,
      max_moves: 4,
      min_level: 1,
      max_level: 100,
      max_team_size: 6,
      generation: None,
    }
  }
}

/// Checks records against a set of [`Rules`].
#[derive(Clone, Debug, Default)]
pub struct Validator {
  rules: Rules,
}

fn check_range(field: Field, value: i32, min: i32, max: i32) -> Result<(), Error> {
  if value < min || value > max {
    return Err(Error::OutOfRange {
      field,
      value,
      min,
      max,
    });
  }
  Ok(())
}

impl Validator {
  /// Creates a new [`Validator`] enforcing `rules`.
  pub fn new(rules: Rules) -> Self {
    Self { rules }
  }

  /// Returns the rules this validator enforces.
  pub fn rules(&self) -> &Rules {
    &self.rules
  }

  /// Checks an EV spread: each stat within `0..=max_ev`, then the total
  /// within `max_ev_total`.
  pub fn validate_evs(&self, evs: &StatSpread) -> Result<(), Error> {
    for (stat, value) in evs.iter() {
      check_range(Field::Ev(stat), value, 0, self.rules.max_ev)?;
    }

    let total = evs.total();
    if total > self.rules.max_ev_total as i64 {
      return Err(Error::TotalExceeded {
        total,
        max: self.rules.max_ev_total,
      });
    }
    Ok(())
  }

  /// Checks an IV spread: each stat within `0..=max_iv`.
  pub fn validate_ivs(&self, ivs: &StatSpread) -> Result<(), Error> {
    ivs
      .iter()
      .try_for_each(|(stat, value)| {
        check_range(Field::Iv(stat), value, 0, self.rules.max_iv)
      })
  }

  /// Checks a move set: at most `max_moves` moves, none repeated.
  ///
  /// An empty move set is allowed.
  pub fn validate_move_set(&self, moves: &[u32]) -> Result<(), Error> {
    if moves.len() > self.rules.max_moves {
      return Err(Error::TooManyMoves {
        count: moves.len(),
        max: self.rules.max_moves,
      });
    }

    let mut seen = HashSet::with_capacity(moves.len());
    match moves.iter().find(|&&id| !seen.insert(id)) {
      Some(&id) => Err(Error::DuplicateMove { id }),
      None => Ok(()),
    }
  }

  /// Checks a level against `min_level..=max_level`.
  pub fn validate_level(&self, level: i32) -> Result<(), Error> {
    check_range(
      Field::Level,
      level,
      self.rules.min_level,
      self.rules.max_level,
    )
  }

  /// Checks that `gimmick` exists in the configured generation, if any.
  pub fn validate_gimmick(&self, gimmick: &Gimmick) -> Result<(), Error> {
    match self.rules.generation {
      Some(generation) if !gimmick.is_available_in(generation) => {
        Err(Error::GimmickUnavailable {
          gimmick: gimmick.name(),
          generation,
        })
      }
      _ => Ok(()),
    }
  }

  /// Runs every check that applies to a single team member, in order:
  /// level, EVs, IVs, moves, gimmick. The first failure is returned.
  pub fn validate_team_pokemon(&self, member: &TeamPokemon) -> Result<(), Error> {
    self
      .validate_level(member.level)
      .and_then(|_| self.validate_evs(&member.evs))
      .and_then(|_| self.validate_ivs(&member.ivs))
      .and_then(|_| self.validate_move_set(&member.moves))
      .and_then(|_| self.validate_gimmick(&member.gimmick))
      .map_err(|error| {
        tracing::debug!(
          pokemon_id = member.pokemon_id,
          kind = %error.kind(),
          %error,
          "rejected team member"
        );
        error
      })
  }

  /// Validates `member` and computes its effective stats.
  ///
  /// `base_stats` and `nature` must be the records `member` refers to; they
  /// are looked up by the caller. `base_stats` is checked with
  /// [`BaseStats::validate()`] first, since it usually comes from scraped
  /// data.
  pub fn evaluate(
    &self,
    member: &TeamPokemon,
    base_stats: &BaseStats,
    nature: &Nature,
  ) -> Result<StatSpread, Error> {
    base_stats.validate()?;
    self.validate_team_pokemon(member)?;
    Ok(stats::compute_stats(
      base_stats,
      &member.evs,
      &member.ivs,
      member.level,
      nature,
    ))
  }

  /// Validates a whole team: its size, then each member in order.
  pub fn validate_team(&self, team: &Team) -> Result<(), Error> {
    tracing::trace!(
      team = %team.id,
      size = team.pokemon.len(),
      "validating team"
    );

    if team.pokemon.len() > self.rules.max_team_size {
      return Err(Error::TeamTooLarge {
        size: team.pokemon.len(),
        max: self.rules.max_team_size,
      });
    }

    team
      .pokemon
      .iter()
      .enumerate()
      .try_for_each(|(index, member)| {
        self
          .validate_team_pokemon(member)
          .map_err(|source| Error::Member {
            index,
            source: Box::new(source),
          })
      })
  }
}

/// Checks an EV spread against the default [`Rules`].
pub fn validate_evs(evs: &StatSpread) -> Result<(), Error> {
  Validator::default().validate_evs(evs)
}

/// Checks an IV spread against the default [`Rules`].
pub fn validate_ivs(ivs: &StatSpread) -> Result<(), Error> {
  Validator::default().validate_ivs(ivs)
}

/// Checks a move set against the default [`Rules`].
pub fn validate_move_set(moves: &[u32]) -> Result<(), Error> {
  Validator::default().validate_move_set(moves)
}

/// Checks a level against the default [`Rules`].
pub fn validate_level(level: i32) -> Result<(), Error> {
  Validator::default().validate_level(level)
}

#[cfg(test)]
mod tests {
  use super::*;

  use crate::error::ErrorKind;
  use crate::model::stat::StatName;
  use crate::model::text::LocalizedText;

  fn member() -> TeamPokemon {
    TeamPokemon {
      pokemon_id: 445,
      level: 50,
      ability_identifier: "rough-skin".into(),
      moves: vec![89, 200, 14, 444],
      item_id: Some(197),
      nature_id: 16,
      evs: StatSpread {
        hp: 4,
        attack: 252,
        speed: 252,
        ..StatSpread::default()
      },
      ivs: StatSpread::perfect_ivs(),
      gimmick: Gimmick::Tera("steel".into()),
      pokemon_data: None,
      moves_data: None,
      item_data: None,
      nature_data: None,
      ability_data: None,
    }
  }

  #[test]
  fn test_evs_per_stat() {
    assert!(validate_evs(&StatSpread::default()).is_ok());
    assert!(validate_evs(&member().evs).is_ok());

    for stat in StatName::ALL {
      let evs = StatSpread::default().with(*stat, 253);
      assert_eq!(
        validate_evs(&evs),
        Err(Error::OutOfRange {
          field: Field::Ev(*stat),
          value: 253,
          min: 0,
          max: 252,
        })
      );

      let evs = StatSpread::default().with(*stat, -1);
      assert_eq!(validate_evs(&evs).unwrap_err().kind(), ErrorKind::OutOfRange);
    }
  }

  #[test]
  fn test_evs_total() {
    let evs = StatSpread {
      hp: 252,
      attack: 252,
      speed: 8,
      ..StatSpread::default()
    };
    assert_eq!(
      validate_evs(&evs),
      Err(Error::TotalExceeded {
        total: 512,
        max: 510
      })
    );

    let evs = StatSpread::splat(252);
    assert_eq!(validate_evs(&evs).unwrap_err().kind(), ErrorKind::TotalExceeded);

    let evs = StatSpread {
      hp: 252,
      attack: 252,
      speed: 6,
      ..StatSpread::default()
    };
    assert!(validate_evs(&evs).is_ok());
  }

  #[test]
  fn test_out_of_range_beats_total() {
    let evs = StatSpread::splat(300);
    assert_eq!(validate_evs(&evs).unwrap_err().kind(), ErrorKind::OutOfRange);
  }

  #[test]
  fn test_ivs() {
    assert!(validate_ivs(&StatSpread::perfect_ivs()).is_ok());
    assert!(validate_ivs(&StatSpread::default()).is_ok());
    for bad in [-1, 32, 255] {
      let ivs = StatSpread::perfect_ivs().with(StatName::SpDefense, bad);
      assert_eq!(
        validate_ivs(&ivs),
        Err(Error::OutOfRange {
          field: Field::Iv(StatName::SpDefense),
          value: bad,
          min: 0,
          max: 31,
        })
      );
    }
  }

  #[test]
  fn test_move_sets() {
    assert!(validate_move_set(&[]).is_ok());
    assert!(validate_move_set(&[1, 2, 3, 4]).is_ok());
    assert_eq!(
      validate_move_set(&[1, 2, 3, 4, 5]),
      Err(Error::TooManyMoves { count: 5, max: 4 })
    );
    assert_eq!(
      validate_move_set(&[89, 14, 89]),
      Err(Error::DuplicateMove { id: 89 })
    );
    // Length is checked before duplicates.
    assert_eq!(
      validate_move_set(&[1, 1, 1, 1, 1]).unwrap_err().kind(),
      ErrorKind::TooManyMoves
    );
  }

  #[test]
  fn test_levels() {
    assert!(validate_level(1).is_ok());
    assert!(validate_level(100).is_ok());
    for bad in [0, 101, -5] {
      assert_eq!(
        validate_level(bad),
        Err(Error::OutOfRange {
          field: Field::Level,
          value: bad,
          min: 1,
          max: 100,
        })
      );
    }
  }

  #[test]
  fn test_custom_rules() {
    let little_cup = Validator::new(Rules {
      max_level: 5,
      ..Rules::default()
    });
    assert!(little_cup.validate_level(5).is_ok());
    assert!(little_cup.validate_level(50).is_err());

    let rules: Rules =
      serde_json::from_value(serde_json::json!({ "maxLevel": 50, "generation": 9 }))
        .unwrap();
    assert_eq!(rules.max_level, 50);
    assert_eq!(rules.max_ev_total, 510);
    assert_eq!(rules.generation, Some(Generation(9)));

    let zero = serde_json::json!({ "generation": 0 });
    assert!(serde_json::from_value::<Rules>(zero).is_err());
  }

  #[test]
  fn test_team_pokemon() {
    let validator = Validator::default();
    assert!(validator.validate_team_pokemon(&member()).is_ok());

    let mut bad = member();
    bad.level = 0;
    bad.moves = vec![1, 1];
    assert_eq!(
      validator.validate_team_pokemon(&bad).unwrap_err().kind(),
      ErrorKind::OutOfRange
    );
  }

  #[test]
  fn test_gimmick_generation() {
    let gen8 = Validator::new(Rules {
      generation: Some(Generation::SWORD_SHIELD),
      ..Rules::default()
    });
    assert_eq!(
      gen8.validate_team_pokemon(&member()),
      Err(Error::GimmickUnavailable {
        gimmick: "Terastallization",
        generation: Generation(8),
      })
    );

    let mut gmax = member();
    gmax.gimmick = Gimmick::Gigantamax;
    assert!(gen8.validate_team_pokemon(&gmax).is_ok());
  }

  #[test]
  fn test_evaluate() {
    let garchomp = stats::derive_base_stats(&StatSpread {
      hp: 108,
      attack: 130,
      defense: 95,
      special_attack: 80,
      special_defense: 85,
      speed: 102,
    });
    let jolly = Nature {
      id: 16,
      name: LocalizedText::new("Jolly", "ようき"),
      increased_stat: Some(StatName::Speed),
      decreased_stat: Some(StatName::SpAttack),
    };

    let stats = Validator::default()
      .evaluate(&member(), &garchomp, &jolly)
      .unwrap();
    assert_eq!(stats.hp, 184);
    assert_eq!(stats.speed, 169);

    let mut broken = garchomp;
    broken.attack.max = 0;
    assert_eq!(
      Validator::default()
        .evaluate(&member(), &broken, &jolly)
        .unwrap_err()
        .kind(),
      ErrorKind::InconsistentStats
    );
  }
}
